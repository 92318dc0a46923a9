use serde::{Deserialize, Serialize};

use crate::player::GamePlayer;

/// Per-round, per-player record. Every player in the game votes on every
/// proposed team, so a round carries one of these per roster member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlayer {
    pub player_id: i64,
    /// Proposed for the mission team.
    pub team: bool,
    /// This player's public vote on the proposed team.
    pub approval: bool,
}

/// One team-proposal + vote + fail-declaration cycle within a quest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: i64,
    /// The player proposing the team this round.
    pub king: i64,
    /// Number of team members who secretly voted to sabotage.
    pub fails: u32,
    pub round_players: Vec<RoundPlayer>,
}

impl Round {
    /// A new round with proposal state reset for the given roster.
    pub fn fresh(id: i64, roster: &[GamePlayer], king: i64) -> Self {
        Self {
            id,
            king,
            fails: 0,
            round_players: roster
                .iter()
                .map(|gp| RoundPlayer { player_id: gp.player_id, team: false, approval: false })
                .collect(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.round_players.len()
    }

    pub fn approvals(&self) -> usize {
        self.round_players.iter().filter(|rp| rp.approval).count()
    }

    pub fn team_size(&self) -> usize {
        self.round_players.iter().filter(|rp| rp.team).count()
    }

    pub fn round_player_mut(&mut self, player_id: i64) -> Option<&mut RoundPlayer> {
        self.round_players.iter_mut().find(|rp| rp.player_id == player_id)
    }

    /// A fail count above the proposed team size is stale data left over
    /// from a team edited after the count was recorded; reset it to zero.
    /// Returns whether a reset happened.
    pub fn sanitize_fails(&mut self) -> bool {
        if self.fails as usize > self.team_size() {
            log::debug!("round {}: resetting stale fail count {}", self.id, self.fails);
            self.fails = 0;
            true
        } else {
            false
        }
    }
}

/// One of up to five missions, ordered by creation. A quest accumulates
/// rounds only while undecided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: i64,
    pub rounds: Vec<Round>,
}
