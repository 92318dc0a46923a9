use std::fmt::Display;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GameError;
use crate::player::GamePlayer;
use crate::role::{RoleName, RoleSlot};
use crate::round::{Quest, Round};

/// End-game special actions. Each can individually defeat a good-aligned
/// player even when good wins the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Snipe {
    Merlin,
    Messengers,
    Untrustworthy,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnipeFlags {
    pub merlin: bool,
    pub messengers: bool,
    pub untrustworthy: bool,
}

impl SnipeFlags {
    pub fn set(&mut self, snipe: Snipe, value: bool) {
        match snipe {
            Snipe::Merlin => self.merlin = value,
            Snipe::Messengers => self.messengers = value,
            Snipe::Untrustworthy => self.untrustworthy = value,
        }
    }
}

/// The roles configured for one game: a set of single-instance roles plus
/// counts for the two duplicate-eligible ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSetup {
    /// Selected single-instance roles.
    pub roles: Vec<RoleName>,
    pub loyal_servant_count: usize,
    pub minion_count: usize,
}

impl RoleSetup {
    /// How many players the configured roles can cover.
    pub fn total_slots(&self) -> usize {
        self.roles.len() + self.loyal_servant_count + self.minion_count
    }

    pub fn slot_for(&self, role: RoleName) -> RoleSlot {
        match role {
            RoleName::LoyalServant => {
                RoleSlot::Counted { role, limit: self.loyal_servant_count }
            }
            RoleName::Minion => RoleSlot::Counted { role, limit: self.minion_count },
            other => RoleSlot::SingleInstance(other),
        }
    }

    /// Toggle a single-instance role into the selection. Idempotent.
    pub fn select_role(&mut self, role: RoleName) -> Result<(), GameError> {
        if role.is_duplicate() {
            return Err(GameError::Validation(format!(
                "{role} is configured through its count, not the role selection"
            )));
        }
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        Ok(())
    }

    pub fn deselect_role(&mut self, role: RoleName) {
        self.roles.retain(|&r| r != role);
    }
}

/// One recorded game: roster, role configuration, snipe flags, and the
/// ordered quests and rounds played so far.
///
/// The aggregate only records what happened at the table; deciding quest
/// and game outcomes from it is the engine's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    /// True while the game is in setup or in progress; false once archived.
    pub active: bool,
    pub setup: RoleSetup,
    pub snipes: SnipeFlags,
    /// Roster in join order. Join order is the king rotation order.
    pub players: Vec<GamePlayer>,
    /// Quests in creation order; index 3 is the "4th quest" of the rules.
    pub quests: Vec<Quest>,
    seq: i64,
}

impl Game {
    pub fn new(setup: RoleSetup) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_time: Utc::now(),
            active: true,
            setup,
            snipes: SnipeFlags::default(),
            players: Vec::new(),
            quests: Vec::new(),
            seq: 0,
        }
    }

    /// A game is started once its first quest exists; the roster is fixed
    /// from that point on.
    pub fn started(&self) -> bool {
        !self.quests.is_empty()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn game_player(&self, player_id: i64) -> Option<&GamePlayer> {
        self.players.iter().find(|gp| gp.player_id == player_id)
    }

    pub fn game_player_mut(&mut self, player_id: i64) -> Option<&mut GamePlayer> {
        self.players.iter_mut().find(|gp| gp.player_id == player_id)
    }

    pub fn add_player(&mut self, player_id: i64) -> Result<(), GameError> {
        if self.started() {
            return Err(GameError::Validation(
                "the roster is fixed once the first quest begins".to_string(),
            ));
        }
        if self.game_player(player_id).is_some() {
            return Err(GameError::Validation(format!(
                "player {player_id} already joined this game"
            )));
        }
        self.players.push(GamePlayer::new(player_id));
        Ok(())
    }

    pub fn remove_player(&mut self, player_id: i64) -> Result<(), GameError> {
        if self.started() {
            return Err(GameError::Validation(
                "the roster is fixed once the first quest begins".to_string(),
            ));
        }
        if self.game_player(player_id).is_none() {
            return Err(GameError::PlayerNotFound(player_id));
        }
        self.players.retain(|gp| gp.player_id != player_id);
        Ok(())
    }

    /// Open a new quest with its first round, led by `king`.
    pub fn open_quest(&mut self, king: i64) -> &mut Round {
        let quest_id = self.next_id();
        let round_id = self.next_id();
        let round = Round::fresh(round_id, &self.players, king);
        self.quests.push(Quest { id: quest_id, rounds: vec![round] });
        self.quests
            .last_mut()
            .and_then(|quest| quest.rounds.last_mut())
            .expect("quest pushed above")
    }

    /// Open a follow-up round in the current quest, led by `king`.
    pub fn open_round(&mut self, king: i64) -> Result<&mut Round, GameError> {
        let round_id = self.next_id();
        let round = Round::fresh(round_id, &self.players, king);
        let quest = self.quests.last_mut().ok_or_else(|| {
            GameError::Validation("cannot open a round before the first quest".to_string())
        })?;
        quest.rounds.push(round);
        Ok(quest.rounds.last_mut().expect("round pushed above"))
    }

    /// Locate a round, returning the index of the quest containing it.
    pub fn round(&self, round_id: i64) -> Option<(usize, &Round)> {
        self.quests.iter().enumerate().find_map(|(quest_index, quest)| {
            quest
                .rounds
                .iter()
                .find(|round| round.id == round_id)
                .map(|round| (quest_index, round))
        })
    }

    pub fn round_mut(&mut self, round_id: i64) -> Option<&mut Round> {
        self.quests
            .iter_mut()
            .flat_map(|quest| quest.rounds.iter_mut())
            .find(|round| round.id == round_id)
    }

    /// The round currently being played, if any.
    pub fn current_round(&self) -> Option<&Round> {
        self.quests.last().and_then(|quest| quest.rounds.last())
    }

    pub fn archive(&mut self) {
        self.active = false;
    }

    fn next_id(&mut self) -> i64 {
        self.seq += 1;
        self.seq
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "game {} ({}): {} quests, roster [{}]",
            self.id,
            if self.active { "active" } else { "archived" },
            self.quests.len(),
            self.players.iter().map(|gp| gp.player_id).join(", "),
        )
    }
}
