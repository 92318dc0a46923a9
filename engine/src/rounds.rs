//! Round-level evaluation: was the proposed team approved, and if so did
//! the mission pass or fail?

use types::{Round, Verdict};

/// A proposed team is approved iff a strict majority of the whole roster
/// voted for it. Every player votes, not just the proposed team members.
pub fn team_approved(round: &Round) -> bool {
    2 * round.approvals() > round.player_count()
}

/// Decide one round given the quest's fail threshold.
///
/// A rejected team is never decisive; play simply moves to a new proposal.
/// An approved team passes with zero fails and fails at or above the
/// threshold. Fail counts strictly between zero and the threshold leave
/// the round undecided.
pub fn evaluate_round(round: &Round, required_fails: u32) -> Verdict {
    if !team_approved(round) {
        return Verdict::Pending;
    }
    if round.fails == 0 {
        Verdict::Pass
    } else if round.fails >= required_fails {
        Verdict::Fail
    } else {
        Verdict::Pending
    }
}
