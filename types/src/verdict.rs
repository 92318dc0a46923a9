use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Outcome of a single round or of a whole quest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
    /// Not decisive yet: the team was rejected, votes are still being
    /// recorded, or the fail count is below the quest's threshold.
    Pending,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail => write!(f, "fail"),
            Verdict::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVerdict {
    Ongoing,
    GoodWins,
    EvilWins,
}

impl GameVerdict {
    pub fn decided(self) -> bool {
        self != GameVerdict::Ongoing
    }
}

impl Display for GameVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameVerdict::Ongoing => write!(f, "ongoing"),
            GameVerdict::GoodWins => write!(f, "good wins"),
            GameVerdict::EvilWins => write!(f, "evil wins"),
        }
    }
}

/// A single player's personal result once the game is decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerResult {
    Win,
    Loss,
    Pending,
}

impl Display for PlayerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerResult::Win => write!(f, "win"),
            PlayerResult::Loss => write!(f, "loss"),
            PlayerResult::Pending => write!(f, "pending"),
        }
    }
}
