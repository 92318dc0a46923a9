use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::role::RoleName;

/// A known player. Players are never deleted, only marked inactive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// A player's membership in one game, with their (revealable) role.
///
/// Roster position is join order and doubles as the king rotation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub player_id: i64,
    pub role: Option<RoleName>,
}

impl GamePlayer {
    pub fn new(player_id: i64) -> Self {
        Self { player_id, role: None }
    }
}
