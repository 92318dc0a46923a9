use thiserror::Error;
use uuid::Uuid;

use crate::role::RoleName;

/// Errors surfaced to the collaborator layer. All are synchronous and
/// non-retryable; none leave previously recorded state modified.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("game not found: {0}")]
    GameNotFound(Uuid),

    #[error("player not found: {0}")]
    PlayerNotFound(i64),

    #[error("round not found: {0}")]
    RoundNotFound(i64),

    #[error("no players in game {0}")]
    NoPlayers(Uuid),

    #[error("{0} is already assigned to another player")]
    RoleAlreadyAssigned(RoleName),

    #[error("no remaining slots for {role} (limit {limit})")]
    RoleCountExceeded { role: RoleName, limit: usize },
}
