pub mod error;
pub mod game;
pub mod player;
pub mod role;
pub mod round;
pub mod verdict;

pub use error::GameError;
pub use game::{Game, RoleSetup, Snipe, SnipeFlags};
pub use player::{GamePlayer, Player};
pub use role::{RoleDef, RoleName, RoleSlot, ROLE_CATALOG};
pub use round::{Quest, Round, RoundPlayer};
pub use verdict::{GameVerdict, PlayerResult, Verdict};
