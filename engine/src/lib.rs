pub mod advance;
pub mod driver;
pub mod outcome;
pub mod quests;
pub mod roles;
pub mod rounds;

pub use advance::{advance, first_king, next_king, Advancement};
pub use outcome::evaluate_game;
pub use quests::{evaluate_quest, required_fails};
pub use roles::{assign_role, resolve_player_outcome, validate_role_setup};
pub use rounds::{evaluate_round, team_approved};
