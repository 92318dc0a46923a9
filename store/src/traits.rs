use async_trait::async_trait;
use types::{Game, GameError, Player};
use uuid::Uuid;

/// The persistence seam the engine drives. Implementations own storage
/// technology entirely; game updates are whole-aggregate writes with
/// last-write-wins semantics.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn create_player(&mut self, name: &str) -> Result<Player, GameError>;
    async fn player(&self, player_id: i64) -> Result<Player, GameError>;
    async fn set_player_active(&mut self, player_id: i64, active: bool)
        -> Result<(), GameError>;
    /// Players eligible to join new games, in creation order.
    async fn active_players(&self) -> Result<Vec<Player>, GameError>;

    async fn insert_game(&mut self, game: Game) -> Result<(), GameError>;
    async fn game(&self, game_id: Uuid) -> Result<Game, GameError>;
    async fn update_game(&mut self, game: Game) -> Result<(), GameError>;
    /// All games, most recently started last.
    async fn games(&self) -> Result<Vec<Game>, GameError>;
}
