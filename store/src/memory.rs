use std::collections::HashMap;

use async_trait::async_trait;
use types::{Game, GameError, Player};
use uuid::Uuid;

use crate::traits::GameStore;

/// In-memory `GameStore`, for tests, simulations, and single-process use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: Vec<Player>,
    games: HashMap<Uuid, Game>,
    next_player_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn create_player(&mut self, name: &str) -> Result<Player, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::Validation("player name cannot be empty".to_string()));
        }
        self.next_player_id += 1;
        let player = Player { id: self.next_player_id, name: name.to_string(), active: true };
        log::debug!("created player {player}");
        self.players.push(player.clone());
        Ok(player)
    }

    async fn player(&self, player_id: i64) -> Result<Player, GameError> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .cloned()
            .ok_or(GameError::PlayerNotFound(player_id))
    }

    async fn set_player_active(
        &mut self,
        player_id: i64,
        active: bool,
    ) -> Result<(), GameError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(GameError::PlayerNotFound(player_id))?;
        player.active = active;
        Ok(())
    }

    async fn active_players(&self) -> Result<Vec<Player>, GameError> {
        Ok(self.players.iter().filter(|p| p.active).cloned().collect())
    }

    async fn insert_game(&mut self, game: Game) -> Result<(), GameError> {
        if self.games.contains_key(&game.id) {
            return Err(GameError::Validation(format!("game {} already exists", game.id)));
        }
        self.games.insert(game.id, game);
        Ok(())
    }

    async fn game(&self, game_id: Uuid) -> Result<Game, GameError> {
        self.games.get(&game_id).cloned().ok_or(GameError::GameNotFound(game_id))
    }

    async fn update_game(&mut self, game: Game) -> Result<(), GameError> {
        if !self.games.contains_key(&game.id) {
            return Err(GameError::GameNotFound(game.id));
        }
        self.games.insert(game.id, game);
        Ok(())
    }

    async fn games(&self) -> Result<Vec<Game>, GameError> {
        let mut games: Vec<_> = self.games.values().cloned().collect();
        games.sort_by_key(|g| g.start_time);
        Ok(games)
    }
}
