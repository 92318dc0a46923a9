//! Orchestration over a [`GameStore`]: each operation re-reads the
//! persisted aggregate, applies the rules, and writes the whole game back
//! (last-write-wins). Evaluation is always re-derived, never cached.

use rand::Rng;
use store::GameStore;
use types::{Game, GameError, PlayerResult, RoleName, RoleSetup, Snipe};
use uuid::Uuid;

use crate::advance::{self, first_king, Advancement};
use crate::outcome::evaluate_game;
use crate::roles::{assign_role, resolve_player_outcome, validate_role_setup};

pub async fn create_game(
    store: &mut impl GameStore,
    setup: RoleSetup,
) -> Result<Game, GameError> {
    let game = Game::new(setup);
    log::info!("created {game}");
    store.insert_game(game.clone()).await?;
    Ok(game)
}

pub async fn add_player(
    store: &mut impl GameStore,
    game_id: Uuid,
    player_id: i64,
) -> Result<(), GameError> {
    let player = store.player(player_id).await?;
    let mut game = store.game(game_id).await?;
    game.add_player(player.id)?;
    log::debug!("{player} joined game {game_id}");
    store.update_game(game).await
}

pub async fn remove_player(
    store: &mut impl GameStore,
    game_id: Uuid,
    player_id: i64,
) -> Result<(), GameError> {
    let mut game = store.game(game_id).await?;
    game.remove_player(player_id)?;
    store.update_game(game).await
}

pub async fn set_role(
    store: &mut impl GameStore,
    game_id: Uuid,
    player_id: i64,
    role: Option<RoleName>,
) -> Result<(), GameError> {
    let mut game = store.game(game_id).await?;
    assign_role(&mut game, player_id, role)?;
    store.update_game(game).await
}

/// Start a game: the role setup must cover the roster exactly, and the
/// first quest opens with a randomly chosen king. All later kings rotate
/// deterministically.
pub async fn start_game<R: Rng + ?Sized>(
    store: &mut impl GameStore,
    game_id: Uuid,
    rng: &mut R,
) -> Result<(), GameError> {
    let mut game = store.game(game_id).await?;
    if game.started() {
        return Err(GameError::Validation(format!("game {game_id} already started")));
    }
    validate_role_setup(&game)?;
    let king = first_king(&game, rng)?;
    game.open_quest(king);
    log::info!("game {game_id} started, player {king} is the first king");
    store.update_game(game).await
}

/// Flip whether a player is on the round's proposed team.
pub async fn toggle_team(
    store: &mut impl GameStore,
    game_id: Uuid,
    round_id: i64,
    player_id: i64,
) -> Result<bool, GameError> {
    let mut game = store.game(game_id).await?;
    let round = game.round_mut(round_id).ok_or(GameError::RoundNotFound(round_id))?;
    let round_player = round
        .round_player_mut(player_id)
        .ok_or(GameError::PlayerNotFound(player_id))?;
    round_player.team = !round_player.team;
    let on_team = round_player.team;
    store.update_game(game).await?;
    Ok(on_team)
}

/// Flip a player's public vote on the round's proposed team.
pub async fn toggle_approval(
    store: &mut impl GameStore,
    game_id: Uuid,
    round_id: i64,
    player_id: i64,
) -> Result<bool, GameError> {
    let mut game = store.game(game_id).await?;
    let round = game.round_mut(round_id).ok_or(GameError::RoundNotFound(round_id))?;
    let round_player = round
        .round_player_mut(player_id)
        .ok_or(GameError::PlayerNotFound(player_id))?;
    round_player.approval = !round_player.approval;
    let approval = round_player.approval;
    store.update_game(game).await?;
    Ok(approval)
}

/// Record the number of secret sabotage votes for a round.
pub async fn submit_fails(
    store: &mut impl GameStore,
    game_id: Uuid,
    round_id: i64,
    count: u32,
) -> Result<(), GameError> {
    let mut game = store.game(game_id).await?;
    let round = game.round_mut(round_id).ok_or(GameError::RoundNotFound(round_id))?;
    let team_size = round.team_size();
    if count as usize > team_size {
        return Err(GameError::Validation(format!(
            "{count} fails recorded for a team of {team_size}"
        )));
    }
    round.fails = count;
    store.update_game(game).await
}

/// Submit a round as finished: sanitize stale fail counts, decide the
/// advancement, and persist the resulting new round, new quest, or
/// archival.
pub async fn submit_round(
    store: &mut impl GameStore,
    game_id: Uuid,
    round_id: i64,
) -> Result<Advancement, GameError> {
    let mut game = store.game(game_id).await?;
    if !game.active {
        return Err(GameError::Validation(format!("game {game_id} is archived")));
    }
    {
        let round = game.round_mut(round_id).ok_or(GameError::RoundNotFound(round_id))?;
        if round.sanitize_fails() {
            log::warn!("game {game_id}: stale fail count on round {round_id} reset to 0");
        }
    }

    let advancement = advance::advance(&game, round_id)?;
    match advancement {
        Advancement::GameDecided(verdict) => {
            game.archive();
            log::info!("game {game_id} decided: {verdict}");
        }
        Advancement::NewQuest { next_king } => {
            let round = game.open_quest(next_king);
            log::info!("game {game_id}: quest settled, new quest led by {}", round.king);
        }
        Advancement::NewRoundSameQuest { next_king } => {
            let round = game.open_round(next_king)?;
            log::info!("game {game_id}: team rejected, new round led by {}", round.king);
        }
    }
    store.update_game(game).await?;
    Ok(advancement)
}

/// Record whether an end-game snipe succeeded. Personal outcomes are
/// re-derived on the next read, so flipping a flag back and forth is safe.
pub async fn set_snipe(
    store: &mut impl GameStore,
    game_id: Uuid,
    snipe: Snipe,
    value: bool,
) -> Result<(), GameError> {
    let mut game = store.game(game_id).await?;
    game.snipes.set(snipe, value);
    store.update_game(game).await
}

/// Each roster member's personal result under the current game outcome
/// and snipe flags, in join order.
pub async fn player_results(
    store: &impl GameStore,
    game_id: Uuid,
) -> Result<Vec<(i64, PlayerResult)>, GameError> {
    let game = store.game(game_id).await?;
    let verdict = evaluate_game(&game);
    Ok(game
        .players
        .iter()
        .map(|gp| (gp.player_id, resolve_player_outcome(gp, verdict, &game.snipes)))
        .collect())
}
