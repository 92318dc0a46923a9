//! Role assignment constraints and per-player outcome resolution.

use types::{Game, GameError, GamePlayer, GameVerdict, PlayerResult, RoleName, RoleSlot, SnipeFlags};

/// Assign (or with `None`, unassign) a role, enforcing slot capacities:
/// single-instance roles are held by at most one player per game, counted
/// roles by up to their configured count. Reassigning a held
/// single-instance role requires unassigning the previous holder first.
pub fn assign_role(
    game: &mut Game,
    player_id: i64,
    role: Option<RoleName>,
) -> Result<(), GameError> {
    if let Some(role) = role {
        let holders = game
            .players
            .iter()
            .filter(|gp| gp.player_id != player_id && gp.role == Some(role))
            .count();
        match game.setup.slot_for(role) {
            RoleSlot::SingleInstance(role) => {
                if holders >= 1 {
                    return Err(GameError::RoleAlreadyAssigned(role));
                }
            }
            RoleSlot::Counted { role, limit } => {
                if holders >= limit {
                    return Err(GameError::RoleCountExceeded { role, limit });
                }
            }
        }
    }
    let game_player = game
        .game_player_mut(player_id)
        .ok_or(GameError::PlayerNotFound(player_id))?;
    log::debug!(
        "player {player_id}: role {:?} -> {:?}",
        game_player.role,
        role
    );
    game_player.role = role;
    Ok(())
}

/// The configured role slots must cover the roster exactly before a game
/// may start.
pub fn validate_role_setup(game: &Game) -> Result<(), GameError> {
    let slots = game.setup.total_slots();
    let players = game.player_count();
    if slots != players {
        return Err(GameError::Validation(format!(
            "role setup provides {slots} slots for {players} players"
        )));
    }
    Ok(())
}

/// One player's personal result. Alignment matching the winning side wins,
/// except that a successful snipe flips its good-aligned victim to a loss
/// in a game good otherwise won. Pending while the game is ongoing or the
/// player has no role recorded.
///
/// Never cache this: it must be re-derived whenever the game outcome or a
/// snipe flag changes.
pub fn resolve_player_outcome(
    game_player: &GamePlayer,
    verdict: GameVerdict,
    snipes: &SnipeFlags,
) -> PlayerResult {
    let role = match game_player.role {
        Some(role) => role,
        None => return PlayerResult::Pending,
    };
    let winner_is_evil = match verdict {
        GameVerdict::GoodWins => false,
        GameVerdict::EvilWins => true,
        GameVerdict::Ongoing => return PlayerResult::Pending,
    };
    if verdict == GameVerdict::GoodWins && sniped(role, snipes) {
        return PlayerResult::Loss;
    }
    if role.evil() == winner_is_evil {
        PlayerResult::Win
    } else {
        PlayerResult::Loss
    }
}

fn sniped(role: RoleName, snipes: &SnipeFlags) -> bool {
    match role {
        RoleName::Merlin => snipes.merlin,
        RoleName::SeniorMessenger | RoleName::JuniorMessenger => snipes.messengers,
        RoleName::Untrustworthy => snipes.untrustworthy,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Game, RoleSetup};

    fn five_player_game() -> Game {
        let mut setup = RoleSetup::default();
        setup.select_role(RoleName::Merlin).unwrap();
        setup.select_role(RoleName::Assassin).unwrap();
        setup.loyal_servant_count = 2;
        setup.minion_count = 1;
        let mut game = Game::new(setup);
        for player_id in 1..=5 {
            game.add_player(player_id).unwrap();
        }
        game
    }

    #[test]
    fn single_instance_roles_reject_a_second_holder() {
        let mut game = five_player_game();
        assign_role(&mut game, 1, Some(RoleName::Merlin)).unwrap();
        assert!(matches!(
            assign_role(&mut game, 2, Some(RoleName::Merlin)),
            Err(GameError::RoleAlreadyAssigned(RoleName::Merlin))
        ));
        // same player may be re-assigned their own role
        assign_role(&mut game, 1, Some(RoleName::Merlin)).unwrap();
    }

    #[test]
    fn unassigning_frees_a_single_instance_role() {
        let mut game = five_player_game();
        assign_role(&mut game, 1, Some(RoleName::Merlin)).unwrap();
        assign_role(&mut game, 1, None).unwrap();
        assign_role(&mut game, 2, Some(RoleName::Merlin)).unwrap();
        assert_eq!(game.game_player(1).unwrap().role, None);
        assert_eq!(game.game_player(2).unwrap().role, Some(RoleName::Merlin));
    }

    #[test]
    fn counted_roles_fill_up_to_their_limit() {
        let mut game = five_player_game();
        assign_role(&mut game, 1, Some(RoleName::LoyalServant)).unwrap();
        assign_role(&mut game, 2, Some(RoleName::LoyalServant)).unwrap();
        assert!(matches!(
            assign_role(&mut game, 3, Some(RoleName::LoyalServant)),
            Err(GameError::RoleCountExceeded { role: RoleName::LoyalServant, limit: 2 })
        ));
        assign_role(&mut game, 3, Some(RoleName::Minion)).unwrap();
        assert!(matches!(
            assign_role(&mut game, 4, Some(RoleName::Minion)),
            Err(GameError::RoleCountExceeded { role: RoleName::Minion, limit: 1 })
        ));
    }

    #[test]
    fn assigning_to_an_unknown_player_fails() {
        let mut game = five_player_game();
        assert!(matches!(
            assign_role(&mut game, 42, Some(RoleName::Merlin)),
            Err(GameError::PlayerNotFound(42))
        ));
    }

    #[test]
    fn setup_must_cover_the_roster_exactly() {
        let mut game = five_player_game();
        validate_role_setup(&game).unwrap();
        game.setup.loyal_servant_count = 1;
        assert!(matches!(validate_role_setup(&game), Err(GameError::Validation(_))));
        game.setup.loyal_servant_count = 3;
        assert!(matches!(validate_role_setup(&game), Err(GameError::Validation(_))));
    }

    fn player_with(role: Option<RoleName>) -> GamePlayer {
        GamePlayer { player_id: 1, role }
    }

    #[test]
    fn alignment_matching_the_winner_wins() {
        let snipes = SnipeFlags::default();
        assert_eq!(
            resolve_player_outcome(&player_with(Some(RoleName::Merlin)), GameVerdict::GoodWins, &snipes),
            PlayerResult::Win
        );
        assert_eq!(
            resolve_player_outcome(&player_with(Some(RoleName::Assassin)), GameVerdict::GoodWins, &snipes),
            PlayerResult::Loss
        );
        assert_eq!(
            resolve_player_outcome(&player_with(Some(RoleName::Minion)), GameVerdict::EvilWins, &snipes),
            PlayerResult::Win
        );
        assert_eq!(
            resolve_player_outcome(&player_with(Some(RoleName::LoyalServant)), GameVerdict::EvilWins, &snipes),
            PlayerResult::Loss
        );
    }

    #[test]
    fn ongoing_game_or_missing_role_is_pending() {
        let snipes = SnipeFlags::default();
        assert_eq!(
            resolve_player_outcome(&player_with(Some(RoleName::Merlin)), GameVerdict::Ongoing, &snipes),
            PlayerResult::Pending
        );
        assert_eq!(
            resolve_player_outcome(&player_with(None), GameVerdict::GoodWins, &snipes),
            PlayerResult::Pending
        );
    }

    #[test]
    fn snipes_flip_their_victims_when_good_wins() {
        let snipes = SnipeFlags { merlin: true, messengers: true, untrustworthy: true };
        for role in [
            RoleName::Merlin,
            RoleName::SeniorMessenger,
            RoleName::JuniorMessenger,
            RoleName::Untrustworthy,
        ] {
            assert_eq!(
                resolve_player_outcome(&player_with(Some(role)), GameVerdict::GoodWins, &snipes),
                PlayerResult::Loss,
                "{role} should be sniped"
            );
        }
        // other good players are untouched
        assert_eq!(
            resolve_player_outcome(&player_with(Some(RoleName::Percival)), GameVerdict::GoodWins, &snipes),
            PlayerResult::Win
        );
    }

    #[test]
    fn snipes_change_nothing_when_evil_wins() {
        let snipes = SnipeFlags { merlin: true, ..SnipeFlags::default() };
        assert_eq!(
            resolve_player_outcome(&player_with(Some(RoleName::Merlin)), GameVerdict::EvilWins, &snipes),
            PlayerResult::Loss
        );
        assert_eq!(
            resolve_player_outcome(&player_with(Some(RoleName::Assassin)), GameVerdict::EvilWins, &snipes),
            PlayerResult::Win
        );
    }
}
