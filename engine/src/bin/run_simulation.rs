use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use engine::{driver, evaluate_game};
use store::{GameStore, MemoryStore};
use types::{GameVerdict, RoleName, RoleSetup, Snipe};

#[derive(Parser, Debug)]
struct Params {
    /// Player names; five defaults are used when none are given.
    #[arg(short, long)]
    player: Vec<String>,
    /// Seed for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

fn evil_count(player_count: usize) -> usize {
    match player_count {
        0..=6 => 2,
        7..=9 => 3,
        _ => 4,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let names = if args.player.is_empty() {
        ["Alice", "Bob", "Charlie", "Dana", "Eve"].map(String::from).to_vec()
    } else {
        args.player
    };
    let player_count = names.len();
    let evil = evil_count(player_count);

    let mut setup = RoleSetup::default();
    setup.select_role(RoleName::Merlin)?;
    setup.select_role(RoleName::Assassin)?;
    setup.loyal_servant_count = player_count - evil - 1;
    setup.minion_count = evil - 1;

    let mut store = MemoryStore::new();
    let game_id = driver::create_game(&mut store, setup).await?.id;
    let mut player_ids = Vec::with_capacity(player_count);
    for name in &names {
        let player = store.create_player(name).await?;
        driver::add_player(&mut store, game_id, player.id).await?;
        player_ids.push(player.id);
    }

    // deal roles: a good block and an evil block in shuffled order
    let mut order = player_ids.clone();
    order.shuffle(&mut rng);
    let (good, bad) = order.split_at(player_count - evil);
    driver::set_role(&mut store, game_id, good[0], Some(RoleName::Merlin)).await?;
    for &id in &good[1..] {
        driver::set_role(&mut store, game_id, id, Some(RoleName::LoyalServant)).await?;
    }
    driver::set_role(&mut store, game_id, bad[0], Some(RoleName::Assassin)).await?;
    for &id in &bad[1..] {
        driver::set_role(&mut store, game_id, id, Some(RoleName::Minion)).await?;
    }

    driver::start_game(&mut store, game_id, &mut rng).await?;

    loop {
        let game = store.game(game_id).await?;
        if !game.active {
            break;
        }
        let round_id = game.current_round().expect("active game has a round").id;

        // the king proposes a team
        let team_size = rng.gen_range(2..=player_count.min(3));
        let mut picks = player_ids.clone();
        picks.shuffle(&mut rng);
        for &player_id in picks.iter().take(team_size) {
            driver::toggle_team(&mut store, game_id, round_id, player_id).await?;
        }
        // everyone votes
        for &player_id in &player_ids {
            if rng.gen_bool(0.65) {
                driver::toggle_approval(&mut store, game_id, round_id, player_id).await?;
            }
        }
        // evil team members may sabotage
        let game = store.game(game_id).await?;
        let (_, round) = game.round(round_id).expect("round just played");
        let fails = round
            .round_players
            .iter()
            .filter(|rp| rp.team)
            .filter(|rp| {
                game.game_player(rp.player_id)
                    .and_then(|gp| gp.role)
                    .map(|role| role.evil())
                    .unwrap_or(false)
            })
            .filter(|_| rng.gen_bool(0.7))
            .count() as u32;
        if fails > 0 {
            driver::submit_fails(&mut store, game_id, round_id, fails).await?;
        }

        let advancement = driver::submit_round(&mut store, game_id, round_id).await?;
        log::info!("round {round_id}: {advancement:?}");
    }

    let game = store.game(game_id).await?;
    if evaluate_game(&game) == GameVerdict::GoodWins && rng.gen_bool(0.3) {
        log::info!("the assassin found Merlin");
        driver::set_snipe(&mut store, game_id, Snipe::Merlin, true).await?;
    }

    let game = store.game(game_id).await?;
    log::info!("{game} -> {}", evaluate_game(&game));
    for (player_id, result) in driver::player_results(&store, game_id).await? {
        let name = store.player(player_id).await?.name;
        log::info!("  {name}: {result}");
    }
    println!("{}", serde_json::to_string_pretty(&game)?);
    Ok(())
}
