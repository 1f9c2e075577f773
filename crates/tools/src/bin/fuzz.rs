use anyhow::{Result, bail};
use clap::Parser;
use log::warn;
use otyugh::{
    Direction, DungeonConfig, Game, GameError, GameStatus, ItemKind, LocationKind, SeededRandom,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    games: u32,
    #[arg(short, long, default_value_t = 500)]
    turns: u32,
}

const ITEMS: [ItemKind; 4] =
    [ItemKind::Diamond, ItemKind::Sapphire, ItemKind::Ruby, ItemKind::Arrow];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn random_config(rng: &mut ChaCha8Rng) -> DungeonConfig {
    DungeonConfig {
        rows: 5 + rng.next_u64() as usize % 6,
        cols: 5 + rng.next_u64() as usize % 6,
        interconnectivity: (rng.next_u64() % 8) as i64,
        wrap: rng.next_u64() % 2 == 0,
        treasure_percentage: (rng.next_u64() % 101) as i64,
        monster_count: 1 + rng.next_u64() as usize % 4,
    }
}

fn play_one(game_seed: u64, rng: &mut ChaCha8Rng, turns: u32) -> Result<Option<GameStatus>> {
    let config = random_config(rng);
    let mut game = match Game::start(&config, SeededRandom::new(game_seed)) {
        Ok(game) => game,
        Err(GameError::Generation(error)) => {
            warn!("skipping seed {game_seed} with {config:?}: {error}");
            return Ok(None);
        }
        Err(error) => return Err(error.into()),
    };

    let start = game.start_location();
    if game.location_kind(start) != Some(LocationKind::Cave) {
        bail!("Invariant failed: start {start} is not a cave (seed {game_seed})");
    }
    if !game.monster_locations().contains(&game.end_location()) {
        bail!("Invariant failed: end has no monster (seed {game_seed})");
    }

    for _ in 0..turns {
        if game.is_game_over() {
            break;
        }
        let before_hash = game.snapshot_hash();
        let before_arrows = game.inventory()?.arrows;
        let mut shot = false;
        let result = match rng.next_u64() % 4 {
            0 | 1 => game.move_player(choose(rng, &Direction::ALL)).map(|_| ()),
            2 => game.pick_up(choose(rng, &ITEMS), 1 + (rng.next_u64() % 2) as u32),
            _ => {
                shot = true;
                game.shoot_arrow(choose(rng, &Direction::ALL), 1 + rng.next_u64() as usize % 4)
                    .map(|_| ())
            }
        };

        let arrows = game.inventory()?.arrows;
        match result {
            Err(error) => {
                if !error.is_recoverable() {
                    bail!("Unexpected non-recoverable error {error} (seed {game_seed})");
                }
                if game.snapshot_hash() != before_hash {
                    bail!("Invariant failed: rejected action mutated state (seed {game_seed})");
                }
            }
            Ok(()) if shot && arrows + 1 != before_arrows => {
                bail!("Invariant failed: shot did not spend exactly one arrow (seed {game_seed})");
            }
            Ok(()) => {}
        }
        let here = game.player_location()?;
        if game.location_kind(here).is_none() {
            bail!("Invariant failed: player outside the grid at {here} (seed {game_seed})");
        }
    }
    Ok(Some(game.status()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} games...", args.seed, args.games);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let (mut won, mut dead, mut active, mut skipped) = (0, 0, 0, 0);
    for index in 0..args.games {
        let game_seed = args.seed.wrapping_add(u64::from(index));
        match play_one(game_seed, &mut rng, args.turns)? {
            Some(GameStatus::Won) => won += 1,
            Some(GameStatus::Dead) => dead += 1,
            Some(GameStatus::Active) => active += 1,
            None => skipped += 1,
        }
    }

    println!(
        "Fuzzing completed successfully: {won} won, {dead} dead, {active} unfinished, {skipped} skipped."
    );
    Ok(())
}
