use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use otyugh::{Game, SeededRandom};
use std::path::PathBuf;
use tools::config_file::ConfigFile;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with a `[dungeon]` table
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    cols: Option<usize>,
    #[arg(long)]
    interconnectivity: Option<i64>,
    #[arg(long)]
    wrap: bool,
    #[arg(long)]
    treasure_percentage: Option<i64>,
    #[arg(long)]
    monsters: Option<usize>,
}

impl Args {
    fn resolve(&self) -> Result<ConfigFile> {
        let mut file = match &self.config {
            Some(path) => ConfigFile::load(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?,
            None => ConfigFile::default(),
        };
        let dungeon = &mut file.dungeon;
        dungeon.rows = self.rows.unwrap_or(dungeon.rows);
        dungeon.cols = self.cols.unwrap_or(dungeon.cols);
        dungeon.interconnectivity = self.interconnectivity.unwrap_or(dungeon.interconnectivity);
        dungeon.wrap |= self.wrap;
        dungeon.treasure_percentage =
            self.treasure_percentage.unwrap_or(dungeon.treasure_percentage);
        dungeon.monster_count = self.monsters.unwrap_or(dungeon.monster_count);
        file.seed = self.seed.or(file.seed);
        Ok(file)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let file = args.resolve()?;
    let seed = file.seed.unwrap_or(42);

    info!("generating {}x{} dungeon from seed {seed}", file.dungeon.rows, file.dungeon.cols);
    let game = Game::start(&file.dungeon, SeededRandom::new(seed))
        .with_context(|| format!("Failed to generate dungeon from seed {seed}"))?;

    let json = serde_json::to_string_pretty(&game.summary())
        .context("Failed to serialize dungeon summary")?;
    println!("{json}");
    println!("Snapshot Hash: {}", game.snapshot_hash());
    Ok(())
}
