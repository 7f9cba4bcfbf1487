use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use conflict_vessels::{
    default_fleet, from_json_file, init_logging, print_game, print_grid, to_json_file, AutoGrid,
    Game, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out the default fleet at random on a grid and print it.
    Grid {
        #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
        width: usize,
        #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
        height: usize,
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Create a default two-player game and save it as JSON.
    New {
        #[arg(long, default_value = "game.json")]
        out: PathBuf,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Load a saved game and print it.
    Show {
        #[arg(long)]
        file: PathBuf,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (output will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Grid {
            width,
            height,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let grid = AutoGrid::new(width, height, default_fleet(), &mut rng)
                .with_context(|| format!("could not lay out the fleet on {}x{}", width, height))?;
            print_grid(&grid);
        }
        Commands::New { out, seed } => {
            let mut rng = make_rng(seed);
            let game = Game::create(&mut rng)?;
            to_json_file(&game, &out)
                .with_context(|| format!("could not write {}", out.display()))?;
            println!("Game {} saved to {}", game.id(), out.display());
        }
        Commands::Show { file } => {
            let game = from_json_file(&file)
                .with_context(|| format!("could not load {}", file.display()))?;
            print_game(&game);
        }
    }
    Ok(())
}
