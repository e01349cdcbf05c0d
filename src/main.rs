#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use console_battleship::prelude::*;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two players take turns at one terminal, firing at each other's hidden fleet.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut game = Game::new();
    game.setup(&mut rng)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    if console.play(&mut game)?.is_none() {
        log::info!("input closed before the game finished");
    }
    Ok(())
}
