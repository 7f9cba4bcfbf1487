use conflict_vessels::{to_json, Game};
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let game = Game::create(&mut rng)?;
    println!("{}", to_json(&game)?);
    Ok(())
}
