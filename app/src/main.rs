use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use relief_core::{Topology, TopologyConfig, write_grid};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Seed from the wall clock, like a fresh terrain per run
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn init_logging() {
    // stdout carries the grid only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let seed = clock_seed();
    info!(seed, "seeded random source");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let topology = match Topology::new(TopologyConfig::default()) {
        Ok(topology) => topology,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = topology.config();
    info!(
        width = config.width,
        height = config.height,
        features = config.major_features(),
        "generating topology"
    );

    let grid = match topology.generate(&mut rng) {
        Ok(grid) => grid,
        Err(e) => {
            error!("generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    if let Err(e) = write_grid(&grid, BufWriter::new(stdout.lock())) {
        error!("writing grid failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
