use anyhow::Result;
use astar_snake::game::{EdgeCostReference, GameConfig, GameSummary};
use astar_snake::modes::{HeadlessMode, WatchMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "astar_snake")]
#[command(version, about = "Snake that plays itself with A* search")]
struct Cli {
    /// How to run the simulation
    #[arg(long, default_value = "watch")]
    mode: Mode,

    /// JSON configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width and height
    #[arg(long)]
    grid_size: Option<usize>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Distance the A* detour penalty is measured against
    #[arg(long)]
    edge_cost: Option<EdgeCost>,

    /// Ticks per second in watch mode
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Stop a headless run after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Watch the snake in the terminal
    Watch,
    /// Run to game over without a UI
    Headless,
}

#[derive(Clone, Copy, ValueEnum)]
enum EdgeCost {
    /// Compare against the head's distance at the start of the search
    SearchStart,
    /// Compare against the node being expanded
    Predecessor,
}

impl From<EdgeCost> for EdgeCostReference {
    fn from(value: EdgeCost) -> Self {
        match value {
            EdgeCost::SearchStart => EdgeCostReference::SearchStart,
            EdgeCost::Predecessor => EdgeCostReference::Predecessor,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    // Dispatch to appropriate mode
    let summary = match cli.mode {
        Mode::Watch => {
            let mut watch_mode = WatchMode::new(config)?;
            watch_mode.run().await?
        }
        Mode::Headless => {
            let mut headless_mode = HeadlessMode::new(config, cli.max_ticks)?;
            headless_mode.run().summary
        }
    };

    print_summary(&summary);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(edge_cost) = cli.edge_cost {
        config.edge_cost = edge_cost.into();
    }
    if let Some(tick_rate) = cli.tick_rate {
        config.tick_rate_hz = tick_rate;
    }

    config.validate()?;
    Ok(config)
}

fn print_summary(summary: &GameSummary) {
    println!("Game Over!");
    println!("Score: {}", summary.score);
    println!("Food collected: {}", summary.food_collected);
    println!("Moves made: {}", summary.moves);
}
