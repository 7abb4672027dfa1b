use clap::Parser;
use poker_equity::core::{Card, EquityError, Hand};
use poker_equity::holdem::{AdviceThresholds, SimulationConfig, analyze};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "poker-equity")]
#[command(about = "Estimate hold'em equity and get a pot odds based recommendation")]
struct Cli {
    /// The hero's two cards, e.g. AhKh
    #[arg(long)]
    hero: String,

    /// Community cards dealt so far, e.g. 2c7dTh
    #[arg(long, default_value = "")]
    board: String,

    /// Chips already in the pot
    #[arg(long, default_value_t = 100.0)]
    pot: f64,

    /// Chips the hero has to put in to continue
    #[arg(long, default_value_t = 0.0)]
    to_call: f64,

    /// Number of random opponents
    #[arg(long, default_value_t = 1)]
    opponents: usize,

    /// Number of simulated hands
    #[arg(long, default_value_t = 10_000)]
    trials: usize,

    /// Seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// Batches to split the trials into
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,
}

fn parse_hero(s: &str) -> Result<[Card; 2], EquityError> {
    match Hand::new_from_str(s)?.cards().as_slice() {
        [a, b] => Ok([*a, *b]),
        cards => Err(EquityError::InvalidHeroSize(cards.len())),
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let hero = parse_hero(&cli.hero)?;
    let board = Hand::new_from_str(&cli.board)?.cards();

    let mut config = SimulationConfig::default()
        .trials(cli.trials)
        .opponents(cli.opponents)
        .workers(cli.workers);
    if let Some(seed) = cli.seed {
        config = config.seed(seed);
    }

    let analysis = match config.get_seed() {
        Some(seed) => analyze(
            &config,
            &AdviceThresholds::default(),
            hero,
            &board,
            cli.pot,
            cli.to_call,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => analyze(
            &config,
            &AdviceThresholds::default(),
            hero,
            &board,
            cli.pot,
            cli.to_call,
            &mut rand::rng(),
        )?,
    };

    if cli.json {
        Ok(serde_json::to_string_pretty(&analysis)?)
    } else {
        Ok(analysis.to_string())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
