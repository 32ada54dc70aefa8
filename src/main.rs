//! LevelUp CLI
//!
//! Command-line front-end for the dashboard data generator:
//! - Print a full dashboard snapshot (table or JSON)
//! - Print the leaderboard
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use levelup::config::{generate_default_config, Config, LoggingConfig};
use levelup::{render_leaderboard, render_snapshot, DashboardData, DashboardGenerator};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "levelup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gamified self-improvement dashboard with generated sample data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate and print a dashboard snapshot
    Snapshot {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
        /// Fix the random seed for a reproducible snapshot
        #[arg(short, long)]
        seed: Option<u64>,
        /// Skip the simulated loading delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Generate a snapshot and print only the leaderboard
    Leaderboard {
        /// Fix the random seed for a reproducible snapshot
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);
    tracing::debug!("LevelUp v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Snapshot {
            format,
            seed,
            no_delay,
        } => {
            let generator = build_generator(&config, seed);
            let delay = if no_delay {
                Duration::ZERO
            } else {
                config.generator.load_delay()
            };

            let data = load_snapshot(&generator, delay).await;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
                OutputFormat::Table => print!("{}", render_snapshot(&data)),
            }
        }

        Commands::Leaderboard { seed } => {
            let generator = build_generator(&config, seed);
            let data = generator.generate();
            print!("{}", render_leaderboard(&data.leaderboard));
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber; logs go to stderr so stdout stays clean
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("levelup={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_generator(config: &Config, seed: Option<u64>) -> DashboardGenerator {
    let generator = DashboardGenerator::new(config.generator.clone());
    match seed {
        Some(seed) => generator.with_seed(seed),
        None => generator,
    }
}

/// Wait out the simulated loading delay, then generate the snapshot
async fn load_snapshot(generator: &DashboardGenerator, delay: Duration) -> DashboardData {
    if !delay.is_zero() {
        tracing::info!("Preparing your personalized dashboard ({:?})", delay);
        tokio::time::sleep(delay).await;
    }

    generator.generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_load_snapshot_waits_for_delay() {
        let generator = DashboardGenerator::default().with_seed(1);
        let delay = Duration::from_millis(20);

        let start = Instant::now();
        let data = load_snapshot(&generator, delay).await;

        assert!(start.elapsed() >= delay);
        assert!((0.0..=1.0).contains(&data.daily_progress));
    }

    #[tokio::test]
    async fn test_load_snapshot_without_delay() {
        let generator = DashboardGenerator::default().with_seed(1);
        let data = load_snapshot(&generator, Duration::ZERO).await;
        assert!(!data.leaderboard.is_empty());
    }

    #[test]
    fn test_cli_flag_seed_overrides_config() {
        let mut config = Config::default();
        config.generator.seed = Some(1);

        let generator = build_generator(&config, Some(99));
        assert_eq!(generator.config().seed, Some(99));

        let generator = build_generator(&config, None);
        assert_eq!(generator.config().seed, Some(1));
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["levelup", "snapshot", "--format", "json", "--seed", "3"]);
        match cli.command {
            Commands::Snapshot { format, seed, no_delay } => {
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(seed, Some(3));
                assert!(!no_delay);
            }
            _ => panic!("expected snapshot command"),
        }
    }
}
