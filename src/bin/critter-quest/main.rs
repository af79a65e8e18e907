//! Terminal front end.
mod console;
mod game;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use critter_quest::core::SessionConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Raise a creature, battle wild opponents, face the finale")]
struct Cli {
    /// Save file location.
    #[arg(long = "save", value_name = "PATH")]
    save_path: Option<PathBuf>,

    /// Seed for wild encounters. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between narrated characters, in milliseconds.
    #[arg(long, value_name = "MS")]
    text_delay_ms: Option<u64>,
}

impl Cli {
    fn into_config(self) -> SessionConfig {
        let mut config = SessionConfig::default();
        if let Some(path) = self.save_path {
            config = config.with_save_path(path);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.text_delay_ms {
            config = config.with_text_delay(Duration::from_millis(ms));
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();
    tracing::debug!(?config, "starting");

    game::run(&config)
}
