//! Catan map generator shell.
//!
//! Generates a board for the selected variant, applies any requested
//! reshuffles, and prints each published board to stdout as JSON. Logs go to
//! stderr.

use std::path::PathBuf;

use anyhow::Context;
use catan_mapgen::{BoardSize, GeneratorConfig};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod protocol;
mod session;

use protocol::{ShellMessage, Step};
use session::Session;

#[derive(Parser, Debug)]
#[command(name = "catan-mapgen-cli")]
#[command(about = "Generate balanced boards for hex-tile settlement games")]
struct Cli {
    /// Board size: standard (19 tiles), large (24) or xlarge (30)
    #[arg(short, long, default_value = "standard")]
    variant: BoardSize,

    /// Random seed (uses entropy if not specified)
    #[arg(short, long, env = "SEED")]
    seed: Option<u64>,

    /// Generator limits as JSON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Custom variant tables as JSON, replacing --variant
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Reshuffle after the first board; repeat for several
    #[arg(short, long, value_enum)]
    reshuffle: Vec<Reshuffle>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Reshuffle {
    Numbers,
    Harbors,
}

impl From<Reshuffle> for Step {
    fn from(r: Reshuffle) -> Self {
        match r {
            Reshuffle::Numbers => Step::ReshuffleNumbers,
            Reshuffle::Harbors => Step::ReshuffleHarbors,
        }
    }
}

impl Cli {
    fn generator_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }

    fn steps(&self) -> Vec<Step> {
        std::iter::once(Step::Generate)
            .chain(self.reshuffle.iter().map(|&r| r.into()))
            .collect()
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.generator_config()?;
    let variant = match &cli.tables {
        Some(path) => session::load_tables(path).with_context(|| format!("loading {}", path.display()))?,
        None => cli.variant.variant(),
    };

    info!(variant = variant.name(), seed = ?config.seed, "starting generator");

    let mut session = Session::new(variant, config);
    for step in cli.steps() {
        let message = session.run(step);
        let json = if cli.pretty {
            serde_json::to_string_pretty(&message)?
        } else {
            serde_json::to_string(&message)?
        };
        println!("{}", json);
        if matches!(message, ShellMessage::Error { step: Step::Generate, .. }) {
            break;
        }
    }

    if session.failures() > 0 {
        anyhow::bail!("{} step(s) failed", session.failures());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["catan-mapgen-cli"]).unwrap();
        assert_eq!(cli.variant, BoardSize::Standard);
        assert!(cli.tables.is_none());
        assert!(!cli.pretty);
        assert_eq!(cli.steps(), vec![Step::Generate]);
    }

    #[test]
    fn test_repeated_reshuffles_keep_order() {
        let cli = Cli::try_parse_from([
            "catan-mapgen-cli",
            "--variant",
            "xlarge",
            "--seed",
            "7",
            "--reshuffle",
            "harbors",
            "-r",
            "numbers",
        ])
        .unwrap();
        assert_eq!(cli.variant, BoardSize::ExtraLarge);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(
            cli.steps(),
            vec![Step::Generate, Step::ReshuffleHarbors, Step::ReshuffleNumbers]
        );
        assert_eq!(cli.generator_config().unwrap().seed, Some(7));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(Cli::try_parse_from(["catan-mapgen-cli", "--variant", "huge"]).is_err());
    }

    #[test]
    fn test_numeric_variant_names() {
        let cli = Cli::try_parse_from(["catan-mapgen-cli", "-v", "24"]).unwrap();
        assert_eq!(cli.variant, BoardSize::Large);
    }
}
