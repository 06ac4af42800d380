use std::io::{self, BufWriter, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use left_rotation::{BoundsPolicy, RotateConfig, Rotator, StrategyKind};

/// Left-rotate an integer sequence read from stdin
///
/// Input is `n k` followed by `n` integers, separated by any whitespace.
/// The rotated sequence is written to stdout on one line.
#[derive(Parser)]
#[command(name = "left-rotation", version)]
struct Cli {
    /// How to treat k outside 0..=n: reject, wrap or clamp
    #[arg(long, default_value = "reject", value_parser = parse_policy)]
    policy: BoundsPolicy,

    /// Rotation algorithm: block-copy, index-map or in-place
    #[arg(long, default_value = "block-copy", value_parser = parse_strategy)]
    strategy: StrategyKind,
}

fn parse_policy(s: &str) -> std::result::Result<BoundsPolicy, String> {
    BoundsPolicy::from_str(s).ok_or_else(|| format!("unknown policy '{s}' (expected reject, wrap or clamp)"))
}

fn parse_strategy(s: &str) -> std::result::Result<StrategyKind, String> {
    StrategyKind::from_str(s)
        .ok_or_else(|| format!("unknown strategy '{s}' (expected block-copy, index-map or in-place)"))
}

fn main() -> Result<()> {
    // stdout carries the answer only
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = RotateConfig::new()
        .with_policy(cli.policy)
        .with_strategy(cli.strategy);
    debug!(?config, "starting");

    let rotator = Rotator::new(config);
    let stdout = io::stdout();
    rotator
        .run(io::stdin().lock(), BufWriter::new(stdout.lock()))
        .context("left rotation failed")?;

    Ok(())
}
