//! `envtpl` — render `${VAR}` / `${VAR:-default}` templates from the environment.
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod ctx;
mod error;
mod render;
mod stream;
mod vars;

use ctx::Ctx;

#[derive(Parser)]
#[command(
    name = "envtpl",
    version,
    about = "Substitute environment variables into a template"
)]
struct Cli {
    /// Template file, or `-` for stdin (default: ./dynamic.yml.template)
    template: Option<PathBuf>,

    /// Write to this file atomically instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with fallback values; the environment takes precedence
    #[arg(long, value_name = "FILE")]
    vars: Option<PathBuf>,

    /// Ignore the process environment
    #[arg(long)]
    no_env: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Ctx::new(cli.template, cli.output, cli.vars, cli.no_env);
    render::render(&ctx)
}

/// Logs go to stderr so stdout carries only the rendered text.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
