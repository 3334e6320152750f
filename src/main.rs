use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use talkgen::{config::RenderConfig, pipeline, render::Mode};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render conference talk submissions from a CSV export into site pages"
)]
struct Args {
    /// CSV export, header on the first line
    input: PathBuf,
    /// Output file (singlepage, index) or directory (pages)
    #[arg(short, long)]
    output: PathBuf,
    #[arg(short, long, value_enum)]
    mode: Mode,
    /// YAML file overriding column names and link prefixes
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ─── 2) config ───────────────────────────────────────────────────
    let cfg = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    // ─── 3) render ───────────────────────────────────────────────────
    let talks = pipeline::run(&args.input, &args.output, args.mode, &cfg)?;
    info!(talks, "all done");
    Ok(())
}
