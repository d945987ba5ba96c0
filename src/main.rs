use std::process::ExitCode;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gradientgen::cli::Args;
use gradientgen::create_colorschemes;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(), // --help, --version
        Err(e) => {
            let rendered = e.to_string();
            let line = rendered.lines().next().unwrap_or_default();
            eprintln!("gradientgen: {}", line.strip_prefix("error: ").unwrap_or(line));
            return ExitCode::FAILURE
        }
    };

    // Minimal logging for CLI
    let default_filter = if args.verbose { "gradientgen=info" } else { "gradientgen=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gradientgen: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let table = args.gradient_table().context("Bad gradient keypoints")?;
    let written = create_colorschemes(&table, &args.options())
        .with_context(|| format!("Cannot generate colorscheme {:?}", args.name))?;
    tracing::info!(name = %args.name, files = written.len(), "Colorscheme generated");
    Ok(())
}
