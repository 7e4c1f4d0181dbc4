use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use crossterm::style::Stylize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vodostaj::app::{AppContext, VodostajError};
use vodostaj::cli::{commands, progress, Cli};
use vodostaj::config::Config;
use vodostaj::fetcher::{Fetcher, HttpFetcher, ProgressFn};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("{e:#}").red());
            match e.downcast_ref::<VodostajError>() {
                Some(VodostajError::SaveWithOffset) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load()?;

    let progress: Arc<ProgressFn> = Arc::new(progress::draw);
    let fetcher: Arc<dyn Fetcher + Send + Sync> =
        Arc::new(HttpFetcher::new().with_progress(progress));
    let ctx = AppContext::new(config, fetcher)?;

    if cli.list {
        commands::list_captures(&ctx)?;
    } else if let Some(station) = &cli.charts {
        commands::show_charts(&ctx, station).await?;
    } else if cli.restore {
        commands::restore_state(&ctx)?;
    } else {
        commands::run_report(&ctx, cli.offset, cli.all, cli.save).await?;
    }

    Ok(())
}
