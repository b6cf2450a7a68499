//! CLI binary for job-scanner.

use clap::Parser;
use job_scanner::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_directive())),
        )
        .init();

    let options = cli.into_run_options(chrono::Local::now().date_naive())?;
    let mut stdout = std::io::stdout().lock();
    job_scanner::run(&options, &mut stdout).await?;
    Ok(())
}
