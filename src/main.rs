use clap::Parser;
use dotenvy::dotenv;
use folio_buddy::cli::{self, Cli};
use folio_buddy::config::load_app_configuration;
use folio_buddy::errors::Result;
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing on stderr so stdout stays clean for CSV/JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Parse arguments
    let args = Cli::parse();

    // 4. Load the application configuration
    let app_config = load_app_configuration(args.config.as_deref())
        .inspect(|_| info!("Configuration loaded."))
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 5. Derive and print the view
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&args, &app_config, &mut out)
        .await
        .inspect_err(|e| error!("Failed to show {}: {}", args.collection, e))?;
    out.flush()?;

    Ok(())
}
