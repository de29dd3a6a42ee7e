//! Dogdex CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dogdex::cli::{Cli, Commands};
use dogdex::domain::models::Config;
use dogdex::infrastructure::config::ConfigLoader;

/// Initialize tracing from the loaded configuration.
///
/// `RUST_LOG` takes precedence over the configured level; output goes to
/// stderr so stdout stays clean for command output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
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

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(err) => dogdex::cli::handle_error(err, cli.json),
    };

    init_tracing(&config);

    let result = match cli.command {
        Commands::Lookup { breeds, stats } => {
            dogdex::cli::commands::lookup::execute(&config, breeds, stats, cli.json).await
        }
    };

    if let Err(err) = result {
        dogdex::cli::handle_error(err, cli.json);
    }
}
