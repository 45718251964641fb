// Standard library
use std::process;

// 3rd party crates
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use cloudzones::cli::Cli;
use cloudzones::functions::run;
use cloudzones::settings::models::ConfigManager;

#[tokio::main]
async fn main() {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli: Cli = Cli::parse();

    // Configuration failures happen before logging is up, so they go to
    // stderr directly.
    let config: ConfigManager = match ConfigManager::new(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // setup logging.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(&config.settings.log.level)
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    debug!(path = ?config.config_path, "Configuration loaded");

    if let Err(e) = run(&cli, &config.settings).await {
        error!("{}", e);
        process::exit(1);
    }
}
