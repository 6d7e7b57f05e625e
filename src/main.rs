mod analyzer;
mod config;
mod menu;
mod model;
mod parser;
mod report;
mod session;

use config::{AppConfig, load_config};
use session::Session;
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "config.json";

fn main() {
    // Load configuration before logging so the configured level applies
    let (config, config_status) = match load_config(CONFIG_PATH) {
        Ok(Some(cfg)) => (cfg, Ok(true)),
        Ok(None) => (AppConfig::default(), Ok(false)),
        Err(e) => (AppConfig::default(), Err(e)),
    };

    // Initialize logging on stderr so it stays out of the menu
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match config_status {
        Ok(true) => info!("Loaded configuration from {}", CONFIG_PATH),
        Ok(false) => info!("No {} found, using defaults", CONFIG_PATH),
        Err(e) => warn!("Config load error, using defaults: {}", e),
    }
    info!(
        "Prices file: {}, report file: {}, capacity: {}",
        config.prices_path, config.report_path, config.max_points
    );

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if let Err(e) = menu::run(&mut session, &mut input, &mut out) {
        error!("Terminal error: {}", e);
        std::process::exit(1);
    }
    info!("Session finished");
}
