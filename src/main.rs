use std::process::ExitCode;

use tracing::{error, info};

use iaiq::{Config, Database, TokenProvider, WebServer};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = iaiq::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        iaiq::logging::init_console_only(&config.logging.level);
    }

    info!("IAIQ board backend starting");

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> iaiq::Result<()> {
    config.validate()?;

    let tokens = TokenProvider::new(&config.jwt.secret.key)?;
    let db = Database::open(&config.database.path, config.database.max_connections).await?;

    let server = WebServer::new(&config.server, db, tokens)?;
    info!("Server configured on {}", server.addr());
    server.run().await
}
