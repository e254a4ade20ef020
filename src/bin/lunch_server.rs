use anyhow::Context;
use clap::Parser;
use fresh_lunch::adapters::http::{router, AppState};
use fresh_lunch::utils::{logger, validation::Validate};
use fresh_lunch::{FileSystemLoader, ServerConfig};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lunch-server")]
#[command(about = "Serve the lunch freshness query over HTTP")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "lunch-server.toml")]
    config: String,

    /// Override the listen port from config
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if let Some(port) = args.port {
        config.server.port = port;
    }

    logger::init_server_logger(config.json_logs());

    config.validate().context("Configuration validation failed")?;
    tracing::info!("Configuration loaded from {}", args.config);

    let state = AppState {
        loader: Arc::new(FileSystemLoader::new(&config.data.base_path)),
        ingredients_source: config.ingredients_source().to_string(),
        recipes_source: config.recipes_source().to_string(),
    };

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
