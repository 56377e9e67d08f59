use clap::Parser;
use nodesource_api::{ApiConfig, AppState, build_app_with_config};
use nodesource_core::Profile;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// nodesource placeholder API server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "NODESOURCE_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "NODESOURCE_PORT")]
    port: Option<u16>,

    /// Route set to expose (source, reputer, inference)
    #[arg(short = 'P', long, env = "NODESOURCE_PROFILE", value_parser = parse_profile)]
    profile: Option<Profile>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "NODESOURCE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Config file path
    #[arg(short, long, env = "NODESOURCE_CONFIG")]
    config_file: Option<PathBuf>,

    /// Seed for reproducible placeholder values
    #[arg(short, long, env = "NODESOURCE_SEED")]
    seed: Option<u64>,

    /// Disable Swagger UI
    #[arg(long, env = "NODESOURCE_DISABLE_SWAGGER", default_value_t = false)]
    disable_swagger: bool,
}

fn parse_profile(name: &str) -> Result<Profile, String> {
    Profile::parse(name).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration; logging is not up yet, so report the outcome below
    let loaded = cli
        .config_file
        .as_ref()
        .map(|path| (path, ApiConfig::load_from_file(path)));
    let mut config = match &loaded {
        Some((_, Ok(cfg))) => cfg.clone(),
        _ => ApiConfig::default(),
    };
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &loaded {
        Some((path, Ok(_))) => info!("Configuration loaded from: {}", path.display()),
        Some((_, Err(e))) => warn!(
            "Failed to load config file: {}. Using default configuration.",
            e
        ),
        None => {}
    }

    // Override with CLI options
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(profile) = cli.profile {
        config.profile = profile;
    }
    if cli.seed.is_some() {
        config.sampler.seed = cli.seed;
    }
    if cli.disable_swagger {
        config.enable_swagger = false;
    }

    let addr = config.socket_addr()?;
    let state = AppState::from_config(&config)?;

    debug!(
        "Sampler: {} over [{}, {})",
        state.service.sampler_name(),
        config.sampler.low,
        config.sampler.high
    );

    // Build application
    let app = build_app_with_config(state, &config);

    // Start server
    info!("Starting server on: {} (profile: {})", addr, config.profile);
    for (method, path) in config.profile.routes() {
        debug!("Route: {} {}", method, path);
    }
    if config.enable_swagger {
        info!("Swagger UI: http://{}/swagger-ui", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
