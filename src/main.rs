use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use search_gateway::{
    config::Config, routes::create_router, search::build_provider, utils::init_logger,
    AppState, SearchGateway,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing; the guard flushes file output on exit
    let _log_guard = init_logger(&config.logging);
    info!("Configuration loaded: {:?}", config.server);

    // Provider handle is fixed for the life of the process
    let provider = build_provider(&config.search);
    if !config.search.is_cse_configured() {
        warn!("CSE_ID is not set; /search will answer with a configuration error");
    }

    let gateway = Arc::new(SearchGateway::new(provider, config.search.cse_id.clone()));
    let state = AppState { config: config.clone(), gateway };

    // Create router
    let app = create_router(state);

    // Start server
    let ip = config
        .server
        .host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid HOST {}: {}", config.server.host, e))?;
    let addr = SocketAddr::new(ip, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
