use api::AppState;
use api::config::AppConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let port = config.port;

    let state = AppState::from_config(config)?;
    if !state.recommendations.is_configured() {
        tracing::warn!("GROK_API_KEY or GROK_API_URL not set, recommendations will be generic");
    }
    tracing::info!(tiers = ?state.resolver.tier_names().collect::<Vec<_>>(), "nutrition resolver ready");

    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
