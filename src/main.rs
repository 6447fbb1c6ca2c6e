use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vortex_demo::{AppState, Config, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded successfully");

    let state = AppState::new(&config).context("Failed to initialize application state")?;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let port = config.port;

    tracing::info!("🚀 Demo server starting on port {}", port);
    tracing::info!("📱 Visit http://localhost:{} to try the demo", port);
    tracing::info!("🔧 Vortex API routes available at http://localhost:{}/api/vortex", port);
    tracing::info!("📊 Health check: http://localhost:{}/health", port);
    tracing::info!("Demo users:");
    tracing::info!("  - admin@example.com / password123 (auto-join admin)");
    tracing::info!("  - user@example.com / userpass (regular user)");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
