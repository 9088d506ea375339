pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;
pub mod system;

use anyhow::Context;
use std::sync::Arc;

use crate::dashboards::d400_sales_prediction::{PredictionService, SessionStore};
use crate::shared::model::SalesPredictor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    let config = shared::config::load_config().context("failed to load config.toml")?;

    // The model is the only startup dependency; without it the page cannot work.
    let model_path = shared::config::resolve_path(&config.model.path);
    let model = match shared::model::load_model(&model_path) {
        Ok(model) => model,
        Err(e) => {
            tracing::error!("Failed to load model: {}", e);
            return Err(e).context(format!("model artifact {}", model_path.display()));
        }
    };
    tracing::info!(
        "Loaded model '{}' v{} ({} trees) from {}",
        model.name(),
        model.version(),
        model.n_trees(),
        model_path.display()
    );

    let service = PredictionService::new(
        SessionStore::new(config.session.max_idle()?),
        Arc::new(model),
        config.display.good_threshold,
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let assets_dir = shared::config::resolve_path(&config.assets.dir);
    let dist_dir = shared::config::resolve_path(&config.assets.dist_dir);

    let app = routes::configure_routes(service)
        .nest_service("/assets", ServeDir::new(&assets_dir))
        .fallback_service(ServeDir::new(&dist_dir))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid server address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
