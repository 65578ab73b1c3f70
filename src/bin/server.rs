//! ExoVis HTTP Server Binary
//!
//! Entry point for the ExoVis REST API server. Loads configuration, the
//! catalog store and the model artifacts, then serves requests.
//!
//! # Usage
//!
//! ```bash
//! EXOVIS_DATA_DIR=data EXOVIS_MODEL_DIR=models cargo run --bin exovis-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `EXOVIS_DATA_DIR`: Catalog data directory (default: data)
//! - `EXOVIS_MODEL_DIR`: Model artifact directory (default: models)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use exovis::catalog::CatalogStore;
use exovis::config::AppConfig;
use exovis::http::{create_router, AppState};
use exovis::predict::{PredictError, Predictor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting ExoVis HTTP Server");

    let config = AppConfig::load().map_err(|e| anyhow::anyhow!(e))?;
    info!(data_dir = %config.catalog.data_dir.display(), "catalog configured");

    let store = Arc::new(CatalogStore::from_settings(&config.catalog));
    if !store.data_dir().is_dir() {
        // Not fatal: catalog absence surfaces per endpoint.
        warn!(
            data_dir = %store.data_dir().display(),
            "catalog data directory does not exist"
        );
    }

    // Model artifacts are loaded once; the predictor is shared read-only
    // with every handler. An absent bundle leaves the predict endpoints
    // disabled, an invalid bundle is a startup failure.
    let predictor = match Predictor::load(&config.model.artifact_dir) {
        Ok(predictor) => {
            info!(
                classes = ?predictor.classes(),
                features = predictor.feature_names().len(),
                "model artifacts loaded"
            );
            Some(Arc::new(predictor))
        }
        Err(PredictError::ArtifactNotFound { path }) => {
            warn!(%path, "no model artifacts, prediction endpoints disabled");
            None
        }
        Err(err) => return Err(anyhow::anyhow!(err)),
    };

    let state = AppState::new(store, predictor);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
