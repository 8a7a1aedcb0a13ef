//! formula_api entry point.
//!
//! ```bash
//! FORMULA_API_BIND=0.0.0.0:8080 RUST_LOG=debug cargo run --bin formula_api
//! ```

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use formula_api::{app, init_logging, AppState, Config};
use formula_core::{registry, ExplanationStore};

fn load_explanations(config: &Config) -> anyhow::Result<ExplanationStore> {
    let mut store = ExplanationStore::bundled().context("loading bundled explanations")?;

    if let Some(path) = &config.explanations {
        match store.load_from_path(path) {
            Ok(count) => info!(path = %path.display(), count, "loaded extra explanations"),
            Err(err) => {
                error!(path = %path.display(), code = err.error_code(), "failed to load explanations: {}", err);
                return Err(err).context("loading explanation file");
            }
        }
    }

    Ok(store)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(config.log_format)?;

    let explanations = load_explanations(&config)?;
    info!(
        formulas = registry::formula_count(),
        explanations = explanations.len(),
        languages = ?explanations.languages(),
        "registry ready"
    );

    let state = AppState::new(explanations, config.echo_inputs);
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    info!(addr = %config.bind, echo_inputs = config.echo_inputs, "listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
