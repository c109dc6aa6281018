mod auth;
mod config;
mod db;
mod errors;
mod jobs;
mod matching;
mod models;
mod parser;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::parser::vocabulary::SkillVocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging. The default directive must use the crate
    // name (the target prefix on every tracing event), not the package name.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Controlled skill vocabulary for the field extractor
    let vocabulary = Arc::new(SkillVocabulary::default());
    info!("Skill vocabulary loaded ({} entries)", vocabulary.skills().len());

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        vocabulary,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    /// The default log directive is keyed to the crate name so it matches the
    /// `api::...` targets on this binary's tracing events.
    #[test]
    fn test_default_log_directive_matches_event_targets() {
        let crate_name = env!("CARGO_CRATE_NAME");
        let target_prefix = module_path!().split("::").next().unwrap();
        assert_eq!(crate_name, target_prefix);
    }
}
