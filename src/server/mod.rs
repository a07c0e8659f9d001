pub mod extract;
pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::{Config, ServerConfig},
    conversation::{ConversationLog, TracingConversationLog},
    responder::Responder,
};
use axum::{Router, http::HeaderValue, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the application router around the given conversation log.
pub fn router(server: &ServerConfig, log: Arc<dyn ConversationLog>) -> Result<Router> {
    let app_state = handlers::AppState {
        responder: Arc::new(Responder::new(log)),
    };

    Ok(Router::new()
        .route("/send_request", post(handlers::send_request))
        .with_state(app_state)
        .layer(cors_layer(&server.allowed_origins)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| Error::config(format!("Invalid allowed origin: '{}'", origin)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

pub async fn run(config: Config) -> Result<()> {
    let app = router(&config.server, Arc::new(TracingConversationLog::new()))?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
