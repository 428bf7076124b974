#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the tix-core crate.
//! [tix-core]: https://docs.rs/tix_core/latest/tix_core/index.html
#![doc = include_str!("../README.md")]

mod auth;
mod booking_routes;
mod hotel_routes;
mod input;
mod payment_routes;
mod ticket_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json, http::StatusCode};
use headers::{Authorization, authorization::Bearer};
use schemars::JsonSchema;
use serde::Serialize;
use std::{fmt::Display, sync::Arc};
use tix_core::{eligibility::Failure, ports::Application};
use tower_http::trace::TraceLayer;
use tracing::{Level, event};

pub use auth::User;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct a full API router with the given state and config
pub fn router<T: ApiApplication>(state: T, config: AxumConfig) -> axum::Router {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest("/hotels", hotel_routes::router())
        .nest("/booking", booking_routes::router())
        .nest("/tickets", ticket_routes::router())
        .nest("/payments", payment_routes::router());

    let router = if config.serve_docs {
        router.nest_api_service("/docs", docs_routes())
    } else {
        router
    };

    router
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api))) // Arc is very important here or you will face massive memory and performance issues
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let service = router(app, config);
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<Context = Authorization<Bearer>, Repository: Send + Sync + 'static>
{
}

// this is the blanket implementation
impl<T: Clone + Send + Sync + 'static> ApiApplication for T where
    T: Application<Context = Authorization<Bearer>, Repository: Send + Sync + 'static>
{
}

/// The error half of every handler's response.
pub(crate) type Rejection = (StatusCode, String);

/// Log a storage failure and answer with a 500.
pub(crate) fn internal_error(err: impl Display) -> Rejection {
    event!(Level::ERROR, err = err.to_string());
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal error".to_string(),
    )
}

/// Answer a domain failure with the status the endpoint maps it to.
pub(crate) fn reject(failure: Failure, status: StatusCode) -> Rejection {
    (status, failure.to_string())
}
