//! itemsys-api - REST dispatch layer of the item-system gateway
//!
//! This crate turns the static route table into an axum router. Every
//! endpoint runs the same generic pipeline (bind, deadline, invoke,
//! encode/translate); per-route code is limited to the typed request it
//! decodes and the backend operation it invokes.
//!
//! # Usage
//!
//! ```ignore
//! use itemsys_api::{create_router, AppState};
//! use itemsys_rpc::{ItemServiceClient, UserServiceClient};
//!
//! let users = UserServiceClient::connect("http://127.0.0.1:50051")?;
//! let items = ItemServiceClient::connect("http://127.0.0.1:50052")?;
//! let state = AppState::new(Arc::new(users), Arc::new(items));
//! let router = create_router(state);
//! ```

pub mod bind;
pub mod dispatch;
pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, DEFAULT_CALL_TIMEOUT};

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, on};
use axum::Router;
use bytes::Bytes;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the gateway router from the static route table.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }));

    for descriptor in routes::table() {
        let descriptor = Arc::new(descriptor);
        let filter = descriptor.method_filter();
        let path = descriptor.path();
        let handler = move |State(state): State<AppState>,
                            Path(params): Path<HashMap<String, String>>,
                            Query(query): Query<HashMap<String, String>>,
                            body: Bytes| {
            let descriptor = descriptor.clone();
            async move { dispatch::dispatch(&descriptor, state, params, query, body).await }
        };
        router = router.route(path, on(filter, handler));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
