//! Router assembly.

mod api;
mod common;
mod docs;

pub use api::api_routes;
pub use common::common_routes;
pub use docs::{docs_routes, OPENAPI_PATH};

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: resource, health and docs routes behind request tracing.
/// Body size is bounded by axum's default extractor limit, so an oversized menu item
/// is rejected by `MenuItemPayload` like any other unreadable body.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes(state.clone()))
        .merge(common_routes(state))
        .merge(docs_routes())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
