//! HTTP handlers and routing.

mod form;
mod health;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Create the router with all routes and middleware.
pub fn create_router() -> Router {
    Router::new()
        // Health endpoints
        .merge(health::routes())
        // Validator form
        .merge(form::routes())
        .layer(TraceLayer::new_for_http())
}
