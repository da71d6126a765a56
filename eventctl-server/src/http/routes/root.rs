//! Plain-text welcome at `/`

use axum::{routing::get, Router};

/// Greeting served at the root path
pub const WELCOME: &str = "Welcome to the server";

/// GET /
async fn welcome() -> &'static str {
    WELCOME
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}
