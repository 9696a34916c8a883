//! Router assembly: probe routes at the root, post routes under the base path.

mod common;
mod posts;

pub use common::common_routes;
pub use posts::post_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// The full application router. `base_path` is expected normalized ("/" or "/a/b").
pub fn app(state: AppState, base_path: &str) -> Router {
    common_routes(state.clone())
        .merge(post_routes(state, base_path))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
