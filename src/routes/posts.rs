//! Post routes under the base path. List and read live on different paths so
//! neither shadows the other; the collection also answers with a trailing slash.

use crate::handlers::posts::{create, list, read, update, update_by_path};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `base_path` is "/" or a normalized "/a/b".
pub fn post_routes(state: AppState, base_path: &str) -> Router {
    let base = base_path.trim_end_matches('/');
    let collection = get(list).post(create).patch(update);
    let mut router = Router::new().route(&format!("{}/", base), collection.clone());
    if !base.is_empty() {
        router = router.route(base, collection);
    }
    router
        .route(&format!("{}/:id", base), get(read).patch(update_by_path))
        .with_state(state)
}
