//! Shared application state for all routes.

use crate::store::Gateway;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and injected; handlers never reach for a global pool.
    pub gateway: Arc<dyn Gateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        AppState { gateway }
    }
}
