use std::sync::Arc;

use fraudscreen_storage::store::DecisionStore;

use crate::screening::Screener;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: DecisionStore,
    pub screener: Arc<Screener>,
}

impl AppState {
    pub fn new(screener: Screener) -> Self {
        Self {
            store: screener.store().clone(),
            screener: Arc::new(screener),
        }
    }
}
