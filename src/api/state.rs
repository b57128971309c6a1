//! Shared state for the Web API server.

use crate::store::SharedStore;

/// State injected into every API handler
#[derive(Clone)]
pub struct ApiState {
    pub store: SharedStore,
}

impl ApiState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}
