//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::stores::UserStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store that owns every user record.
    pub user_store: Arc<dyn UserStore>,
}

impl AppState {
    /// Create a new [AppState] that serves users from `user_store`.
    pub fn new(user_store: impl UserStore + 'static) -> Self {
        Self {
            user_store: Arc::new(user_store),
        }
    }
}
