//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostStore;
use blog_infra::InMemoryPostStore;

#[cfg(feature = "postgres")]
use blog_infra::{DbPool, PostgresPostStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// State backed by the in-memory store.
    pub fn in_memory() -> Self {
        tracing::warn!("Running without database - posts are kept in memory only");
        Self::new(Arc::new(InMemoryPostStore::new()))
    }

    /// State backed by an open database pool.
    #[cfg(feature = "postgres")]
    pub fn with_pool(pool: &DbPool) -> Self {
        Self::new(Arc::new(PostgresPostStore::new(pool.conn.clone())))
    }
}
