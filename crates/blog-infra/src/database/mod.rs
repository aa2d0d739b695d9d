//! Database connection management and the SQL-backed post store.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_store;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::DbPool;
#[cfg(feature = "postgres")]
pub use postgres_store::PostgresPostStore;
