//! # Blog Core
//!
//! The domain layer of the blog posts service.
//! Blog post entities, the error taxonomy, and the `PostStore` port that
//! storage adapters implement. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
