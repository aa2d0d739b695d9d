use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, NewPost, PostPatch};
use crate::error::RepoError;

/// Document store for blog posts.
///
/// Lookups by id report a missing document as `Ok(None)`; an `Err` always
/// means the store itself failed.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert one post, assigning its id.
    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError>;

    /// Insert several posts at once. Output order matches input order.
    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Every stored post.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Any single post, if the store is not empty.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Apply a partial update and return the updated post.
    async fn update_by_id(&self, id: Uuid, patch: PostPatch)
    -> Result<Option<BlogPost>, RepoError>;

    /// Remove a post and return what was removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Remove every post, returning how many were removed.
    async fn clear(&self) -> Result<u64, RepoError>;
}
