//! In-memory post store backed by an insertion-ordered `Vec`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewPost, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostStore;

/// In-memory post store using a `Vec` behind an async RwLock.
///
/// Posts are kept in insertion order, so `find_all` and `find_one` are
/// deterministic. Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::from_new(Uuid::new_v4(), post);
        self.posts.write().await.push(post.clone());
        tracing::debug!(post_id = %post.id, "Inserted post");
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<BlogPost>, RepoError> {
        let created: Vec<BlogPost> = posts
            .into_iter()
            .map(|post| BlogPost::from_new(Uuid::new_v4(), post))
            .collect();

        self.posts.write().await.extend(created.iter().cloned());
        tracing::debug!(count = created.len(), "Inserted posts");
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.posts.read().await.first().cloned())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: PostPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.apply(patch);
        Ok(Some(post.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let mut posts = self.posts.write().await;
        let removed = posts
            .iter()
            .position(|p| p.id == id)
            .map(|index| posts.remove(index));
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let removed = posts.len() as u64;
        posts.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::{Author, AuthorPatch};

    fn new_post(title: &str) -> NewPost {
        NewPost::new(
            title.to_string(),
            format!("{} content", title),
            Author::new("Grace", "Hopper", "ghopper"),
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = InMemoryPostStore::new();
        let post = store.insert(new_post("first")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.find_by_id(post.id).await.unwrap(), Some(post));
    }

    #[tokio::test]
    async fn test_insert_many_keeps_order() {
        let store = InMemoryPostStore::new();
        let created = store
            .insert_many(vec![new_post("a"), new_post("b"), new_post("c")])
            .await
            .unwrap();

        let titles: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert_ne!(created[0].id, created[1].id);
        assert_eq!(store.find_one().await.unwrap().unwrap().id, created[0].id);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = InMemoryPostStore::new();
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert!(store.find_one().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let store = InMemoryPostStore::new();
        let post = store.insert(new_post("before")).await.unwrap();

        let patch = PostPatch {
            title: Some("Kumquat".to_string()),
            author: Some(AuthorPatch {
                user_name: Some("amazing_grace".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let updated = store.update_by_id(post.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "Kumquat");
        assert_eq!(updated.content, post.content);
        assert_eq!(updated.author.first_name, "Grace");
        assert_eq!(updated.author.user_name, "amazing_grace");
        assert_eq!(store.find_by_id(post.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = InMemoryPostStore::new();
        let result = store
            .update_by_id(Uuid::new_v4(), PostPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = InMemoryPostStore::new();
        let post = store.insert(new_post("doomed")).await.unwrap();

        let removed = store.delete_by_id(post.id).await.unwrap();
        assert_eq!(removed.map(|p| p.id), Some(post.id));
        assert!(store.find_by_id(post.id).await.unwrap().is_none());
        assert!(store.delete_by_id(post.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryPostStore::new();
        store
            .insert_many(vec![new_post("a"), new_post("b")])
            .await
            .unwrap();

        assert_eq!(store.clear().await.unwrap(), 2);
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
