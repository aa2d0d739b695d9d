use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author sub-document embedded in every blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub user_name: String,
}

impl Author {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            user_name: user_name.into(),
        }
    }

    /// Display name used in client-facing output: `"first last"`.
    ///
    /// Either half may be empty; the result never carries stray spaces.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    fn apply(&mut self, patch: AuthorPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(user_name) = patch.user_name {
            self.user_name = user_name;
        }
    }
}

/// Blog post entity - the stored form of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub author: Author,
}

impl BlogPost {
    /// Attach a store-assigned id to a new post.
    pub fn from_new(id: Uuid, post: NewPost) -> Self {
        Self {
            id,
            title: post.title,
            content: post.content,
            created: post.created,
            author: post.author,
        }
    }

    /// Apply a partial update. Only supplied fields change; `id` and
    /// `created` are never touched.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author.apply(author);
        }
    }
}

/// A post that has not been stored yet, so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub author: Author,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(title: String, content: String, author: Author) -> Self {
        Self {
            title,
            content,
            created: Utc::now(),
            author,
        }
    }

    /// Override the creation timestamp (fixtures carry historical dates).
    pub fn created_at(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }
}

/// Field-level changes to an author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPatch>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> BlogPost {
        BlogPost::from_new(
            Uuid::new_v4(),
            NewPost::new(
                "Plums".to_string(),
                "Something about plums.".to_string(),
                Author::new("Ada", "Lovelace", "ada"),
            ),
        )
    }

    #[test]
    fn test_display_name_joins_first_and_last() {
        let author = Author::new("Ada", "Lovelace", "ada");
        assert_eq!(author.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_without_last_name() {
        let author = Author::new("Cher", "", "cher");
        assert_eq!(author.display_name(), "Cher");
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut post = sample_post();
        let before = post.clone();

        post.apply(PostPatch {
            title: Some("Kumquat".to_string()),
            content: Some("All about kumquats.".to_string()),
            author: None,
        });

        assert_eq!(post.title, "Kumquat");
        assert_eq!(post.content, "All about kumquats.");
        assert_eq!(post.id, before.id);
        assert_eq!(post.created, before.created);
        assert_eq!(post.author, before.author);
    }

    #[test]
    fn test_apply_merges_author_fields() {
        let mut post = sample_post();

        post.apply(PostPatch {
            author: Some(AuthorPatch {
                last_name: Some("Byron".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(post.author.first_name, "Ada");
        assert_eq!(post.author.last_name, "Byron");
        assert_eq!(post.author.user_name, "ada");
    }

    #[test]
    fn test_empty_patch() {
        assert!(PostPatch::default().is_empty());
        let patch = PostPatch {
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
