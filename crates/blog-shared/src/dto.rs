//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author fields as sent by clients.
///
/// Every field is optional on the wire so that presence can be checked
/// explicitly and reported field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

/// Request to create a blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPayload>,
    /// Defaults to the time of insertion.
    pub created: Option<DateTime<Utc>>,
}

impl CreatePostRequest {
    /// Names of required fields absent from the request.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.content.is_none() {
            missing.push("content");
        }
        match &self.author {
            None => missing.push("author"),
            Some(author) => {
                if author.first_name.is_none() {
                    missing.push("author.firstName");
                }
                if author.last_name.is_none() {
                    missing.push("author.lastName");
                }
            }
        }
        missing
    }
}

/// Request to update a blog post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    /// When present, must match the id in the path.
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPayload>,
}

/// Client-facing view of a post. The author is collapsed to a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created: String,
    pub author: String,
}
