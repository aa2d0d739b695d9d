//! Post entity for SeaORM.
//!
//! The author is kept as a JSONB sub-document, mirroring the embedded
//! document of the domain model.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::{Author, BlogPost};
use blog_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created: DateTimeWithTimeZone,
    #[sea_orm(column_type = "JsonBinary")]
    pub author: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Encode an author as its stored sub-document.
pub fn author_document(author: &Author) -> Result<Json, RepoError> {
    serde_json::to_value(author).map_err(|e| RepoError::Corrupt(e.to_string()))
}

/// Conversion from SeaORM Model to the domain post.
impl TryFrom<Model> for BlogPost {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let author: Author = serde_json::from_value(model.author)
            .map_err(|e| RepoError::Corrupt(format!("post {}: author: {}", model.id, e)))?;

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            created: model.created.into(),
            author,
        })
    }
}

/// Conversion from the domain post to a SeaORM ActiveModel.
impl TryFrom<BlogPost> for ActiveModel {
    type Error = RepoError;

    fn try_from(post: BlogPost) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Set(post.id),
            author: Set(author_document(&post.author)?),
            title: Set(post.title),
            content: Set(post.content),
            created: Set(post.created.into()),
        })
    }
}
