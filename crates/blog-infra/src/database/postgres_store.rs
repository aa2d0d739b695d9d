//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewPost, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity};

/// Post store over a SeaORM connection.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

pub(super) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError> {
        let active_model: post::ActiveModel =
            BlogPost::from_new(Uuid::new_v4(), post).try_into()?;

        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(post_id = %model.id, "Inserted post");

        model.try_into()
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<BlogPost>, RepoError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let created: Vec<BlogPost> = posts
            .into_iter()
            .map(|post| BlogPost::from_new(Uuid::new_v4(), post))
            .collect();
        let models = created
            .iter()
            .cloned()
            .map(post::ActiveModel::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        PostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;
        tracing::debug!(count = created.len(), "Inserted posts");

        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let models = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(BlogPost::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        model.map(BlogPost::try_from).transpose()
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let model = PostEntity::find().one(&self.db).await.map_err(map_db_err)?;

        model.map(BlogPost::try_from).transpose()
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: PostPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut post = BlogPost::try_from(model.clone())?;
        if patch.is_empty() {
            return Ok(Some(post));
        }
        let (set_title, set_content, set_author) = (
            patch.title.is_some(),
            patch.content.is_some(),
            patch.author.is_some(),
        );
        post.apply(patch);

        // Columns absent from the patch stay Unchanged and are not written.
        let mut active_model = model.into_active_model();
        if set_title {
            active_model.title = Set(post.title);
        }
        if set_content {
            active_model.content = Set(post.content);
        }
        if set_author {
            active_model.author = Set(post::author_document(&post.author)?);
        }

        let updated = active_model.update(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(post_id = %id, "Updated post");

        BlogPost::try_from(updated).map(Some)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        // Lost a race with a concurrent delete.
        if result.rows_affected == 0 {
            return Ok(None);
        }

        tracing::debug!(post_id = %id, "Deleted post");
        BlogPost::try_from(model).map(Some)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::info!(removed = result.rows_affected, "Cleared posts");
        Ok(result.rows_affected)
    }
}
