//! Blog post handlers.
//!
//! Every handler is a single pass-through to the post store. Posts leave the
//! server in projected form: the author sub-document collapses to a display
//! name.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{Author, AuthorPatch, BlogPost, NewPost, PostPatch};
use blog_shared::dto::{AuthorPayload, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Projected form of a stored post.
pub fn to_response(post: &BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        created: post.created.to_rfc3339(),
        author: post.author.display_name(),
    }
}

fn new_post_from(req: CreatePostRequest) -> Result<NewPost, DomainError> {
    let missing = req.missing_fields();
    if !missing.is_empty() {
        return Err(DomainError::Validation(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )));
    }

    let author = req.author.unwrap_or_default();
    let post = NewPost::new(
        req.title.unwrap_or_default(),
        req.content.unwrap_or_default(),
        Author::new(
            author.first_name.unwrap_or_default(),
            author.last_name.unwrap_or_default(),
            author.user_name.unwrap_or_default(),
        ),
    );

    Ok(match req.created {
        Some(created) => post.created_at(created),
        None => post,
    })
}

fn patch_from(req: UpdatePostRequest) -> PostPatch {
    PostPatch {
        title: req.title,
        content: req.content,
        author: req.author.map(
            |AuthorPayload {
                 first_name,
                 last_name,
                 user_name,
             }| AuthorPatch {
                first_name,
                last_name,
                user_name,
            },
        ),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    tracing::debug!(count = posts.len(), "Listing posts");

    let body: Vec<PostResponse> = posts.iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = new_post_from(body.into_inner())?;

    let post = state.posts.insert(new_post).await?;
    tracing::info!(post_id = %post.id, "Created post");

    Ok(HttpResponse::Created().json(to_response(&post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id
        && body_id != id
    {
        return Err(DomainError::Validation(format!(
            "Request path id ({}) and request body id ({}) must match",
            id, body_id
        ))
        .into());
    }

    state
        .posts
        .update_by_id(id, patch_from(req))
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;
    tracing::info!(post_id = %id, "Updated post");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .posts
        .delete_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;
    tracing::info!(post_id = %id, "Deleted post");

    Ok(HttpResponse::NoContent().finish())
}
