//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .app_data(json_config())
                .app_data(path_config())
                .route("", web::get().to(posts::list_posts))
                .route("", web::post().to(posts::create_post))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::put().to(posts::update_post))
                .route("/{id}", web::delete().to(posts::delete_post)),
        );
}

/// Malformed request bodies become 400 problem documents.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = match &err {
            error::JsonPayloadError::ContentType => "Expected a JSON request body".to_string(),
            other => other.to_string(),
        };
        AppError::BadRequest(detail).into()
    })
}

/// A path id that is not a UUID cannot name a stored post.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::NotFound(format!("Invalid post id: {}", err)).into()
    })
}
