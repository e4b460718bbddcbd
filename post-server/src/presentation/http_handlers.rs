use crate::application::PostService;
use crate::domain::post::{PostPayload, PostResponse};
use crate::domain::DomainError;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

// Конверты ответов
#[derive(serde::Serialize)]
struct PostsEnvelope {
    posts: Vec<PostResponse>,
}

#[derive(serde::Serialize)]
struct PostEnvelope {
    post: PostResponse,
}

#[derive(serde::Serialize)]
struct PostMessageEnvelope {
    message: &'static str,
    post: PostResponse,
}

// Преобразование DomainError в HttpResponse
fn error_to_response(err: DomainError) -> HttpResponse {
    let status_code = err.to_status_code();
    let message = err.to_string();

    match status_code {
        400 => HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        404 => HttpResponse::NotFound().json(serde_json::json!({ "error": message })),
        _ => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": "Internal server error" })),
    }
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Post API",
        "endpoints": {
            "GET /posts": "Get all posts",
            "GET /posts/{id}": "Get a specific post",
            "POST /posts": "Create a new post",
            "PUT /posts/{id}": "Update a post",
            "DELETE /posts/{id}": "Delete a post"
        }
    }))
}

pub async fn list_posts(post_service: web::Data<Arc<PostService>>) -> impl Responder {
    tracing::info!("Listing all posts");

    match post_service.list_posts().await {
        Ok(posts) => HttpResponse::Ok().json(PostsEnvelope { posts }),
        Err(err) => error_to_response(err),
    }
}

pub async fn create_post(
    post_service: web::Data<Arc<PostService>>,
    payload: Result<web::Json<PostPayload>, actix_web::Error>,
) -> impl Responder {
    tracing::info!("Creating post");

    // A missing or unparseable body is reported by the service, not by the
    // extractor, so the validation order stays payload -> title -> content.
    let payload = payload.ok().map(web::Json::into_inner);

    match post_service.create_post(payload).await {
        Ok(post) => HttpResponse::Created().json(PostMessageEnvelope {
            message: "Post created",
            post,
        }),
        Err(err) => error_to_response(err),
    }
}

pub async fn get_post(
    post_service: web::Data<Arc<PostService>>,
    path: web::Path<i64>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Getting post with id={}", post_id);

    match post_service.get_post(post_id).await {
        Ok(post) => HttpResponse::Ok().json(PostEnvelope { post }),
        Err(err) => error_to_response(err),
    }
}

pub async fn update_post(
    post_service: web::Data<Arc<PostService>>,
    path: web::Path<i64>,
    payload: Result<web::Json<PostPayload>, actix_web::Error>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Updating post with id={}", post_id);

    let payload = payload.ok().map(web::Json::into_inner);

    match post_service.update_post(post_id, payload).await {
        Ok(post) => HttpResponse::Ok().json(PostMessageEnvelope {
            message: "Post updated",
            post,
        }),
        Err(err) => error_to_response(err),
    }
}

pub async fn delete_post(
    post_service: web::Data<Arc<PostService>>,
    path: web::Path<i64>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Deleting post with id={}", post_id);

    match post_service.delete_post(post_id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Post {} deleted successfully", post_id)
        })),
        Err(err) => error_to_response(err),
    }
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Resource not found" }))
}

pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({ "error": "Method not allowed" }))
}

/// Route table, shared by the server binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // A non-integer {id} never reaches a handler; report it like any other
    // unknown route.
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Resource not found" })),
        )
        .into()
    });

    cfg.app_data(path_config)
        .service(
            web::resource("/")
                .route(web::get().to(index))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/posts")
                .route(web::get().to(list_posts))
                .route(web::post().to(create_post))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(get_post))
                .route(web::put().to(update_post))
                .route(web::delete().to(delete_post))
                .default_service(web::route().to(method_not_allowed)),
        )
        .default_service(web::route().to(not_found));
}
