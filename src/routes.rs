// Route definitions and handlers

use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Filter;

use crate::blog::BlogService;
use crate::handlers;
use crate::models::ResponseBody;

/// Largest request body accepted by the generate route
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn configure_routes(
    service: Arc<BlogService>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let api = warp::path("api").and(warp::path("v1"));

    // POST /api/v1/blogs
    let generate_blog = api
        .and(warp::path("blogs"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_service(service))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(handlers::generate_blog_handler);

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["POST", "GET"])
        .allow_headers(vec!["content-type"]);

    generate_blog
        .or(health)
        .with(cors)
        .with(warp::trace::request())
        .recover(handle_rejection)
}

fn with_service(
    service: Arc<BlogService>,
) -> impl Filter<Extract = (Arc<BlogService>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&service))
}

/// Answers every rejection with the same `{ "error": ... }` body the handler uses
async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Request body exceeds {} bytes", MAX_BODY_BYTES),
        )
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length is required".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else if let Some(cors) = err.find::<warp::cors::CorsForbidden>() {
        (StatusCode::FORBIDDEN, cors.to_string())
    } else {
        tracing::error!(rejection = ?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ResponseBody::error(message)),
        status,
    ))
}
