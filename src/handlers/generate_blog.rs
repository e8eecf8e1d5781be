// POST /api/v1/blogs handler

use bytes::Bytes;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;

use crate::blog::BlogService;

pub async fn generate_blog_handler(
    service: Arc<BlogService>,
    body: Bytes,
) -> Result<impl warp::Reply, Infallible> {
    let envelope = service.handle(&body).await;
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Ok(warp::reply::with_status(
        warp::reply::json(&envelope.body),
        status,
    ))
}
