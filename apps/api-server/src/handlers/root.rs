//! Root greeting.

use actix_web::HttpResponse;
use quill_shared::MessageResponse;

pub const GREETING: &str = "Simple CRUD API running! Use /api/posts";

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(GREETING))
}
