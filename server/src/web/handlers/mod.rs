// catalog_app/src/web/handlers/mod.rs

pub mod product_handlers;

/// Liveness probe; does not touch the store.
pub async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
