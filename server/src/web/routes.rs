// catalog_app/src/web/routes.rs

use actix_web::{error::QueryPayloadError, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{health_check_handler, product_handlers};

// Query strings that fail to deserialize answer with the same JSON error shape.
fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid query string: {}", err)).into()
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler));
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::search_products_handler))
          .route("/search", web::get().to(product_handlers::search_products_handler))
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
      ),
  );
}
