// catalog_app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog_query::ProductSearchParams;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::RequestMedia;

#[instrument(name = "handler::search_products", skip(app_state, query_params, media))]
pub async fn search_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ProductSearchParams>,
  media: RequestMedia,
) -> Result<HttpResponse, AppError> {
  info!(params = ?query_params, "Searching products.");

  let listing = catalog_query::search_products(app_state.store.as_ref(), &query_params, &media.0).await?;

  info!("Successfully fetched {} products.", listing.count);
  Ok(HttpResponse::Ok().json(listing))
}

#[instrument(name = "handler::get_product", skip(app_state, path, media), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  media: RequestMedia,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match catalog_query::find_product(app_state.store.as_ref(), product_id, &media.0).await? {
    Some(product) => {
      info!("Product {} fetched successfully.", product_id);
      Ok(HttpResponse::Ok().json(json!({ "product": product })))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}
