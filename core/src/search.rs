// catalog_query/src/search.rs

//! One catalog read end to end: validate, fetch once, project.

use crate::error::QueryResult;
use crate::projection::{MediaUrls, ProductListing, ProductView};
use crate::query::params::ProductSearchParams;
use crate::store::ProductStore;
use tracing::{info, instrument, warn};

/// Validates `params`, fetches the matching products, and projects them.
///
/// Validation happens before the store is touched; an invalid parameter
/// returns its error without any fetch.
#[instrument(name = "catalog::search", skip_all, fields(backend = store.backend()), err(Display))]
pub async fn search_products(
  store: &dyn ProductStore,
  params: &ProductSearchParams,
  urls: &MediaUrls,
) -> QueryResult<ProductListing> {
  let spec = params.parse().map_err(|e| {
    warn!(params = ?params, "Rejected search parameters: {}", e);
    e
  })?;
  let products = store.fetch_products(&spec).await?;
  let listing = ProductListing::project(&products, urls);
  info!(count = listing.count, order = %spec.order, "Catalog search completed.");
  Ok(listing)
}

/// Fetches and projects a single product, `None` when the id is unknown.
#[instrument(name = "catalog::product", skip(store, urls), err(Display))]
pub async fn find_product(store: &dyn ProductStore, id: i64, urls: &MediaUrls) -> QueryResult<Option<ProductView>> {
  let product = store.fetch_product(id).await?;
  Ok(product.map(|p| ProductView::project(&p, urls)))
}
