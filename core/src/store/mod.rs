// catalog_query/src/store/mod.rs

//! The `ProductStore` seam: where a validated `QuerySpec` meets a backend.

use crate::error::QueryResult;
use crate::model::Product;
use crate::query::params::QuerySpec;
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

/// Read-only access to the product catalog.
///
/// Implementations return products with their category resolved and their
/// images attached in id order. `fetch_products` returns the full matching set
/// in `spec.order`; there is no limit or offset.
#[async_trait]
pub trait ProductStore: Send + Sync {
  async fn fetch_products(&self, spec: &QuerySpec) -> QueryResult<Vec<Product>>;

  async fn fetch_product(&self, id: i64) -> QueryResult<Option<Product>>;

  /// Short backend name for logs.
  fn backend(&self) -> &'static str;
}
