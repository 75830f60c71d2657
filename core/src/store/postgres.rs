// catalog_query/src/store/postgres.rs

use crate::error::QueryResult;
use crate::model::{Product, ProductImage, ProductRow};
use crate::query::params::QuerySpec;
use crate::query::sql::{build_product_by_id_query, build_product_query, IMAGES_FOR_PRODUCTS};
use crate::store::ProductStore;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::{debug, error, info, instrument};

/// `ProductStore` over Postgres. One query for the matching products, one
/// batched query for all of their images.
#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  async fn attach_images(&self, rows: Vec<ProductRow>) -> QueryResult<Vec<Product>> {
    if rows.is_empty() {
      return Ok(Vec::new());
    }
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let images: Vec<ProductImage> = sqlx::query_as(IMAGES_FOR_PRODUCTS)
      .bind(ids.as_slice())
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to fetch images for {} products: {}", ids.len(), e);
        e
      })?;
    debug!("Fetched {} images for {} products.", images.len(), ids.len());

    let mut by_product: HashMap<i64, Vec<ProductImage>> = HashMap::new();
    for image in images {
      by_product.entry(image.product_id).or_default().push(image);
    }

    Ok(
      rows
        .into_iter()
        .map(|row| {
          let images = by_product.remove(&row.id).unwrap_or_default();
          row.into_product(images)
        })
        .collect(),
    )
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  #[instrument(name = "store::pg::fetch_products", skip_all, fields(order = %spec.order), err(Display))]
  async fn fetch_products(&self, spec: &QuerySpec) -> QueryResult<Vec<Product>> {
    let mut qb = build_product_query(spec);
    let rows: Vec<ProductRow> = qb
      .build_query_as::<ProductRow>()
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to fetch products from database: {}", e);
        e
      })?;
    info!("Fetched {} products.", rows.len());
    self.attach_images(rows).await
  }

  #[instrument(name = "store::pg::fetch_product", skip(self), err(Display))]
  async fn fetch_product(&self, id: i64) -> QueryResult<Option<Product>> {
    let mut qb = build_product_by_id_query(id);
    let row: Option<ProductRow> = qb.build_query_as::<ProductRow>().fetch_optional(&self.pool).await?;
    match row {
      Some(row) => Ok(self.attach_images(vec![row]).await?.pop()),
      None => Ok(None),
    }
  }

  fn backend(&self) -> &'static str {
    "postgres"
  }
}
