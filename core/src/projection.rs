// catalog_query/src/projection.rs

//! Record projection: catalog entities into their JSON response shape.

use crate::model::{Product, ProductImage};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Resolves stored image paths to absolute URLs.
///
/// `base` is scheme and authority (`https://shop.example`), `media_prefix` the
/// path under which stored files are served (`/media/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrls {
  base: String,
  media_prefix: String,
}

impl MediaUrls {
  pub fn new(base: impl Into<String>, media_prefix: impl Into<String>) -> Self {
    let base = base.into().trim_end_matches('/').to_string();
    let mut media_prefix = media_prefix.into();
    if !media_prefix.starts_with('/') {
      media_prefix.insert(0, '/');
    }
    if !media_prefix.ends_with('/') {
      media_prefix.push('/');
    }
    Self { base, media_prefix }
  }

  /// Paths that are already absolute URLs are returned unchanged.
  pub fn resolve(&self, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
      return path.to_string();
    }
    format!("{}{}{}", self.base, self.media_prefix, path.trim_start_matches('/'))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
  pub id: i64,
  pub url: String,
  pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub price: String,
  pub stock: i32,
  pub is_active: bool,
  pub category: Option<String>,
  pub category_id: Option<i64>,
  pub images: Vec<ImageView>,
  pub created_at: String,
  pub updated_at: String,
}

/// `{"products": [...], "count": n}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListing {
  pub products: Vec<ProductView>,
  pub count: usize,
}

/// ISO-8601 with an explicit `+00:00` offset. A sub-second part is always six digits.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
  let precision = if ts.timestamp_subsec_micros() == 0 {
    SecondsFormat::Secs
  } else {
    SecondsFormat::Micros
  };
  ts.to_rfc3339_opts(precision, false)
}

impl ImageView {
  pub fn project(image: &ProductImage, urls: &MediaUrls) -> Self {
    Self {
      id: image.id,
      url: urls.resolve(&image.path),
      alt_text: image.alt_text.clone(),
    }
  }
}

impl ProductView {
  pub fn project(product: &Product, urls: &MediaUrls) -> Self {
    Self {
      id: product.id,
      name: product.name.clone(),
      description: product.description.clone(),
      price: product.price.to_string(),
      stock: product.stock,
      is_active: product.is_active,
      category: product.category.as_ref().map(|c| c.name.clone()),
      category_id: product.category_id(),
      images: product.images.iter().map(|img| ImageView::project(img, urls)).collect(),
      created_at: format_timestamp(&product.created_at),
      updated_at: format_timestamp(&product.updated_at),
    }
  }
}

impl ProductListing {
  pub fn project(products: &[Product], urls: &MediaUrls) -> Self {
    let products: Vec<ProductView> = products.iter().map(|p| ProductView::project(p, urls)).collect();
    Self {
      count: products.len(),
      products,
    }
  }
}
