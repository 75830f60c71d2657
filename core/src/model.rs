// catalog_query/src/model.rs

//! Read-only catalog entities as the stores hand them back.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
  pub id: i64,
  pub name: String,
}

/// An image attached to a product. `path` is relative to the media root.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductImage {
  pub id: i64,
  pub product_id: i64,
  #[sqlx(rename = "image")]
  pub path: String,
  pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub stock: i32,
  pub is_active: bool,
  pub category: Option<Category>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  /// Ordered by image id.
  pub images: Vec<ProductImage>,
}

impl Product {
  pub fn category_id(&self) -> Option<i64> {
    self.category.as_ref().map(|c| c.id)
  }

  pub fn in_stock(&self) -> bool {
    self.stock > 0
  }
}

/// Flat row produced by the product query (`products LEFT JOIN categories`).
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ProductRow {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub stock: i32,
  pub is_active: bool,
  pub category_id: Option<i64>,
  pub category_name: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl ProductRow {
  pub(crate) fn into_product(self, images: Vec<ProductImage>) -> Product {
    let category = match (self.category_id, self.category_name) {
      (Some(id), Some(name)) => Some(Category { id, name }),
      _ => None,
    };
    Product {
      id: self.id,
      name: self.name,
      description: self.description,
      price: self.price,
      stock: self.stock,
      is_active: self.is_active,
      category,
      created_at: self.created_at,
      updated_at: self.updated_at,
      images,
    }
  }
}
