// catalog_query/src/store/memory.rs

use crate::error::QueryResult;
use crate::model::{Category, Product, ProductImage};
use crate::query::params::QuerySpec;
use crate::store::ProductStore;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// `ProductStore` that evaluates a `QuerySpec` over an in-process catalog.
///
/// Cloning shares the same catalog. Lock guards are released before returning,
/// never held across `.await`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductStore {
  products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
    let store = Self::new();
    for product in products {
      store.insert(product);
    }
    store
  }

  /// Adds or replaces (by id) a product. Images are kept in id order.
  pub fn insert(&self, mut product: Product) {
    product.images.sort_by_key(|img| img.id);
    let mut guard = self.products.write();
    match guard.iter().position(|p| p.id == product.id) {
      Some(idx) => guard[idx] = product,
      None => guard.push(product),
    }
  }

  pub fn len(&self) -> usize {
    self.products.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.read().is_empty()
  }

  /// A small furniture catalog for running the server without a database.
  pub fn demo() -> Self {
    let seating = Category {
      id: 1,
      name: "Seating".to_string(),
    };
    let tables = Category {
      id: 2,
      name: "Tables".to_string(),
    };
    let lighting = Category {
      id: 3,
      name: "Lighting".to_string(),
    };
    let base: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().unwrap_or_else(Utc::now);

    type Entry<'a> = (&'a str, &'a str, i64, i32, bool, Option<&'a Category>, &'a [&'a str]);
    let entries: [Entry; 6] = [
      (
        "Oak Dining Chair",
        "Solid oak chair with a woven seat.",
        12900,
        14,
        true,
        Some(&seating),
        &["chairs/oak-front.jpg", "chairs/oak-side.jpg"],
      ),
      ("Walnut Coffee Table", "Low table in oiled walnut.", 34900, 3, true, Some(&tables), &["tables/walnut.jpg"]),
      ("Brass Desk Lamp", "Adjustable lamp, warm LED.", 8950, 0, true, Some(&lighting), &["lamps/brass.jpg"]),
      ("Pine Stool", "Stackable stool for kitchens.", 4500, 22, false, Some(&seating), &[]),
      ("Linen Floor Lamp", "Tall lamp with a linen shade.", 15900, 6, true, Some(&lighting), &[]),
      ("Gift Card", "Redeemable across the store.", 5000, 999, true, None, &[]),
    ];

    let mut image_id = 0;
    let products = entries.into_iter().enumerate().map(|(idx, entry)| {
      let (name, description, cents, stock, is_active, category, images) = entry;
      let id = idx as i64 + 1;
      let created_at = base + Duration::days(idx as i64);
      let images = images
        .iter()
        .map(|path| {
          image_id += 1;
          ProductImage {
            id: image_id,
            product_id: id,
            path: path.to_string(),
            alt_text: Some(name.to_string()),
          }
        })
        .collect();
      Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(cents, 2),
        stock,
        is_active,
        category: category.cloned(),
        created_at,
        updated_at: created_at,
        images,
      }
    });
    let store = Self::with_products(products.collect::<Vec<_>>());
    info!("Seeded in-memory catalog with {} products.", store.len());
    store
  }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  #[instrument(name = "store::memory::fetch_products", skip_all, fields(order = %spec.order))]
  async fn fetch_products(&self, spec: &QuerySpec) -> QueryResult<Vec<Product>> {
    let mut matched: Vec<Product> = {
      let guard = self.products.read();
      guard.iter().filter(|p| spec.filter.matches(p)).cloned().collect()
    };
    matched.sort_by(|a, b| spec.order.compare(a, b));
    debug!("Matched {} products in memory.", matched.len());
    Ok(matched)
  }

  async fn fetch_product(&self, id: i64) -> QueryResult<Option<Product>> {
    Ok(self.products.read().iter().find(|p| p.id == id).cloned())
  }

  fn backend(&self) -> &'static str {
    "memory"
  }
}
