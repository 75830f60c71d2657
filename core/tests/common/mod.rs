// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every fixture

use async_trait::async_trait;
use catalog_query::{
  Category, InMemoryProductStore, MediaUrls, Product, ProductImage, ProductStore, QueryResult, QuerySpec,
};
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Fixture catalog ---
//
// id | name            | price  | stock | active | category | images | created (days after base)
//  1 | Oak Chair       |  49.00 |    10 | yes    | 3        | 2      | 0
//  2 | Pine Table      | 120.00 |     0 | yes    | 3        | 1      | 1
//  3 | Walnut Shelf    |  75.50 |     4 | no     | 3        | 0      | 2
//  4 | Steel Lamp      |  19.99 |     7 | yes    | 5        | 0      | 3
//  5 | Cushion         |   9.00 |     0 | no     | none     | 0      | 4
//  6 | Bench           |  75.50 |    12 | yes    | 3        | 3      | 5
pub fn fixture_products() -> Vec<Product> {
  let base = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
  let rows: [(i64, &str, &str, &str, i32, bool, Option<(i64, &str)>, usize); 6] = [
    (1, "Oak Chair", "A sturdy chair", "49.00", 10, true, Some((3, "Furniture")), 2),
    (2, "Pine Table", "Seats six, made of PINE", "120.00", 0, true, Some((3, "Furniture")), 1),
    (3, "Walnut Shelf", "Wall mounted oak-look shelf", "75.50", 4, false, Some((3, "Furniture")), 0),
    (4, "Steel Lamp", "Industrial desk lamp", "19.99", 7, true, Some((5, "Lighting")), 0),
    (5, "Cushion", "Soft and square", "9.00", 0, false, None, 0),
    (6, "Bench", "Long bench for the hall", "75.50", 12, true, Some((3, "Furniture")), 3),
  ];

  let mut next_image_id = 100;
  rows
    .into_iter()
    .enumerate()
    .map(|(idx, (id, name, description, price, stock, is_active, category, image_count))| {
      let created_at = base + Duration::days(idx as i64);
      let images = (0..image_count)
        .map(|n| {
          next_image_id += 1;
          ProductImage {
            id: next_image_id,
            product_id: id,
            path: format!("products/{}/{}.jpg", id, n),
            alt_text: if n == 0 { Some(format!("{} photo", name)) } else { None },
          }
        })
        .collect();
      Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from_str(price).unwrap(),
        stock,
        is_active,
        category: category.map(|(cid, cname)| Category {
          id: cid,
          name: cname.to_string(),
        }),
        created_at,
        updated_at: created_at + Duration::hours(1),
        images,
      }
    })
    .collect()
}

pub fn fixture_store() -> InMemoryProductStore {
  InMemoryProductStore::with_products(fixture_products())
}

pub fn media_urls() -> MediaUrls {
  MediaUrls::new("http://testserver", "/media/")
}

/// Wraps a store and counts how often it is asked for products.
pub struct CountingStore {
  pub inner: InMemoryProductStore,
  pub fetches: Arc<AtomicUsize>,
}

impl CountingStore {
  pub fn new(inner: InMemoryProductStore) -> Self {
    Self {
      inner,
      fetches: Arc::new(AtomicUsize::new(0)),
    }
  }

  pub fn fetch_count(&self) -> usize {
    self.fetches.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl ProductStore for CountingStore {
  async fn fetch_products(&self, spec: &QuerySpec) -> QueryResult<Vec<Product>> {
    self.fetches.fetch_add(1, Ordering::SeqCst);
    self.inner.fetch_products(spec).await
  }

  async fn fetch_product(&self, id: i64) -> QueryResult<Option<Product>> {
    self.fetches.fetch_add(1, Ordering::SeqCst);
    self.inner.fetch_product(id).await
  }

  fn backend(&self) -> &'static str {
    "counting"
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn ids(products: &[Product]) -> Vec<i64> {
  products.iter().map(|p| p.id).collect()
}
