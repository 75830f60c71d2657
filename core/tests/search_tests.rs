// tests/search_tests.rs
mod common;

use catalog_query::{search_products, ProductSearchParams, ProductStore, QueryError};
use common::*;
use rust_decimal::Decimal;

fn params_from(pairs: &[(&str, &str)]) -> ProductSearchParams {
  let mut p = ProductSearchParams::default();
  for (k, v) in pairs {
    let v = Some(v.to_string());
    match *k {
      "search" => p.search = v,
      "category" => p.category = v,
      "is_active" => p.is_active = v,
      "min_price" => p.min_price = v,
      "max_price" => p.max_price = v,
      "in_stock" => p.in_stock = v,
      "order_by" => p.order_by = v,
      other => panic!("unknown parameter {}", other),
    }
  }
  p
}

async fn search_ids(pairs: &[(&str, &str)]) -> Vec<i64> {
  let store = fixture_store();
  let listing = search_products(&store, &params_from(pairs), &media_urls()).await.unwrap();
  assert_eq!(listing.count, listing.products.len());
  listing.products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn no_parameters_returns_everything_newest_first() {
  setup_tracing();
  let ids = search_ids(&[]).await;
  assert_eq!(ids, vec![6, 5, 4, 3, 2, 1]);
  assert_eq!(ids.len(), fixture_store().len());
}

#[tokio::test]
async fn each_whitelisted_order_sorts_by_field_and_direction() {
  setup_tracing();
  let cases: [(&str, Vec<i64>); 8] = [
    ("name", vec![6, 5, 1, 2, 4, 3]),
    ("-name", vec![3, 4, 2, 1, 5, 6]),
    ("price", vec![5, 4, 1, 3, 6, 2]),
    ("-price", vec![2, 3, 6, 1, 4, 5]),
    ("created_at", vec![1, 2, 3, 4, 5, 6]),
    ("-created_at", vec![6, 5, 4, 3, 2, 1]),
    ("stock", vec![2, 5, 3, 4, 1, 6]),
    ("-stock", vec![6, 1, 4, 3, 2, 5]),
  ];
  for (order_by, expected) in cases {
    assert_eq!(search_ids(&[("order_by", order_by)]).await, expected, "order_by={}", order_by);
  }
}

#[tokio::test]
async fn invalid_order_by_is_rejected_without_fetching() {
  setup_tracing();
  for pairs in [
    vec![("order_by", "bogus")],
    vec![("order_by", "")],
    vec![("order_by", "id"), ("search", "oak"), ("in_stock", "true")],
    vec![("order_by", "-updated_at"), ("min_price", "not-a-number")],
  ] {
    let store = CountingStore::new(fixture_store());
    let err = search_products(&store, &params_from(&pairs), &media_urls()).await.unwrap_err();
    assert!(matches!(err, QueryError::InvalidOrderBy { .. }), "{:?} gave {:?}", pairs, err);
    assert_eq!(err.to_string(), "Invalid order_by value.");
    assert_eq!(store.fetch_count(), 0);
  }
}

#[tokio::test]
async fn valid_request_fetches_exactly_once() {
  setup_tracing();
  let store = CountingStore::new(fixture_store());
  let params = params_from(&[("search", "a"), ("is_active", "true"), ("order_by", "-price")]);
  search_products(&store, &params, &media_urls()).await.unwrap();
  assert_eq!(store.fetch_count(), 1);
}

#[tokio::test]
async fn active_flag_filters_both_ways() {
  setup_tracing();
  assert_eq!(search_ids(&[("is_active", "true")]).await, vec![6, 4, 2, 1]);
  assert_eq!(search_ids(&[("is_active", "FALSE")]).await, vec![5, 3]);
  assert_eq!(search_ids(&[("is_active", "maybe")]).await.len(), 6);
}

#[tokio::test]
async fn in_stock_keeps_positive_stock_only() {
  setup_tracing();
  let store = fixture_store();
  let listing = search_products(&store, &params_from(&[("in_stock", "true")]), &media_urls()).await.unwrap();
  assert_eq!(listing.count, 4);
  assert!(listing.products.iter().all(|p| p.stock > 0));
  assert_eq!(search_ids(&[("in_stock", "false")]).await.len(), 6);
}

#[tokio::test]
async fn price_range_is_inclusive() {
  setup_tracing();
  let store = fixture_store();
  let params = params_from(&[("min_price", "19.99"), ("max_price", "75.50"), ("order_by", "price")]);
  let listing = search_products(&store, &params, &media_urls()).await.unwrap();
  let ids: Vec<i64> = listing.products.iter().map(|p| p.id).collect();
  assert_eq!(ids, vec![4, 1, 3, 6]);
  for p in &listing.products {
    let price: Decimal = p.price.parse().unwrap();
    assert!(price >= Decimal::new(1999, 2) && price <= Decimal::new(7550, 2));
  }
}

#[tokio::test]
async fn search_matches_name_or_description_case_insensitively() {
  setup_tracing();
  // "Oak Chair" by name, "Walnut Shelf" by description.
  assert_eq!(search_ids(&[("search", "OAK")]).await, vec![3, 1]);
  // Name and description both match: listed once.
  assert_eq!(search_ids(&[("search", "pine")]).await, vec![2]);
  assert!(search_ids(&[("search", "marble")]).await.is_empty());
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
  setup_tracing();
  assert!(search_ids(&[("search", "%")]).await.is_empty());
  assert!(search_ids(&[("search", "_")]).await.is_empty());
}

#[tokio::test]
async fn category_active_and_price_order_combine() {
  setup_tracing();
  let ids = search_ids(&[("category", "3"), ("is_active", "true"), ("order_by", "price")]).await;
  assert_eq!(ids, vec![1, 6, 2]);
}

#[tokio::test]
async fn malformed_numbers_are_client_errors() {
  setup_tracing();
  for (name, pairs) in [
    ("min_price", vec![("min_price", "cheap")]),
    ("max_price", vec![("max_price", "12abc")]),
    ("category", vec![("category", "furniture")]),
  ] {
    let store = CountingStore::new(fixture_store());
    let err = search_products(&store, &params_from(&pairs), &media_urls()).await.unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), format!("Invalid {} value.", name));
    assert_eq!(store.fetch_count(), 0);
  }
}

#[tokio::test]
async fn images_are_projected_with_absolute_urls() {
  setup_tracing();
  let store = fixture_store();
  let listing = search_products(&store, &params_from(&[("order_by", "created_at")]), &media_urls()).await.unwrap();
  let products = store.fetch_products(&Default::default()).await.unwrap();

  for view in &listing.products {
    let source = products.iter().find(|p| p.id == view.id).unwrap();
    assert_eq!(view.images.len(), source.images.len());
    for image in &view.images {
      assert!(image.url.starts_with("http://testserver/media/products/"), "{}", image.url);
    }
  }

  let chair = &listing.products[0];
  assert_eq!(chair.images[0].url, "http://testserver/media/products/1/0.jpg");
  assert_eq!(chair.images[0].alt_text.as_deref(), Some("Oak Chair photo"));
  assert_eq!(chair.category.as_deref(), Some("Furniture"));
  assert_eq!(chair.price, "49.00");
  assert_eq!(chair.created_at, "2024-01-10T12:00:00+00:00");
}
