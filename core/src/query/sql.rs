// catalog_query/src/query/sql.rs

//! Translation of a `QuerySpec` into a Postgres `SELECT`. All user values are
//! bound parameters; only whitelisted column names reach the SQL text.

use crate::query::filter::ProductFilter;
use crate::query::order::SortKey;
use crate::query::params::QuerySpec;
use sqlx::{Postgres, QueryBuilder};

pub(crate) const PRODUCT_SELECT: &str = "SELECT p.id, p.name, p.description, p.price, p.stock, p.is_active, \
   p.category_id, c.name AS category_name, p.created_at, p.updated_at \
   FROM products p LEFT JOIN categories c ON c.id = p.category_id";

pub(crate) const IMAGES_FOR_PRODUCTS: &str =
  "SELECT id, product_id, image, alt_text FROM product_images WHERE product_id = ANY($1) ORDER BY product_id, id";

/// Escapes LIKE metacharacters so the search text matches literally.
pub(crate) fn like_pattern(needle: &str) -> String {
  let mut escaped = String::with_capacity(needle.len() + 2);
  escaped.push('%');
  for ch in needle.chars() {
    if matches!(ch, '\\' | '%' | '_') {
      escaped.push('\\');
    }
    escaped.push(ch);
  }
  escaped.push('%');
  escaped
}

fn push_filter(qb: &mut QueryBuilder<'static, Postgres>, filter: &ProductFilter) {
  let mut first = true;
  let mut and = |qb: &mut QueryBuilder<'static, Postgres>| {
    qb.push(if first { " WHERE " } else { " AND " });
    first = false;
  };

  if let Some(needle) = &filter.search {
    let pattern = like_pattern(needle);
    and(qb);
    qb.push("(p.name ILIKE ")
      .push_bind(pattern.clone())
      .push(" OR p.description ILIKE ")
      .push_bind(pattern)
      .push(")");
  }
  if let Some(category_id) = filter.category_id {
    and(qb);
    qb.push("p.category_id = ").push_bind(category_id);
  }
  if let Some(active) = filter.active.as_bool() {
    and(qb);
    qb.push("p.is_active = ").push_bind(active);
  }
  if let Some(min) = filter.min_price {
    and(qb);
    qb.push("p.price >= ").push_bind(min);
  }
  if let Some(max) = filter.max_price {
    and(qb);
    qb.push("p.price <= ").push_bind(max);
  }
  if filter.in_stock {
    and(qb);
    qb.push("p.stock > 0");
  }
}

fn push_order(qb: &mut QueryBuilder<'_, Postgres>, order: SortKey) {
  qb.push(" ORDER BY ")
    .push(order.field().column())
    .push(" ")
    .push(order.direction().sql())
    .push(", p.id ASC");
}

/// Builds the product query for a spec.
pub fn build_product_query(spec: &QuerySpec) -> QueryBuilder<'static, Postgres> {
  let mut qb = QueryBuilder::new(PRODUCT_SELECT);
  push_filter(&mut qb, &spec.filter);
  push_order(&mut qb, spec.order);
  qb
}

/// Single-product lookup sharing the list query's column set.
pub fn build_product_by_id_query(id: i64) -> QueryBuilder<'static, Postgres> {
  let mut qb = QueryBuilder::new(PRODUCT_SELECT);
  qb.push(" WHERE p.id = ").push_bind(id);
  qb
}
