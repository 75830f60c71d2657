// catalog_query/src/query/params.rs

//! Raw query-string parameters and their validation into a `QuerySpec`.

use crate::error::{QueryError, QueryResult};
use crate::query::filter::{ActiveFilter, ProductFilter};
use crate::query::order::SortKey;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use tracing::debug;

/// The recognised query-string parameters, exactly as received.
/// Unknown parameters are dropped. A repeated parameter keeps its last value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct ProductSearchParams {
  pub search: Option<String>,
  pub category: Option<String>,
  pub is_active: Option<String>,
  pub min_price: Option<String>,
  pub max_price: Option<String>,
  pub in_stock: Option<String>,
  pub order_by: Option<String>,
}

/// Validated, request-scoped description of one catalog read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuerySpec {
  pub filter: ProductFilter,
  pub order: SortKey,
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ProductSearchParams {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
    let mut params = ProductSearchParams::default();
    for (key, value) in pairs {
      let slot = match key.as_ref() {
        "search" => &mut params.search,
        "category" => &mut params.category,
        "is_active" => &mut params.is_active,
        "min_price" => &mut params.min_price,
        "max_price" => &mut params.max_price,
        "in_stock" => &mut params.in_stock,
        "order_by" => &mut params.order_by,
        _ => continue,
      };
      *slot = Some(value.into());
    }
    params
  }
}

impl From<Vec<(String, String)>> for ProductSearchParams {
  fn from(pairs: Vec<(String, String)>) -> Self {
    pairs.into_iter().collect()
  }
}

impl QuerySpec {
  pub fn new(filter: ProductFilter, order: SortKey) -> Self {
    Self { filter, order }
  }
}

/// Empty strings count as absent.
fn non_empty(raw: &Option<String>) -> Option<&str> {
  raw.as_deref().filter(|v| !v.is_empty())
}

fn parse_field<T>(
  name: &'static str,
  raw: &Option<String>,
  parse: impl FnOnce(&str) -> Option<T>,
) -> QueryResult<Option<T>> {
  match non_empty(raw) {
    None => Ok(None),
    Some(v) => parse(v.trim()).map(Some).ok_or_else(|| QueryError::InvalidParameter {
      name,
      value: v.to_string(),
    }),
  }
}

/// Plain or exponent notation (`"12.50"`, `"1e2"`).
fn parse_price(v: &str) -> Option<Decimal> {
  Decimal::from_str(v).or_else(|_| Decimal::from_scientific(v)).ok()
}

impl ProductSearchParams {
  /// Validates every parameter and builds the `QuerySpec`.
  ///
  /// `order_by` is checked first: a request with a bad sort key is rejected
  /// with `InvalidOrderBy` no matter what else it carries. A present but empty
  /// `order_by` is not a whitelisted key.
  pub fn parse(&self) -> QueryResult<QuerySpec> {
    let order = match &self.order_by {
      None => SortKey::default(),
      Some(raw) => raw.parse::<SortKey>()?,
    };

    let filter = ProductFilter {
      search: non_empty(&self.search).map(str::to_string),
      category_id: parse_field("category", &self.category, |v| v.parse::<i64>().ok())?,
      active: ActiveFilter::from_param(self.is_active.as_deref()),
      min_price: parse_field("min_price", &self.min_price, parse_price)?,
      max_price: parse_field("max_price", &self.max_price, parse_price)?,
      in_stock: self.in_stock.as_deref().is_some_and(|v| v.eq_ignore_ascii_case("true")),
    };

    debug!(predicates = filter.predicate_count(), order = %order, "Search parameters validated.");
    Ok(QuerySpec { filter, order })
  }
}
