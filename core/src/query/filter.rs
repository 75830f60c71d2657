// catalog_query/src/query/filter.rs

//! Typed, conjunctive product filter. Every field that is `Some` (or not
//! `Any`) contributes one predicate; all predicates must hold.

use crate::model::Product;
use rust_decimal::Decimal;

/// Tri-state for the `is_active` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
  #[default]
  Any,
  Active,
  Inactive,
}

impl ActiveFilter {
  /// `"true"`/`"false"` in any case select a state; everything else means no filter.
  pub fn from_param(raw: Option<&str>) -> Self {
    match raw {
      Some(v) if v.eq_ignore_ascii_case("true") => ActiveFilter::Active,
      Some(v) if v.eq_ignore_ascii_case("false") => ActiveFilter::Inactive,
      _ => ActiveFilter::Any,
    }
  }

  pub fn as_bool(self) -> Option<bool> {
    match self {
      ActiveFilter::Any => None,
      ActiveFilter::Active => Some(true),
      ActiveFilter::Inactive => Some(false),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFilter {
  /// Case-insensitive substring of name OR description.
  pub search: Option<String>,
  pub category_id: Option<i64>,
  pub active: ActiveFilter,
  /// Inclusive lower bound.
  pub min_price: Option<Decimal>,
  /// Inclusive upper bound.
  pub max_price: Option<Decimal>,
  /// Only products with stock > 0.
  pub in_stock: bool,
}

impl ProductFilter {
  pub fn is_empty(&self) -> bool {
    *self == ProductFilter::default()
  }

  /// Number of predicates this filter contributes.
  pub fn predicate_count(&self) -> usize {
    [
      self.search.is_some(),
      self.category_id.is_some(),
      self.active != ActiveFilter::Any,
      self.min_price.is_some(),
      self.max_price.is_some(),
      self.in_stock,
    ]
    .into_iter()
    .filter(|p| *p)
    .count()
  }

  /// Evaluates the conjunction against a single product.
  pub fn matches(&self, product: &Product) -> bool {
    if let Some(needle) = &self.search {
      let needle = needle.to_lowercase();
      let hit = product.name.to_lowercase().contains(&needle) || product.description.to_lowercase().contains(&needle);
      if !hit {
        return false;
      }
    }
    if let Some(category_id) = self.category_id {
      if product.category_id() != Some(category_id) {
        return false;
      }
    }
    if let Some(active) = self.active.as_bool() {
      if product.is_active != active {
        return false;
      }
    }
    if let Some(min) = self.min_price {
      if product.price < min {
        return false;
      }
    }
    if let Some(max) = self.max_price {
      if product.price > max {
        return false;
      }
    }
    if self.in_stock && !product.in_stock() {
      return false;
    }
    true
  }
}
