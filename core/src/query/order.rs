// catalog_query/src/query/order.rs

//! The closed set of sort keys accepted by `order_by`.

use crate::error::QueryError;
use crate::model::Product;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
  Name,
  Price,
  CreatedAt,
  Stock,
}

impl SortField {
  pub const ALL: [SortField; 4] = [SortField::Name, SortField::Price, SortField::CreatedAt, SortField::Stock];

  /// Name as it appears in `order_by`.
  pub fn as_str(self) -> &'static str {
    match self {
      SortField::Name => "name",
      SortField::Price => "price",
      SortField::CreatedAt => "created_at",
      SortField::Stock => "stock",
    }
  }

  /// Qualified column in the product query.
  pub(crate) fn column(self) -> &'static str {
    match self {
      SortField::Name => "p.name",
      SortField::Price => "p.price",
      SortField::CreatedAt => "p.created_at",
      SortField::Stock => "p.stock",
    }
  }

  /// Names compare case-insensitively, then by exact name.
  fn compare(self, a: &Product, b: &Product) -> Ordering {
    match self {
      SortField::Name => a
        .name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name)),
      SortField::Price => a.price.cmp(&b.price),
      SortField::CreatedAt => a.created_at.cmp(&b.created_at),
      SortField::Stock => a.stock.cmp(&b.stock),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
  Ascending,
  Descending,
}

impl SortDirection {
  pub(crate) fn sql(self) -> &'static str {
    match self {
      SortDirection::Ascending => "ASC",
      SortDirection::Descending => "DESC",
    }
  }
}

/// A whitelisted `{field, direction}` pair. Only obtainable by parsing one of
/// the eight accepted `order_by` strings or through the constructors below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
  field: SortField,
  direction: SortDirection,
}

impl SortKey {
  pub const fn asc(field: SortField) -> Self {
    Self {
      field,
      direction: SortDirection::Ascending,
    }
  }

  pub const fn desc(field: SortField) -> Self {
    Self {
      field,
      direction: SortDirection::Descending,
    }
  }

  pub fn field(&self) -> SortField {
    self.field
  }

  pub fn direction(&self) -> SortDirection {
    self.direction
  }

  /// Orders two products by this key. Ties fall back to ascending id.
  pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
    let by_field = match self.direction {
      SortDirection::Ascending => self.field.compare(a, b),
      SortDirection::Descending => self.field.compare(b, a),
    };
    by_field.then_with(|| a.id.cmp(&b.id))
  }
}

impl Default for SortKey {
  /// Newest first.
  fn default() -> Self {
    SortKey::desc(SortField::CreatedAt)
  }
}

impl FromStr for SortKey {
  type Err = QueryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (direction, name) = match s.strip_prefix('-') {
      Some(rest) => (SortDirection::Descending, rest),
      None => (SortDirection::Ascending, s),
    };
    SortField::ALL
      .into_iter()
      .find(|f| f.as_str() == name)
      .map(|field| SortKey { field, direction })
      .ok_or_else(|| QueryError::InvalidOrderBy { value: s.to_string() })
  }
}

impl fmt::Display for SortKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.direction == SortDirection::Descending {
      f.write_str("-")?;
    }
    f.write_str(self.field.as_str())
  }
}
