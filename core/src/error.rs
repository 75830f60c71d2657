// catalog_query/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
  /// `order_by` was present but not one of the whitelisted sort keys.
  #[error("Invalid order_by value.")]
  InvalidOrderBy { value: String },

  /// A typed filter parameter (`category`, `min_price`, `max_price`) could not be parsed.
  #[error("Invalid {name} value.")]
  InvalidParameter { name: &'static str, value: String },

  #[error("Product store failure. Source: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },
}

impl QueryError {
  /// True for errors caused by the caller's input rather than the store.
  pub fn is_client_error(&self) -> bool {
    matches!(self, QueryError::InvalidOrderBy { .. } | QueryError::InvalidParameter { .. })
  }
}

impl From<AnyhowError> for QueryError {
  fn from(err: AnyhowError) -> Self {
    QueryError::Store { source: err }
  }
}

impl From<sqlx::Error> for QueryError {
  fn from(err: sqlx::Error) -> Self {
    QueryError::Store {
      source: AnyhowError::new(err),
    }
  }
}

pub type QueryResult<T, E = QueryError> = std::result::Result<T, E>;
