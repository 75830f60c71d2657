// src/lib.rs

//! catalog_query: typed product catalog search.
//!
//! Turns the string-valued query parameters of a catalog search into a
//! validated, request-scoped `QuerySpec`:
//!  - One optional typed field per recognised parameter (`ProductFilter`).
//!  - A closed, whitelisted sort key (`SortKey`); anything else is rejected
//!    before a store is touched.
//!  - Conjunctive evaluation, either as bound-parameter Postgres SQL or in memory.
//!  - Projection of matching products into the JSON response shape.

pub mod error;
pub mod model;
pub mod projection;
pub mod query;
pub mod search;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{QueryError, QueryResult};
pub use crate::model::{Category, Product, ProductImage};
pub use crate::projection::{ImageView, MediaUrls, ProductListing, ProductView};
pub use crate::query::filter::{ActiveFilter, ProductFilter};
pub use crate::query::order::{SortDirection, SortField, SortKey};
pub use crate::query::params::{ProductSearchParams, QuerySpec};
pub use crate::search::{find_product, search_products};
pub use crate::store::{InMemoryProductStore, PgProductStore, ProductStore};

/*
    Request flow:
    1. Deserialize the query string into `ProductSearchParams`.
    2. `params.parse()` validates `order_by` first, then the typed filters.
    3. A `ProductStore` executes exactly one product fetch for the `QuerySpec`.
    4. `ProductListing::project` maps products to records with absolute image URLs.
*/
