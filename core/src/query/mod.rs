// catalog_query/src/query/mod.rs

//! Parameter parsing, typed filters, sort keys and their SQL translation.

pub mod filter;
pub mod order;
pub mod params;
pub mod sql;
