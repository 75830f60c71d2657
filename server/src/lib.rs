// catalog_app/src/lib.rs

//! HTTP surface for catalog search: configuration, shared state, error
//! responses and routes around the `catalog_query` library.

pub mod config;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;
