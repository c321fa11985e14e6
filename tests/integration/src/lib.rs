//! Integration test utilities for the Folio API
//!
//! Helpers for running end-to-end tests against the REST API, either over a
//! real socket backed by PostgreSQL or in-process without a database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
