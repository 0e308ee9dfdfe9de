//! Core components of the `fmp-rs` client.
//!
//! This module contains the dispatch layer every endpoint goes through:
//! - The main [`FmpClient`] and its builder.
//! - The primary [`FmpError`] type.
//! - URL composition ([`request`]), the single-GET transport, response classification and
//!   body decoding ([`response`]), and shape normalization ([`shape`]).

/// The main client (`FmpClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FmpError`) for the crate.
pub mod error;
/// Optional subscriber setup for host applications.
pub mod logging;
pub(crate) mod net;
/// Version tags, endpoints, query parameters and URL building.
pub mod request;
/// Status classification and JSON/CSV/binary decoding.
pub mod response;
/// Uniform row view over any decoded body.
pub mod shape;

// convenient re-exports so most code can just `use crate::core::FmpClient`
pub use client::{FmpClient, FmpClientBuilder};
pub use error::FmpError;
pub use request::{ApiVersion, Endpoint, QueryParams, QueryValue, build_url, validate_choice};
pub use response::Decoded;
pub use shape::{Item, Row, Shape, normalize};
