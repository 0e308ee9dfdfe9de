//! fmp-rs: typed async client for the Financial Modeling Prep REST API.
//!
//! Every endpoint goes through one small dispatch layer in [`core`]: build the URL from a base,
//! a path and ordered query parameters; issue a single GET; classify the status; decode JSON,
//! CSV, or raw bytes. Endpoint modules are thin wrappers that marshal parameters and coerce the
//! decoded body into typed records.
//!
//! ```no_run
//! # async fn run() -> Result<(), fmp_rs::FmpError> {
//! let client = fmp_rs::FmpClient::from_env()?;
//! match fmp_rs::quote::quote(&client, "AAPL").await {
//!     Ok(quotes) => println!("{quotes:?}"),
//!     Err(e) if e.is_premium() => println!("quote needs a higher plan"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is configured at load time. Applications that want log output install a subscriber
//! themselves, or call `init_logging` with the `tracing-subscriber` feature.

pub mod core;

pub mod chart;
pub mod company;
pub mod directory;
pub mod indexes;
pub mod quote;
pub mod social;
pub mod statements;

pub use crate::core::{
    ApiVersion, Decoded, Endpoint, FmpClient, FmpClientBuilder, FmpError, Item, QueryParams,
    QueryValue, Row, Shape, build_url, normalize, validate_choice,
};

#[cfg(feature = "tracing-subscriber")]
pub use crate::core::logging::init_logging;

pub use chart::{EodLight, HistoricalChartBuilder, IntradayBar};
pub use company::CompanyProfile;
pub use indexes::IndexConstituent;
pub use quote::{Quote, QuoteShort};
pub use statements::{IncomeStatement, IncomeStatementBuilder};
