//! This library contains a typed client for the currency exchange backend. It
//! is shared between the CLI and any other consumer that needs to talk to the
//! exchange REST API.
//!
//! ```ignore
//! use exchange_sdk::{ExchangeApi, ExchangeClient};
//!
//! let client = ExchangeClient::builder()
//!     .with_base_url("http://127.0.0.1:5000")
//!     .build()?;
//!
//! let rates = client.get_exchange_rates().await?;
//! ```

/// The [ExchangeApi] trait declares every remote operation of the backend.
mod api;
/// Value sent in the `Authorization` header of authenticated requests.
mod auth;
/// The HTTP client bound to a base URL plus its builder.
mod client;
/// Static table mapping each operation to its verb, path and auth requirement.
mod endpoint;
mod error;
/// Data-transfer shapes exchanged with the backend.
pub mod models;
/// Custom serde parsers for the backend's wire formats.
pub mod serde_parsers;

pub use {api::*, auth::*, client::*, endpoint::*, error::*};
