use {
    crate::{display::*, prelude::*},
    exchange_sdk::ExchangeError,
    thiserror::Error,
};

/// Custom error definitions for the Exchange CLI. Takes care of displaying
/// a pretty summary in the console.
#[derive(Debug, Error)]
pub(crate) enum ExchangeCliError {
    #[error("{error}{separator}\n{0}", error = "Syntax Error".red().bold(), separator = separator())]
    SyntaxError(clap::error::Error),
    #[error("{error}{separator}\n{0}", error = "Exchange API Error".red().bold(), separator = separator())]
    Api(ExchangeError),
    #[error("{error}{separator}\n{0}", error = "Not Signed In".red().bold(), separator = separator())]
    NotSignedIn(String),
    #[error("{error}{separator}\n{0}", error = "Error".red().bold(), separator = separator())]
    Any(anyhow::Error),
}
