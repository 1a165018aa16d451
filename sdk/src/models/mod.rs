mod currency;
mod graph;
mod insights;
mod listing;
mod rates;
mod transaction;
mod user;

// Public exports
pub use {
    currency::*,
    graph::*,
    insights::*,
    listing::*,
    rates::*,
    transaction::*,
    user::*,
};
