use {
    crate::serde_parsers::DateSeries,
    serde::{Deserialize, Serialize},
};

/// Daily average rates over the last ten days, as plotted by the clients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDataPoints {
    /// Average rate of USD to LBP trades per day.
    pub sell: DateSeries<f64>,
    /// Average rate of LBP to USD trades per day.
    pub buy: DateSeries<f64>,
}
