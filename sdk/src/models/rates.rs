use {
    crate::{models::Direction, serde_parsers::deserialize_nullable},
    serde::{Deserialize, Serialize},
};

/// Average rates over the last three days, in LBP per USD. A rate is `None`
/// when no transaction was recorded in that direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// Rate paid to traders selling USD.
    #[serde(deserialize_with = "deserialize_nullable")]
    pub usd_to_lbp: Option<f64>,
    /// Rate paid by traders buying USD.
    #[serde(deserialize_with = "deserialize_nullable")]
    pub lbp_to_usd: Option<f64>,
}

impl ExchangeRates {
    pub fn rate(&self, direction: Direction) -> Option<f64> {
        match direction {
            Direction::UsdToLbp => self.usd_to_lbp,
            Direction::LbpToUsd => self.lbp_to_usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_allow_nulls() {
        let rates: ExchangeRates =
            serde_json::from_str(r#"{"usd_to_lbp": 25000.5, "lbp_to_usd": null}"#).unwrap();

        assert_eq!(rates.rate(Direction::UsdToLbp), Some(25000.5));
        assert_eq!(rates.rate(Direction::LbpToUsd), None);
    }

    #[test]
    fn test_rates_require_both_keys() {
        let result = serde_json::from_str::<ExchangeRates>(r#"{"usd_to_lbp": 25000.5}"#);

        assert!(result.is_err());
        assert!(serde_json::from_str::<ExchangeRates>(r#"{"error": "boom"}"#).is_err());
    }
}
