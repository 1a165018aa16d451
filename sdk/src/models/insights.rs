use {
    crate::serde_parsers::DateSeries,
    serde::{Deserialize, Serialize},
};

/// Market summary over the last two weeks. Every field is a date keyed
/// series; days without trades may be missing from `*_open` and `*_close`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsData {
    pub usd_to_lbp_avg: DateSeries<f64>,
    pub lbp_to_usd_avg: DateSeries<f64>,
    pub usd_to_lbp_open: DateSeries<f64>,
    pub lbp_to_usd_open: DateSeries<f64>,
    pub usd_to_lbp_close: DateSeries<f64>,
    pub lbp_to_usd_close: DateSeries<f64>,
    /// Number of trades per day.
    pub volume_in_trxs: DateSeries<u64>,
    /// USD traded per day.
    pub volume_in_usd: DateSeries<f64>,
}

impl InsightsData {
    pub fn total_trades(&self) -> u64 {
        self.volume_in_trxs.iter().map(|point| point.value).sum()
    }

    pub fn total_volume_usd(&self) -> f64 {
        self.volume_in_usd.iter().map(|point| point.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn test_insights_totals() {
        let insights: InsightsData = serde_json::from_value(json!({
            "usd_to_lbp_avg": { "2022-04-24": 25000.0 },
            "lbp_to_usd_avg": {},
            "usd_to_lbp_open": {},
            "lbp_to_usd_open": {},
            "usd_to_lbp_close": {},
            "lbp_to_usd_close": {},
            "volume_in_trxs": { "2022-04-24": 3, "2022-04-23": 2 },
            "volume_in_usd": { "2022-04-24": 150.5, "2022-04-23": 49.5 }
        }))
        .unwrap();

        assert_eq!(insights.total_trades(), 5);
        assert_eq!(insights.total_volume_usd(), 200.0);
        assert!(insights.lbp_to_usd_close.is_empty());
        assert_eq!(insights.usd_to_lbp_avg.len(), 1);
    }

    #[test]
    fn test_insights_require_every_series() {
        let result = serde_json::from_value::<InsightsData>(json!({
            "volume_in_trxs": { "2022-04-24": 3 },
            "volume_in_usd": { "2022-04-24": 150.5 }
        }));

        assert!(result.is_err());
    }
}
