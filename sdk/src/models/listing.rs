use {
    crate::{
        models::{Currency, Direction},
        serde_parsers::{deserialize_direction_flag, serialize_direction_flag},
    },
    serde::{Deserialize, Serialize},
};

/// An offer posted on the exchange board. The poster sells `selling_amount`
/// of the source currency for `buying_amount` of the target currency and is
/// reached through `user_phone_number`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingsData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owner of the listing. `None` for anonymous listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_user_id: Option<u64>,
    pub user_phone_number: String,
    pub selling_amount: f64,
    pub buying_amount: f64,
    #[serde(
        rename = "usd_to_lbp",
        deserialize_with = "deserialize_direction_flag",
        serialize_with = "serialize_direction_flag"
    )]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by_user: Option<u64>,
}

impl ListingsData {
    pub fn new(
        user_phone_number: impl Into<String>,
        selling_amount: f64,
        buying_amount: f64,
        direction: Direction,
    ) -> Self {
        Self {
            id: None,
            posting_user_id: None,
            user_phone_number: user_phone_number.into(),
            selling_amount,
            buying_amount,
            direction,
            resolved: None,
            resolved_by_user: None,
        }
    }

    /// Currency pair as `(sold, bought)`.
    pub fn currency_pair(&self) -> (Currency, Currency) {
        (self.direction.source(), self.direction.target())
    }

    /// Asking price in LBP per USD. `None` when the USD side is zero.
    pub fn price(&self) -> Option<f64> {
        let (usd, lbp) = match self.direction {
            Direction::UsdToLbp => (self.selling_amount, self.buying_amount),
            Direction::LbpToUsd => (self.buying_amount, self.selling_amount),
        };

        (usd != 0.0).then(|| lbp / usd)
    }
}
