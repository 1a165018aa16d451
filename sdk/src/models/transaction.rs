use {
    crate::{
        models::{Currency, Direction},
        serde_parsers::{
            deserialize_direction_flag,
            deserialize_timestamp,
            serialize_direction_flag,
            serialize_timestamp,
        },
    },
    chrono::NaiveDateTime,
    serde::{Deserialize, Serialize},
};

/// A USD/LBP trade recorded by the backend. The server assigns `id`,
/// `user_id` and `added_date`; they are omitted from request bodies when
/// unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub usd_amount: f64,
    pub lbp_amount: f64,
    #[serde(
        rename = "usd_to_lbp",
        deserialize_with = "deserialize_direction_flag",
        serialize_with = "serialize_direction_flag"
    )]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    pub added_date: Option<NaiveDateTime>,
}

impl Transaction {
    /// Create a new transaction ready to be sent to the backend.
    pub fn new(usd_amount: f64, lbp_amount: f64, direction: Direction) -> Self {
        Self {
            id: None,
            usd_amount,
            lbp_amount,
            direction,
            user_id: None,
            added_date: None,
        }
    }

    pub fn source(&self) -> Currency {
        self.direction.source()
    }

    pub fn target(&self) -> Currency {
        self.direction.target()
    }

    /// Amount handed over, in the source currency.
    pub fn amount(&self) -> f64 {
        match self.direction {
            Direction::UsdToLbp => self.usd_amount,
            Direction::LbpToUsd => self.lbp_amount,
        }
    }

    /// LBP per USD. `None` when the USD amount is zero.
    pub fn rate(&self) -> Option<f64> {
        (self.usd_amount != 0.0).then(|| self.lbp_amount / self.usd_amount)
    }
}
