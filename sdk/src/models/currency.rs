use std::{fmt, str::FromStr};

/// Currencies traded on the exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Lbp,
}

impl Currency {
    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Lbp => "LBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Direction of a trade. Encoded on the wire as the `usd_to_lbp` flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Selling USD for LBP.
    #[default]
    UsdToLbp,
    /// Selling LBP for USD.
    LbpToUsd,
}

impl Direction {
    pub const fn from_usd_to_lbp(usd_to_lbp: bool) -> Self {
        if usd_to_lbp {
            Direction::UsdToLbp
        } else {
            Direction::LbpToUsd
        }
    }

    pub const fn is_usd_to_lbp(&self) -> bool {
        matches!(self, Direction::UsdToLbp)
    }

    /// Currency handed over by the trader.
    pub const fn source(&self) -> Currency {
        match self {
            Direction::UsdToLbp => Currency::Usd,
            Direction::LbpToUsd => Currency::Lbp,
        }
    }

    /// Currency received by the trader.
    pub const fn target(&self) -> Currency {
        match self {
            Direction::UsdToLbp => Currency::Lbp,
            Direction::LbpToUsd => Currency::Usd,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::UsdToLbp => write!(f, "usd-to-lbp"),
            Direction::LbpToUsd => write!(f, "lbp-to-usd"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "usd-to-lbp" | "sell" => Ok(Direction::UsdToLbp),
            "lbp-to-usd" | "buy" => Ok(Direction::LbpToUsd),
            _ => Err(format!(
                "Invalid direction '{s}', expected 'usd-to-lbp' or 'lbp-to-usd'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_currencies() {
        assert_eq!(Direction::UsdToLbp.source(), Currency::Usd);
        assert_eq!(Direction::UsdToLbp.target(), Currency::Lbp);
        assert_eq!(Direction::LbpToUsd.source(), Currency::Lbp);
        assert_eq!(Direction::LbpToUsd.target(), Currency::Usd);
    }

    #[test]
    fn test_direction_parses_and_displays() {
        assert_eq!("usd-to-lbp".parse(), Ok(Direction::UsdToLbp));
        assert_eq!("LBP_TO_USD".parse(), Ok(Direction::LbpToUsd));
        assert_eq!("sell".parse(), Ok(Direction::UsdToLbp));
        assert!("eur-to-usd".parse::<Direction>().is_err());

        for direction in [Direction::UsdToLbp, Direction::LbpToUsd] {
            assert_eq!(direction.to_string().parse(), Ok(direction));
        }
    }

    #[test]
    fn test_direction_flag() {
        assert!(Direction::from_usd_to_lbp(true).is_usd_to_lbp());
        assert!(!Direction::from_usd_to_lbp(false).is_usd_to_lbp());
    }
}
