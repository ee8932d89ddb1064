//! Power gauge value object
//!
//! Power is the only mutable stat on a character. It lives in `[0, 100]` and
//! only ever moves up, one fixed step at a time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Upper bound of the power gauge
pub const MAX_POWER: u8 = 100;

/// Amount added by a single increment
pub const POWER_STEP: u8 = 10;

/// A power level, valid by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Power(u8);

impl Power {
    pub const ZERO: Power = Power(0);
    pub const MAX: Power = Power(MAX_POWER);

    /// Create a power level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPower` if `value` exceeds [`MAX_POWER`].
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > MAX_POWER {
            return Err(DomainError::InvalidPower {
                value: i64::from(value),
                max: MAX_POWER,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_max(self) -> bool {
        self.0 >= MAX_POWER
    }

    /// Compute the next level after one increment.
    ///
    /// A full gauge is reported as [`PowerChange::AlreadyMax`] and stays put.
    /// Otherwise the step is added and clamped at [`MAX_POWER`].
    pub fn raise(self) -> PowerChange {
        if self.is_max() {
            return PowerChange::AlreadyMax;
        }
        let current = Power(self.0.saturating_add(POWER_STEP).min(MAX_POWER));
        PowerChange::Raised {
            previous: self,
            current,
        }
    }

    /// Label shown next to the gauge, e.g. `"60%"`
    pub fn percent_label(self) -> String {
        format!("{}%", self.0)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Power {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_POWER)
            .map(Power)
            .ok_or(DomainError::InvalidPower {
                value,
                max: MAX_POWER,
            })
    }
}

impl From<Power> for u8 {
    fn from(power: Power) -> u8 {
        power.0
    }
}

/// Result of an increment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerChange {
    /// The gauge moved up
    Raised { previous: Power, current: Power },
    /// The gauge was already full; nothing changed
    AlreadyMax,
}

impl PowerChange {
    /// The new level, if the gauge moved
    pub fn current(&self) -> Option<Power> {
        match self {
            Self::Raised { current, .. } => Some(*current),
            Self::AlreadyMax => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power(v: u8) -> Power {
        Power::new(v).unwrap()
    }

    #[test]
    fn test_new_rejects_over_max() {
        assert!(Power::new(100).is_ok());
        assert_eq!(
            Power::new(101),
            Err(DomainError::InvalidPower {
                value: 101,
                max: 100
            })
        );
    }

    #[test]
    fn test_raise_adds_step() {
        assert_eq!(
            power(50).raise(),
            PowerChange::Raised {
                previous: power(50),
                current: power(60)
            }
        );
    }

    #[test]
    fn test_raise_clamps_at_max() {
        assert_eq!(power(95).raise().current(), Some(Power::MAX));
    }

    #[test]
    fn test_raise_at_max_is_noop() {
        assert_eq!(Power::MAX.raise(), PowerChange::AlreadyMax);
        assert_eq!(Power::MAX.raise().current(), None);
    }

    #[test]
    fn test_five_raises_from_fifty_reach_max() {
        let mut p = power(50);
        for _ in 0..5 {
            p = p.raise().current().unwrap();
        }
        assert_eq!(p, Power::MAX);
        assert_eq!(p.raise(), PowerChange::AlreadyMax);
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(power(60).percent_label(), "60%");
        assert_eq!(Power::ZERO.percent_label(), "0%");
    }

    #[test]
    fn test_serde_validates_range() {
        assert_eq!(serde_json::from_str::<Power>("40").unwrap(), power(40));
        assert!(serde_json::from_str::<Power>("140").is_err());
        assert!(serde_json::from_str::<Power>("-10").is_err());
        assert_eq!(serde_json::to_string(&power(70)).unwrap(), "70");
    }
}
