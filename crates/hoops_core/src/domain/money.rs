//! Fixed-point currency (USD) rounded half-up to cents.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const SCALE: u32 = 2;

/// Immutable money value. Arithmetic returns new values, always re-rounded to 2 dp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Self {
        let mut rounded = amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        // Keep the scale fixed so 5 and 5.00 hash and print alike.
        rounded.rescale(SCALE);
        Money(rounded)
    }

    /// In-crate shorthand for finite literals such as defaults. Callers with
    /// runtime input use [`Money::try_of`], which reports non-finite values.
    pub(crate) fn of(dollars: f64) -> Self {
        debug_assert!(dollars.is_finite(), "Money::of called with {}", dollars);
        match Self::try_of(dollars) {
            Ok(money) => money,
            Err(err) => {
                tracing::warn!("{}; using $0.00", err);
                Money::zero()
            }
        }
    }

    /// Interprets `dollars` by its shortest decimal representation, so
    /// `19.995` is 20.00 rather than the binary 19.99499...
    pub fn try_of(dollars: f64) -> Result<Self, ValidationError> {
        if !dollars.is_finite() {
            return Err(ValidationError::InvalidAmount(dollars.to_string()));
        }
        Decimal::from_str(&dollars.to_string())
            .map(Money::new)
            .map_err(|_| ValidationError::InvalidAmount(dollars.to_string()))
    }

    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, SCALE))
    }

    pub fn zero() -> Self {
        Money::from_cents(0)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn plus(self, other: Money) -> Money {
        Money::new(self.0 + other.0)
    }

    pub fn minus(self, other: Money) -> Money {
        Money::new(self.0 - other.0)
    }

    pub fn gte(&self, other: &Money) -> bool {
        self >= other
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Clamp at zero.
    pub fn floor_zero(self) -> Money {
        if self.is_negative() {
            Money::zero()
        } else {
            self
        }
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('$').replace(',', "");
        Decimal::from_str(&trimmed)
            .map(Money::new)
            .map_err(|_| ValidationError::InvalidAmount(s.to_string()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(Money::of(19.995), Money::from_cents(2000));
        assert_eq!(Money::of(19.994), Money::from_cents(1999));
        assert_eq!(Money::of(0.125), Money::from_cents(13));
        assert_eq!(Money::of(-0.125), Money::from_cents(-13));
    }

    #[test]
    fn test_equality_ignores_textual_scale() {
        let a = Money::new(Decimal::new(5, 0));
        let b = Money::new(Decimal::new(500, 2));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "$5.00");
    }

    #[test]
    fn test_arithmetic_returns_new_values() {
        let a = Money::of(10.10);
        let b = Money::of(0.05);
        assert_eq!(a.plus(b), Money::of(10.15));
        assert_eq!(a.minus(b), Money::of(10.05));
        assert_eq!(a, Money::of(10.10));
    }

    #[test]
    fn test_ordering() {
        assert!(Money::of(140_000_000.0).gte(&Money::of(139_999_999.99)));
        assert!(Money::of(1.0).gte(&Money::of(1.0)));
        assert!(!Money::of(0.99).gte(&Money::of(1.0)));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(Money::try_of(f64::NAN), Err(ValidationError::InvalidAmount("NaN".to_string())));
        assert!(Money::try_of(f64::INFINITY).is_err());
        assert!(Money::try_of(f64::NEG_INFINITY).is_err());
        assert_eq!(Money::try_of(19.995), Ok(Money::from_cents(2000)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("$1,250.505".parse::<Money>(), Ok(Money::from_cents(125051)));
        assert!("twelve".parse::<Money>().is_err());
    }

    #[test]
    fn test_deserialize_rounds() {
        let money: Money = serde_json::from_str("\"10.005\"").unwrap();
        assert_eq!(money, Money::from_cents(1001));
        assert_eq!(serde_json::to_string(&money).unwrap(), "\"10.01\"");
    }

    #[test]
    fn test_floor_zero() {
        assert_eq!(Money::of(-3.0).floor_zero(), Money::zero());
        assert_eq!(Money::of(3.0).floor_zero(), Money::of(3.0));
    }

    proptest! {
        #[test]
        fn prop_plus_minus_round_trip(a in -1.0e9f64..1.0e9f64, b in -1.0e9f64..1.0e9f64) {
            let ma = Money::of(a);
            let mb = Money::of(b);
            prop_assert_eq!(ma.plus(mb).minus(mb), ma);
        }

        #[test]
        fn prop_always_two_decimal_places(cents in -10_000_000_000i64..10_000_000_000i64, extra in 0u32..10) {
            let raw = Decimal::new(cents * 10 + extra as i64, 3);
            let money = Money::new(raw);
            prop_assert_eq!(money.amount().scale(), 2);
        }
    }
}
