use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Minor units per currency unit (two decimal places).
const SCALE: i64 = 100;

/// Integer digits beyond which an amount cannot fit in `i64` minor units.
const MAX_INTEGER_DIGITS: i64 = 18;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value held as a count of minor units (paise, cents).
///
/// The operator impls (`+`, `-`, `+=`, `-=`) follow `i64` overflow rules;
/// use `checked_add`/`checked_sub` where operands are not already bounded.
///
/// Balances and ledger amounts never pass through binary floating point, so
/// comparisons such as `amount > balance` are exact and a successful
/// withdrawal can never leave the balance a fraction below zero.
///
/// # Examples
/// ```
/// use atm_session::common::money::Money;
///
/// let amount: Money = "2500.5".parse().unwrap();
/// assert_eq!(amount.as_minor_units(), 250050);
/// assert_eq!(amount.to_string_2dp(), "2500.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn from_minor_units(value: i64) -> Self {
        Money(value)
    }

    /// Whole currency units, e.g. `Money::from_major(10)` is `10.00`.
    ///
    /// Panics if `units` does not fit in minor units; see [`Money::checked_from_major`].
    pub fn from_major(units: i64) -> Self {
        match Self::checked_from_major(units) {
            Some(money) => money,
            None => panic!("{units} major units overflow Money"),
        }
    }

    pub fn checked_from_major(units: i64) -> Option<Self> {
        units.checked_mul(SCALE).map(Money)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Bound the magnitude from digit count and exponent before scaling,
        // so text like `1e50000000` never expands into a huge integer.
        let (_, exponent) = bd.as_bigint_and_exponent();
        let integer_digits = (bd.digits() as i64).saturating_sub(exponent);
        if integer_digits > MAX_INTEGER_DIGITS {
            return Err(ParseBigDecimalError::Other("amount overflow".into()));
        }
        // below 0.001, which rounds to zero minor units
        if integer_digits < -2 {
            return Ok(Money(0));
        }

        // Scale to minor units (2 decimal places)
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Result of turning caller-supplied amount text into a number.
///
/// The input layer produces this; the account operations consume it, so a
/// non-numeric entry reaches the core as `Invalid` instead of a panic or a
/// stringly error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedAmount {
    Amount(Money),
    Invalid,
}

impl ParsedAmount {
    pub fn parse(text: &str) -> Self {
        match text.parse::<Money>() {
            Ok(amount) => ParsedAmount::Amount(amount),
            Err(_) => ParsedAmount::Invalid,
        }
    }
}

impl From<Money> for ParsedAmount {
    fn from(amount: Money) -> Self {
        ParsedAmount::Amount(amount)
    }
}
