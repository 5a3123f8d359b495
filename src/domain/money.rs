use crate::error::TripError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// One cent.
///
/// The single threshold below which a balance or a transfer counts as settled.
/// It decides debtor/creditor membership, whether a transfer is emitted and
/// when a matching cursor advances.
pub const EPSILON: Decimal = dec!(0.01);

/// Largest amount a single expense may carry.
///
/// Keeps every balance and total far inside `Decimal`'s range, so folding
/// expenses cannot overflow.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Rounds to currency precision, midpoints away from zero. Never yields `-0`.
pub fn round_to_cents(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// A non-negative monetary amount attached to an expense or a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, TripError> {
        if value < Decimal::ZERO {
            Err(TripError::ValidationError(format!(
                "Amount must not be negative, got {value}"
            )))
        } else if value > MAX_AMOUNT {
            Err(TripError::ValidationError(format!(
                "Amount must not exceed {MAX_AMOUNT}, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Splits the amount evenly across `parts` shares without rounding.
    ///
    /// Returns `None` for zero parts.
    pub fn share(&self, parts: usize) -> Option<Balance> {
        if parts == 0 {
            return None;
        }
        Some(Balance(self.0 / Decimal::from(parts)))
    }

    pub fn rounded(&self) -> Self {
        Self(round_to_cents(self.0))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = TripError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", round_to_cents(self.0))
    }
}

/// A signed net position: positive when the participant is owed money,
/// negative when they owe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The size of the position as an amount. Not bound by `MAX_AMOUNT`,
    /// since a balance may aggregate many expenses.
    pub fn magnitude(&self) -> Amount {
        Amount(self.0.abs())
    }

    /// True when the balance lies strictly inside the one-cent band around zero.
    pub fn is_settled(&self) -> bool {
        self.0.abs() < EPSILON
    }

    pub fn is_debt(&self) -> bool {
        self.0 < Decimal::ZERO && !self.is_settled()
    }

    pub fn is_credit(&self) -> bool {
        self.0 > Decimal::ZERO && !self.is_settled()
    }

    pub fn rounded(&self) -> Self {
        Self(round_to_cents(self.0))
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Balance {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Balance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", round_to_cents(self.0))
    }
}
