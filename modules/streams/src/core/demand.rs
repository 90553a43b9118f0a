//! Demand values exchanged between receivers and subscriptions.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use super::StreamError;


/// Demand signal used for backpressure.
///
/// `Unbounded` dominates every arithmetic operation and compares greater than any finite
/// demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Demand {
  /// Finite demand with remaining count.
  Finite(u64),
  /// Unbounded demand.
  Unbounded,
}

impl Demand {
  /// No demand at all.
  pub const NONE: Self = Self::Finite(0);

  /// Creates a finite demand.
  #[must_use]
  pub const fn finite(count: u64) -> Self {
    Self::Finite(count)
  }

  /// Returns `true` if the demand is unbounded.
  #[must_use]
  pub const fn is_unbounded(&self) -> bool {
    matches!(self, Self::Unbounded)
  }

  /// Returns `true` if there is remaining demand.
  #[must_use]
  pub const fn has_demand(&self) -> bool {
    matches!(self, Self::Unbounded) || matches!(self, Self::Finite(remaining) if *remaining > 0)
  }

  /// Returns the remaining finite demand, if any.
  #[must_use]
  pub const fn remaining(&self) -> Option<u64> {
    match self {
      | Self::Finite(value) => Some(*value),
      | Self::Unbounded => None,
    }
  }

  /// Adds two demands, saturating to [`Demand::Unbounded`] on overflow.
  #[must_use]
  pub const fn saturating_add(self, other: Self) -> Self {
    match (self, other) {
      | (Self::Finite(left), Self::Finite(right)) => match left.checked_add(right) {
        | Some(total) => Self::Finite(total),
        | None => Self::Unbounded,
      },
      | _ => Self::Unbounded,
    }
  }

  /// Subtracts `other`, never going below zero.
  ///
  /// Removing anything from an unbounded demand leaves it unbounded, while removing an
  /// unbounded amount from a finite demand leaves nothing.
  #[must_use]
  pub const fn saturating_sub(self, other: Self) -> Self {
    match (self, other) {
      | (Self::Unbounded, Self::Finite(_)) => Self::Unbounded,
      | (_, Self::Unbounded) => Self::NONE,
      | (Self::Finite(left), Self::Finite(right)) => Self::Finite(left.saturating_sub(right)),
    }
  }
}

impl Default for Demand {
  fn default() -> Self {
    Self::NONE
  }
}

impl From<u64> for Demand {
  fn from(count: u64) -> Self {
    Self::Finite(count)
  }
}

impl TryFrom<i64> for Demand {
  type Error = StreamError;

  fn try_from(count: i64) -> Result<Self, Self::Error> {
    u64::try_from(count).map(Self::Finite).map_err(|_| StreamError::InvalidDemand)
  }
}

impl Add for Demand {
  type Output = Self;

  fn add(self, rhs: Self) -> Self::Output {
    self.saturating_add(rhs)
  }
}

impl AddAssign for Demand {
  fn add_assign(&mut self, rhs: Self) {
    *self = self.saturating_add(rhs);
  }
}

impl Sub for Demand {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self::Output {
    self.saturating_sub(rhs)
  }
}

impl SubAssign for Demand {
  fn sub_assign(&mut self, rhs: Self) {
    *self = self.saturating_sub(rhs);
  }
}
