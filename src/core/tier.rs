use crate::domain::input::whole_from_f64;
use crate::domain::order::Order;
use crate::utils::error::{PrettyError, Result};

/// One order-of-magnitude bracket: an abbreviation and the divisor it stands for.
///
/// A tier covers `magnitude..=magnitude * 1000 - 1` on the absolute value, so
/// consecutive tiers meet without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeTier {
    abbreviation: &'static str,
    magnitude: u64,
}

impl MagnitudeTier {
    pub const fn new(order: Order) -> Self {
        Self {
            abbreviation: order.abbreviation(),
            magnitude: order.magnitude(),
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    pub fn magnitude(&self) -> u64 {
        self.magnitude
    }

    /// Checks whether the absolute value of `value` falls in this tier.
    pub fn is_in_range(&self, value: f64) -> Result<bool> {
        if !value.is_finite() {
            return Err(PrettyError::invalid_argument(
                "MagnitudeTier::is_in_range expected a finite number",
            ));
        }
        // Both bounds stay below 2^53, so they are exact as f64.
        let abs = value.abs();
        let lower = self.magnitude as f64;
        let upper = (self.magnitude * 1000 - 1) as f64;
        Ok(abs >= lower && abs <= upper)
    }

    /// Rounds `value` to one decimal place of this tier and appends the abbreviation.
    pub fn round(&self, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(PrettyError::invalid_argument(
                "MagnitudeTier::round expected a finite number",
            ));
        }
        if !self.is_in_range(value)? {
            return Err(self.out_of_range());
        }
        self.round_whole(whole_from_f64(value)?)
    }

    pub fn contains(&self, value: i128) -> bool {
        let magnitude = u128::from(self.magnitude);
        let abs = value.unsigned_abs();
        abs >= magnitude && abs <= magnitude * 1000 - 1
    }

    /// Integer form of [`round`](Self::round).
    ///
    /// Rounds half away from zero in exact arithmetic: the tenths are
    /// `(|value| * 10 + magnitude / 2) / magnitude`. Every rounding threshold
    /// is a whole number, so truncated inputs round the same as the originals.
    pub fn round_whole(&self, value: i128) -> Result<String> {
        if !self.contains(value) {
            return Err(self.out_of_range());
        }

        let magnitude = u128::from(self.magnitude);
        let tenths = (value.unsigned_abs() * 10 + magnitude / 2) / magnitude;
        let units = tenths / 10;
        let decimal = tenths % 10;
        let sign = if value < 0 { "-" } else { "" };

        let formatted = if decimal == 0 {
            format!("{sign}{units}")
        } else {
            format!("{sign}{units}.{decimal}")
        };
        Ok(format!("{formatted}{}", self.abbreviation.to_uppercase()))
    }

    fn out_of_range(&self) -> PrettyError {
        PrettyError::invalid_argument(format!(
            "MagnitudeTier::round expected a value within {}..={}",
            self.magnitude,
            u128::from(self.magnitude) * 1000 - 1
        ))
    }
}

impl From<Order> for MagnitudeTier {
    fn from(order: Order) -> Self {
        MagnitudeTier::new(order)
    }
}
