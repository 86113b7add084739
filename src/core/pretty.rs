use crate::core::tier::MagnitudeTier;
use crate::domain::input::PrettyInput;
use crate::domain::order::Order;
use crate::utils::error::Result;

/// The frozen tier list, ascending by magnitude.
pub static TIERS: [MagnitudeTier; 3] = [
    MagnitudeTier::new(Order::Millions),
    MagnitudeTier::new(Order::Billions),
    MagnitudeTier::new(Order::Trillions),
];

/// Turns numbers into short, human readable strings such as `1.4M`.
///
/// Holds no mutable state; one instance can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct PrettyNumbers {
    tiers: &'static [MagnitudeTier],
}

impl PrettyNumbers {
    pub fn new() -> Self {
        Self { tiers: &TIERS }
    }

    pub fn tiers(&self) -> &[MagnitudeTier] {
        self.tiers
    }

    /// First tier whose range holds `value`, if any.
    pub fn tier_for(&self, value: i128) -> Option<&MagnitudeTier> {
        self.tiers.iter().find(|tier| tier.contains(value))
    }

    /// Formats `input` with the suffix of the matching tier.
    ///
    /// Values below one million (or at and above one quadrillion) come back
    /// as plain integers with any fractional part dropped.
    ///
    /// ```
    /// use pretty_numbers::PrettyNumbers;
    ///
    /// let pn = PrettyNumbers::new();
    /// assert_eq!(pn.pretty(1_350_000).unwrap(), "1.4M");
    /// assert_eq!(pn.pretty("-99000000000").unwrap(), "-99B");
    /// assert!(pn.pretty("25,000").is_err());
    /// ```
    pub fn pretty<'a>(&self, input: impl Into<PrettyInput<'a>>) -> Result<String> {
        let value = input.into().to_whole()?;

        match self.tier_for(value) {
            Some(tier) => {
                tracing::trace!(value = %value, tier = tier.abbreviation(), "selected magnitude tier");
                tier.round_whole(value)
            }
            None => {
                tracing::trace!(value = %value, "no magnitude tier matched");
                Ok(value.to_string())
            }
        }
    }
}

impl Default for PrettyNumbers {
    fn default() -> Self {
        Self::new()
    }
}
