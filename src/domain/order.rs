use serde::{Deserialize, Serialize};

/// Orders of magnitude that get an abbreviated suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    Millions,
    Billions,
    Trillions,
}

impl Order {
    /// Every order, ascending by magnitude.
    pub const ALL: [Order; 3] = [Order::Millions, Order::Billions, Order::Trillions];

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Order::Millions => "M",
            Order::Billions => "B",
            Order::Trillions => "T",
        }
    }

    pub const fn magnitude(self) -> u64 {
        match self {
            Order::Millions => 1_000_000,
            Order::Billions => 1_000_000_000,
            Order::Trillions => 1_000_000_000_000,
        }
    }
}
