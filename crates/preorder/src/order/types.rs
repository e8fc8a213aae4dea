//! Categorical value types of an order record.
//!
//! Every categorical column has a fixed vocabulary. Each enum carries the
//! exact label written to the dataset file, so parsing and formatting are
//! symmetric and the CSV text never leaks into analysis code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Implements label lookup, `Display`, and `FromStr` for a categorical enum.
macro_rules! categorical {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// All values in canonical order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label used in the dataset file.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == trimmed)
                    .ok_or_else(|| format!("unknown {} value '{}'", stringify!($name), trimmed))
            }
        }
    };
}

/// Delivery zone of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "Zone A")]
    A,
    #[serde(rename = "Zone B")]
    B,
    #[serde(rename = "Zone C")]
    C,
    #[serde(rename = "Zone D")]
    D,
}

categorical!(Zone {
    A => "Zone A",
    B => "Zone B",
    C => "Zone C",
    D => "Zone D",
});

/// Items on the restaurant menu catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodItem {
    Pizza,
    Burger,
    Pasta,
    Biryani,
    Salad,
    Fries,
    Noodles,
    Tacos,
}

categorical!(FoodItem {
    Pizza => "Pizza",
    Burger => "Burger",
    Pasta => "Pasta",
    Biryani => "Biryani",
    Salad => "Salad",
    Fries => "Fries",
    Noodles => "Noodles",
    Tacos => "Tacos",
});

/// Separator between items in the `food_items` column.
pub const FOOD_ITEM_SEPARATOR: &str = ", ";

/// Outcome of a delivered order relative to its scheduled time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "On-Time")]
    OnTime,
    Late,
}

categorical!(DeliveryStatus {
    OnTime => "On-Time",
    Late => "Late",
});

/// Whether an order was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CancellationStatus {
    Cancelled,
    #[serde(rename = "Not Cancelled")]
    NotCancelled,
}

categorical!(CancellationStatus {
    Cancelled => "Cancelled",
    NotCancelled => "Not Cancelled",
});

/// Stated reason for a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CancellationReason {
    #[serde(rename = "User changed mind")]
    UserChangedMind,
    #[serde(rename = "Late delivery")]
    LateDelivery,
    #[serde(rename = "Out of stock")]
    OutOfStock,
    #[serde(rename = "Wrong address")]
    WrongAddress,
}

categorical!(CancellationReason {
    UserChangedMind => "User changed mind",
    LateDelivery => "Late delivery",
    OutOfStock => "Out of stock",
    WrongAddress => "Wrong address",
});

/// Device the order was placed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    Android,
    #[serde(rename = "iOS")]
    Ios,
    Web,
}

categorical!(DeviceType {
    Android => "Android",
    Ios => "iOS",
    Web => "Web",
});

/// Format a flag as the dataset's `Yes`/`No` text.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Parse the dataset's `Yes`/`No` text.
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim() {
        "Yes" => Some(true),
        "No" => Some(false),
        _ => None,
    }
}
