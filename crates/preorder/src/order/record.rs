//! The typed order record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::types::{
    CancellationReason, CancellationStatus, DeliveryStatus, DeviceType, FoodItem, Zone,
};

/// Delivery outcome of an order that was not cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub actual_delivery_time: NaiveDateTime,
    pub delivery_status: DeliveryStatus,
    /// Customer rating, 1 to 5.
    pub rating: u8,
}

/// Whether an order was delivered or cancelled.
///
/// The delivery time, delivery status, and rating only exist for active
/// orders, so they live inside the `Active` variant rather than as
/// independent optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Fulfillment {
    Active(Delivery),
    Cancelled { reason: Option<CancellationReason> },
}

impl Fulfillment {
    /// Returns true for a cancelled order.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Fulfillment::Cancelled { .. })
    }

    /// The delivery outcome, if the order was not cancelled.
    pub fn delivery(&self) -> Option<&Delivery> {
        match self {
            Fulfillment::Active(delivery) => Some(delivery),
            Fulfillment::Cancelled { .. } => None,
        }
    }

    /// The cancellation reason, if the order was cancelled with one.
    pub fn cancellation_reason(&self) -> Option<CancellationReason> {
        match self {
            Fulfillment::Active(_) => None,
            Fulfillment::Cancelled { reason } => *reason,
        }
    }

    /// The dataset's cancellation status label for this fulfillment.
    pub fn cancellation_status(&self) -> CancellationStatus {
        if self.is_cancelled() {
            CancellationStatus::Cancelled
        } else {
            CancellationStatus::NotCancelled
        }
    }
}

/// One synthetic food pre-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_id: String,
    pub restaurant_id: String,
    pub order_time: NaiveDateTime,
    pub scheduled_time: NaiveDateTime,
    pub location_zone: Zone,
    /// Between one and three catalog items, repeats allowed.
    pub food_items: Vec<FoodItem>,
    pub order_value: f64,
    pub coupon_used: bool,
    pub device_type: DeviceType,
    pub subscription_user: bool,
    pub fulfillment: Fulfillment,
}

impl OrderRecord {
    /// Format an order id from its zero-based sequence index.
    ///
    /// Pads to five digits; larger indices widen the id.
    pub fn format_order_id(index: usize) -> String {
        format!("ORD{:05}", index)
    }

    /// Returns true for a cancelled order.
    pub fn is_cancelled(&self) -> bool {
        self.fulfillment.is_cancelled()
    }

    /// Delivery outcome, if the order was not cancelled.
    pub fn delivery(&self) -> Option<&Delivery> {
        self.fulfillment.delivery()
    }

    /// Minutes between placing the order and its scheduled time.
    pub fn lead_minutes(&self) -> f64 {
        minutes_between(self.order_time, self.scheduled_time)
    }
}

/// Signed number of minutes from `start` to `end`, with sub-minute precision.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_order_id_padding() {
        assert_eq!(OrderRecord::format_order_id(0), "ORD00000");
        assert_eq!(OrderRecord::format_order_id(42), "ORD00042");
        assert_eq!(OrderRecord::format_order_id(123_456), "ORD123456");
    }

    #[test]
    fn test_minutes_between() {
        assert_eq!(minutes_between(at(10, 0, 0), at(11, 30, 0)), 90.0);
        assert_eq!(minutes_between(at(10, 0, 0), at(9, 50, 0)), -10.0);
        assert_eq!(minutes_between(at(10, 0, 0), at(10, 0, 30)), 0.5);
    }

    #[test]
    fn test_fulfillment_accessors() {
        let active = Fulfillment::Active(Delivery {
            actual_delivery_time: at(12, 0, 0),
            delivery_status: DeliveryStatus::Late,
            rating: 4,
        });
        assert!(!active.is_cancelled());
        assert_eq!(active.cancellation_status(), CancellationStatus::NotCancelled);
        assert_eq!(active.delivery().map(|d| d.rating), Some(4));

        let cancelled = Fulfillment::Cancelled {
            reason: Some(CancellationReason::OutOfStock),
        };
        assert!(cancelled.is_cancelled());
        assert!(cancelled.delivery().is_none());
        assert_eq!(cancelled.cancellation_reason(), Some(CancellationReason::OutOfStock));
    }
}
