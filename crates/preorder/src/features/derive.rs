//! Time-based features derived from delivered orders.

use std::path::Path;

use chrono::{Datelike, Month, Timelike, Weekday};
use log::debug;

use crate::error::Result;
use crate::input::{load_dataset, SourceMetadata};
use crate::order::{minutes_between, Delivery, OrderRecord};

use super::calendar::is_weekend;

/// Features computed from an order's timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFeatures {
    /// Minutes from placing the order to its scheduled time.
    pub pre_order_lead_minutes: f64,
    /// Minutes delivered after the scheduled time; early deliveries count as 0.
    pub delay_minutes: f64,
    /// Hour of day the order was placed, 0-23.
    pub hour: u32,
    pub day_of_week: Weekday,
    pub month: Month,
    pub is_weekend: bool,
}

impl DerivedFeatures {
    /// Derive features for an order and its delivery.
    pub fn derive(record: &OrderRecord, delivery: &Delivery) -> Self {
        let day_of_week = record.order_time.weekday();
        // month() is 1-based and always valid
        let month = Month::try_from(record.order_time.month() as u8).unwrap_or(Month::January);

        Self {
            pre_order_lead_minutes: record.lead_minutes(),
            delay_minutes: minutes_between(record.scheduled_time, delivery.actual_delivery_time)
                .max(0.0),
            hour: record.order_time.hour(),
            day_of_week,
            month,
            is_weekend: is_weekend(day_of_week),
        }
    }
}

/// A delivered order with its derived features. The stored record is left as read.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedOrder {
    pub record: OrderRecord,
    pub delivery: Delivery,
    pub features: DerivedFeatures,
}

impl PreparedOrder {
    /// Prepare a record, or `None` if it was cancelled.
    pub fn from_record(record: OrderRecord) -> Option<Self> {
        let delivery = record.delivery()?.clone();
        let features = DerivedFeatures::derive(&record, &delivery);
        Some(Self {
            record,
            delivery,
            features,
        })
    }

    pub fn delay_minutes(&self) -> f64 {
        self.features.delay_minutes
    }
}

/// Delivered orders ready for analysis.
#[derive(Debug, Clone)]
pub struct PreparedTable {
    /// Source file, when loaded from disk.
    pub source: Option<SourceMetadata>,
    pub orders: Vec<PreparedOrder>,
    /// Rows before cancelled orders were removed.
    pub total_rows: usize,
    /// Rows removed because they had no delivery status.
    pub excluded_rows: usize,
}

impl PreparedTable {
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Drop cancelled records and derive features for the rest.
pub fn prepare(records: Vec<OrderRecord>) -> PreparedTable {
    let total_rows = records.len();
    let orders: Vec<PreparedOrder> = records
        .into_iter()
        .filter_map(PreparedOrder::from_record)
        .collect();
    let excluded_rows = total_rows - orders.len();
    debug!(
        "Prepared {} delivered orders ({} excluded)",
        orders.len(),
        excluded_rows
    );

    PreparedTable {
        source: None,
        orders,
        total_rows,
        excluded_rows,
    }
}

/// Load a dataset file and prepare it for analysis.
pub fn load_and_prepare(path: impl AsRef<Path>) -> Result<PreparedTable> {
    let dataset = load_dataset(path)?;
    let mut table = prepare(dataset.records);
    table.source = Some(dataset.source);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{DeliveryStatus, DeviceType, FoodItem, Fulfillment, Zone};
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn saturday_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 12)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn record(lead: i64, offset: Option<i64>) -> OrderRecord {
        let order_time = saturday_noon();
        let scheduled_time = order_time + Duration::minutes(lead);
        let fulfillment = match offset {
            Some(minutes) => Fulfillment::Active(Delivery {
                actual_delivery_time: scheduled_time + Duration::minutes(minutes),
                delivery_status: if minutes > 0 {
                    DeliveryStatus::Late
                } else {
                    DeliveryStatus::OnTime
                },
                rating: 3,
            }),
            None => Fulfillment::Cancelled { reason: None },
        };
        OrderRecord {
            order_id: "ORD00000".to_string(),
            customer_id: "CUST1".to_string(),
            restaurant_id: "RES1".to_string(),
            order_time,
            scheduled_time,
            location_zone: Zone::A,
            food_items: vec![FoodItem::Noodles],
            order_value: 199.99,
            coupon_used: false,
            device_type: DeviceType::Web,
            subscription_user: true,
            fulfillment,
        }
    }

    #[test]
    fn test_features_from_late_order() {
        let prepared = PreparedOrder::from_record(record(45, Some(12))).unwrap();
        let f = &prepared.features;
        assert_eq!(f.pre_order_lead_minutes, 45.0);
        assert_eq!(f.delay_minutes, 12.0);
        assert_eq!(f.hour, 12);
        assert_eq!(f.day_of_week, Weekday::Sat);
        assert_eq!(f.month, Month::July);
        assert!(f.is_weekend);
    }

    #[test]
    fn test_early_delivery_clamped_to_zero() {
        let prepared = PreparedOrder::from_record(record(60, Some(-10))).unwrap();
        assert_eq!(prepared.delay_minutes(), 0.0);
    }

    #[test]
    fn test_prepare_excludes_cancelled() {
        let records = vec![
            record(30, Some(5)),
            record(30, None),
            record(90, Some(0)),
            record(120, None),
        ];
        let table = prepare(records);
        assert_eq!(table.total_rows, 4);
        assert_eq!(table.excluded_rows, 2);
        assert_eq!(table.len(), 2);
    }
}
