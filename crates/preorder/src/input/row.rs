//! One line of the dataset file, and its conversion to and from a typed record.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{PreorderError, Result};
use crate::order::{
    parse_yes_no, yes_no, CancellationReason, CancellationStatus, Delivery, DeliveryStatus,
    DeviceType, FoodItem, Fulfillment, OrderRecord, Zone, FOOD_ITEM_SEPARATOR, TIMESTAMP_FORMAT,
};

/// Timestamp layouts accepted when reading, tried in order.
const TIMESTAMP_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Raw text of one dataset row. Field names are the file's column names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub order_id: String,
    pub customer_id: String,
    pub restaurant_id: String,
    pub order_time: String,
    pub scheduled_time: String,
    pub actual_delivery_time: String,
    pub location_zone: String,
    pub food_items: String,
    pub order_value: String,
    pub delivery_status: String,
    pub cancellation_status: String,
    pub cancellation_reason: String,
    pub rating: String,
    pub coupon_used: String,
    pub device_type: String,
    pub subscription_user: String,
}

impl From<&OrderRecord> for DatasetRow {
    fn from(record: &OrderRecord) -> Self {
        let delivery = record.delivery();
        let food_items = record
            .food_items
            .iter()
            .map(|item| item.label())
            .collect::<Vec<_>>()
            .join(FOOD_ITEM_SEPARATOR);

        Self {
            order_id: record.order_id.clone(),
            customer_id: record.customer_id.clone(),
            restaurant_id: record.restaurant_id.clone(),
            order_time: format_timestamp(record.order_time),
            scheduled_time: format_timestamp(record.scheduled_time),
            actual_delivery_time: delivery
                .map(|d| format_timestamp(d.actual_delivery_time))
                .unwrap_or_default(),
            location_zone: record.location_zone.to_string(),
            food_items,
            order_value: record.order_value.to_string(),
            delivery_status: delivery
                .map(|d| d.delivery_status.to_string())
                .unwrap_or_default(),
            cancellation_status: record.fulfillment.cancellation_status().to_string(),
            cancellation_reason: record
                .fulfillment
                .cancellation_reason()
                .map(|r| r.to_string())
                .unwrap_or_default(),
            rating: delivery.map(|d| d.rating.to_string()).unwrap_or_default(),
            coupon_used: yes_no(record.coupon_used).to_string(),
            device_type: record.device_type.to_string(),
            subscription_user: yes_no(record.subscription_user).to_string(),
        }
    }
}

impl DatasetRow {
    /// Convert to a typed record. `row` is the 1-based data row number used in errors.
    ///
    /// A row without a delivery status is read as cancelled, whatever its
    /// cancellation column says, so it drops out of delivery analysis.
    pub fn into_record(self, row: usize) -> Result<OrderRecord> {
        let cells = Cells { row };

        let cancellation_status: CancellationStatus =
            cells.parse("cancellation_status", &self.cancellation_status)?;
        let delivery_status: Option<DeliveryStatus> =
            cells.parse_optional("delivery_status", &self.delivery_status)?;

        let fulfillment = match delivery_status {
            Some(delivery_status) => {
                if cancellation_status == CancellationStatus::Cancelled {
                    return Err(cells.error(
                        "delivery_status",
                        "cancelled order carries a delivery status",
                    ));
                }
                let actual_delivery_time = cells
                    .timestamp_optional("actual_delivery_time", &self.actual_delivery_time)?
                    .ok_or_else(|| {
                        cells.error("actual_delivery_time", "missing for a delivered order")
                    })?;
                let rating = cells
                    .rating(&self.rating)?
                    .ok_or_else(|| cells.error("rating", "missing for a delivered order"))?;
                Fulfillment::Active(Delivery {
                    actual_delivery_time,
                    delivery_status,
                    rating,
                })
            }
            None => Fulfillment::Cancelled {
                reason: cells.parse_optional::<CancellationReason>(
                    "cancellation_reason",
                    &self.cancellation_reason,
                )?,
            },
        };

        let food_items = self
            .food_items
            .split(',')
            .map(|item| cells.parse::<FoodItem>("food_items", item))
            .collect::<Result<Vec<_>>>()?;

        let order_value = cells.amount("order_value", &self.order_value)?;

        Ok(OrderRecord {
            order_id: cells.required("order_id", self.order_id)?,
            customer_id: cells.required("customer_id", self.customer_id)?,
            restaurant_id: cells.required("restaurant_id", self.restaurant_id)?,
            order_time: cells.timestamp("order_time", &self.order_time)?,
            scheduled_time: cells.timestamp("scheduled_time", &self.scheduled_time)?,
            location_zone: cells.parse::<Zone>("location_zone", &self.location_zone)?,
            food_items,
            order_value,
            coupon_used: cells.yes_no("coupon_used", &self.coupon_used)?,
            device_type: cells.parse::<DeviceType>("device_type", &self.device_type)?,
            subscription_user: cells.yes_no("subscription_user", &self.subscription_user)?,
            fulfillment,
        })
    }
}

/// Format a timestamp the way the dataset file stores it.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse dataset timestamp text. Accepts space or `T` separated date-times,
/// optional fractional seconds, and RFC 3339 (offset dropped).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    TIMESTAMP_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Check if a cell represents a missing value.
pub fn is_null_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nat")
}

/// Cell conversions that report the row and column on failure.
struct Cells {
    row: usize,
}

impl Cells {
    fn error(&self, column: &str, message: &str) -> PreorderError {
        PreorderError::Parse {
            row: self.row,
            column: column.to_string(),
            message: message.to_string(),
        }
    }

    fn required(&self, column: &str, value: String) -> Result<String> {
        if is_null_value(&value) {
            Err(self.error(column, "value is missing"))
        } else {
            Ok(value.trim().to_string())
        }
    }

    fn parse<T>(&self, column: &str, value: &str) -> Result<T>
    where
        T: std::str::FromStr<Err = String>,
    {
        value.parse::<T>().map_err(|e| self.error(column, &e))
    }

    fn parse_optional<T>(&self, column: &str, value: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr<Err = String>,
    {
        if is_null_value(value) {
            Ok(None)
        } else {
            self.parse(column, value).map(Some)
        }
    }

    fn timestamp(&self, column: &str, value: &str) -> Result<NaiveDateTime> {
        self.timestamp_optional(column, value)?
            .ok_or_else(|| self.error(column, "value is missing"))
    }

    fn timestamp_optional(&self, column: &str, value: &str) -> Result<Option<NaiveDateTime>> {
        if is_null_value(value) {
            return Ok(None);
        }
        parse_timestamp(value).map(Some).ok_or_else(|| {
            self.error(column, &format!("'{}' is not a timestamp", value.trim()))
        })
    }

    /// Ratings may be written as integers or as integral floats (`4.0`).
    fn rating(&self, value: &str) -> Result<Option<u8>> {
        if is_null_value(value) {
            return Ok(None);
        }
        let parsed = value
            .trim()
            .parse::<f64>()
            .map_err(|e| self.error("rating", &e.to_string()))?;
        if parsed.fract() != 0.0 || !(1.0..=5.0).contains(&parsed) {
            return Err(self.error(
                "rating",
                &format!("'{}' is not a rating from 1 to 5", value.trim()),
            ));
        }
        Ok(Some(parsed as u8))
    }

    /// Monetary amounts must be finite and nonnegative.
    fn amount(&self, column: &str, value: &str) -> Result<f64> {
        let parsed = value
            .trim()
            .parse::<f64>()
            .map_err(|e| self.error(column, &e.to_string()))?;
        if !parsed.is_finite() || parsed < 0.0 {
            let message = format!("'{}' is not a valid amount", value.trim());
            return Err(self.error(column, &message));
        }
        Ok(parsed)
    }

    fn yes_no(&self, column: &str, value: &str) -> Result<bool> {
        parse_yes_no(value).ok_or_else(|| {
            let message = format!("expected Yes or No, got '{}'", value.trim());
            self.error(column, &message)
        })
    }
}
