//! Order record schema: the typed shape of one dataset row.

mod columns;
mod record;
mod types;

pub use columns::{COLUMNS, TIMESTAMP_FORMAT};
pub use record::{minutes_between, Delivery, Fulfillment, OrderRecord};
pub use types::{
    parse_yes_no, yes_no, CancellationReason, CancellationStatus, DeliveryStatus, DeviceType,
    FoodItem, Zone, FOOD_ITEM_SEPARATOR,
};
