//! Column names of the dataset file, in the order they are written.

/// Header of the dataset file. The loader requires every one of these.
pub const COLUMNS: [&str; 16] = [
    "order_id",
    "customer_id",
    "restaurant_id",
    "order_time",
    "scheduled_time",
    "actual_delivery_time",
    "location_zone",
    "food_items",
    "order_value",
    "delivery_status",
    "cancellation_status",
    "cancellation_reason",
    "rating",
    "coupon_used",
    "device_type",
    "subscription_user",
];

/// Format used when writing timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
