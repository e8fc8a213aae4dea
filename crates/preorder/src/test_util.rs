//! Builders for prepared orders in unit tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::features::PreparedOrder;
use crate::order::{Delivery, DeliveryStatus, DeviceType, FoodItem, Fulfillment, OrderRecord, Zone};

/// A delivered order placed at `order_time`, scheduled 60 minutes later.
pub struct OrderBuilder {
    order_time: NaiveDateTime,
    delay: i64,
    zone: Zone,
    coupon: bool,
    value: f64,
    rating: u8,
}

impl OrderBuilder {
    /// Monday 2025-03-03 at 10:00, on time.
    pub fn new() -> Self {
        Self {
            order_time: at(2025, 3, 3, 10),
            delay: 0,
            zone: Zone::A,
            coupon: false,
            value: 300.0,
            rating: 5,
        }
    }

    pub fn placed(mut self, order_time: NaiveDateTime) -> Self {
        self.order_time = order_time;
        self
    }

    pub fn delay(mut self, minutes: i64) -> Self {
        self.delay = minutes;
        self
    }

    pub fn zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    pub fn coupon(mut self, coupon: bool) -> Self {
        self.coupon = coupon;
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    pub fn build(self) -> PreparedOrder {
        let scheduled_time = self.order_time + Duration::minutes(60);
        let record = OrderRecord {
            order_id: "ORD00000".to_string(),
            customer_id: "CUST1".to_string(),
            restaurant_id: "RES1".to_string(),
            order_time: self.order_time,
            scheduled_time,
            location_zone: self.zone,
            food_items: vec![FoodItem::Biryani],
            order_value: self.value,
            coupon_used: self.coupon,
            device_type: DeviceType::Android,
            subscription_user: false,
            fulfillment: Fulfillment::Active(Delivery {
                actual_delivery_time: scheduled_time + Duration::minutes(self.delay),
                delivery_status: if self.delay > 0 {
                    DeliveryStatus::Late
                } else {
                    DeliveryStatus::OnTime
                },
                rating: self.rating,
            }),
        };
        PreparedOrder::from_record(record).expect("active order")
    }
}

/// Timestamp at the top of `hour` on the given date.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid timestamp")
}
