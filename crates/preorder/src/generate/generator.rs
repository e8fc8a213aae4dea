//! Synthetic order generation.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use log::debug;

use crate::error::Result;
use crate::order::{
    CancellationReason, Delivery, DeliveryStatus, DeviceType, FoodItem, Fulfillment, OrderRecord,
    Zone,
};

use super::config::GeneratorConfig;

/// Scheduled time is this many minutes after the order, inclusive.
const LEAD_MINUTES: (i64, i64) = (30, 120);

/// Actual delivery is this many minutes after the scheduled time, inclusive.
const DELIVERY_OFFSET_MINUTES: (i64, i64) = (-10, 40);

/// Order value bounds before rounding to cents.
const ORDER_VALUE_RANGE: (f64, f64) = (100.0, 800.0);

/// Most items a single order can contain.
const MAX_FOOD_ITEMS: usize = 3;

/// Produces synthetic order records from a seeded random stream.
pub struct OrderGenerator {
    config: GeneratorConfig,
    rng: fastrand::Rng,
    year_start: NaiveDateTime,
    reference_time: NaiveDateTime,
}

impl OrderGenerator {
    /// Create a generator with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let reference_time = config
            .reference_time
            .unwrap_or_else(|| Local::now().naive_local());
        let year_start = NaiveDate::from_ymd_opt(reference_time.year(), 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or(reference_time);

        Ok(Self {
            rng: fastrand::Rng::with_seed(config.seed),
            config,
            year_start,
            reference_time,
        })
    }

    /// Generate `n` records with ids `ORD00000` onward.
    pub fn generate(&mut self, n: usize) -> Vec<OrderRecord> {
        debug!(
            "Generating {} orders (seed {}, window {} to {})",
            n, self.config.seed, self.year_start, self.reference_time
        );
        (0..n).map(|i| self.generate_one(i)).collect()
    }

    /// Generate the record with sequence index `index`.
    fn generate_one(&mut self, index: usize) -> OrderRecord {
        let order_time = self.order_time();
        let scheduled_time =
            order_time + Duration::minutes(self.rng.i64(LEAD_MINUTES.0..=LEAD_MINUTES.1));
        let actual_delivery_time = scheduled_time
            + Duration::minutes(
                self.rng
                    .i64(DELIVERY_OFFSET_MINUTES.0..=DELIVERY_OFFSET_MINUTES.1),
            );
        let is_cancelled = self.rng.f64() < self.config.cancellation_rate;

        // Compared for every order; cancelled orders drop it below.
        let delivery_status = if actual_delivery_time > scheduled_time {
            DeliveryStatus::Late
        } else {
            DeliveryStatus::OnTime
        };

        let customer_id = format!("CUST{}", self.rng.u32(1..=self.config.customer_count));
        let restaurant_id = format!("RES{}", self.rng.u32(1..=self.config.restaurant_count));
        let location_zone = self.pick(Zone::ALL);
        let item_count = self.rng.usize(1..=MAX_FOOD_ITEMS);
        let food_items = (0..item_count).map(|_| self.pick(FoodItem::ALL)).collect();
        let order_value = self.order_value();

        let fulfillment = if is_cancelled {
            Fulfillment::Cancelled {
                reason: self.cancellation_reason(),
            }
        } else {
            Fulfillment::Active(Delivery {
                actual_delivery_time,
                delivery_status,
                rating: self.rng.u8(1..=5),
            })
        };

        OrderRecord {
            order_id: OrderRecord::format_order_id(index),
            customer_id,
            restaurant_id,
            order_time,
            scheduled_time,
            location_zone,
            food_items,
            order_value,
            coupon_used: self.rng.bool(),
            device_type: self.pick(DeviceType::ALL),
            subscription_user: self.rng.bool(),
            fulfillment,
        }
    }

    /// A whole-second time between January 1st and the reference time.
    fn order_time(&mut self) -> NaiveDateTime {
        let span = (self.reference_time - self.year_start).num_seconds().max(0);
        self.year_start + Duration::seconds(self.rng.i64(0..=span))
    }

    /// Uniform value in the order value range, rounded to cents.
    fn order_value(&mut self) -> f64 {
        let (low, high) = ORDER_VALUE_RANGE;
        let raw = low + self.rng.f64() * (high - low);
        ((raw * 100.0).round() / 100.0).clamp(low, high)
    }

    /// One of the four reasons or no reason, all equally likely.
    fn cancellation_reason(&mut self) -> Option<CancellationReason> {
        let pick = self.rng.usize(0..=CancellationReason::ALL.len());
        pick.checked_sub(1).map(|i| CancellationReason::ALL[i])
    }

    fn pick<T: Copy>(&mut self, values: &[T]) -> T {
        values[self.rng.usize(..values.len())]
    }
}

/// Generate `n` records with the given configuration.
pub fn generate(n: usize, config: GeneratorConfig) -> Result<Vec<OrderRecord>> {
    Ok(OrderGenerator::with_config(config)?.generate(n))
}
