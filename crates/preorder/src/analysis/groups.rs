//! Category counts and grouped means.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::features::PreparedOrder;
use crate::order::{DeliveryStatus, Zone};

/// Count orders per category, most frequent first.
///
/// `order` lists every category in canonical order; ties keep that order and
/// categories with no orders are omitted.
pub fn value_counts<K, F>(orders: &[PreparedOrder], order: &[K], key: F) -> IndexMap<K, usize>
where
    K: Copy + Eq + Hash,
    F: Fn(&PreparedOrder) -> K,
{
    let mut counts: IndexMap<K, usize> = order.iter().map(|k| (*k, 0)).collect();
    for o in orders {
        *counts.entry(key(o)).or_insert(0) += 1;
    }
    counts.retain(|_, count| *count > 0);
    // Stable sort keeps canonical order among ties
    counts.sort_by(|_, a, _, b| b.cmp(a));
    counts
}

/// Mean of `value` per category, in canonical order. Categories with no
/// orders are omitted.
pub fn grouped_mean<K, F, V>(
    orders: &[PreparedOrder],
    order: &[K],
    key: F,
    value: V,
) -> IndexMap<K, f64>
where
    K: Copy + Eq + Hash,
    F: Fn(&PreparedOrder) -> K,
    V: Fn(&PreparedOrder) -> f64,
{
    let mut sums: IndexMap<K, (f64, usize)> = order.iter().map(|k| (*k, (0.0, 0))).collect();
    for o in orders {
        let entry = sums.entry(key(o)).or_insert((0.0, 0));
        entry.0 += value(o);
        entry.1 += 1;
    }
    sums.into_iter()
        .filter(|(_, (_, n))| *n > 0)
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// Frequency of each delivery status.
pub fn delivery_status_counts(orders: &[PreparedOrder]) -> IndexMap<DeliveryStatus, usize> {
    value_counts(orders, DeliveryStatus::ALL, |o| o.delivery.delivery_status)
}

/// Number of orders per rating, 1 through 5, ratings without orders included as 0.
pub fn rating_counts(orders: &[PreparedOrder]) -> IndexMap<u8, usize> {
    let mut counts: IndexMap<u8, usize> = (1..=5).map(|r| (r, 0)).collect();
    for o in orders {
        *counts.entry(o.delivery.rating).or_insert(0) += 1;
    }
    counts
}

/// Mean delay in minutes per delivery zone.
pub fn mean_delay_by_zone(orders: &[PreparedOrder]) -> IndexMap<Zone, f64> {
    grouped_mean(orders, Zone::ALL, |o| o.record.location_zone, |o| {
        o.delay_minutes()
    })
}

/// Delay values of orders with and without a coupon, as `(yes, no)`.
pub fn delays_by_coupon(orders: &[PreparedOrder]) -> (Vec<f64>, Vec<f64>) {
    let (yes, no): (Vec<&PreparedOrder>, Vec<&PreparedOrder>) =
        orders.iter().partition(|o| o.record.coupon_used);
    (
        yes.iter().map(|o| o.delay_minutes()).collect(),
        no.iter().map(|o| o.delay_minutes()).collect(),
    )
}

/// Delay values of weekday and weekend orders, as `(weekday, weekend)`.
pub fn delays_by_weekend(orders: &[PreparedOrder]) -> (Vec<f64>, Vec<f64>) {
    let (weekend, weekday): (Vec<&PreparedOrder>, Vec<&PreparedOrder>) =
        orders.iter().partition(|o| o.features.is_weekend);
    (
        weekday.iter().map(|o| o.delay_minutes()).collect(),
        weekend.iter().map(|o| o.delay_minutes()).collect(),
    )
}
