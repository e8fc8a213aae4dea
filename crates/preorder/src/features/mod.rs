//! Feature derivation over loaded orders.

mod calendar;
mod derive;

pub use calendar::{day_name, is_weekend, month_name, MONTH_ORDER, WEEK_ORDER};
pub use derive::{load_and_prepare, prepare, DerivedFeatures, PreparedOrder, PreparedTable};
