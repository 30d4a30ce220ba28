//! Request and response bodies
//!
//! JSON field names are camelCase and dates are `YYYY-MM-DD`.

pub mod client;
pub mod policy;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a premium to cents for display
///
/// Returns `None` for values a decimal cannot hold.
pub fn premium_display(premium: f64) -> Option<Decimal> {
    Decimal::from_f64(premium)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
