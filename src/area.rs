//! Billable area calculation with a minimum-area floor.

use crate::config::{float_cmp, AREA_DECIMALS, CM_PER_M, MIN_BILLABLE_AREA_M2};
use serde::{Deserialize, Serialize};

/// Billable area of a single piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillableArea {
    /// Area in square meters, rounded to three decimals.
    pub area: f64,
    /// Whether the raw area was raised to the minimum.
    pub below_minimum: bool,
}

/// Compute the billable area of a `width` x `height` piece given in centimeters.
///
/// Raw areas strictly between zero and [`MIN_BILLABLE_AREA_M2`] are billed at the
/// minimum. Non-positive dimensions are expected to be rejected by the caller.
pub fn billable_area(width: f64, height: f64) -> BillableArea {
    let raw = (width / CM_PER_M) * (height / CM_PER_M);
    let below_minimum = raw > 0.0 && raw < MIN_BILLABLE_AREA_M2;
    let area = if below_minimum { MIN_BILLABLE_AREA_M2 } else { raw };

    BillableArea {
        area: float_cmp::round_to(area, AREA_DECIMALS),
        below_minimum,
    }
}
