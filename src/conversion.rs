//! Plate weight conversions.
//!
//! A machine's plate weight is its total stack weight divided by the number of
//! stacks, the number of plates per stack and the pulley ratio. Plate count and
//! total weight are then related through that plate weight as a fixed ratio.

use crate::catalog::{truthy, MachineRecord};
use crate::config::ROUND_DECIMALS;

/// Round to two decimal places. Halves round toward positive infinity, as `Math.round` does.
#[inline]
pub fn round2(value: f64) -> f64 {
    let factor = 10f64.powi(ROUND_DECIMALS);
    (value * factor + 0.5).floor() / factor
}

/// Weight of a single plate on `record`, or `None` when the record has no stack weight.
pub fn plate_weight_of(record: &MachineRecord) -> Option<f64> {
    let total = record.stack_weight()?;
    Some(round2(
        total / record.stacks() / record.plates() / record.pulley(),
    ))
}

/// Total weight lifted for `plate_count` plates. A falsy count yields no value.
pub fn total_from_plate_count(plate_weight: f64, plate_count: Option<f64>) -> Option<f64> {
    let count = truthy(plate_count)?;
    Some(round2(plate_weight * count))
}

/// Number of plates needed for `total_weight`. A falsy total, or a zero plate
/// weight, yields no value.
pub fn plate_count_from_total(plate_weight: f64, total_weight: Option<f64>) -> Option<f64> {
    let total = truthy(total_weight)?;
    let per_plate = truthy(Some(plate_weight))?;
    Some(round2(total / per_plate))
}
