// Row evaluator - Per-entry energy and emissions contribution
use crate::domain::device::{DeviceEntry, DeviceKind, GlobalParameters};
use crate::domain::report::RowResult;

/// Compute one row's energy and emissions. Pure and infallible: every input
/// has already been coerced to a number, so the worst outcome of a bad row
/// is a zero contribution, never an error.
///
/// Powered devices: `kwh = (watts * hours/day * days * quantity) / 1000`,
/// `co2 = kwh * co2_factor`. A row may override the reporting period with its
/// own `days`; a non-positive `days` falls back to `params.period_days`.
///
/// Cables: no energy draw, only embodied manufacturing emissions,
/// `co2 = kg/unit * quantity`, independent of the reporting period.
pub fn evaluate(entry: &DeviceEntry, params: &GlobalParameters) -> RowResult {
    match entry.kind {
        DeviceKind::Device => {
            let effective_days = if entry.days > 0.0 {
                entry.days
            } else {
                params.period_days
            };
            let kwh =
                (entry.rating * entry.hours_per_day * effective_days * entry.quantity as f64)
                    / 1000.0;
            let co2 = kwh * params.co2_factor;
            RowResult::new(entry.description.clone(), kwh, co2)
        }
        DeviceKind::Cable => {
            let co2 = entry.rating * entry.quantity as f64;
            RowResult::new(entry.description.clone(), 0.0, co2)
        }
    }
}
