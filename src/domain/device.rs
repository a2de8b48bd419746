// Device inventory domain model
use serde::{Deserialize, Deserializer, Serialize};

/// Kind tag controlling which footprint formula applies to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Powered equipment: operational emissions from energy use.
    Device,
    /// Cabling: fixed embodied emissions per unit, no energy draw.
    Cable,
}

impl Default for DeviceKind {
    fn default() -> Self {
        DeviceKind::Device
    }
}

/// One user-editable inventory row.
///
/// `rating` is kind-dependent: watts of power draw for `Device`, kilograms of
/// embodied CO2 per unit for `Cable`. All numeric fields deserialize leniently:
/// a JSON number, a numeric string, or anything unparsable all land as a value,
/// never as a deserialization error. Unparsable input coerces to 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEntry {
    #[serde(default)]
    pub kind: DeviceKind,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub hours_per_day: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub days: f64,
}

impl DeviceEntry {
    pub fn device(description: &str, quantity: u32, watts: f64, hours_per_day: f64, days: f64) -> Self {
        Self {
            kind: DeviceKind::Device,
            description: description.to_string(),
            quantity,
            rating: watts,
            hours_per_day,
            days,
        }
    }

    pub fn cable(description: &str, quantity: u32, embodied_kg: f64) -> Self {
        Self {
            kind: DeviceKind::Cable,
            description: description.to_string(),
            quantity,
            rating: embodied_kg,
            hours_per_day: 0.0,
            days: 0.0,
        }
    }
}

/// Global calculation parameters shared by every row.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalParameters {
    /// kg CO2 emitted per kWh consumed.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub co2_factor: f64,
    /// Reporting horizon in days; also the per-row `days` default.
    #[serde(default = "default_period_days", deserialize_with = "lenient_f64")]
    pub period_days: f64,
}

impl GlobalParameters {
    pub fn new(co2_factor: f64, period_days: f64) -> Self {
        Self {
            co2_factor,
            period_days,
        }
    }

    /// Clamp the parameters into the domain the formulas assume: a
    /// non-negative emission factor and a strictly positive period.
    /// A non-positive or unparsable period falls back to 30 days.
    pub fn normalized(self) -> Self {
        Self {
            co2_factor: self.co2_factor.max(0.0),
            period_days: if self.period_days > 0.0 {
                self.period_days
            } else {
                default_period_days()
            },
        }
    }
}

impl Default for GlobalParameters {
    fn default() -> Self {
        Self {
            co2_factor: 0.0,
            period_days: default_period_days(),
        }
    }
}

fn default_period_days() -> f64 {
    30.0
}

/// Accept a number, a numeric string, or garbage; anything that does not
/// parse as a finite number becomes 0 rather than a deserialization error.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// Same coercion policy for counts; negative values also coerce to 0.
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let number = coerce_f64(&value);
    if number.is_sign_negative() {
        Ok(0)
    } else {
        Ok(number as u32)
    }
}

fn coerce_f64(value: &serde_json::Value) -> f64 {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}
