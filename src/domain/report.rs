// Footprint report domain models

/// Per-row computation outcome. `kwh` is always 0 for cable rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowResult {
    pub label: String,
    pub kwh: f64,
    pub co2: f64,
}

impl RowResult {
    pub fn new(label: String, kwh: f64, co2: f64) -> Self {
        Self { label, kwh, co2 }
    }

    /// Rows with neither energy nor emissions are dropped from every chart
    /// series but still counted into the totals.
    pub fn contributes_to_charts(&self) -> bool {
        self.kwh > 0.0 || self.co2 > 0.0
    }
}

/// One bar of the Pareto chart: kWh ranked descending, with the running
/// cumulative share of the eligible rows' total kWh.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoPoint {
    pub label: String,
    pub kwh: f64,
    pub cumulative_pct: f64,
}

/// One point of the frequency polygon: the same eligible rows, ascending by kWh.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyPoint {
    pub label: String,
    pub kwh: f64,
}

/// One slice of the emissions pie: a row's CO2 and its share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePoint {
    pub label: String,
    pub co2: f64,
    pub share_pct: f64,
}

/// Severity classification of the aggregate footprint, derived from average
/// daily CO2 (kg/day) against fixed domain thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactTier {
    Excellent,
    Good,
    Moderate,
    High,
}

impl ImpactTier {
    /// Thresholds in kg CO2 per day: <5 Excellent, <15 Good, <30 Moderate,
    /// otherwise High. Boundaries belong to the higher tier (5.0 is Good).
    pub fn classify(daily_co2: f64) -> Self {
        if daily_co2 < 5.0 {
            ImpactTier::Excellent
        } else if daily_co2 < 15.0 {
            ImpactTier::Good
        } else if daily_co2 < 30.0 {
            ImpactTier::Moderate
        } else {
            ImpactTier::High
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            ImpactTier::Excellent => "✓ Excellent",
            ImpactTier::Good => "✓ Good",
            ImpactTier::Moderate => "⚠ Moderate",
            ImpactTier::High => "✗ High",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ImpactTier::Excellent => {
                "Your technology footprint is very low. Keep it up!"
            }
            ImpactTier::Good => {
                "Your technology footprint is acceptable. There is room to improve."
            }
            ImpactTier::Moderate => {
                "Your technology footprint is considerable. Consider optimizing device usage."
            }
            ImpactTier::High => {
                "Your technology footprint is high. Taking steps to reduce energy consumption is important."
            }
        }
    }

    /// Presentation severity bucket, three levels for four tiers: the two
    /// lowest tiers share the "good" styling.
    pub fn severity(&self) -> &'static str {
        match self {
            ImpactTier::Excellent | ImpactTier::Good => "good",
            ImpactTier::Moderate => "warning",
            ImpactTier::High => "danger",
        }
    }
}

/// Complete output of one aggregation pass. Recomputed from scratch on every
/// request; nothing here survives between calculations.
#[derive(Debug, Clone)]
pub struct AggregateReport {
    pub total_kwh: f64,
    pub total_co2: f64,
    /// Every row's result in input order, chart-eligible or not.
    pub rows: Vec<RowResult>,
    pub pareto: Vec<ParetoPoint>,
    pub frequency: Vec<FrequencyPoint>,
    pub shares: Vec<SharePoint>,
    pub impact: ImpactTier,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
