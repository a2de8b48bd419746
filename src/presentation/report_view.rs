// Report response views - JSON shape handed to the chart renderer
use crate::domain::report::{AggregateReport, ImpactTier};
use serde::Serialize;

/// Display contract: energy and emissions round to 2 decimal places,
/// percentages to 1. The domain report keeps full precision; rounding
/// happens only here, at the serialization boundary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub total_kwh: f64,
    pub total_co2: f64,
    pub rows: Vec<RowView>,
    pub pareto: Vec<ParetoView>,
    pub frequency: Vec<FrequencyView>,
    pub shares: Vec<ShareView>,
    pub impact: ImpactView,
    pub generated_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub label: String,
    pub kwh: f64,
    pub co2: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParetoView {
    pub label: String,
    pub kwh: f64,
    pub cumulative_pct: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyView {
    pub label: String,
    pub kwh: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareView {
    pub label: String,
    pub co2: f64,
    pub share_pct: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactView {
    pub tier: &'static str,
    pub status_text: &'static str,
    pub description: &'static str,
    pub severity: &'static str,
}

impl From<&AggregateReport> for ReportView {
    fn from(report: &AggregateReport) -> Self {
        Self {
            total_kwh: round2(report.total_kwh),
            total_co2: round2(report.total_co2),
            rows: report
                .rows
                .iter()
                .map(|r| RowView {
                    label: r.label.clone(),
                    kwh: round2(r.kwh),
                    co2: round2(r.co2),
                })
                .collect(),
            pareto: report
                .pareto
                .iter()
                .map(|p| ParetoView {
                    label: p.label.clone(),
                    kwh: round2(p.kwh),
                    cumulative_pct: round1(p.cumulative_pct),
                })
                .collect(),
            frequency: report
                .frequency
                .iter()
                .map(|p| FrequencyView {
                    label: p.label.clone(),
                    kwh: round2(p.kwh),
                })
                .collect(),
            shares: report
                .shares
                .iter()
                .map(|p| ShareView {
                    label: p.label.clone(),
                    co2: round2(p.co2),
                    share_pct: round1(p.share_pct),
                })
                .collect(),
            impact: ImpactView::from(report.impact),
            generated_at: report.generated_at.to_rfc3339(),
        }
    }
}

impl From<ImpactTier> for ImpactView {
    fn from(tier: ImpactTier) -> Self {
        let name = match tier {
            ImpactTier::Excellent => "excellent",
            ImpactTier::Good => "good",
            ImpactTier::Moderate => "moderate",
            ImpactTier::High => "high",
        };
        Self {
            tier: name,
            status_text: tier.status_text(),
            description: tier.description(),
            severity: tier.severity(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
