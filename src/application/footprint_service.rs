// Footprint service - Use case for building the aggregate report
use crate::application::row_evaluator::evaluate;
use crate::domain::device::{DeviceEntry, GlobalParameters};
use crate::domain::report::{
    AggregateReport, FrequencyPoint, ImpactTier, ParetoPoint, RowResult, SharePoint,
};

#[derive(Debug, Clone, Default)]
pub struct FootprintService;

impl FootprintService {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate every entry and assemble totals, the three chart series, and
    /// the impact classification. The whole report is rebuilt from scratch on
    /// each call; the service keeps no state between calculations.
    pub fn aggregate(
        &self,
        entries: &[DeviceEntry],
        params: &GlobalParameters,
    ) -> AggregateReport {
        let params = params.normalized();

        let rows: Vec<RowResult> = entries
            .iter()
            .map(|entry| evaluate(entry, &params))
            .collect();

        let total_kwh: f64 = rows.iter().map(|r| r.kwh).sum();
        let total_co2: f64 = rows.iter().map(|r| r.co2).sum();

        // Rows with neither energy nor emissions stay in the totals (at zero)
        // but are dropped from every chart series.
        let eligible: Vec<&RowResult> =
            rows.iter().filter(|r| r.contributes_to_charts()).collect();

        tracing::debug!(
            rows = rows.len(),
            eligible = eligible.len(),
            total_kwh,
            total_co2,
            "aggregated device entries"
        );

        let pareto = build_pareto(&eligible);
        let frequency = build_frequency(&eligible);
        let shares = build_shares(&eligible, total_co2);

        let daily_co2 = total_co2 / params.period_days;
        let impact = ImpactTier::classify(daily_co2);

        AggregateReport {
            total_kwh,
            total_co2,
            rows,
            pareto,
            frequency,
            shares,
            impact,
            generated_at: chrono::Utc::now(),
        }
    }
}

/// Eligible rows ranked descending by kWh, each carrying the running
/// cumulative percentage of the eligible rows' kWh sum. The sort is stable,
/// so rows with equal kWh keep their input order. When the eligible kWh sum
/// is zero (cable-only inventories) every cumulative percentage is 0.
fn build_pareto(eligible: &[&RowResult]) -> Vec<ParetoPoint> {
    let mut ranked: Vec<&RowResult> = eligible.to_vec();
    ranked.sort_by(|a, b| b.kwh.total_cmp(&a.kwh));

    let kwh_sum: f64 = ranked.iter().map(|r| r.kwh).sum();

    let mut accumulated = 0.0;
    ranked
        .into_iter()
        .map(|row| {
            accumulated += row.kwh;
            let cumulative_pct = if kwh_sum > 0.0 {
                (accumulated / kwh_sum) * 100.0
            } else {
                0.0
            };
            ParetoPoint {
                label: row.label.clone(),
                kwh: row.kwh,
                cumulative_pct,
            }
        })
        .collect()
}

/// The same eligible rows ascending by kWh; a distribution view, no
/// cumulative math.
fn build_frequency(eligible: &[&RowResult]) -> Vec<FrequencyPoint> {
    let mut ranked: Vec<&RowResult> = eligible.to_vec();
    ranked.sort_by(|a, b| a.kwh.total_cmp(&b.kwh));

    ranked
        .into_iter()
        .map(|row| FrequencyPoint {
            label: row.label.clone(),
            kwh: row.kwh,
        })
        .collect()
}

/// Each eligible row's CO2 as a percentage of the grand total. A zero total
/// means every share is 0.
fn build_shares(eligible: &[&RowResult], total_co2: f64) -> Vec<SharePoint> {
    eligible
        .iter()
        .map(|row| {
            let share_pct = if total_co2 > 0.0 {
                (row.co2 / total_co2) * 100.0
            } else {
                0.0
            };
            SharePoint {
                label: row.label.clone(),
                co2: row.co2,
                share_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inventory() -> Vec<DeviceEntry> {
        vec![
            DeviceEntry::device("Desktop PC", 1, 100.0, 8.0, 30.0),
            DeviceEntry::device("Router", 1, 30.0, 24.0, 30.0),
            DeviceEntry::device("Switch", 2, 30.0, 24.0, 30.0),
            DeviceEntry::cable("UTP Cat 6 (100m)", 3, 2.0),
            DeviceEntry::device("Unplugged hub", 1, 25.0, 0.0, 30.0),
        ]
    }

    #[test]
    fn test_totals_sum_all_rows() {
        let service = FootprintService::new();
        let params = GlobalParameters::new(0.5, 30.0);

        let report = service.aggregate(&sample_inventory(), &params);

        // PC 24.0 + router 21.6 + switches 43.2
        assert!((report.total_kwh - 88.8).abs() < 1e-9);
        // operational 44.4 + embodied 6.0
        assert!((report.total_co2 - 50.4).abs() < 1e-9);
        assert_eq!(report.rows.len(), 5);
    }

    #[test]
    fn test_zero_rows_kept_in_totals_but_not_series() {
        let service = FootprintService::new();
        let params = GlobalParameters::new(0.5, 30.0);

        let report = service.aggregate(&sample_inventory(), &params);

        for series_labels in [
            report.pareto.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
            report.frequency.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
            report.shares.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
        ] {
            assert_eq!(series_labels.len(), 4);
            assert!(!series_labels.contains(&"Unplugged hub"));
        }

        // the zero row still shows up in the per-row results
        assert!(report.rows.iter().any(|r| r.label == "Unplugged hub"));
    }

    #[test]
    fn test_pareto_descending_with_cumulative() {
        let service = FootprintService::new();
        let params = GlobalParameters::new(0.5, 30.0);

        let report = service.aggregate(&sample_inventory(), &params);

        let kwh: Vec<f64> = report.pareto.iter().map(|p| p.kwh).collect();
        assert!(kwh.windows(2).all(|w| w[0] >= w[1]));

        let pct: Vec<f64> = report.pareto.iter().map(|p| p.cumulative_pct).collect();
        assert!(pct.windows(2).all(|w| w[0] <= w[1]));
        assert!((pct.last().unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pareto_cumulative_zero_when_no_energy() {
        let service = FootprintService::new();
        let params = GlobalParameters::new(0.5, 30.0);
        let entries = vec![
            DeviceEntry::cable("UTP Cat 6 (100m)", 3, 2.0),
            DeviceEntry::cable("Fiber patch", 1, 1.0),
        ];

        let report = service.aggregate(&entries, &params);

        assert_eq!(report.pareto.len(), 2);
        assert!(report.pareto.iter().all(|p| p.cumulative_pct == 0.0));
    }

    #[test]
    fn test_pareto_ties_keep_input_order() {
        let service = FootprintService::new();
        let params = GlobalParameters::new(0.5, 30.0);
        let entries = vec![
            DeviceEntry::device("first", 1, 30.0, 8.0, 30.0),
            DeviceEntry::device("second", 1, 30.0, 8.0, 30.0),
            DeviceEntry::device("third", 1, 30.0, 8.0, 30.0),
        ];

        let report = service.aggregate(&entries, &params);

        let labels: Vec<&str> = report.pareto.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_frequency_ascending_mirrors_pareto() {
        let service = FootprintService::new();
        let params = GlobalParameters::new(0.5, 30.0);

        let report = service.aggregate(&sample_inventory(), &params);

        let kwh: Vec<f64> = report.frequency.iter().map(|p| p.kwh).collect();
        assert!(kwh.windows(2).all(|w| w[0] <= w[1]));

        let mut frequency_labels: Vec<&str> =
            report.frequency.iter().map(|p| p.label.as_str()).collect();
        let mut pareto_labels: Vec<&str> =
            report.pareto.iter().map(|p| p.label.as_str()).collect();
        frequency_labels.sort();
        pareto_labels.sort();
        assert_eq!(frequency_labels, pareto_labels);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let service = FootprintService::new();
        let params = GlobalParameters::new(0.5, 30.0);

        let report = service.aggregate(&sample_inventory(), &params);

        let sum: f64 = report.shares.iter().map(|p| p.share_pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_zero_when_no_emissions() {
        let service = FootprintService::new();
        // factor 0 means devices consume energy but emit nothing
        let params = GlobalParameters::new(0.0, 30.0);
        let entries = vec![DeviceEntry::device("Desktop PC", 1, 100.0, 8.0, 30.0)];

        let report = service.aggregate(&entries, &params);

        assert_eq!(report.total_co2, 0.0);
        assert_eq!(report.shares.len(), 1);
        assert_eq!(report.shares[0].share_pct, 0.0);
    }

    #[test]
    fn test_empty_inventory_yields_empty_excellent_report() {
        let service = FootprintService::new();
        let params = GlobalParameters::new(0.5, 30.0);

        let report = service.aggregate(&[], &params);

        assert_eq!(report.total_kwh, 0.0);
        assert_eq!(report.total_co2, 0.0);
        assert!(report.rows.is_empty());
        assert!(report.pareto.is_empty());
        assert!(report.frequency.is_empty());
        assert!(report.shares.is_empty());
        assert_eq!(report.impact, ImpactTier::Excellent);
    }

    #[test]
    fn test_impact_uses_normalized_period() {
        let service = FootprintService::new();
        // 150 kg over an unparsable period falls back to 30 days -> 5 kg/day
        let params = GlobalParameters::new(1.0, 0.0);
        let entries = vec![DeviceEntry::cable("bulk cabling", 75, 2.0)];

        let report = service.aggregate(&entries, &params);

        assert_eq!(report.total_co2, 150.0);
        assert_eq!(report.impact, ImpactTier::Good);
    }

    #[test]
    fn test_rows_preserve_input_order() {
        let service = FootprintService::new();
        let params = GlobalParameters::new(0.5, 30.0);

        let report = service.aggregate(&sample_inventory(), &params);

        let labels: Vec<&str> = report.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Desktop PC",
                "Router",
                "Switch",
                "UTP Cat 6 (100m)",
                "Unplugged hub"
            ]
        );
    }
}
