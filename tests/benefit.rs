use iiot_roi_calculator::economics::{
    aggregate_benefit, aggregate_line_benefit, compute_margins, line_value_added,
    operational_savings, post_uplift_state, unit_economics, BenefitBreakdown,
};
use iiot_roi_calculator::scenario::{EnabledMetrics, Metric, OperationalInputs, ProductionLine};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn line_metrics() -> EnabledMetrics {
    [
        Metric::ProductionVolume,
        Metric::AveragePrice,
        Metric::AverageCost,
    ]
    .into_iter()
    .collect()
}

#[test]
fn volume_scaled_value_added() {
    let m = compute_margins(1_000_000.0, 10.0, 10.0, 40.0, 20.0);
    let pre = unit_economics(&m, 1_000_000.0, 10.0, 5000.0).unwrap();
    let post = post_uplift_state(&pre, &m, 1_000_000.0, 10.0, &[15.0]).unwrap();
    let b = aggregate_benefit(&pre, &post, 0.0, 10_000.0);
    // (노무비 + 상각비) × 증대율 = 262,000 × 0.15
    assert_close("value added", b.value_added, 39_300.0, 1e-6);
    assert_close("net", b.net_annual_benefit, 29_300.0, 1e-6);
}

#[test]
fn net_benefit_adds_ops_and_subtracts_recurring() {
    let b = BenefitBreakdown::new(1_000.0, 250.0, 400.0);
    assert_eq!(b.net_annual_benefit, 850.0);
}

#[test]
fn operational_levers_only_count_when_enabled() {
    let ops = OperationalInputs {
        maintenance_before_pct: 5.0,
        maintenance_after_pct: 3.0,
        labor_before_pct: 10.0,
        labor_after_pct: 8.0,
        downtime_before_months: 3.0,
        downtime_after_months: 1.0,
    };

    let none = operational_savings(900_000.0, &ops, &EnabledMetrics::new());
    assert_eq!(none.total, 0.0);
    assert_eq!(none.downtime_months_saved, 0.0);

    let all = operational_savings(900_000.0, &ops, &EnabledMetrics::all());
    assert_close("old maint", all.old_maintenance, 45_000.0, 1e-9);
    assert_close("new maint", all.new_maintenance, 27_000.0, 1e-9);
    assert_close("maint", all.maintenance_benefit, 18_000.0, 1e-9);
    assert_close("labor", all.labor_benefit, 18_000.0, 1e-9);
    assert_close("total", all.total, 36_000.0, 1e-9);
    assert_close("downtime", all.downtime_months_saved, 2.0, 1e-12);

    let maint_only: EnabledMetrics = [Metric::MaintenanceCost].into_iter().collect();
    let partial = operational_savings(900_000.0, &ops, &maint_only);
    assert_close("maint only", partial.total, 18_000.0, 1e-9);
    assert_eq!(partial.old_labor, 0.0);
}

#[test]
fn line_value_added_uses_incremental_units() {
    let lines = [ProductionLine {
        avg_unit_price: 120.0,
        avg_unit_cost: 100.0,
        units: 1000.0,
    }];
    let rows = line_value_added(&lines, &[10.0, 5.0], &line_metrics());
    assert_eq!(rows.len(), 1);
    let row = rows[0];
    assert_eq!(row.line, 1);
    assert_close("unit profit", row.unit_profit, 20.0, 1e-12);
    assert_close("new units", row.new_units, 1155.0, 1e-9);
    assert_close("incremental", row.incremental_units, 155.0, 1e-9);
    assert_close("value added", row.value_added, 3100.0, 1e-6);
    assert_close("old profit", row.old_profit, 20_000.0, 1e-9);
}

#[test]
fn disabled_line_metrics_default_to_zero() {
    let lines = [ProductionLine {
        avg_unit_price: 120.0,
        avg_unit_cost: 100.0,
        units: 1000.0,
    }];

    let price_only: EnabledMetrics = [Metric::ProductionVolume, Metric::AveragePrice]
        .into_iter()
        .collect();
    let rows = line_value_added(&lines, &[10.0], &price_only);
    assert_close("unit profit", rows[0].unit_profit, 120.0, 1e-12);

    let no_volume: EnabledMetrics = [Metric::AveragePrice, Metric::AverageCost]
        .into_iter()
        .collect();
    let rows = line_value_added(&lines, &[10.0], &no_volume);
    assert_eq!(rows[0].old_units, 0.0);
    assert_eq!(rows[0].value_added, 0.0);
}

#[test]
fn line_benefit_sums_lines() {
    let lines = [
        ProductionLine {
            avg_unit_price: 120.0,
            avg_unit_cost: 100.0,
            units: 1000.0,
        },
        ProductionLine {
            avg_unit_price: 50.0,
            avg_unit_cost: 40.0,
            units: 2000.0,
        },
    ];
    let rows = line_value_added(&lines, &[10.0], &line_metrics());
    assert_eq!(rows[1].line, 2);
    let b = aggregate_line_benefit(&rows, 500.0, 1_000.0);
    // 100 × 20 + 200 × 10
    assert_close("value added", b.value_added, 4_000.0, 1e-6);
    assert_close("net", b.net_annual_benefit, 3_500.0, 1e-6);
}
