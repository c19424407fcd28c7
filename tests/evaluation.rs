//! 시나리오 전체 파이프라인 회귀 테스트.
use iiot_roi_calculator::economics::{
    evaluate, BenefitModel, EconomicsError, ModelSettings, Payback,
};
use iiot_roi_calculator::scenario::{
    AnalysisHorizon, EnabledMetrics, Metric, ProductionLine, ScenarioInputs,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn default_scenario_volume_scaled() {
    let inputs = ScenarioInputs::default();
    let result = evaluate(&inputs, &ModelSettings::default()).expect("evaluate");

    assert_eq!(result.benefit_model, BenefitModel::VolumeScaledSavings);
    assert_close("profit", result.margins.profit, 100_000.0, 1e-9);
    let after = result.after.expect("volume model keeps post-uplift costs");
    assert_close("after volume", after.new_volume, 5750.0, 1e-9);
    assert_close("daily before", result.daily_output_before, 5000.0 / 300.0, 1e-9);
    assert_close("daily after", result.daily_output_after, 5750.0 / 300.0, 1e-9);
    assert!(result.lines.is_empty());

    assert_close("value added", result.benefit.value_added, 39_300.0, 1e-6);
    assert_close("net", result.benefit.net_annual_benefit, 29_300.0, 1e-6);
    assert_close("profit after", result.bridge.profit_after, 129_300.0, 1e-6);
    assert_close("incremental", result.bridge.incremental_profit(), 29_300.0, 1e-6);

    assert_eq!(result.schedule.len(), 6);
    assert_eq!(result.summary.total_investment, 75_000.0);
    assert_eq!(result.summary.payback, Payback::RecoveredIn(3));
}

#[test]
fn without_recurring_cost_payback_is_earlier() {
    let inputs = ScenarioInputs {
        annual_iiot_cost: 0.0,
        ..ScenarioInputs::default()
    };
    let result = evaluate(&inputs, &ModelSettings::default()).unwrap();
    assert_close("net", result.benefit.net_annual_benefit, 39_300.0, 1e-6);
    assert_eq!(result.summary.payback, Payback::RecoveredIn(2));
}

#[test]
fn horizon_controls_schedule_length() {
    for horizon in AnalysisHorizon::ALL {
        let inputs = ScenarioInputs {
            horizon,
            ..ScenarioInputs::default()
        };
        let result = evaluate(&inputs, &ModelSettings::default()).unwrap();
        assert_eq!(result.schedule.len(), horizon.years() as usize + 1);
    }
}

#[test]
fn operational_savings_flow_into_net_benefit() {
    let mut inputs = ScenarioInputs::default();
    inputs.enabled_metrics.enable(Metric::MaintenanceCost);
    inputs.operational.maintenance_before_pct = 5.0;
    inputs.operational.maintenance_after_pct = 3.0;
    let result = evaluate(&inputs, &ModelSettings::default()).unwrap();
    // 900,000 × 2%
    assert_close("ops", result.benefit.operational_savings, 18_000.0, 1e-9);
    assert_close("net", result.benefit.net_annual_benefit, 47_300.0, 1e-6);
}

#[test]
fn incremental_unit_margin_model() {
    let inputs = ScenarioInputs {
        production_increase_pcts: vec![10.0, 5.0],
        annual_iiot_cost: 1_000.0,
        enabled_metrics: [
            Metric::ProductionVolume,
            Metric::AveragePrice,
            Metric::AverageCost,
        ]
        .into_iter()
        .collect(),
        lines: vec![ProductionLine {
            avg_unit_price: 120.0,
            avg_unit_cost: 100.0,
            units: 1000.0,
        }],
        ..ScenarioInputs::default()
    };
    let settings = ModelSettings {
        benefit_model: BenefitModel::IncrementalUnitMargin,
        ..ModelSettings::default()
    };
    let result = evaluate(&inputs, &settings).unwrap();
    assert_eq!(result.lines.len(), 1);
    assert_close("value added", result.benefit.value_added, 3_100.0, 1e-6);
    assert_close("net", result.benefit.net_annual_benefit, 2_100.0, 1e-6);
    assert_close("baseline", result.bridge.baseline_profit, 20_000.0, 1e-9);
    assert_eq!(result.summary.payback, Payback::NotRecovered);
}

#[test]
fn incremental_model_with_metrics_disabled_has_no_value_added() {
    let inputs = ScenarioInputs {
        enabled_metrics: EnabledMetrics::new(),
        ..ScenarioInputs::default()
    };
    let settings = ModelSettings {
        benefit_model: BenefitModel::IncrementalUnitMargin,
        ..ModelSettings::default()
    };
    let result = evaluate(&inputs, &settings).unwrap();
    assert_eq!(result.benefit.value_added, 0.0);
    assert_close("net", result.benefit.net_annual_benefit, -10_000.0, 1e-12);
    assert_eq!(result.summary.payback, Payback::NotRecovered);
}

#[test]
fn amortization_years_change_fixed_cost() {
    let settings = ModelSettings {
        amortization_years: 5.0,
        ..ModelSettings::default()
    };
    let result = evaluate(&ScenarioInputs::default(), &settings).unwrap();
    assert_close("fixed", result.before.fixed_per_unit, 40.0, 1e-9);
}

#[test]
fn production_wiped_out_is_a_calculation_error() {
    let inputs = ScenarioInputs {
        production_increase_pcts: vec![-100.0],
        ..ScenarioInputs::default()
    };
    let err = evaluate(&inputs, &ModelSettings::default()).unwrap_err();
    assert!(matches!(err, EconomicsError::DivisionUndefined(_)));
}

#[test]
fn line_model_survives_production_wiped_out() {
    let inputs = ScenarioInputs {
        production_increase_pcts: vec![-100.0],
        annual_iiot_cost: 0.0,
        enabled_metrics: [
            Metric::ProductionVolume,
            Metric::AveragePrice,
            Metric::AverageCost,
        ]
        .into_iter()
        .collect(),
        lines: vec![ProductionLine {
            avg_unit_price: 120.0,
            avg_unit_cost: 100.0,
            units: 1000.0,
        }],
        ..ScenarioInputs::default()
    };
    let settings = ModelSettings {
        benefit_model: BenefitModel::IncrementalUnitMargin,
        ..ModelSettings::default()
    };
    let result = evaluate(&inputs, &settings).expect("line model has no per-unit division");
    assert!(result.after.is_none());
    assert_eq!(result.daily_output_after, 0.0);
    assert_close("incremental", result.lines[0].incremental_units, -1000.0, 1e-9);
    assert_close("value added", result.benefit.value_added, -20_000.0, 1e-9);
    assert_close("profit after", result.bridge.profit_after, 0.0, 1e-9);
    assert_eq!(result.summary.payback, Payback::NotRecovered);
}

#[test]
fn zero_investment_scenario_has_zero_roi() {
    let inputs = ScenarioInputs {
        license_cost: 0.0,
        implementation_cost: 0.0,
        ..ScenarioInputs::default()
    };
    let result = evaluate(&inputs, &ModelSettings::default()).unwrap();
    assert!(result.schedule.iter().all(|r| r.roi_pct == 0.0));
    assert_eq!(result.summary.final_roi_pct, 0.0);
    assert_eq!(result.summary.payback, Payback::RecoveredIn(1));
}

#[test]
fn evaluation_is_pure() {
    let inputs = ScenarioInputs::default();
    let settings = ModelSettings::default();
    assert_eq!(
        evaluate(&inputs, &settings).unwrap(),
        evaluate(&inputs, &settings).unwrap()
    );
}
