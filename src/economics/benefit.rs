use serde::{Deserialize, Serialize};

use super::{apply_uplift, PostUpliftState, UnitEconomics};
use crate::scenario::{EnabledMetrics, Metric, OperationalInputs, ProductionLine};

/// 연간 편익(value added) 계산 방식.
///
/// 두 방식은 서로 다른 회계 모델이며 결과가 일치하지 않는다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitModel {
    /// 증대 후 생산량 × 단위당 (노무비+고정비) 절감액
    #[default]
    VolumeScaledSavings,
    /// 라인별 증가 생산량 × (평균 단가 − 평균 원가)
    IncrementalUnitMargin,
}

/// 운영 개선(유지보수/노무비/가동중단) 절감 내역.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OperationalSavings {
    pub old_maintenance: f64,
    pub new_maintenance: f64,
    pub maintenance_benefit: f64,
    pub old_labor: f64,
    pub new_labor: f64,
    pub labor_benefit: f64,
    /// 유지보수 + 노무비 절감 합계
    pub total: f64,
    /// 줄어든 가동중단 기간 [월]. 금액으로 환산하지 않는다.
    pub downtime_months_saved: f64,
}

/// 켜진 운영 지표에 대해 매출 대비 비율 차이로 절감액을 계산한다.
pub fn operational_savings(
    revenue: f64,
    ops: &OperationalInputs,
    metrics: &EnabledMetrics,
) -> OperationalSavings {
    let old_maintenance = revenue
        * metrics.value_or_zero(Metric::MaintenanceCost, ops.maintenance_before_pct)
        / 100.0;
    let new_maintenance = revenue
        * metrics.value_or_zero(Metric::MaintenanceCost, ops.maintenance_after_pct)
        / 100.0;
    let old_labor = revenue * metrics.value_or_zero(Metric::LaborCost, ops.labor_before_pct) / 100.0;
    let new_labor = revenue * metrics.value_or_zero(Metric::LaborCost, ops.labor_after_pct) / 100.0;
    let maintenance_benefit = old_maintenance - new_maintenance;
    let labor_benefit = old_labor - new_labor;
    let downtime_months_saved = metrics.value_or_zero(
        Metric::DowntimeReduction,
        ops.downtime_before_months - ops.downtime_after_months,
    );
    OperationalSavings {
        old_maintenance,
        new_maintenance,
        maintenance_benefit,
        old_labor,
        new_labor,
        labor_benefit,
        total: maintenance_benefit + labor_benefit,
        downtime_months_saved,
    }
}

/// 라인별 부가가치 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineValueAdded {
    /// 1부터 시작하는 라인 번호
    pub line: usize,
    pub unit_profit: f64,
    pub old_units: f64,
    pub new_units: f64,
    pub incremental_units: f64,
    pub value_added: f64,
    pub old_profit: f64,
}

/// 라인별로 증가 생산량 × 단위 이익을 계산한다.
///
/// 꺼진 지표(단가/원가/생산량)는 0으로 들어간다. 단가만 켜져 있으면 단위 이익이
/// 단가 전체가 되고, 생산량이 꺼져 있으면 그 라인의 부가가치는 0이다.
pub fn line_value_added(
    lines: &[ProductionLine],
    pct_list: &[f64],
    metrics: &EnabledMetrics,
) -> Vec<LineValueAdded> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let price = metrics.value_or_zero(Metric::AveragePrice, line.avg_unit_price);
            let cost = metrics.value_or_zero(Metric::AverageCost, line.avg_unit_cost);
            let old_units = metrics.value_or_zero(Metric::ProductionVolume, line.units);
            let unit_profit = price - cost;
            let new_units = apply_uplift(old_units, pct_list);
            let incremental_units = new_units - old_units;
            LineValueAdded {
                line: idx + 1,
                unit_profit,
                old_units,
                new_units,
                incremental_units,
                value_added: incremental_units * unit_profit,
                old_profit: old_units * unit_profit,
            }
        })
        .collect()
}

/// 연간 순편익 구성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenefitBreakdown {
    /// 생산 증대로 인한 부가가치
    pub value_added: f64,
    /// 운영 개선 절감액
    pub operational_savings: f64,
    /// 연간 IIoT 구독/유지 비용
    pub recurring_cost: f64,
    /// value_added + operational_savings − recurring_cost
    pub net_annual_benefit: f64,
}

impl BenefitBreakdown {
    pub fn new(value_added: f64, operational_savings: f64, recurring_cost: f64) -> Self {
        Self {
            value_added,
            operational_savings,
            recurring_cost,
            net_annual_benefit: value_added + operational_savings - recurring_cost,
        }
    }
}

/// 생산량 규모 절감 모델로 연간 순편익을 집계한다.
pub fn aggregate_benefit(
    pre: &UnitEconomics,
    post: &PostUpliftState,
    ops_savings: f64,
    recurring_cost: f64,
) -> BenefitBreakdown {
    let per_unit_savings = pre.labor_and_fixed() - post.unit.labor_and_fixed();
    let value_added = post.new_volume * per_unit_savings;
    BenefitBreakdown::new(value_added, ops_savings, recurring_cost)
}

/// 라인별 단위 이익 모델로 연간 순편익을 집계한다.
pub fn aggregate_line_benefit(
    lines: &[LineValueAdded],
    ops_savings: f64,
    recurring_cost: f64,
) -> BenefitBreakdown {
    let value_added = lines.iter().map(|l| l.value_added).sum();
    BenefitBreakdown::new(value_added, ops_savings, recurring_cost)
}
