//! 시나리오 입력 한 벌을 받아 전체 파이프라인을 한 번에 계산한다.
//! 내부 상태를 남기지 않으므로 입력이 바뀔 때마다 통째로 다시 호출하면 된다.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::*;
use crate::scenario::ScenarioInputs;

/// 입력과 별개로 고정해 두는 모델 상수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// 연간 편익 계산 방식
    pub benefit_model: BenefitModel,
    /// 설비 투자비 정액 상각 기간 [년]
    pub amortization_years: f64,
    /// 연간 가동일수 [일]
    pub working_days_per_year: f64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            benefit_model: BenefitModel::default(),
            amortization_years: DEFAULT_AMORTIZATION_YEARS,
            working_days_per_year: DEFAULT_WORKING_DAYS,
        }
    }
}

/// 도입 전 이익에서 도입 후 이익까지의 증감 내역(폭포 차트용).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitBridge {
    /// 도입 전 이익
    pub baseline_profit: f64,
    /// 생산 증대 부가가치
    pub value_added: f64,
    /// 운영 개선 절감액
    pub operational_savings: f64,
    /// 연간 구독 비용(차감 항목, 양수로 보관)
    pub recurring_cost: f64,
    /// 도입 후 이익
    pub profit_after: f64,
}

impl ProfitBridge {
    pub fn new(baseline_profit: f64, benefit: &BenefitBreakdown) -> Self {
        Self {
            baseline_profit,
            value_added: benefit.value_added,
            operational_savings: benefit.operational_savings,
            recurring_cost: benefit.recurring_cost,
            profit_after: baseline_profit + benefit.net_annual_benefit,
        }
    }

    pub fn incremental_profit(&self) -> f64 {
        self.profit_after - self.baseline_profit
    }
}

/// 한 번의 평가 결과 묶음. 표/차트 렌더링 쪽에서 그대로 소비한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub benefit_model: BenefitModel,
    pub margins: MarginBreakdown,
    pub before: UnitEconomics,
    /// 증대 후 단위 원가. 라인 모델에서 생산량이 0이 되면 비어 있다.
    pub after: Option<PostUpliftState>,
    /// 도입 전 일 생산량
    pub daily_output_before: f64,
    /// 도입 후 일 생산량
    pub daily_output_after: f64,
    /// 라인별 부가가치. 라인 단위 이익 모델에서만 채워진다.
    pub lines: Vec<LineValueAdded>,
    pub operational: OperationalSavings,
    pub benefit: BenefitBreakdown,
    pub bridge: ProfitBridge,
    pub schedule: CashFlowSchedule,
    pub summary: InvestmentSummary,
}

/// 마진 → 단위 원가 → 생산 증대 → 편익 → 투자 분석 순으로 계산한다.
///
/// 입력은 `ScenarioInputs::validate`를 통과했다고 가정한다. 생산량 규모 절감
/// 모델에서 단위 원가의 분모가 0이 되면 부분 결과 없이 즉시 오류를 돌려준다.
pub fn evaluate(
    inputs: &ScenarioInputs,
    settings: &ModelSettings,
) -> Result<ScenarioResult, EconomicsError> {
    let margins = compute_margins(
        inputs.turnover,
        inputs.profit_margin_pct,
        inputs.sales_admin_margin_pct,
        inputs.material_margin_pct,
        inputs.labor_margin_pct,
    );
    debug!(
        "margins: profit={:.2} revenue={:.2} mfg={:.2}",
        margins.profit, margins.revenue, margins.mfg_expense
    );

    let before = unit_economics(
        &margins,
        inputs.capital_cost,
        settings.amortization_years,
        inputs.units_per_year,
    )?;
    let new_volume = apply_uplift(before.volume, &inputs.production_increase_pcts);
    let daily_output_before = daily_output(before.volume, settings.working_days_per_year)?;
    let daily_output_after = daily_output(new_volume, settings.working_days_per_year)?;

    let operational = operational_savings(
        margins.revenue,
        &inputs.operational,
        &inputs.enabled_metrics,
    );

    let (after, lines, benefit, baseline_profit) = match settings.benefit_model {
        BenefitModel::VolumeScaledSavings => {
            let after = post_uplift_state(
                &before,
                &margins,
                inputs.capital_cost,
                settings.amortization_years,
                &inputs.production_increase_pcts,
            )?;
            debug!(
                "uplift: {:.2} -> {:.2} units, savings/unit={:.4}",
                before.volume, after.new_volume, after.per_unit_savings
            );
            let benefit =
                aggregate_benefit(&before, &after, operational.total, inputs.annual_iiot_cost);
            (Some(after), Vec::new(), benefit, margins.profit)
        }
        BenefitModel::IncrementalUnitMargin => {
            // 라인 모델은 단위 원가를 쓰지 않는다. 생산량이 0이면 비워 둔다.
            let after = match post_uplift_state(
                &before,
                &margins,
                inputs.capital_cost,
                settings.amortization_years,
                &inputs.production_increase_pcts,
            ) {
                Ok(after) => Some(after),
                Err(e) => {
                    debug!("post-uplift unit costs skipped: {e}");
                    None
                }
            };
            let lines = line_value_added(
                &inputs.lines,
                &inputs.production_increase_pcts,
                &inputs.enabled_metrics,
            );
            let benefit =
                aggregate_line_benefit(&lines, operational.total, inputs.annual_iiot_cost);
            let baseline = lines.iter().map(|l| l.old_profit).sum::<f64>();
            (after, lines, benefit, baseline)
        }
    };
    debug!(
        "benefit ({:?}): value_added={:.2} ops={:.2} net={:.2}",
        settings.benefit_model,
        benefit.value_added,
        benefit.operational_savings,
        benefit.net_annual_benefit
    );
    if benefit.net_annual_benefit <= 0.0 {
        warn!(
            "연간 순편익이 0 이하입니다: {:.2}",
            benefit.net_annual_benefit
        );
    }

    let bridge = ProfitBridge::new(baseline_profit, &benefit);
    let total_investment = inputs.total_investment();
    let schedule = build_schedule(
        total_investment,
        benefit.net_annual_benefit,
        inputs.horizon.years(),
        inputs.discount_rate_pct,
    );
    let summary = summarize(&schedule, total_investment, benefit.net_annual_benefit);
    if summary.payback == Payback::NotRecovered {
        warn!(
            "{}년 안에 투자비 {:.2}을(를) 회수하지 못합니다.",
            inputs.horizon.years(),
            total_investment
        );
    }

    Ok(ScenarioResult {
        benefit_model: settings.benefit_model,
        margins,
        before,
        after,
        daily_output_before,
        daily_output_after,
        lines,
        operational,
        benefit,
        bridge,
        schedule,
        summary,
    })
}
