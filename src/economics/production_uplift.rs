use super::{unit_economics, EconomicsError, MarginBreakdown, UnitEconomics};

/// 기본 연간 가동일수 [일]
pub const DEFAULT_WORKING_DAYS: f64 = 300.0;

/// IIoT 도입 후 생산량과 그 생산량에서 다시 계산한 단위 원가.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostUpliftState {
    /// 증대 후 생산량 [개/년]
    pub new_volume: f64,
    /// 증대 후 단위 원가
    pub unit: UnitEconomics,
    /// 단위당 절감액 = (도입 전 노무비+고정비) − (도입 후 노무비+고정비)
    pub per_unit_savings: f64,
}

impl PostUpliftState {
    pub fn labor_per_unit(&self) -> f64 {
        self.unit.labor_per_unit
    }

    pub fn fixed_per_unit(&self) -> f64 {
        self.unit.fixed_per_unit
    }
}

/// 생산 증대율(%)을 입력 순서대로 곱해 누적 적용한다.
///
/// 퍼센트를 먼저 합산하지 않는다. [10, 5]는 ×1.10×1.05 이다.
pub fn apply_uplift(base_volume: f64, pct_list: &[f64]) -> f64 {
    let mut new_volume = base_volume;
    for pct in pct_list {
        new_volume *= 1.0 + pct / 100.0;
    }
    new_volume
}

/// 증대 후 생산량에서 단위 원가를 다시 계산하고 단위당 절감액을 구한다.
///
/// −100% 증대로 생산량이 0이 되면 `DivisionUndefined`를 반환한다.
pub fn post_uplift_state(
    before: &UnitEconomics,
    margins: &MarginBreakdown,
    capital_cost: f64,
    amortization_years: f64,
    pct_list: &[f64],
) -> Result<PostUpliftState, EconomicsError> {
    let new_volume = apply_uplift(before.volume, pct_list);
    let unit = unit_economics(margins, capital_cost, amortization_years, new_volume)?;
    Ok(PostUpliftState {
        new_volume,
        unit,
        per_unit_savings: before.labor_and_fixed() - unit.labor_and_fixed(),
    })
}

/// 연간 생산량을 가동일수로 나눠 일 생산량을 구한다.
pub fn daily_output(volume: f64, working_days: f64) -> Result<f64, EconomicsError> {
    if working_days == 0.0 {
        return Err(EconomicsError::DivisionUndefined("가동일수가 0입니다."));
    }
    Ok(volume / working_days)
}
