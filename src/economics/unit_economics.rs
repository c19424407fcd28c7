use super::{EconomicsError, MarginBreakdown};

/// 설비 투자비 정액 상각 기본 기간 [년]
pub const DEFAULT_AMORTIZATION_YEARS: f64 = 10.0;

/// 특정 생산량에서의 단위당 원가.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEconomics {
    /// 기준 생산량 [개/년]
    pub volume: f64,
    /// 단위당 제조원가
    pub cost_per_unit: f64,
    /// 단위당 재료비
    pub material_per_unit: f64,
    /// 단위당 노무비
    pub labor_per_unit: f64,
    /// 단위당 고정비(설비 상각분)
    pub fixed_per_unit: f64,
}

impl UnitEconomics {
    /// 노무비 + 고정비. 절감액 계산의 기준이 된다.
    pub fn labor_and_fixed(&self) -> f64 {
        self.labor_per_unit + self.fixed_per_unit
    }
}

/// 비용을 생산량으로 나눈다. 생산량이 0이면 정의되지 않는다.
pub fn per_unit(cost_figure: f64, volume: f64) -> Result<f64, EconomicsError> {
    if volume == 0.0 {
        return Err(EconomicsError::DivisionUndefined("생산량이 0입니다."));
    }
    Ok(cost_figure / volume)
}

/// 설비 투자비의 연간 정액 상각액을 계산한다.
pub fn annual_amortization(
    capital_cost: f64,
    amortization_years: f64,
) -> Result<f64, EconomicsError> {
    if amortization_years == 0.0 {
        return Err(EconomicsError::DivisionUndefined("상각 기간이 0입니다."));
    }
    Ok(capital_cost / amortization_years)
}

/// 제조비용 구성과 생산량으로 단위 원가를 계산한다.
pub fn unit_economics(
    margins: &MarginBreakdown,
    capital_cost: f64,
    amortization_years: f64,
    volume: f64,
) -> Result<UnitEconomics, EconomicsError> {
    let amortization = annual_amortization(capital_cost, amortization_years)?;
    Ok(UnitEconomics {
        volume,
        cost_per_unit: per_unit(margins.mfg_expense, volume)?,
        material_per_unit: per_unit(margins.material_cost, volume)?,
        labor_per_unit: per_unit(margins.labor_cost, volume)?,
        fixed_per_unit: per_unit(amortization, volume)?,
    })
}
