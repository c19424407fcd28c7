/// 매출에서 이익/원가 층을 순차적으로 떼어낸 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginBreakdown {
    /// 이익 [통화]
    pub profit: f64,
    /// 이익을 제외한 매출 잔여분 [통화]
    pub revenue: f64,
    /// 판매/관리비 [통화]
    pub sales_admin_cost: f64,
    /// 제조비용 [통화]
    pub mfg_expense: f64,
    /// 재료비 [통화]
    pub material_cost: f64,
    /// 노무비 [통화]
    pub labor_cost: f64,
}

/// 매출과 각 단계 마진(%)으로 이익/원가 구성을 계산한다.
///
/// 각 퍼센트는 직전 단계의 잔여분에 적용된다. 합이 100일 필요는 없다.
/// - 이익 = 매출 × 이익률
/// - 판관비 = (매출 − 이익) × 판관비율
/// - 재료비/노무비 = 제조비용 × 각 비율
pub fn compute_margins(
    turnover: f64,
    profit_pct: f64,
    admin_pct: f64,
    material_pct: f64,
    labor_pct: f64,
) -> MarginBreakdown {
    let profit = turnover * profit_pct / 100.0;
    let revenue = turnover - profit;
    let sales_admin_cost = revenue * admin_pct / 100.0;
    let mfg_expense = revenue - sales_admin_cost;
    MarginBreakdown {
        profit,
        revenue,
        sales_admin_cost,
        mfg_expense,
        material_cost: mfg_expense * material_pct / 100.0,
        labor_cost: mfg_expense * labor_pct / 100.0,
    }
}
