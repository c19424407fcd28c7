/// 회수 시점. 분석 기간 안에 회수되지 않으면 `NotRecovered`이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payback {
    /// 누적 현금흐름이 처음 0 이상이 된 연도(1 이상)
    RecoveredIn(u32),
    /// 분석 기간 내 미회수. 기간 밖으로 외삽하지 않는다.
    NotRecovered,
}

impl Payback {
    pub fn year(self) -> Option<u32> {
        match self {
            Payback::RecoveredIn(year) => Some(year),
            Payback::NotRecovered => None,
        }
    }
}

/// 연도별 현금흐름 한 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowYear {
    pub year: u32,
    /// 해당 연도 현금흐름
    pub cash_flow: f64,
    /// 누적 현금흐름
    pub cumulative: f64,
    /// 해당 연도까지의 누적 순현재가치
    pub npv: f64,
    /// 누적 현금흐름 / 총 투자비 × 100 [%]
    pub roi_pct: f64,
}

/// 0년차부터 분석 기간까지의 현금흐름표.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowSchedule {
    pub rows: Vec<CashFlowYear>,
}

impl CashFlowSchedule {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CashFlowYear> {
        self.rows.iter()
    }

    pub fn cumulative(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.cumulative).collect()
    }

    /// 0년차를 제외하고 누적 현금흐름이 처음 0 이상이 되는 연도.
    pub fn payback(&self) -> Payback {
        self.rows
            .iter()
            .find(|r| r.year > 0 && r.cumulative >= 0.0)
            .map_or(Payback::NotRecovered, |r| Payback::RecoveredIn(r.year))
    }

    /// 마지막 연도 NPV.
    pub fn final_npv(&self) -> f64 {
        self.rows.last().map_or(0.0, |r| r.npv)
    }

    /// 마지막 연도 ROI [%].
    pub fn final_roi_pct(&self) -> f64 {
        self.rows.last().map_or(0.0, |r| r.roi_pct)
    }
}

/// 현금흐름을 연도만큼 할인한 현재가치.
pub fn present_value(cash_flow: f64, discount_rate_pct: f64, year: u32) -> f64 {
    let rate = discount_rate_pct / 100.0;
    cash_flow / (1.0 + rate).powi(year as i32)
}

/// 투자비 대비 비율[%]. 투자비가 0이면 실패하지 않고 0을 돌려준다.
pub fn ratio_to_investment_pct(value: f64, total_investment: f64) -> f64 {
    if total_investment > 0.0 {
        value / total_investment * 100.0
    } else {
        0.0
    }
}

/// 연도별 현금흐름표를 만든다.
///
/// - 0년차: 현금흐름 = −총 투자비, 할인하지 않는다.
/// - y년차(y ≥ 1): 현금흐름 = 연간 순편익(매년 동일), NPV는 (1+r)^y로 할인해 누적.
pub fn build_schedule(
    total_investment: f64,
    net_annual_benefit: f64,
    years: u32,
    discount_rate_pct: f64,
) -> CashFlowSchedule {
    let mut rows = Vec::with_capacity(years as usize + 1);
    let mut cumulative = 0.0;
    let mut npv = 0.0;
    for year in 0..=years {
        let cash_flow = if year == 0 {
            -total_investment
        } else {
            net_annual_benefit
        };
        cumulative += cash_flow;
        npv += if year == 0 {
            cash_flow
        } else {
            present_value(cash_flow, discount_rate_pct, year)
        };
        rows.push(CashFlowYear {
            year,
            cash_flow,
            cumulative,
            npv,
            roi_pct: ratio_to_investment_pct(cumulative, total_investment),
        });
    }
    CashFlowSchedule { rows }
}

/// 투자 지표 요약.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentSummary {
    pub total_investment: f64,
    pub net_annual_benefit: f64,
    /// 분석 기간 말 ROI [%]
    pub final_roi_pct: f64,
    /// 분석 기간 말 NPV
    pub final_npv: f64,
    pub payback: Payback,
    /// 연간 순편익 / 총 투자비 × 100 [%]
    pub annual_return_pct: f64,
    /// 1년차~말년 현재가치 합 / 총 투자비 × 100 [%]
    pub discounted_roi_pct: f64,
    /// 총 투자비 / 연간 순편익 [년]. 순편익이 0 이하이면 없음.
    pub simple_payback_years: Option<f64>,
}

impl InvestmentSummary {
    /// 단순 회수기간 [월].
    pub fn simple_payback_months(&self) -> Option<f64> {
        self.simple_payback_years.map(|y| y * 12.0)
    }
}

/// 현금흐름표에서 요약 지표를 뽑는다.
pub fn summarize(
    schedule: &CashFlowSchedule,
    total_investment: f64,
    net_annual_benefit: f64,
) -> InvestmentSummary {
    // 0년차 NPV가 −투자비이므로 이를 되돌리면 1년차 이후 현재가치 합이 된다.
    let pv_sum = schedule.final_npv() + total_investment;
    let simple_payback_years = if net_annual_benefit > 0.0 {
        Some(total_investment / net_annual_benefit)
    } else {
        None
    };
    InvestmentSummary {
        total_investment,
        net_annual_benefit,
        final_roi_pct: schedule.final_roi_pct(),
        final_npv: schedule.final_npv(),
        payback: schedule.payback(),
        annual_return_pct: ratio_to_investment_pct(net_annual_benefit, total_investment),
        discounted_roi_pct: ratio_to_investment_pct(pv_sum, total_investment),
        simple_payback_years,
    }
}
