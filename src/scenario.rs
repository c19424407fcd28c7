//! 한 번의 평가에 쓰이는 시나리오 입력과 입력 경계 검증.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// 생산 라인 최대 개수
pub const MAX_LINES: usize = 10;
/// 생산 증대율 입력 최대 개수
pub const MAX_PRODUCTION_INCREASES: usize = 5;

/// 분석 기간. 3/5/7/10년 중 하나만 허용한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum AnalysisHorizon {
    Three,
    #[default]
    Five,
    Seven,
    Ten,
}

impl AnalysisHorizon {
    pub const ALL: [AnalysisHorizon; 4] = [
        AnalysisHorizon::Three,
        AnalysisHorizon::Five,
        AnalysisHorizon::Seven,
        AnalysisHorizon::Ten,
    ];

    pub fn years(self) -> u32 {
        match self {
            AnalysisHorizon::Three => 3,
            AnalysisHorizon::Five => 5,
            AnalysisHorizon::Seven => 7,
            AnalysisHorizon::Ten => 10,
        }
    }
}

impl TryFrom<u32> for AnalysisHorizon {
    type Error = ScenarioError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(AnalysisHorizon::Three),
            5 => Ok(AnalysisHorizon::Five),
            7 => Ok(AnalysisHorizon::Seven),
            10 => Ok(AnalysisHorizon::Ten),
            other => Err(ScenarioError::InvalidHorizon(other)),
        }
    }
}

impl From<AnalysisHorizon> for u32 {
    fn from(value: AnalysisHorizon) -> Self {
        value.years()
    }
}

/// 사용자가 켜고 끌 수 있는 선택 지표.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    ProductionVolume,
    AverageCost,
    AveragePrice,
    DowntimeReduction,
    MaintenanceCost,
    LaborCost,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::ProductionVolume,
        Metric::AverageCost,
        Metric::AveragePrice,
        Metric::DowntimeReduction,
        Metric::MaintenanceCost,
        Metric::LaborCost,
    ];
}

/// 켜진 지표 집합. 꺼진 지표의 입력은 0으로 취급한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnabledMetrics(BTreeSet<Metric>);

impl EnabledMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Metric::ALL.into_iter().collect()
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.0.contains(&metric)
    }

    pub fn enable(&mut self, metric: Metric) {
        self.0.insert(metric);
    }

    pub fn disable(&mut self, metric: Metric) {
        self.0.remove(&metric);
    }

    /// 지표가 켜져 있으면 값을, 꺼져 있으면 0을 돌려준다.
    pub fn value_or_zero(&self, metric: Metric, value: f64) -> f64 {
        if self.contains(metric) {
            value
        } else {
            0.0
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Metric> for EnabledMetrics {
    fn from_iter<T: IntoIterator<Item = Metric>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 라인별 평균 단가/원가/생산량.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionLine {
    /// 평균 판매 단가
    pub avg_unit_price: f64,
    /// 평균 단위 원가
    pub avg_unit_cost: f64,
    /// 평균 생산량 [개/년]
    pub units: f64,
}

impl Default for ProductionLine {
    fn default() -> Self {
        Self {
            avg_unit_price: 100.0,
            avg_unit_cost: 100.0,
            units: 100.0,
        }
    }
}

/// 유지보수/노무비/가동중단 개선 입력. 비율은 매출 대비 %.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalInputs {
    pub maintenance_before_pct: f64,
    pub maintenance_after_pct: f64,
    pub labor_before_pct: f64,
    pub labor_after_pct: f64,
    /// 현재 가동중단 기간 [월]
    pub downtime_before_months: f64,
    /// IIoT 도입 후 가동중단 기간 [월]
    pub downtime_after_months: f64,
}

/// 시나리오 입력 전체. 평가 한 번에 한 벌씩 쓰인다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    /// 연 매출
    pub turnover: f64,
    /// 이익률 [%]
    pub profit_margin_pct: f64,
    /// 판매/관리비율 [%]
    pub sales_admin_margin_pct: f64,
    /// 재료비율 [%]
    pub material_margin_pct: f64,
    /// 노무비율 [%]
    pub labor_margin_pct: f64,
    /// 연간 생산량 [개]
    pub units_per_year: f64,
    /// 설비 투자비
    pub capital_cost: f64,
    /// IIoT 라이선스 비용(일회성)
    pub license_cost: f64,
    /// 구축 비용(일회성)
    pub implementation_cost: f64,
    /// 생산 증대율 목록 [%], 입력 순서대로 누적 적용
    pub production_increase_pcts: Vec<f64>,
    /// 연간 IIoT 구독/유지 비용
    pub annual_iiot_cost: f64,
    pub operational: OperationalInputs,
    pub enabled_metrics: EnabledMetrics,
    pub lines: Vec<ProductionLine>,
    pub horizon: AnalysisHorizon,
    /// 할인율 [%]
    pub discount_rate_pct: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            turnover: 1_000_000.0,
            profit_margin_pct: 10.0,
            sales_admin_margin_pct: 10.0,
            material_margin_pct: 40.0,
            labor_margin_pct: 20.0,
            units_per_year: 5000.0,
            capital_cost: 1_000_000.0,
            license_cost: 50_000.0,
            implementation_cost: 25_000.0,
            production_increase_pcts: vec![15.0],
            annual_iiot_cost: 10_000.0,
            operational: OperationalInputs::default(),
            enabled_metrics: EnabledMetrics::default(),
            lines: vec![ProductionLine::default()],
            horizon: AnalysisHorizon::default(),
            discount_rate_pct: 10.0,
        }
    }
}

/// 입력 경계에서 거르는 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    /// 유한한 수가 아닌 입력(NaN, inf)
    #[error("{field} 값은 유한한 수여야 합니다: {value}")]
    NotFinite { field: &'static str, value: f64 },
    /// 음수가 허용되지 않는 입력
    #[error("{field} 값은 음수일 수 없습니다: {value}")]
    Negative { field: &'static str, value: f64 },
    /// 허용 범위를 벗어난 입력
    #[error("{field} 값 {value}이(가) 허용 범위 [{min}, {max}]를 벗어났습니다")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// 3/5/7/10 이외의 분석 기간
    #[error("분석 기간은 3/5/7/10년 중 하나여야 합니다: {0}")]
    InvalidHorizon(u32),
    /// 생산 라인 개수 오류
    #[error("생산 라인은 1~10개여야 합니다: {0}")]
    LineCount(usize),
    /// 생산 증대율 개수 오류
    #[error("생산 증대율은 1~5개여야 합니다: {0}")]
    IncreaseCount(usize),
}

fn finite(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    if !value.is_finite() {
        return Err(ScenarioError::NotFinite { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ScenarioError::Negative { field, value });
    }
    Ok(())
}

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ScenarioError> {
    finite(field, value)?;
    if value < min || value > max {
        return Err(ScenarioError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl ScenarioInputs {
    /// 총 일회성 투자비 = 라이선스 + 구축비.
    pub fn total_investment(&self) -> f64 {
        self.license_cost + self.implementation_cost
    }

    /// 입력 경계 검증. 계산 엔진은 이 검증을 통과한 입력만 받는다고 가정한다.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        non_negative("turnover", self.turnover)?;
        non_negative("profit_margin_pct", self.profit_margin_pct)?;
        non_negative("sales_admin_margin_pct", self.sales_admin_margin_pct)?;
        non_negative("material_margin_pct", self.material_margin_pct)?;
        non_negative("labor_margin_pct", self.labor_margin_pct)?;
        within("units_per_year", self.units_per_year, 1.0, f64::INFINITY)?;
        non_negative("capital_cost", self.capital_cost)?;
        non_negative("license_cost", self.license_cost)?;
        non_negative("implementation_cost", self.implementation_cost)?;
        non_negative("annual_iiot_cost", self.annual_iiot_cost)?;
        non_negative("discount_rate_pct", self.discount_rate_pct)?;

        let count = self.production_increase_pcts.len();
        if count == 0 || count > MAX_PRODUCTION_INCREASES {
            return Err(ScenarioError::IncreaseCount(count));
        }
        for &pct in &self.production_increase_pcts {
            within("production_increase_pct", pct, -100.0, 100.0)?;
        }

        let ops = &self.operational;
        non_negative("maintenance_before_pct", ops.maintenance_before_pct)?;
        non_negative("maintenance_after_pct", ops.maintenance_after_pct)?;
        non_negative("labor_before_pct", ops.labor_before_pct)?;
        non_negative("labor_after_pct", ops.labor_after_pct)?;
        non_negative("downtime_before_months", ops.downtime_before_months)?;
        non_negative("downtime_after_months", ops.downtime_after_months)?;

        if self.lines.is_empty() || self.lines.len() > MAX_LINES {
            return Err(ScenarioError::LineCount(self.lines.len()));
        }
        for line in &self.lines {
            non_negative("avg_unit_price", line.avg_unit_price)?;
            non_negative("avg_unit_cost", line.avg_unit_cost)?;
            non_negative("units", line.units)?;
        }
        Ok(())
    }
}
