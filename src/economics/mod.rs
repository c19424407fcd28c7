//! 재무 투영 엔진 모듈 모음.
//! 마진 폭포 → 단위 원가 → 생산 증대 → 편익 집계 → 투자 분석 순으로 데이터가 흐른다.

pub mod benefit;
pub mod evaluation;
pub mod investment;
pub mod margin_waterfall;
pub mod production_uplift;
pub mod unit_economics;

pub use benefit::*;
pub use evaluation::*;
pub use investment::*;
pub use margin_waterfall::*;
pub use production_uplift::*;
pub use unit_economics::*;

/// 재무 계산 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EconomicsError {
    /// 분모가 0이라 값이 정의되지 않는 경우
    #[error("0으로 나눌 수 없음: {0}")]
    DivisionUndefined(&'static str),
}
