//! 기술적 지표 모듈.
//!
//! 패턴 감지와 콤보 스코어링에 필요한 파생 컬럼 계산을 제공합니다.
//! 도메인 가격은 `Decimal`이지만 회귀/기하 계산이 많은 이 계층은
//! `IndicatorSeries` 경계에서 `f64`로 변환된 값 위에서 동작합니다.
//!
//! # 지원 지표
//!
//! - **SMA**: 단순 이동평균
//! - **퍼센트 기울기**: 지연 구간 대비 일당 변화율
//! - **골든 크로스 감지**
//! - **볼린저 밴드**
//! - **후행 평균 거래량**

pub mod trend;
pub mod volatility;

use thiserror::Error;

pub use trend::{golden_cross_points, pct_slope, sma, trailing_mean};
pub use volatility::{bollinger_bands, BandPoint};

/// 지표 계산 오류.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// 데이터 부족 오류
    #[error("데이터가 부족합니다: 필요 {required}개, 제공 {provided}개")]
    InsufficientData { required: usize, provided: usize },

    /// 잘못된 파라미터
    #[error("잘못된 파라미터: {0}")]
    InvalidParameter(String),

    /// 필요한 파생 컬럼 부재
    #[error("파생 컬럼이 없습니다: {0}")]
    MissingColumn(String),

    /// 계산 오류
    #[error("계산 오류: {0}")]
    Calculation(String),
}

/// 지표 계산 결과 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;
