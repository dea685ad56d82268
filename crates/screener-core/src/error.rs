//! 스크리닝 시스템의 에러 타입.
//!
//! 이 모듈은 스크리너 전반에서 사용되는 에러 타입을 정의합니다.
//! 분석 코어 내부의 실패는 컴포넌트 경계에서 중립 결과로 흡수되므로
//! (스크리너는 배치 분석 중 단일 종목 실패로 중단되지 않음),
//! 이 타입은 주로 데이터 공급자/설정 경계에서 사용됩니다.

use thiserror::Error;

/// 핵심 스크리너 에러.
#[derive(Debug, Error)]
pub enum ScreenerError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터 에러 (결측, 정렬 위반 등)
    #[error("데이터 에러: {0}")]
    Data(String),

    /// 외부 데이터 제공자 에러
    #[error("데이터 제공자 에러: {0}")]
    Provider(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 스크리너 작업을 위한 Result 타입.
pub type ScreenerResult<T> = Result<T, ScreenerError>;

impl ScreenerError {
    /// 재시도 가능한 에러인지 확인합니다.
    ///
    /// 제공자 측 실패만 재시도 대상입니다. 데이터/설정 에러는
    /// 입력이 바뀌지 않는 한 같은 결과가 반복됩니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ScreenerError::Provider(_))
    }
}

impl From<serde_json::Error> for ScreenerError {
    fn from(err: serde_json::Error) -> Self {
        ScreenerError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ScreenerError {
    fn from(err: config::ConfigError) -> Self {
        ScreenerError::Config(err.to_string())
    }
}
