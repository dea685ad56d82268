//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 수준 설정을 정의하고 관리합니다.
//! 분석 컴포넌트별 임계값(삼각형/콤보/DNA 설정)은 각 컴포넌트의
//! 불변 설정 구조체로 전달되며, 여기서는 실행 환경 설정만 다룹니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 스크리닝 기본값 설정
    #[serde(default)]
    pub screening: ScreeningConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 스크리닝 기본값 설정.
///
/// 배치 오케스트레이션 계층이 컴포넌트 설정을 구성할 때 사용하는
/// 상위 수준 기본값입니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScreeningConfig {
    /// 콤보 평가에 필요한 최소 일봉 개수
    pub min_history_bars: usize,
    /// DNA 추출 성공 기준 수익률 (%)
    pub dna_success_return: f64,
    /// 유지할 마스터 패턴 개수 (top-K)
    pub dna_top_k: usize,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            min_history_bars: 60,
            dna_success_return: 15.0,
            dna_top_k: 5,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값에서 시작하고, `SCREENER_` 접두사의
    /// 환경 변수로 오버라이드할 수 있습니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("screening.min_history_bars", 60)?
            .set_default("screening.dna_success_return", 15.0)?
            .set_default("screening.dna_top_k", 5)?
            // 파일에서 로드 (없어도 됨)
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("SCREENER")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screening_config() {
        let config = ScreeningConfig::default();
        assert_eq!(config.min_history_bars, 60);
        assert_eq!(config.dna_top_k, 5);
        assert!((config.dna_success_return - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("config/definitely-not-there.toml").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.screening.min_history_bars, 60);
    }
}
