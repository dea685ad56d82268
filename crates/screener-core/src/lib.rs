//! # Screener Core
//!
//! 패턴 스크리너의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 스크리닝 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 일봉(OHLCV) 데이터 구조체
//! - 시그널 히트 기록 (과거 성과 로그)
//! - 시가총액 티어 / 등급 / 매칭 티어 열거형
//! - 외부 데이터 제공자 트레이트
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
