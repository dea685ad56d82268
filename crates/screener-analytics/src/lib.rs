//! # Screener Analytics
//!
//! 패턴 분석 엔진 크레이트입니다. 일봉 시계열에서 삼각 수렴 기하를
//! 감지하고, 이동평균 조건("종베")과 지지선 이력을 더해 0~100 콤보
//! 점수를 만들며, 과거 성과 로그의 시그널 서열(DNA)을 추출/대조해
//! 체급 가중 점수로 집계합니다.
//!
//! ## 주요 기능
//!
//! - **지표**: SMA, 퍼센트 기울기, 골든 크로스, 볼린저 밴드
//! - **삼각 수렴**: 피봇 + 추세선 기하 기반 패턴 분류
//! - **콤보 스코어링**: 종베 + 삼각 + 지지선 → 점수/등급
//! - **시그널 DNA**: 마스터 패턴 추출, 서열 대조, 승리 패턴 랭킹,
//!   시가총액 체급 가중 집계
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use screener_analytics::PatternScreener;
//!
//! let screener = PatternScreener::with_defaults();
//! let outcome = screener.detect_triangle_combo("005930", &bars);
//! if let Some(result) = outcome.scored() {
//!     println!("{} 점수 {} 등급 {:?}", result.ticker, result.score, result.grade);
//! }
//! ```

pub mod combo;
pub mod dna;
pub mod indicators;
pub mod pivots;
pub mod screener;
pub mod series;
pub mod support;
pub mod trendline;
pub mod triangle;

pub use combo::{ComboConfig, ComboOutcome, ComboResult, ComboScorer, JongbeSignal, SkipReason};
pub use dna::{
    extract_master_patterns, rank_winning_patterns, score_dna_match, score_with_cap_tier,
    CapTierConfig, DnaConfig, DnaMatchResult, MasterPattern, TierScoreRow, WinningPatternRow,
};
pub use screener::PatternScreener;
pub use series::IndicatorSeries;
pub use support::{support_dna_ratio, SupportConfig};
pub use triangle::{
    NoPatternReason, TriangleConfidence, TriangleConfig, TriangleDetector, TriangleKind,
    TriangleOutcome, TrianglePattern,
};
