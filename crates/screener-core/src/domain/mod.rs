//! 스크리너 도메인 모델.
//!
//! 분석 코어와 외부 협력자(데이터 제공자, 리포팅)가 공유하는
//! 타입들을 정의합니다.

pub mod bar;
pub mod grade;
pub mod hit;
pub mod provider;
pub mod tier;

pub use bar::DailyBar;
pub use grade::{Grade, MatchTier};
pub use hit::SignalHit;
pub use provider::MarketDataProvider;
pub use tier::CapTier;
