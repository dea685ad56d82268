//! 시그널 DNA 분석.
//!
//! 과거 성공 종목의 시그널 발생 순서를 "DNA 서열"로 추출하고,
//! 현재 종목의 서열과 대조해 유사도를 점수화합니다. 시가총액
//! 체급별 가중치를 적용한 집계까지 이 모듈 계열이 담당합니다.

pub mod cap_tier;
pub mod extractor;
pub mod matcher;
pub mod ranking;

use serde::{Deserialize, Serialize};

use screener_core::CapTier;

pub use cap_tier::{score_with_cap_tier, TierScoreRow};
pub use extractor::{extract_master_patterns, ticker_sequences, MasterPattern, TickerSequence};
pub use matcher::{score_dna_match, DnaMatchResult};
pub use ranking::{rank_winning_patterns, WinningPatternRow};

/// DNA 추출 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnaConfig {
    /// 성공 종목으로 인정할 최소 수익률 (%)
    pub success_return_pct: f64,
    /// 보존할 마스터 패턴 수
    pub top_k: usize,
}

impl Default for DnaConfig {
    fn default() -> Self {
        Self {
            success_return_pct: 15.0,
            top_k: 5,
        }
    }
}

/// 시가총액 체급 가중 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapTierConfig {
    /// 대형주 가중치
    pub heavy_weight: f64,
    /// 중형주 가중치
    pub middle_weight: f64,
    /// 소형주 가중치
    pub light_weight: f64,
    /// DNA 추출/대조 설정
    pub dna: DnaConfig,
}

impl Default for CapTierConfig {
    fn default() -> Self {
        Self {
            heavy_weight: 1.2,
            middle_weight: 1.0,
            light_weight: 0.8,
            dna: DnaConfig::default(),
        }
    }
}

impl CapTierConfig {
    /// 체급에 해당하는 가중치를 반환합니다.
    pub fn weight_for(&self, tier: CapTier) -> f64 {
        match tier {
            CapTier::Heavy => self.heavy_weight,
            CapTier::Middle => self.middle_weight,
            CapTier::Light => self.light_weight,
        }
    }
}
