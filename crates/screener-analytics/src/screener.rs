//! 패턴 스크리너 파사드.
//!
//! 콤보 스코어링과 DNA 분석을 설정 한 벌로 묶은 진입점입니다.
//! 내부 상태를 갖지 않으므로 `&self` 호출만으로 여러 워커에서
//! 공유해도 안전합니다.

use std::collections::HashMap;

use screener_core::{DailyBar, SignalHit};

use crate::combo::{ComboConfig, ComboOutcome, ComboScorer};
use crate::dna::{
    self, CapTierConfig, DnaMatchResult, MasterPattern, TierScoreRow, WinningPatternRow,
};

/// 패턴 스크리너.
#[derive(Debug, Clone, Default)]
pub struct PatternScreener {
    combo: ComboScorer,
    cap_tier: CapTierConfig,
}

impl PatternScreener {
    /// 설정으로 스크리너를 생성합니다.
    pub fn new(combo: ComboConfig, cap_tier: CapTierConfig) -> Self {
        Self {
            combo: ComboScorer::new(combo),
            cap_tier,
        }
    }

    /// 기본 설정으로 스크리너를 생성합니다.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// 삼각 수렴 + 종베 콤보를 평가합니다.
    pub fn detect_triangle_combo(&self, ticker: &str, bars: &[DailyBar]) -> ComboOutcome {
        self.combo.evaluate(ticker, bars)
    }

    /// 성과 로그에서 마스터 DNA 패턴을 추출합니다.
    pub fn extract_master_patterns(&self, hits: &[SignalHit]) -> Vec<MasterPattern> {
        dna::extract_master_patterns(hits, &self.cap_tier.dna)
    }

    /// 현재 서열과 마스터 패턴의 유사도를 계산합니다.
    pub fn score_dna_match(&self, current: &[String], masters: &[MasterPattern]) -> u32 {
        dna::score_dna_match(current, masters)
    }

    /// 대조 결과에서 승리 패턴 랭킹을 만듭니다.
    pub fn rank_winning_patterns(
        &self,
        results: &[DnaMatchResult],
        min_return_pct: f64,
        top_n: usize,
    ) -> Vec<WinningPatternRow> {
        dna::rank_winning_patterns(results, min_return_pct, top_n)
    }

    /// 체급 가중 점수를 계산합니다.
    pub fn score_with_cap_tier(
        &self,
        hits: &[SignalHit],
        caps: &HashMap<String, f64>,
    ) -> Vec<TierScoreRow> {
        dna::score_with_cap_tier(hits, caps, &self.cap_tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_screener_is_shareable() {
        assert_send_sync::<PatternScreener>();
    }

    #[test]
    fn test_empty_inputs_are_neutral() {
        let screener = PatternScreener::with_defaults();

        assert!(screener.extract_master_patterns(&[]).is_empty());
        assert_eq!(screener.score_dna_match(&[], &[]), 0);
        assert!(screener
            .score_with_cap_tier(&[], &HashMap::new())
            .is_empty());
    }
}
