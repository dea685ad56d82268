//! 시가총액 체급 가중 집계.
//!
//! 종목을 시가총액 체급(대형/중형/소형)으로 나누고, 마스터 패턴
//! 추출과 대조를 체급 안에서만 수행합니다. 체급이 다르면 같은
//! 시그널 서열이라도 다르게 움직이므로 섞지 않습니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use screener_core::{CapTier, SignalHit};

use super::extractor::{extract_master_patterns, ticker_sequences};
use super::matcher::score_dna_match;
use super::CapTierConfig;

/// 체급 가중 집계 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierScoreRow {
    /// 종목 코드
    pub ticker: String,
    /// 시가총액 체급
    pub tier: CapTier,
    /// 같은 체급 마스터 대비 원점수 (0 ~ 100)
    pub raw_pct: u32,
    /// 체급 가중 점수 (0 ~ 100)
    pub weighted_score: f64,
}

/// 체급 가중 점수를 계산합니다.
///
/// `caps`는 종목별 시가총액(원)입니다. 시가총액이 없는 종목은
/// 소형주로 취급합니다. 체급별로 마스터 패턴을 따로 추출하고,
/// 각 종목은 자기 체급의 마스터하고만 대조합니다. 가중 점수는
/// 원점수에 체급 가중치를 곱한 뒤 [0, 100]으로 클램프한 값입니다.
///
/// 결과는 히트 로그 내 종목 최초 등장 순서를 따릅니다.
pub fn score_with_cap_tier(
    hits: &[SignalHit],
    caps: &HashMap<String, f64>,
    config: &CapTierConfig,
) -> Vec<TierScoreRow> {
    let tier_of = |ticker: &str| -> CapTier {
        caps.get(ticker)
            .map(|cap| CapTier::classify(*cap))
            .unwrap_or(CapTier::Light)
    };

    // 체급별 히트 분리 후 마스터 추출
    let tiers = [CapTier::Heavy, CapTier::Middle, CapTier::Light];
    let masters: HashMap<CapTier, _> = tiers
        .into_iter()
        .map(|tier| {
            let tier_hits: Vec<SignalHit> = hits
                .iter()
                .filter(|h| tier_of(&h.ticker) == tier)
                .cloned()
                .collect();
            (tier, extract_master_patterns(&tier_hits, &config.dna))
        })
        .collect();

    ticker_sequences(hits)
        .into_iter()
        .map(|ts| {
            let tier = tier_of(&ts.ticker);
            let tier_masters = masters.get(&tier).map(Vec::as_slice).unwrap_or(&[]);
            let raw_pct = score_dna_match(&ts.sequence, tier_masters);
            let weighted_score =
                (raw_pct as f64 * config.weight_for(tier)).clamp(0.0, 100.0);

            TierScoreRow {
                ticker: ts.ticker,
                tier,
                raw_pct,
                weighted_score,
            }
        })
        .collect()
}
