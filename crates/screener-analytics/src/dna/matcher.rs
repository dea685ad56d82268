//! DNA 서열 대조.
//!
//! 현재 종목의 시그널 서열을 마스터 패턴들과 대조해 0~100
//! 유사도 점수를 냅니다. 유사도는 태그 집합 교집합 비율이며,
//! 서열이 순서까지 완전히 일치하면 보너스가 붙습니다.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use screener_core::{CapTier, MatchTier};

use super::MasterPattern;

/// 서열 완전 일치 보너스.
const EXACT_MATCH_BONUS: f64 = 10.0;

/// 현재 서열과 마스터 패턴들의 최대 유사도를 계산합니다.
///
/// 마스터별 점수는 `|교집합| / |마스터 태그 집합| × 100`이고,
/// 서열이 순서 포함 완전히 일치하면 10점을 더합니다. 모든 마스터
/// 중 최댓값을 [0, 100]으로 클램프한 뒤 소수부를 버려 반환합니다.
/// 마스터가 없으면 0입니다.
pub fn score_dna_match(current: &[String], masters: &[MasterPattern]) -> u32 {
    let current_set: HashSet<&str> = current.iter().map(String::as_str).collect();

    let mut best = 0.0f64;
    for master in masters {
        let master_set: HashSet<&str> = master.sequence.iter().map(String::as_str).collect();
        if master_set.is_empty() {
            continue;
        }

        let intersection = master_set.intersection(&current_set).count();
        let mut score = intersection as f64 / master_set.len() as f64 * 100.0;
        if master.sequence == current {
            score += EXACT_MATCH_BONUS;
        }
        best = best.max(score);
    }

    best.clamp(0.0, 100.0) as u32
}

/// 종목 하나의 DNA 대조 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaMatchResult {
    /// 종목 코드
    pub ticker: String,
    /// 현재 시그널 서열
    pub sequence: Vec<String>,
    /// 유사도 점수 (0 ~ 100)
    pub match_pct: u32,
    /// 대조 등급
    pub match_tier: MatchTier,
    /// 해당 종목의 최고수익률 (%)
    pub max_return: f64,
    /// 시가총액 체급
    pub cap_tier: CapTier,
}

impl DnaMatchResult {
    /// 서열을 대조해 결과 레코드를 만듭니다.
    pub fn evaluate(
        ticker: impl Into<String>,
        sequence: Vec<String>,
        masters: &[MasterPattern],
        max_return: f64,
        cap_tier: CapTier,
    ) -> Self {
        let match_pct = score_dna_match(&sequence, masters);
        Self {
            ticker: ticker.into(),
            sequence,
            match_pct,
            match_tier: MatchTier::from_percent(match_pct),
            max_return,
            cap_tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master(tags: &[&str], occurrences: usize) -> MasterPattern {
        MasterPattern {
            sequence: tags.iter().map(|t| t.to_string()).collect(),
            occurrences,
        }
    }

    fn seq(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_exact_match_caps_at_100() {
        let masters = vec![master(&["돌파", "눌림"], 3)];
        // 교집합 100 + 완전 일치 10 → 100 클램프
        assert_eq!(score_dna_match(&seq(&["돌파", "눌림"]), &masters), 100);
    }

    #[test]
    fn test_partial_overlap() {
        let masters = vec![master(&["돌파", "눌림", "횡보"], 2)];
        // 교집합 1/3 → 33.33… → 33으로 절사
        assert_eq!(score_dna_match(&seq(&["돌파"]), &masters), 33);
    }

    #[test]
    fn test_same_set_different_order_no_bonus() {
        let masters = vec![master(&["돌파", "눌림"], 2)];
        // 집합은 같지만 순서가 달라 보너스 없음
        assert_eq!(score_dna_match(&seq(&["눌림", "돌파"]), &masters), 100);
    }

    #[test]
    fn test_bonus_visible_below_clamp() {
        // 교집합 2/4 = 50, 완전 일치 아님 → 50
        let masters = vec![master(&["a", "b", "c", "d"], 1)];
        assert_eq!(score_dna_match(&seq(&["a", "b"]), &masters), 50);

        // 완전 일치 서열이 절반 크기 집합과도 비교될 때 최댓값 선택
        let masters = vec![master(&["a", "b", "c", "d"], 1), master(&["a", "b"], 1)];
        // 두 번째 마스터: 교집합 100 + 보너스 10 → 클램프 100
        assert_eq!(score_dna_match(&seq(&["a", "b"]), &masters), 100);
    }

    #[test]
    fn test_no_masters_is_zero() {
        assert_eq!(score_dna_match(&seq(&["돌파"]), &[]), 0);
    }

    #[test]
    fn test_no_overlap_is_zero() {
        let masters = vec![master(&["돌파"], 1)];
        assert_eq!(score_dna_match(&seq(&["횡보"]), &masters), 0);
    }

    #[test]
    fn test_evaluate_builds_tier() {
        let masters = vec![master(&["돌파", "눌림"], 2)];
        let result = DnaMatchResult::evaluate(
            "005930",
            seq(&["돌파", "눌림"]),
            &masters,
            22.0,
            CapTier::Heavy,
        );

        assert_eq!(result.match_pct, 100);
        assert_eq!(result.match_tier, MatchTier::ExactLegend);
        assert_eq!(result.cap_tier, CapTier::Heavy);
    }
}
