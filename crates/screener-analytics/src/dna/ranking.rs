//! 승리 패턴 랭킹.
//!
//! 대조 결과 중 실제 수익을 낸 것만 모아 서열별로 묶고, 포착
//! 횟수와 평균 수익률로 순위를 매깁니다.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::DnaMatchResult;

/// 랭킹에 포함할 최소 실현 수익률 (%).
pub const DEFAULT_MIN_RETURN_PCT: f64 = 10.0;

/// 랭킹 기본 길이.
pub const DEFAULT_TOP_N: usize = 30;

/// 승리 패턴 랭킹 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinningPatternRow {
    /// 시그널 태그 서열
    pub sequence: Vec<String>,
    /// 이 서열로 수익을 포착한 종목 수
    pub capture_count: usize,
    /// 포착 건들의 평균 수익률 (%)
    pub avg_return: f64,
}

/// 대조 결과에서 승리 패턴 랭킹을 만듭니다.
///
/// 최고수익률이 `min_return_pct` 미만이거나 서열이 빈 결과는
/// 제외합니다. 동일 서열끼리 묶어 포착 횟수 내림차순, 동률이면
/// 평균 수익률 내림차순으로 정렬한 뒤 상위 `top_n`개를
/// 반환합니다.
pub fn rank_winning_patterns(
    results: &[DnaMatchResult],
    min_return_pct: f64,
    top_n: usize,
) -> Vec<WinningPatternRow> {
    let mut rows: Vec<(Vec<String>, usize, f64)> = Vec::new();

    for result in results {
        if result.max_return < min_return_pct || result.sequence.is_empty() {
            continue;
        }

        match rows.iter_mut().find(|(s, _, _)| *s == result.sequence) {
            Some((_, count, sum)) => {
                *count += 1;
                *sum += result.max_return;
            }
            None => rows.push((result.sequence.clone(), 1, result.max_return)),
        }
    }

    let mut ranked: Vec<WinningPatternRow> = rows
        .into_iter()
        .map(|(sequence, capture_count, sum)| WinningPatternRow {
            sequence,
            capture_count,
            avg_return: sum / capture_count as f64,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.capture_count.cmp(&a.capture_count).then_with(|| {
            b.avg_return
                .partial_cmp(&a.avg_return)
                .unwrap_or(Ordering::Equal)
        })
    });
    ranked.truncate(top_n);
    ranked
}
