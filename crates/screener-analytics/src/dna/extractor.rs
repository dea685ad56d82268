//! 마스터 DNA 패턴 추출.
//!
//! 성과 로그의 시그널 히트에서 성공 종목(최고수익률이 기준 이상)의
//! 시그널 서열을 모아 가장 자주 반복된 서열을 마스터 패턴으로
//! 선별합니다.

use serde::{Deserialize, Serialize};

use screener_core::SignalHit;

use super::DnaConfig;

/// 마스터 DNA 패턴.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterPattern {
    /// 시그널 태그 서열 (발생일 오름차순)
    pub sequence: Vec<String>,
    /// 이 서열을 가진 성공 종목 수
    pub occurrences: usize,
}

/// 종목 하나의 시그널 서열 요약.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSequence {
    /// 종목 코드
    pub ticker: String,
    /// 시그널 태그 서열 (발생일 오름차순, 빈 태그 제외)
    pub sequence: Vec<String>,
    /// 종목 히트 중 최고수익률 (%)
    pub best_return: f64,
}

/// 히트 로그를 종목별 서열로 묶습니다.
///
/// 종목은 입력 내 최초 등장 순서를 유지합니다. 서열은 발생일
/// 오름차순이며 같은 날짜의 히트는 입력 순서를 유지합니다
/// (안정 정렬). 빈 태그는 제외되고, 서열이 비게 된 종목은
/// 버립니다.
pub fn ticker_sequences(hits: &[SignalHit]) -> Vec<TickerSequence> {
    let mut tickers: Vec<&str> = Vec::new();
    let mut groups: Vec<Vec<&SignalHit>> = Vec::new();
    for hit in hits {
        match tickers.iter().position(|t| *t == hit.ticker) {
            Some(pos) => groups[pos].push(hit),
            None => {
                tickers.push(&hit.ticker);
                groups.push(vec![hit]);
            }
        }
    }

    let mut result = Vec::with_capacity(groups.len());
    for (ticker, mut group) in tickers.into_iter().zip(groups) {
        let best_return = group
            .iter()
            .map(|h| h.max_return)
            .fold(f64::NEG_INFINITY, f64::max);

        group.sort_by_key(|h| h.date);
        let sequence: Vec<String> = group
            .iter()
            .filter(|h| !h.tag.is_empty())
            .map(|h| h.tag.clone())
            .collect();

        if !sequence.is_empty() {
            result.push(TickerSequence {
                ticker: ticker.to_string(),
                sequence,
                best_return,
            });
        }
    }

    result
}

/// 히트 로그에서 마스터 패턴을 추출합니다.
///
/// 최고수익률이 `success_return_pct` 이상인 종목의 서열만 모아
/// 동일 서열의 등장 횟수를 세고, 많은 순으로 상위 `top_k`개를
/// 반환합니다. 횟수가 같으면 먼저 발견된 서열이 앞에 옵니다.
pub fn extract_master_patterns(hits: &[SignalHit], config: &DnaConfig) -> Vec<MasterPattern> {
    let sequences: Vec<Vec<String>> = ticker_sequences(hits)
        .into_iter()
        .filter(|ts| ts.best_return >= config.success_return_pct)
        .map(|ts| ts.sequence)
        .collect();

    // 동일 서열 집계 (최초 발견 순서 유지)
    let mut counted: Vec<(Vec<String>, usize)> = Vec::new();
    for sequence in sequences {
        match counted.iter_mut().find(|(s, _)| *s == sequence) {
            Some((_, count)) => *count += 1,
            None => counted.push((sequence, 1)),
        }
    }

    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted.truncate(config.top_k);

    counted
        .into_iter()
        .map(|(sequence, occurrences)| MasterPattern {
            sequence,
            occurrences,
        })
        .collect()
}
