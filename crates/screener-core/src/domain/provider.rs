//! 외부 데이터 제공자 트레이트.
//!
//! 시세 조회, 시가총액 조회, 과거 성과 로그 조회는 코어 밖의
//! 협력자가 담당합니다. 코어는 이 트레이트를 통해 미리 메모리에
//! 적재된 데이터를 받아 순수 계산만 수행합니다.

use async_trait::async_trait;

use crate::domain::{DailyBar, SignalHit};
use crate::error::ScreenerResult;

/// 시장 데이터 제공자.
///
/// 구현체는 여러 워커에서 동시에 호출될 수 있으므로 `Send + Sync`
/// 여야 합니다. 타임아웃/재시도 정책은 구현체 책임입니다.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// 종목의 일봉 시계열을 날짜 오름차순으로 반환합니다.
    async fn fetch_series(&self, ticker: &str) -> ScreenerResult<Vec<DailyBar>>;

    /// 종목의 시가총액(원)을 반환합니다.
    async fn fetch_capitalization(&self, ticker: &str) -> ScreenerResult<f64>;

    /// 전체 과거 시그널 히트 기록을 반환합니다.
    async fn fetch_hits(&self) -> ScreenerResult<Vec<SignalHit>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScreenerError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    /// 테스트용 인메모리 제공자.
    struct InMemoryProvider {
        series: HashMap<String, Vec<DailyBar>>,
        caps: HashMap<String, f64>,
        hits: Vec<SignalHit>,
    }

    #[async_trait]
    impl MarketDataProvider for InMemoryProvider {
        async fn fetch_series(&self, ticker: &str) -> ScreenerResult<Vec<DailyBar>> {
            self.series
                .get(ticker)
                .cloned()
                .ok_or_else(|| ScreenerError::Provider(format!("시계열 없음: {}", ticker)))
        }

        async fn fetch_capitalization(&self, ticker: &str) -> ScreenerResult<f64> {
            self.caps
                .get(ticker)
                .copied()
                .ok_or_else(|| ScreenerError::Provider(format!("시가총액 없음: {}", ticker)))
        }

        async fn fetch_hits(&self) -> ScreenerResult<Vec<SignalHit>> {
            Ok(self.hits.clone())
        }
    }

    fn sample_provider() -> InMemoryProvider {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bar = DailyBar::new(date, dec!(100), dec!(101), dec!(99), dec!(100.5), dec!(10000));

        let mut series = HashMap::new();
        series.insert("005930".to_string(), vec![bar]);

        let mut caps = HashMap::new();
        caps.insert("005930".to_string(), 4.0e14);

        InMemoryProvider {
            series,
            caps,
            hits: vec![SignalHit::new("005930", date, "돌파", 18.0)],
        }
    }

    #[tokio::test]
    async fn test_fetch_series_known_ticker() {
        let provider = sample_provider();
        let bars = provider.fetch_series("005930").await.unwrap();
        assert_eq!(bars.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_series_unknown_ticker_is_provider_error() {
        let provider = sample_provider();
        let err = provider.fetch_series("000000").await.unwrap_err();
        assert!(matches!(err, ScreenerError::Provider(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_fetch_capitalization_and_hits() {
        let provider = sample_provider();
        let cap = provider.fetch_capitalization("005930").await.unwrap();
        assert!(cap > 0.0);

        let hits = provider.fetch_hits().await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tag, "돌파");
    }
}
