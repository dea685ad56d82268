//! 일봉(OHLCV) 데이터 타입.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 하루치 OHLCV 일봉.
///
/// 날짜 오름차순으로 정렬된 시계열의 한 원소이며, 기록된 후에는
/// 변경되지 않습니다. 파생 지표(이동평균, 기울기, 밴드)는 분석
/// 시점에 온디맨드로 재계산되고 여기 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// 거래일
    pub date: NaiveDate,
    /// 시가
    pub open: Decimal,
    /// 고가
    pub high: Decimal,
    /// 저가
    pub low: Decimal,
    /// 종가
    pub close: Decimal,
    /// 거래량
    pub volume: Decimal,
}

impl DailyBar {
    /// 새 일봉을 생성합니다.
    pub fn new(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// 캔들 몸통 크기(절대값)를 반환합니다.
    pub fn body_size(&self) -> Decimal {
        (self.close - self.open).abs()
    }

    /// 캔들 범위(고가 - 저가)를 반환합니다.
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }

    /// 양봉(종가 > 시가)인지 확인합니다.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// 음봉(종가 < 시가)인지 확인합니다.
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// 대표가(고가+저가+종가 평균)를 반환합니다.
    pub fn typical_price(&self) -> Decimal {
        (self.high + self.low + self.close) / Decimal::from(3)
    }
}

/// 일봉 시계열을 날짜 오름차순으로 정렬합니다.
///
/// 제공자가 정렬을 보장하지 않는 경우 분석 전에 한 번 호출합니다.
pub fn sort_bars_ascending(bars: &mut [DailyBar]) {
    bars.sort_by_key(|b| b.date);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bar(date: NaiveDate, open: Decimal, close: Decimal) -> DailyBar {
        DailyBar::new(date, open, close.max(open), close.min(open), close, dec!(1000))
    }

    #[test]
    fn test_bullish_bearish() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(bar(d, dec!(100), dec!(105)).is_bullish());
        assert!(bar(d, dec!(105), dec!(100)).is_bearish());
    }

    #[test]
    fn test_body_and_range() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let b = DailyBar::new(d, dec!(100), dec!(110), dec!(95), dec!(105), dec!(1000));
        assert_eq!(b.body_size(), dec!(5));
        assert_eq!(b.range(), dec!(15));
        assert_eq!(b.typical_price(), dec!(310) / dec!(3));
    }

    #[test]
    fn test_sort_bars_ascending() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let mut bars = vec![bar(d2, dec!(100), dec!(101)), bar(d1, dec!(99), dec!(100))];
        sort_bars_ascending(&mut bars);
        assert_eq!(bars[0].date, d1);
        assert_eq!(bars[1].date, d2);
    }
}
