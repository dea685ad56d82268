//! 지표 시계열.
//!
//! `DailyBar` 시계열을 `f64` 컬럼으로 들어 올려 파생 지표 계산의
//! 입력으로 사용합니다. Decimal → f64 변환은 이 경계에서만 일어나며,
//! 파생 컬럼은 호출 시마다 재계산됩니다 (원본 진실은 일봉뿐).

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use screener_core::DailyBar;

use crate::indicators::{bollinger_bands, sma, BandPoint, IndicatorResult};

/// f64 컬럼으로 변환된 일봉 시계열.
#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    /// 거래일 (날짜 미보유 시계열이면 빈 벡터)
    pub dates: Vec<NaiveDate>,
    /// 종가
    pub closes: Vec<f64>,
    /// 고가
    pub highs: Vec<f64>,
    /// 저가
    pub lows: Vec<f64>,
    /// 거래량
    pub volumes: Vec<f64>,
}

impl IndicatorSeries {
    /// 일봉 시계열로부터 생성합니다. 입력은 날짜 오름차순이어야 합니다.
    pub fn from_bars(bars: &[DailyBar]) -> Self {
        let to_f64 = |d: rust_decimal::Decimal| d.to_f64().unwrap_or(0.0);

        Self {
            dates: bars.iter().map(|b| b.date).collect(),
            closes: bars.iter().map(|b| to_f64(b.close)).collect(),
            highs: bars.iter().map(|b| to_f64(b.high)).collect(),
            lows: bars.iter().map(|b| to_f64(b.low)).collect(),
            volumes: bars.iter().map(|b| to_f64(b.volume)).collect(),
        }
    }

    /// 이미 f64인 컬럼으로부터 생성합니다.
    ///
    /// 날짜가 없는 시계열은 `dates`를 비워서 전달합니다. 이 경우
    /// 달력 기반 룩어헤드는 봉 개수 기반으로 대체됩니다.
    pub fn from_columns(
        dates: Vec<NaiveDate>,
        closes: Vec<f64>,
        highs: Vec<f64>,
        lows: Vec<f64>,
        volumes: Vec<f64>,
    ) -> Self {
        Self {
            dates,
            closes,
            highs,
            lows,
            volumes,
        }
    }

    /// 봉 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// 시계열이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// 날짜 인덱스가 있는지 확인합니다.
    pub fn has_dates(&self) -> bool {
        self.dates.len() == self.closes.len() && !self.dates.is_empty()
    }

    /// 종가 이동평균 컬럼을 계산합니다.
    pub fn ma(&self, period: usize) -> IndicatorResult<Vec<Option<f64>>> {
        sma(&self.closes, period)
    }

    /// 종가 볼린저 밴드 컬럼을 계산합니다.
    pub fn bands(&self, period: usize, k: f64) -> IndicatorResult<Vec<BandPoint>> {
        bollinger_bands(&self.closes, period, k)
    }
}
