//! 추세 지표.
//!
//! 이동평균과 그 기울기, 크로스 감지를 제공합니다.

use super::{IndicatorError, IndicatorResult};

/// 단순 이동평균 (SMA) 계산.
///
/// # 인자
/// * `values` - 가격 데이터
/// * `period` - 이동평균 기간
///
/// # 반환
/// 각 시점의 SMA 값 (처음 period-1개는 None)
pub fn sma(values: &[f64], period: usize) -> IndicatorResult<Vec<Option<f64>>> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "기간은 0보다 커야 합니다".to_string(),
        ));
    }

    if values.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: period,
            provided: values.len(),
        });
    }

    let mut result = Vec::with_capacity(values.len());
    let mut window_sum = 0.0;

    for (i, value) in values.iter().enumerate() {
        window_sum += value;
        if i >= period {
            window_sum -= values[i - period];
        }

        if i + 1 >= period {
            result.push(Some(window_sum / period as f64));
        } else {
            result.push(None);
        }
    }

    Ok(result)
}

/// 이동평균의 일당 퍼센트 기울기 계산.
///
/// `lag` 구간 전 값 대비 변화율을 구간 길이로 나누어 일당 %로
/// 정규화합니다: `(v[t]/v[t-lag] - 1) × 100 / lag`.
///
/// # 반환
/// 각 시점의 기울기 (기준값이 없거나 0 이하이면 None)
pub fn pct_slope(values: &[Option<f64>], lag: usize) -> IndicatorResult<Vec<Option<f64>>> {
    if lag == 0 {
        return Err(IndicatorError::InvalidParameter(
            "지연 구간은 0보다 커야 합니다".to_string(),
        ));
    }

    let mut result = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let slope = if i >= lag {
            match (values[i], values[i - lag]) {
                (Some(curr), Some(prev)) if prev > 0.0 => {
                    Some((curr / prev - 1.0) * 100.0 / lag as f64)
                }
                _ => None,
            }
        } else {
            None
        };
        result.push(slope);
    }

    Ok(result)
}

/// 골든 크로스 감지.
///
/// 단기 이동평균이 장기 이동평균을 상향 돌파하는 시점.
/// 이전: 단기 < 장기, 현재: 단기 > 장기
///
/// # 반환
/// 각 시점에서 골든 크로스 발생 여부
#[allow(clippy::needless_range_loop)]
pub fn golden_cross_points(short_ma: &[Option<f64>], long_ma: &[Option<f64>]) -> Vec<bool> {
    let mut result = vec![false; short_ma.len()];

    for i in 1..short_ma.len().min(long_ma.len()) {
        if let (Some(prev_short), Some(prev_long), Some(curr_short), Some(curr_long)) = (
            short_ma[i - 1],
            long_ma[i - 1],
            short_ma[i],
            long_ma[i],
        ) {
            result[i] = prev_short < prev_long && curr_short > curr_long;
        }
    }

    result
}

/// 후행 평균 계산.
///
/// 시계열 끝에서 `period`개 값의 평균을 반환합니다.
/// 돌파 거래량 게이트는 윈도우 절단 전의 전체 시계열에 대해
/// 이 평균을 사용합니다.
pub fn trailing_mean(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let tail = &values[values.len() - period..];
    Some(tail.iter().sum::<f64>() / period as f64)
}
