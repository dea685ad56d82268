//! 변동성 지표.

use serde::{Deserialize, Serialize};

use super::{sma, IndicatorResult};

/// 볼린저 밴드 한 시점의 값.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandPoint {
    /// 상단 밴드
    pub upper: Option<f64>,
    /// 중간 밴드 (SMA)
    pub middle: Option<f64>,
    /// 하단 밴드
    pub lower: Option<f64>,
}

/// 볼린저 밴드 계산.
///
/// 중간 밴드는 `period` SMA, 상/하단은 중간 밴드 ± `k` × 표준편차입니다.
///
/// # 인자
/// * `values` - 가격 데이터 (종가)
/// * `period` - 밴드 기간
/// * `k` - 표준편차 배수
pub fn bollinger_bands(values: &[f64], period: usize, k: f64) -> IndicatorResult<Vec<BandPoint>> {
    let middle = sma(values, period)?;
    let mut result = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let point = match middle[i] {
            Some(mid) => {
                let window = &values[i + 1 - period..=i];
                let variance =
                    window.iter().map(|v| (v - mid).powi(2)).sum::<f64>() / period as f64;
                let std_dev = variance.sqrt();

                BandPoint {
                    upper: Some(mid + k * std_dev),
                    middle: Some(mid),
                    lower: Some(mid - k * std_dev),
                }
            }
            None => BandPoint {
                upper: None,
                middle: None,
                lower: None,
            },
        };
        result.push(point);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_flat_series_collapse_to_middle() {
        let values = vec![100.0; 30];
        let bands = bollinger_bands(&values, 20, 2.0).unwrap();

        let last = bands.last().unwrap();
        assert_eq!(last.middle, Some(100.0));
        assert_eq!(last.upper, Some(100.0));
        assert_eq!(last.lower, Some(100.0));
    }

    #[test]
    fn test_bands_upper_above_lower() {
        let values: Vec<f64> = (0..40).map(|i| 100.0 + (i % 5) as f64).collect();
        let bands = bollinger_bands(&values, 20, 2.0).unwrap();

        let last = bands.last().unwrap();
        assert!(last.upper.unwrap() > last.middle.unwrap());
        assert!(last.lower.unwrap() < last.middle.unwrap());
    }

    #[test]
    fn test_bands_leading_none() {
        let values = vec![100.0; 25];
        let bands = bollinger_bands(&values, 20, 2.0).unwrap();
        assert!(bands[18].middle.is_none());
        assert!(bands[19].middle.is_some());
    }
}
