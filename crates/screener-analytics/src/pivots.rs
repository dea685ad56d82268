//! 피봇 포인트 감지.
//!
//! 추세선의 앵커가 되는 국소 극값(고점/저점)을 찾습니다.

use serde::{Deserialize, Serialize};

/// 국소 극값 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    /// 윈도우 내 봉 인덱스
    pub index: usize,
    /// 극값 가격
    pub price: f64,
}

/// 감지된 피봇 고점/저점 집합.
#[derive(Debug, Clone, Default)]
pub struct PivotSet {
    /// 피봇 고점 (인덱스 오름차순)
    pub highs: Vec<Pivot>,
    /// 피봇 저점 (인덱스 오름차순)
    pub lows: Vec<Pivot>,
}

/// 피봇 고점/저점을 감지합니다.
///
/// 인덱스 `i`는 중심 대칭 윈도우(`2n+1` 폭) 안에서 고가가 유일한
/// 최대값일 때 피봇 고점입니다. 동률 극값이 있으면 후보에서
/// 제외됩니다 (평평한 구간은 앵커로 쓰지 않음). 저점은 저가의
/// 최소값에 대해 대칭적으로 판정합니다.
///
/// # 인자
/// * `highs` / `lows` - 고가/저가 컬럼
/// * `half_width` - 윈도우 반폭 `n`
pub fn find_pivots(highs: &[f64], lows: &[f64], half_width: usize) -> PivotSet {
    let len = highs.len().min(lows.len());
    if half_width == 0 || len < 2 * half_width + 1 {
        return PivotSet::default();
    }

    let mut set = PivotSet::default();

    for i in half_width..len - half_width {
        let window_high = &highs[i - half_width..=i + half_width];
        let max = window_high.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let max_count = window_high.iter().filter(|v| **v == max).count();

        if highs[i] == max && max_count == 1 {
            set.highs.push(Pivot {
                index: i,
                price: highs[i],
            });
        }

        let window_low = &lows[i - half_width..=i + half_width];
        let min = window_low.iter().cloned().fold(f64::INFINITY, f64::min);
        let min_count = window_low.iter().filter(|v| **v == min).count();

        if lows[i] == min && min_count == 1 {
            set.lows.push(Pivot {
                index: i,
                price: lows[i],
            });
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_peak_and_valley() {
        let highs = [1.0, 2.0, 5.0, 2.0, 1.0, 2.0, 3.0];
        let lows = [0.5, 0.4, 0.3, 0.1, 0.3, 0.4, 0.5];

        let set = find_pivots(&highs, &lows, 2);

        assert_eq!(set.highs, vec![Pivot { index: 2, price: 5.0 }]);
        assert_eq!(set.lows, vec![Pivot { index: 3, price: 0.1 }]);
    }

    #[test]
    fn test_tied_extremum_excluded() {
        // 고점 5.0이 윈도우 안에 두 번 등장 → 피봇 아님
        let highs = [1.0, 5.0, 2.0, 5.0, 1.0];
        let lows = [1.0; 5];

        let set = find_pivots(&highs, &lows, 2);

        assert!(set.highs.is_empty());
        // 평평한 저가 역시 동률로 모두 제외
        assert!(set.lows.is_empty());
    }

    #[test]
    fn test_boundary_indexes_not_candidates() {
        // 최대값이 가장자리에 있으면 중심 후보가 될 수 없음
        let highs = [9.0, 2.0, 1.0, 2.0, 8.0];
        let lows = [1.0, 2.0, 3.0, 2.0, 1.0];

        let set = find_pivots(&highs, &lows, 2);
        assert!(set.highs.is_empty());
    }

    #[test]
    fn test_too_short_series() {
        let highs = [1.0, 2.0, 1.0];
        let lows = [1.0, 0.5, 1.0];
        let set = find_pivots(&highs, &lows, 2);
        assert!(set.highs.is_empty());
        assert!(set.lows.is_empty());
    }
}
