//! 추세선 적합.
//!
//! 피봇 집합(고점 또는 저점)에 대해 인덱스 → 가격의 단순 선형 회귀를
//! 수행합니다. 적합 품질은 피어슨 상관계수의 제곱(R²)으로 보고합니다.

use serde::{Deserialize, Serialize};

use crate::pivots::Pivot;

/// 최소제곱 적합된 추세선.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// 기울기 (가격/봉)
    pub slope: f64,
    /// y 절편 (윈도우 시작 기준)
    pub intercept: f64,
    /// 적합 품질 (0.0 ~ 1.0)
    pub r_squared: f64,
}

impl TrendLine {
    /// 피봇 집합에 최소제곱 직선을 적합합니다.
    ///
    /// 점이 2개 미만이거나 x 분산이 0이면 `None`입니다.
    /// 가격이 완전히 평평한 경우(y 분산 0) 잔차가 0이므로 R²은
    /// 1.0으로 처리합니다.
    pub fn fit(pivots: &[Pivot]) -> Option<TrendLine> {
        let n = pivots.len();
        if n < 2 {
            return None;
        }

        let n_f = n as f64;
        let sum_x: f64 = pivots.iter().map(|p| p.index as f64).sum();
        let sum_y: f64 = pivots.iter().map(|p| p.price).sum();
        let mean_x = sum_x / n_f;
        let mean_y = sum_y / n_f;

        let mut ss_xx = 0.0;
        let mut ss_yy = 0.0;
        let mut ss_xy = 0.0;
        for p in pivots {
            let dx = p.index as f64 - mean_x;
            let dy = p.price - mean_y;
            ss_xx += dx * dx;
            ss_yy += dy * dy;
            ss_xy += dx * dy;
        }

        if ss_xx == 0.0 {
            return None;
        }

        let slope = ss_xy / ss_xx;
        let intercept = mean_y - slope * mean_x;

        let r_squared = if ss_yy == 0.0 {
            1.0
        } else {
            (ss_xy * ss_xy) / (ss_xx * ss_yy)
        };

        Some(TrendLine {
            slope,
            intercept,
            r_squared,
        })
    }

    /// 주어진 x(봉 인덱스)에서의 직선 값을 반환합니다.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pivots(points: &[(usize, f64)]) -> Vec<Pivot> {
        points
            .iter()
            .map(|&(index, price)| Pivot { index, price })
            .collect()
    }

    #[test]
    fn test_perfect_line() {
        let line = TrendLine::fit(&pivots(&[(0, 10.0), (5, 15.0), (10, 20.0)])).unwrap();

        assert!((line.slope - 1.0).abs() < 1e-9);
        assert!((line.intercept - 10.0).abs() < 1e-9);
        assert!((line.r_squared - 1.0).abs() < 1e-9);
        assert!((line.value_at(20.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_line_has_full_r_squared() {
        let line = TrendLine::fit(&pivots(&[(0, 10.0), (5, 10.0), (10, 10.0)])).unwrap();

        assert!(line.slope.abs() < 1e-12);
        assert!((line.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_noisy_points_lower_r_squared() {
        let line = TrendLine::fit(&pivots(&[(0, 10.0), (1, 30.0), (2, 5.0), (3, 25.0)])).unwrap();
        assert!(line.r_squared < 0.7);
    }

    #[test]
    fn test_too_few_points() {
        assert!(TrendLine::fit(&pivots(&[(3, 10.0)])).is_none());
        assert!(TrendLine::fit(&[]).is_none());
    }
}
