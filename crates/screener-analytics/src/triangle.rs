//! 삼각 수렴 패턴 감지.
//!
//! 최근 윈도우의 피봇 고점/저점에 추세선을 적합하고, 두 선의 기하로
//! 수렴 패턴을 분류합니다. 기울기는 윈도우 평균가 대비 일당 %로
//! 정규화해 종목 간 가격 스케일 차이를 제거합니다.
//!
//! # 분류 규칙 (ε = 0.05%/봉)
//!
//! | 상단 기울기 | 하단 기울기 | 분류 |
//! |-------------|-------------|------|
//! | < −ε        | > +ε        | Symmetrical |
//! | ≈ 0         | > +ε        | Ascending |
//! | < −ε        | ≈ 0         | Descending |
//! | 그 외       |             | Unknown |

use serde::{Deserialize, Serialize};

use crate::indicators::trailing_mean;
use crate::pivots::find_pivots;
use crate::series::IndicatorSeries;
use crate::trendline::TrendLine;

/// 삼각 패턴 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleKind {
    /// 대칭 삼각형 - 상단 하락, 하단 상승
    Symmetrical,
    /// 상승 삼각형 - 상단 수평, 하단 상승
    Ascending,
    /// 하락 삼각형 - 상단 하락, 하단 수평
    Descending,
    /// 미분류
    Unknown,
}

impl TriangleKind {
    /// 정규화된 기울기(평균가 대비 %/봉) 쌍을 분류합니다.
    pub fn from_normalized_slopes(upper_pct: f64, lower_pct: f64, epsilon: f64) -> Self {
        let upper_falling = upper_pct < -epsilon;
        let upper_flat = upper_pct.abs() <= epsilon;
        let lower_rising = lower_pct > epsilon;
        let lower_flat = lower_pct.abs() <= epsilon;

        if upper_falling && lower_rising {
            TriangleKind::Symmetrical
        } else if upper_flat && lower_rising {
            TriangleKind::Ascending
        } else if upper_falling && lower_flat {
            TriangleKind::Descending
        } else {
            TriangleKind::Unknown
        }
    }
}

/// 패턴 신뢰 티어.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleConfidence {
    /// 고점/저점 피봇이 각각 3개 이상
    High,
    /// 최소 요건(각 2개)만 충족
    Normal,
}

/// 패턴을 보고하지 않은 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoPatternReason {
    /// 윈도우보다 짧은 시계열
    TooFewBars,
    /// 피봇이 종류별 2개 미만
    TooFewPivots,
    /// R²가 기준 미달
    PoorFit,
    /// 채널 시작 폭이 0 이하 (퇴화 기하)
    DegenerateWidth,
}

/// 삼각 패턴 감지 결과.
///
/// 평가 호출마다 재계산되는 일회성 값입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrianglePattern {
    /// 패턴 분류
    pub kind: TriangleKind,
    /// 신뢰 티어
    pub confidence: TriangleConfidence,
    /// 수렴률 기준 충족 + 분류 성공 여부
    pub is_triangle: bool,
    /// 수렴률 (0 ~ 100, 시작 폭 대비 좁아진 비율)
    pub convergence_pct: f64,
    /// 윈도우 안에서 두 선이 이미 교차했는지 여부
    pub lines_crossed: bool,
    /// 꼭짓점까지 남은 봉 수 (음수면 이미 지남, 평행이면 None)
    pub bars_to_apex: Option<f64>,
    /// 상향 돌파 (2봉 확인 + 거래량)
    pub breakout_up: bool,
    /// 하향 이탈 (단일 봉 + 거래량)
    pub breakout_down: bool,
    /// 윈도우 끝에서의 상단선 값
    pub upper_now: f64,
    /// 윈도우 끝에서의 하단선 값
    pub lower_now: f64,
    /// 상단선 적합 품질
    pub upper_r_squared: f64,
    /// 하단선 적합 품질
    pub lower_r_squared: f64,
    /// 피봇 고점 개수
    pub pivot_high_count: usize,
    /// 피봇 저점 개수
    pub pivot_low_count: usize,
}

/// 감지 결과.
///
/// "패턴 없음"은 에러가 아니라 명시적 분기입니다. 이유를 함께
/// 보고해 리포팅 계층이 퇴화 기하와 데이터 부족을 구분할 수
/// 있게 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleOutcome {
    /// 패턴 감지됨
    Pattern(TrianglePattern),
    /// 패턴 없음
    NoPattern(NoPatternReason),
}

impl TriangleOutcome {
    /// 감지된 패턴 참조를 반환합니다.
    pub fn pattern(&self) -> Option<&TrianglePattern> {
        match self {
            TriangleOutcome::Pattern(p) => Some(p),
            TriangleOutcome::NoPattern(_) => None,
        }
    }
}

/// 삼각 패턴 감지 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleConfig {
    /// 분석 윈도우 길이 (봉)
    pub window: usize,
    /// 피봇 감지 반폭
    pub pivot_half_width: usize,
    /// 추세선 적합 최소 R²
    pub min_r_squared: f64,
    /// 기울기 분류 임계값 (평균가 대비 %/봉)
    pub slope_epsilon_pct: f64,
    /// 삼각형 인정 최소 수렴률 (%)
    pub min_convergence_pct: f64,
    /// 돌파 마진 (0.005 = 0.5%)
    pub breakout_margin: f64,
    /// 돌파 거래량 배수
    pub volume_ratio: f64,
    /// 평균 거래량 기간 (전체 시계열 기준)
    pub volume_period: usize,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            window: 60,
            pivot_half_width: 3,
            min_r_squared: 0.7,
            slope_epsilon_pct: 0.05,
            min_convergence_pct: 20.0,
            breakout_margin: 0.005,
            volume_ratio: 1.5,
            volume_period: 20,
        }
    }
}

/// 두 직선이 평행으로 간주되는 기울기 차 하한.
const PARALLEL_SLOPE_EPS: f64 = 1e-9;

/// 삼각 패턴 감지기.
#[derive(Debug, Default)]
pub struct TriangleDetector;

impl TriangleDetector {
    /// 시계열의 마지막 `window`개 봉에서 삼각 패턴을 감지합니다.
    ///
    /// 순수 함수이며 내부 상태가 없습니다. 동일 입력에 대해 항상
    /// 동일한 결과를 반환합니다.
    pub fn detect(series: &IndicatorSeries, config: &TriangleConfig) -> TriangleOutcome {
        let len = series.len();
        if len < config.window || config.window < 2 {
            return TriangleOutcome::NoPattern(NoPatternReason::TooFewBars);
        }

        let start = len - config.window;
        let win_highs = &series.highs[start..];
        let win_lows = &series.lows[start..];
        let win_closes = &series.closes[start..];

        let pivots = find_pivots(win_highs, win_lows, config.pivot_half_width);
        if pivots.highs.len() < 2 || pivots.lows.len() < 2 {
            return TriangleOutcome::NoPattern(NoPatternReason::TooFewPivots);
        }

        let (upper, lower) = match (TrendLine::fit(&pivots.highs), TrendLine::fit(&pivots.lows)) {
            (Some(u), Some(l)) => (u, l),
            _ => return TriangleOutcome::NoPattern(NoPatternReason::PoorFit),
        };

        if upper.r_squared < config.min_r_squared || lower.r_squared < config.min_r_squared {
            return TriangleOutcome::NoPattern(NoPatternReason::PoorFit);
        }

        let mean_price = win_closes.iter().sum::<f64>() / win_closes.len() as f64;
        if mean_price <= 0.0 {
            return TriangleOutcome::NoPattern(NoPatternReason::DegenerateWidth);
        }

        let x_end = (config.window - 1) as f64;
        let start_width = upper.value_at(0.0) - lower.value_at(0.0);
        if start_width <= 0.0 {
            return TriangleOutcome::NoPattern(NoPatternReason::DegenerateWidth);
        }

        let end_width = upper.value_at(x_end) - lower.value_at(x_end);
        let convergence_pct = ((1.0 - end_width / start_width) * 100.0).clamp(0.0, 100.0);
        let lines_crossed = end_width < 0.0;

        let upper_slope_pct = upper.slope / mean_price * 100.0;
        let lower_slope_pct = lower.slope / mean_price * 100.0;
        let kind =
            TriangleKind::from_normalized_slopes(upper_slope_pct, lower_slope_pct, config.slope_epsilon_pct);

        let slope_diff = upper.slope - lower.slope;
        let bars_to_apex = if slope_diff.abs() < PARALLEL_SLOPE_EPS {
            None
        } else {
            let apex_x = (lower.intercept - upper.intercept) / slope_diff;
            Some(apex_x - x_end)
        };

        let upper_now = upper.value_at(x_end);
        let lower_now = lower.value_at(x_end);
        let (breakout_up, breakout_down) =
            Self::detect_breakouts(series, config, &upper, &lower, x_end);

        let confidence = if pivots.highs.len() >= 3 && pivots.lows.len() >= 3 {
            TriangleConfidence::High
        } else {
            TriangleConfidence::Normal
        };

        let is_triangle =
            convergence_pct > config.min_convergence_pct && kind != TriangleKind::Unknown;

        TriangleOutcome::Pattern(TrianglePattern {
            kind,
            confidence,
            is_triangle,
            convergence_pct,
            lines_crossed,
            bars_to_apex,
            breakout_up,
            breakout_down,
            upper_now,
            lower_now,
            upper_r_squared: upper.r_squared,
            lower_r_squared: lower.r_squared,
            pivot_high_count: pivots.highs.len(),
            pivot_low_count: pivots.lows.len(),
        })
    }

    /// 돌파 여부 판정.
    ///
    /// 상향 돌파는 마지막 두 봉 모두 상단선을 마진 이상 넘어야 하고,
    /// 하향 이탈은 마지막 봉만 봅니다. 거래량 게이트의 평균은 윈도우
    /// 절단 전의 전체 시계열에서 계산합니다.
    fn detect_breakouts(
        series: &IndicatorSeries,
        config: &TriangleConfig,
        upper: &TrendLine,
        lower: &TrendLine,
        x_end: f64,
    ) -> (bool, bool) {
        let len = series.len();
        if len < 2 {
            return (false, false);
        }

        let close_last = series.closes[len - 1];
        let close_prev = series.closes[len - 2];
        let volume_last = series.volumes[len - 1];

        let volume_ok = match trailing_mean(&series.volumes, config.volume_period) {
            Some(avg) if avg > 0.0 => volume_last > config.volume_ratio * avg,
            _ => false,
        };

        let margin = config.breakout_margin;
        let breakout_up = close_last > upper.value_at(x_end) * (1.0 + margin)
            && close_prev > upper.value_at(x_end - 1.0) * (1.0 + margin)
            && volume_ok;
        let breakout_down = close_last < lower.value_at(x_end) * (1.0 - margin) && volume_ok;

        (breakout_up, breakout_down)
    }
}
