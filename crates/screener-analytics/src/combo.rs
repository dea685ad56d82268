//! 콤보 스코어러.
//!
//! 이동평균 크로스/기울기 조건("종베"), 삼각 수렴 패턴, 지지선
//! 신뢰도를 하나의 0~100 점수와 등급으로 융합합니다.
//!
//! # 점수 조립
//!
//! - 종베 충족 +30
//! - 삼각 패턴 감지 시: is_triangle +20, 분류 보너스
//!   (Symmetrical +15 / Ascending +10 / Descending +5),
//!   신뢰 HIGH +5, 꼭짓점 0~5봉 +10 / 지남 −10,
//!   선 교차 −15, 상향 돌파 +15, 하향 이탈 −25
//! - 지지선 비율 ≥ 0.7 +10
//!
//! 최종 점수는 [0, 100]으로 클램프됩니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use screener_core::{DailyBar, Grade};

use crate::indicators::{golden_cross_points, pct_slope, sma, IndicatorError, IndicatorResult};
use crate::series::IndicatorSeries;
use crate::support::{support_dna_ratio, SupportConfig};
use crate::triangle::{
    NoPatternReason, TriangleConfidence, TriangleConfig, TriangleDetector, TriangleKind,
    TriangleOutcome, TrianglePattern,
};

/// 콤보 평가 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboConfig {
    /// 평가에 필요한 최소 봉 수
    pub min_bars: usize,
    /// 단기 이동평균 기간
    pub short_period: usize,
    /// 장기 이동평균 기간
    pub long_period: usize,
    /// 기울기 지연 구간 (봉)
    pub slope_lag: usize,
    /// 골든 크로스 탐색 구간 (봉)
    pub cross_lookback: usize,
    /// 크로스 없이 인정할 최대 이격 (%)
    pub gap_max_pct: f64,
    /// 장기 기울기 하한 (%/봉)
    pub long_slope_floor: f64,
    /// 지지선 보너스 기준 비율
    pub support_bonus_threshold: f64,
    /// 삼각 패턴 설정
    pub triangle: TriangleConfig,
    /// 지지선 평가 설정
    pub support: SupportConfig,
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            min_bars: 60,
            short_period: 20,
            long_period: 40,
            slope_lag: 5,
            cross_lookback: 5,
            gap_max_pct: 3.0,
            long_slope_floor: -0.05,
            support_bonus_threshold: 0.7,
            triangle: TriangleConfig::default(),
            support: SupportConfig::default(),
        }
    }
}

/// 종베 조건 판정 결과.
///
/// 최종 불리언과 함께 하위 조건을 모두 노출해 점수의 근거를
/// 추적할 수 있게 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JongbeSignal {
    /// 전체 조건 충족 여부
    pub passed: bool,
    /// 최근 구간 내 골든 크로스 발생
    pub crossed_recently: bool,
    /// 크로스 없이 근접 상회 + 단기선 상승 중
    pub above_with_gap: bool,
    /// 단기 이동평균 기울기 (%/봉)
    pub short_slope: f64,
    /// 장기 이동평균 기울기 (%/봉)
    pub long_slope: f64,
    /// 단기 기울기가 지연 구간 전보다 가속 중
    pub accelerating: bool,
    /// 종가가 단기 이동평균 위
    pub close_above_short: bool,
}

/// 콤보 평가 결과 레코드.
///
/// (종목, 평가일)당 하나이며 해당 시점까지의 시계열만으로
/// 완전히 결정됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboResult {
    /// 종목 코드
    pub ticker: String,
    /// 평가일 (마지막 봉 날짜)
    pub eval_date: Option<NaiveDate>,
    /// 종베 판정
    pub jongbe: JongbeSignal,
    /// 감지된 삼각 패턴 (없으면 None)
    pub triangle: Option<TrianglePattern>,
    /// 삼각 패턴이 없을 때의 이유
    pub triangle_skip: Option<NoPatternReason>,
    /// 지지선 성공 비율 (0.0 ~ 1.0)
    pub support_ratio: f64,
    /// 종합 점수 (0 ~ 100)
    pub score: f64,
    /// 등급
    pub grade: Grade,
    /// 통과 여부 (점수 ≥ 70)
    pub pass: bool,
}

/// 평가를 건너뛴 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// 최소 봉 수 미달
    TooFewBars,
    /// 내부 계산 실패 (중립 결과로 강등)
    Failed,
}

/// 콤보 평가 결과.
///
/// "평가 없음"을 에러가 아닌 명시적 분기로 표현합니다. 배치
/// 호출자는 항목별로 이 값을 받으며 예외를 보지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboOutcome {
    /// 점수 산출됨
    Scored(Box<ComboResult>),
    /// 평가 건너뜀
    Skipped(SkipReason),
}

impl ComboOutcome {
    /// 산출된 결과 참조를 반환합니다.
    pub fn scored(&self) -> Option<&ComboResult> {
        match self {
            ComboOutcome::Scored(result) => Some(result),
            ComboOutcome::Skipped(_) => None,
        }
    }
}

/// 콤보 스코어러.
#[derive(Debug, Clone, Default)]
pub struct ComboScorer {
    config: ComboConfig,
}

impl ComboScorer {
    /// 설정으로 스코어러를 생성합니다.
    pub fn new(config: ComboConfig) -> Self {
        Self { config }
    }

    /// 기본 설정으로 스코어러를 생성합니다.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// 설정 참조를 반환합니다.
    pub fn config(&self) -> &ComboConfig {
        &self.config
    }

    /// 종목 하나를 평가합니다.
    ///
    /// 봉이 부족하면 `Skipped(TooFewBars)`, 내부 계산이 실패하면
    /// 경고 로그 후 `Skipped(Failed)`를 반환합니다. 예외를 밖으로
    /// 전파하지 않으므로 배치 분석이 단일 종목 때문에 중단되지
    /// 않습니다.
    pub fn evaluate(&self, ticker: &str, bars: &[DailyBar]) -> ComboOutcome {
        if bars.len() < self.config.min_bars {
            return ComboOutcome::Skipped(SkipReason::TooFewBars);
        }

        let series = IndicatorSeries::from_bars(bars);
        match self.compute(ticker, &series) {
            Ok(result) => ComboOutcome::Scored(Box::new(result)),
            Err(err) => {
                tracing::warn!(ticker, error = %err, "콤보 평가 실패, 중립 결과로 대체");
                ComboOutcome::Skipped(SkipReason::Failed)
            }
        }
    }

    fn compute(&self, ticker: &str, series: &IndicatorSeries) -> IndicatorResult<ComboResult> {
        let jongbe = self.jongbe_signal(series)?;

        let (triangle, triangle_skip) =
            match TriangleDetector::detect(series, &self.config.triangle) {
                TriangleOutcome::Pattern(pattern) => (Some(pattern), None),
                TriangleOutcome::NoPattern(reason) => (None, Some(reason)),
            };

        let support_ratio = support_dna_ratio(series, &self.config.support);

        let score = self.assemble_score(jongbe.passed, triangle.as_ref(), support_ratio);
        let grade = Grade::from_score(score);
        let pass = Grade::is_pass(score);

        Ok(ComboResult {
            ticker: ticker.to_string(),
            eval_date: series.dates.last().copied(),
            jongbe,
            triangle,
            triangle_skip,
            support_ratio,
            score,
            grade,
            pass,
        })
    }

    /// 종베 조건 판정.
    ///
    /// 골든 크로스가 최근 `cross_lookback`봉 안에 있었거나, 이미
    /// 상회 중이면서 이격이 작고 단기선이 연속 상승 중이어야 하고,
    /// 추가로 단기 기울기 양수 / 장기 기울기 하한 이상 / 기울기
    /// 가속 / 종가가 단기선 위 조건을 모두 요구합니다.
    fn jongbe_signal(&self, series: &IndicatorSeries) -> IndicatorResult<JongbeSignal> {
        let cfg = &self.config;
        let closes = &series.closes;
        let t = closes.len() - 1;

        let short_ma = sma(closes, cfg.short_period)?;
        let long_ma = sma(closes, cfg.long_period)?;
        let short_slopes = pct_slope(&short_ma, cfg.slope_lag)?;
        let long_slopes = pct_slope(&long_ma, cfg.slope_lag)?;

        let missing = |name: &str| IndicatorError::MissingColumn(name.to_string());
        let short_now = short_ma[t].ok_or_else(|| missing("단기 이동평균"))?;
        let long_now = long_ma[t].ok_or_else(|| missing("장기 이동평균"))?;
        let short_slope = short_slopes[t].ok_or_else(|| missing("단기 기울기"))?;
        let long_slope = long_slopes[t].ok_or_else(|| missing("장기 기울기"))?;

        if t < cfg.cross_lookback.max(cfg.slope_lag) {
            return Err(IndicatorError::InsufficientData {
                required: cfg.cross_lookback.max(cfg.slope_lag) + 1,
                provided: t + 1,
            });
        }

        let crosses = golden_cross_points(&short_ma, &long_ma);
        let crossed_recently = crosses[t + 1 - cfg.cross_lookback..=t].iter().any(|&c| c);

        let rising = matches!(
            (short_ma[t], short_ma[t - 1], short_ma[t - 2]),
            (Some(a), Some(b), Some(c)) if a > b && b > c
        );
        let gap_pct = if long_now > 0.0 {
            (short_now - long_now) / long_now * 100.0
        } else {
            f64::INFINITY
        };
        let above_with_gap = short_now > long_now && gap_pct < cfg.gap_max_pct && rising;

        let prev_slope = short_slopes[t - cfg.slope_lag].ok_or_else(|| missing("이전 단기 기울기"))?;
        let accelerating = short_slope > prev_slope;
        let close_above_short = closes[t] > short_now;

        let passed = (crossed_recently || above_with_gap)
            && short_slope > 0.0
            && long_slope >= cfg.long_slope_floor
            && accelerating
            && close_above_short;

        Ok(JongbeSignal {
            passed,
            crossed_recently,
            above_with_gap,
            short_slope,
            long_slope,
            accelerating,
            close_above_short,
        })
    }

    /// 점수 조립 (모듈 문서의 가점/감점 표 참고).
    fn assemble_score(
        &self,
        jongbe_passed: bool,
        triangle: Option<&TrianglePattern>,
        support_ratio: f64,
    ) -> f64 {
        let mut score: f64 = 0.0;

        if jongbe_passed {
            score += 30.0;
        }

        if let Some(pattern) = triangle {
            if pattern.is_triangle {
                score += 20.0;
            }

            score += match pattern.kind {
                TriangleKind::Symmetrical => 15.0,
                TriangleKind::Ascending => 10.0,
                TriangleKind::Descending => 5.0,
                TriangleKind::Unknown => 0.0,
            };

            if pattern.confidence == TriangleConfidence::High {
                score += 5.0;
            }

            if let Some(apex) = pattern.bars_to_apex {
                if (0.0..=5.0).contains(&apex) {
                    score += 10.0;
                } else if apex < 0.0 {
                    score -= 10.0;
                }
            }

            if pattern.lines_crossed {
                score -= 15.0;
            }
            if pattern.breakout_up {
                score += 15.0;
            }
            if pattern.breakout_down {
                score -= 25.0;
            }
        }

        if support_ratio >= self.config.support_bonus_threshold {
            score += 10.0;
        }

        score.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pattern() -> TrianglePattern {
        TrianglePattern {
            kind: TriangleKind::Symmetrical,
            confidence: TriangleConfidence::High,
            is_triangle: true,
            convergence_pct: 50.0,
            lines_crossed: false,
            bars_to_apex: Some(3.0),
            breakout_up: false,
            breakout_down: false,
            upper_now: 105.0,
            lower_now: 95.0,
            upper_r_squared: 0.9,
            lower_r_squared: 0.9,
            pivot_high_count: 3,
            pivot_low_count: 3,
        }
    }

    #[test]
    fn test_score_jongbe_only() {
        let scorer = ComboScorer::with_defaults();
        assert_eq!(scorer.assemble_score(true, None, 0.0), 30.0);
        assert_eq!(scorer.assemble_score(false, None, 0.0), 0.0);
    }

    #[test]
    fn test_score_full_stack() {
        let scorer = ComboScorer::with_defaults();

        // 종베 30 + 삼각 20 + 대칭 15 + HIGH 5 + 꼭짓점 근접 10 + 지지 10 = 90
        let score = scorer.assemble_score(true, Some(&sample_pattern()), 0.8);
        assert_eq!(score, 90.0);
        assert_eq!(Grade::from_score(score), Grade::S);
    }

    #[test]
    fn test_score_penalties() {
        let scorer = ComboScorer::with_defaults();

        let mut pattern = sample_pattern();
        pattern.bars_to_apex = Some(-2.0); // 꼭짓점 지남 −10
        pattern.lines_crossed = true; // −15
        pattern.breakout_down = true; // −25

        // 30 + 20 + 15 + 5 − 10 − 15 − 25 = 20
        let score = scorer.assemble_score(true, Some(&pattern), 0.0);
        assert_eq!(score, 20.0);
        assert_eq!(Grade::from_score(score), Grade::C);
    }

    #[test]
    fn test_score_breakout_up_bonus() {
        let scorer = ComboScorer::with_defaults();

        let mut pattern = sample_pattern();
        pattern.breakout_up = true;

        // 30 + 20 + 15 + 5 + 10 + 15 + 10 = 105 → 100 클램프
        let score = scorer.assemble_score(true, Some(&pattern), 1.0);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_score_pattern_kind_bonuses() {
        let scorer = ComboScorer::with_defaults();

        let mut pattern = sample_pattern();
        pattern.bars_to_apex = Some(30.0); // 보너스 구간 밖
        pattern.confidence = TriangleConfidence::Normal;

        pattern.kind = TriangleKind::Ascending;
        assert_eq!(scorer.assemble_score(false, Some(&pattern), 0.0), 30.0);

        pattern.kind = TriangleKind::Descending;
        assert_eq!(scorer.assemble_score(false, Some(&pattern), 0.0), 25.0);

        pattern.kind = TriangleKind::Unknown;
        pattern.is_triangle = false;
        assert_eq!(scorer.assemble_score(false, Some(&pattern), 0.0), 0.0);
    }

    #[test]
    fn test_support_threshold_boundary() {
        let scorer = ComboScorer::with_defaults();
        assert_eq!(scorer.assemble_score(false, None, 0.7), 10.0);
        assert_eq!(scorer.assemble_score(false, None, 0.699), 0.0);
    }
}
