//! 지지선 신뢰도 평가 (Support DNA).
//!
//! 이동평균선이 지지선으로 작동한 과거 이력을 측정합니다.
//! 저가가 이동평균에 근접한 "터치" 봉마다, 이후 짧은 구간 안에
//! 고가가 터치 시점 이동평균보다 충분히 올랐는지로 성공을 판정하고
//! 성공 비율을 반환합니다.

use serde::{Deserialize, Serialize};

use crate::series::IndicatorSeries;

/// 지지선 평가 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportConfig {
    /// 평가할 이동평균 기간
    pub ma_period: usize,
    /// 후행 평가 윈도우 (봉)
    pub window: usize,
    /// 터치 허용 괴리 (%)
    pub touch_tolerance_pct: f64,
    /// 성공 기준 상승률 (%)
    pub success_gain_pct: f64,
    /// 룩어헤드 한도 (달력일)
    pub lookahead_days: i64,
    /// 날짜 미보유 시계열의 룩어헤드 한도 (봉)
    pub lookahead_bars: usize,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            ma_period: 20,
            window: 120,
            touch_tolerance_pct: 1.5,
            success_gain_pct: 5.0,
            lookahead_days: 7,
            lookahead_bars: 6,
        }
    }
}

/// 지지선 성공 비율을 계산합니다.
///
/// 반환값은 성공 터치 수 / 전체 터치 수입니다. 터치가 없거나
/// 이동평균 컬럼을 만들 수 없으면(데이터 부족) 0.0을 반환합니다 —
/// 배치 분석에서 단일 종목의 결측이 에러가 되지 않도록 중립값으로
/// 처리합니다.
pub fn support_dna_ratio(series: &IndicatorSeries, config: &SupportConfig) -> f64 {
    let ma = match series.ma(config.ma_period) {
        Ok(ma) => ma,
        Err(_) => return 0.0,
    };

    let len = series.len();
    let start = len.saturating_sub(config.window);
    let use_dates = series.has_dates();

    let mut touches = 0usize;
    let mut successes = 0usize;

    for i in start..len {
        let ma_i = match ma[i] {
            Some(value) if value > 0.0 => value,
            _ => continue,
        };

        let deviation_pct = (series.lows[i] - ma_i).abs() / ma_i * 100.0;
        if deviation_pct > config.touch_tolerance_pct {
            continue;
        }

        touches += 1;
        let target = ma_i * (1.0 + config.success_gain_pct / 100.0);

        let mut j = i + 1;
        while j < len {
            let in_range = if use_dates {
                (series.dates[j] - series.dates[i]).num_days() <= config.lookahead_days
            } else {
                j - i <= config.lookahead_bars
            };
            if !in_range {
                break;
            }

            if series.highs[j] >= target {
                successes += 1;
                break;
            }
            j += 1;
        }
    }

    if touches == 0 {
        return 0.0;
    }

    successes as f64 / touches as f64
}
