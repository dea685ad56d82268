//! 시가총액 티어.

use serde::{Deserialize, Serialize};

/// 시가총액 1조 원 이상 → 대형주.
pub const HEAVY_CAP_THRESHOLD: f64 = 1.0e12;
/// 시가총액 2천억 원 이상 → 중형주.
pub const MIDDLE_CAP_THRESHOLD: f64 = 2.0e11;

/// 시가총액 기반 종목 분류.
///
/// DNA 마스터 패턴 추출을 티어별로 분리하고, 매칭 점수에
/// 티어별 가중치를 적용하는 데 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapTier {
    /// 대형주 (시총 ≥ 1조)
    Heavy,
    /// 중형주 (시총 ≥ 2천억)
    Middle,
    /// 소형주
    Light,
}

impl CapTier {
    /// 시가총액(원)으로 티어를 분류합니다. 경계값은 상위 티어에 포함됩니다.
    pub fn classify(capitalization: f64) -> Self {
        if capitalization >= HEAVY_CAP_THRESHOLD {
            CapTier::Heavy
        } else if capitalization >= MIDDLE_CAP_THRESHOLD {
            CapTier::Middle
        } else {
            CapTier::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(CapTier::classify(1_000_000_000_000.0), CapTier::Heavy);
        assert_eq!(CapTier::classify(999_999_999_999.0), CapTier::Middle);
        assert_eq!(CapTier::classify(200_000_000_000.0), CapTier::Middle);
        assert_eq!(CapTier::classify(199_999_999_999.0), CapTier::Light);
        assert_eq!(CapTier::classify(0.0), CapTier::Light);
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&CapTier::Heavy).unwrap();
        assert_eq!(json, "\"heavy\"");
    }
}
