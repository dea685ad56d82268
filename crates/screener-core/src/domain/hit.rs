//! 시그널 히트 기록.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 과거 시그널 관측 기록 한 건.
///
/// 외부 성과 로그에서 일괄 공급되며, 코어는 읽기만 합니다.
/// 한 종목의 히트들을 날짜순으로 이어 붙인 것이 그 종목의
/// 시그널 DNA 시퀀스가 됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalHit {
    /// 종목 코드
    pub ticker: String,
    /// 시그널 발생일
    pub date: NaiveDate,
    /// 시그널 태그 (성과 로그의 "구분" 컬럼)
    pub tag: String,
    /// 시그널 이후 달성한 최대 수익률 (%, "최고수익률" 원시값)
    pub max_return: f64,
}

impl SignalHit {
    /// 새 히트 기록을 생성합니다.
    pub fn new(
        ticker: impl Into<String>,
        date: NaiveDate,
        tag: impl Into<String>,
        max_return: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            tag: tag.into(),
            max_return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_roundtrip_serde() {
        let hit = SignalHit::new(
            "005930",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            "돌파",
            22.5,
        );
        let json = serde_json::to_string(&hit).unwrap();
        let back: SignalHit = serde_json::from_str(&json).unwrap();
        assert_eq!(hit, back);
    }
}
