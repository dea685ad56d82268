//! 점수 → 등급 매핑.
//!
//! 등급/티어는 열거형으로만 표현하고, 이모지 등 표시용 장식은
//! 리포팅 경계(코어 밖)에서 붙입니다.

use serde::{Deserialize, Serialize};

/// 콤보 점수 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// 85점 이상
    S,
    /// 70점 이상
    A,
    /// 50점 이상
    B,
    /// 50점 미만
    C,
}

impl Grade {
    /// 0~100 점수를 등급으로 변환합니다.
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Grade::S
        } else if score >= 70.0 {
            Grade::A
        } else if score >= 50.0 {
            Grade::B
        } else {
            Grade::C
        }
    }

    /// 통과 기준(70점) 충족 여부를 반환합니다.
    pub fn is_pass(score: f64) -> bool {
        score >= 70.0
    }
}

/// DNA 매칭 품질 티어.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// 80% 이상 - 과거 승자 시퀀스와 사실상 일치
    ExactLegend,
    /// 50% 이상 - 추가 확인 필요
    NeedsVerification,
    /// 50% 미만 - 미확인
    Unconfirmed,
}

impl MatchTier {
    /// 매칭 퍼센트(0~100)를 티어로 변환합니다.
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 80 {
            MatchTier::ExactLegend
        } else if percent >= 50 {
            MatchTier::NeedsVerification
        } else {
            MatchTier::Unconfirmed
        }
    }
}
