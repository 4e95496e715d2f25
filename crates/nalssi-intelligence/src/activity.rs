// ABOUTME: Activity registry naming every single-snapshot index with English keys and Korean labels
// ABOUTME: Dispatches an activity to its scorer and resolves user-supplied activity names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::Conditions;
use crate::result::ScoreResult;
use crate::scorers;
use serde::Serialize;
use std::fmt;

/// Every index that scores a single snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// 빨래
    Laundry,
    /// 등산
    Hiking,
    /// 피크닉
    Picnic,
    /// 세차
    CarWash,
    /// 김장 (October to January)
    Kimjang,
    /// 운동
    Exercise,
    /// 감기
    ColdFlu,
    /// 알레르기
    Allergy,
    /// 편두통
    Migraine,
    /// 수면
    Sleep,
    /// 사진
    Photography,
    /// 관절통
    JointPain,
    /// 드라이브
    Drive,
    /// 캠핑
    Camping,
    /// 낚시
    Fishing,
    /// 골프
    Golf,
    /// 러닝
    Running,
    /// 바베큐
    Bbq,
}

impl Activity {
    /// All activities in aggregation order; ties resolve to the earlier entry
    pub const ALL: [Self; 18] = [
        Self::Laundry,
        Self::Hiking,
        Self::Picnic,
        Self::CarWash,
        Self::Kimjang,
        Self::Exercise,
        Self::ColdFlu,
        Self::Allergy,
        Self::Migraine,
        Self::Sleep,
        Self::Photography,
        Self::JointPain,
        Self::Drive,
        Self::Camping,
        Self::Fishing,
        Self::Golf,
        Self::Running,
        Self::Bbq,
    ];

    /// Activities compared in the weekend planner
    pub const WEEKEND: [Self; 4] = [Self::Laundry, Self::Hiking, Self::Picnic, Self::CarWash];

    /// Activities with a place list in the spot catalog
    pub const WITH_SPOTS: [Self; 8] = [
        Self::Hiking,
        Self::Camping,
        Self::Picnic,
        Self::Drive,
        Self::Fishing,
        Self::Golf,
        Self::Running,
        Self::Bbq,
    ];

    /// Stable English key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Laundry => "laundry",
            Self::Hiking => "hiking",
            Self::Picnic => "picnic",
            Self::CarWash => "car_wash",
            Self::Kimjang => "kimjang",
            Self::Exercise => "exercise",
            Self::ColdFlu => "cold_flu",
            Self::Allergy => "allergy",
            Self::Migraine => "migraine",
            Self::Sleep => "sleep",
            Self::Photography => "photography",
            Self::JointPain => "joint_pain",
            Self::Drive => "drive",
            Self::Camping => "camping",
            Self::Fishing => "fishing",
            Self::Golf => "golf",
            Self::Running => "running",
            Self::Bbq => "bbq",
        }
    }

    /// Korean label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Laundry => "빨래",
            Self::Hiking => "등산",
            Self::Picnic => "피크닉",
            Self::CarWash => "세차",
            Self::Kimjang => "김장",
            Self::Exercise => "운동",
            Self::ColdFlu => "감기",
            Self::Allergy => "알레르기",
            Self::Migraine => "편두통",
            Self::Sleep => "수면",
            Self::Photography => "사진",
            Self::JointPain => "관절통",
            Self::Drive => "드라이브",
            Self::Camping => "캠핑",
            Self::Fishing => "낚시",
            Self::Golf => "골프",
            Self::Running => "러닝",
            Self::Bbq => "바베큐",
        }
    }

    /// Resolve an English key or a Korean label
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|activity| activity.key() == name || activity.label() == name)
    }

    /// Score the activity; `None` when it is out of season
    #[must_use]
    pub fn score(self, c: &Conditions) -> Option<ScoreResult> {
        let result = match self {
            Self::Laundry => scorers::laundry(c),
            Self::Hiking => scorers::hiking(c).result,
            Self::Picnic => scorers::picnic(c).result,
            Self::CarWash => scorers::car_wash(c),
            Self::Kimjang => return scorers::kimjang(c).available().map(|r| r.result.clone()),
            Self::Exercise => scorers::exercise(c).result,
            Self::ColdFlu => scorers::cold_flu(c),
            Self::Allergy => scorers::allergy(c).result,
            Self::Migraine => scorers::migraine(c),
            Self::Sleep => scorers::sleep(c).result,
            Self::Photography => scorers::photography(c).result,
            Self::JointPain => scorers::joint_pain(c),
            Self::Drive => scorers::drive(c),
            Self::Camping => scorers::camping(c),
            Self::Fishing => scorers::fishing(c),
            Self::Golf => scorers::golf(c),
            Self::Running => scorers::running(c),
            Self::Bbq => scorers::bbq(c),
        };
        Some(result)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    #[test]
    fn names_resolve_both_ways() {
        assert_eq!(Activity::from_name("캠핑"), Some(Activity::Camping));
        assert_eq!(Activity::from_name("car_wash"), Some(Activity::CarWash));
        assert_eq!(Activity::from_name(" 러닝 "), Some(Activity::Running));
        assert_eq!(Activity::from_name("스카이다이빙"), None);
    }

    #[test]
    fn kimjang_is_skipped_out_of_season() {
        let c = Conditions::new(
            WeatherSnapshot::default(),
            AirQualitySnapshot::default(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        );
        assert!(Activity::Kimjang.score(&c).is_none());
        assert!(Activity::Laundry.score(&c).is_some());
    }
}
