// ABOUTME: Spot catalog trait supplying place lists per activity and date courses per style
// ABOUTME: SeoulCatalog is the built-in static catalog for the Seoul metropolitan area
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::activity::Activity;
use serde::Serialize;
use std::fmt;

/// A recommended place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spot {
    /// Place name
    pub name: &'static str,
    /// District or city
    pub location: &'static str,
    /// What the place is known for
    pub feature: &'static str,
    /// Visiting tip
    pub tip: &'static str,
}

/// A multi-stop date course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateCourse {
    /// Course name
    pub name: &'static str,
    /// District
    pub location: &'static str,
    /// Typical duration
    pub duration: &'static str,
    /// Highlights
    pub feature: &'static str,
    /// Stops along the course
    pub spots: &'static [&'static str],
    /// Visiting tip
    pub tip: &'static str,
}

/// Date course style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// Scenic walks and night views
    #[default]
    Romantic,
    /// Outdoor activities
    Active,
    /// Culture and architecture
    Cultural,
    /// Food tours, weather-proof
    Food,
}

impl DateStyle {
    /// Parse an English or Korean style name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "romantic" | "로맨틱" => Some(Self::Romantic),
            "active" | "액티브" => Some(Self::Active),
            "cultural" | "문화" => Some(Self::Cultural),
            "food" | "맛집" => Some(Self::Food),
            _ => None,
        }
    }

    /// Stable English key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Romantic => "romantic",
            Self::Active => "active",
            Self::Cultural => "cultural",
            Self::Food => "food",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Source of static place data
pub trait SpotCatalog: Send + Sync {
    /// Places for an activity, best first; empty when the activity has none
    fn spots(&self, activity: Activity) -> &[Spot];

    /// Date courses for a style, best first
    fn date_courses(&self, style: DateStyle) -> &[DateCourse];
}

/// Built-in Seoul metropolitan area catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct SeoulCatalog;

impl SpotCatalog for SeoulCatalog {
    fn spots(&self, activity: Activity) -> &[Spot] {
        match activity {
            Activity::Hiking => HIKING,
            Activity::Camping => CAMPING,
            Activity::Picnic => PICNIC,
            Activity::Drive => DRIVE,
            Activity::Fishing => FISHING,
            Activity::Golf => GOLF,
            Activity::Running => RUNNING,
            Activity::Bbq => BBQ,
            _ => &[],
        }
    }

    fn date_courses(&self, style: DateStyle) -> &[DateCourse] {
        match style {
            DateStyle::Romantic => ROMANTIC,
            DateStyle::Active => ACTIVE,
            DateStyle::Cultural => CULTURAL,
            DateStyle::Food => FOOD,
        }
    }
}

const fn spot(
    name: &'static str,
    location: &'static str,
    feature: &'static str,
    tip: &'static str,
) -> Spot {
    Spot {
        name,
        location,
        feature,
        tip,
    }
}

const HIKING: &[Spot] = &[
    spot("북한산 (백운대)", "서울 강북/경기 고양", "서울 최고봉, 암벽 등반 코스", "암벽 구간 조심, 등산화 필수"),
    spot("관악산", "서울 관악구/금천구", "서울대 뒷산, 접근성 최고", "정상 연주대에서 서울 전경 조망"),
    spot("도봉산", "서울 도봉구/경기 의정부", "기암괴석과 계곡", "암벽 구간 많음, 장갑 추천"),
    spot("인왕산", "서울 종로구/서대문구", "도심 속 야경 명소", "야간 등산 인기, 서울 야경 최고"),
    spot("아차산", "서울 광진구/경기 구리", "가볍게 오르기 좋은 산", "초보자 추천, 한강 조망"),
    spot("청계산", "서울 서초구/경기 성남", "가족 등산 인기 코스", "주말 혼잡, 평일 추천"),
];

const CAMPING: &[Spot] = &[
    spot("가평 자라섬", "경기 가평군", "북한강변 섬 캠핑장, 재즈페스티벌 장소", "봄/가을 예약 경쟁 치열"),
    spot("양평 두물머리", "경기 양평군", "남한강+북한강 합류점, 일출 명소", "새벽 물안개 환상적"),
    spot("포천 산정호수", "경기 포천시", "호수뷰 캠핑, 수상레저", "여름 물놀이 + 캠핑 조합"),
    spot("춘천 남이섬", "강원 춘천시", "메타세쿼이아 길, 사계절 아름다움", "배 타고 입장, 겨울 눈 풍경 최고"),
    spot("가평 아침고요수목원 근처", "경기 가평군", "수목원 + 캠핑 조합", "오색별빛정원전 (겨울) 연계"),
];

const PICNIC: &[Spot] = &[
    spot("여의도 한강공원", "영등포구", "넓은 잔디밭, 벚꽃 명소, 치맥 성지", "봄 벚꽃축제 기간 인파 주의"),
    spot("반포 한강공원", "서초구", "달빛무지개분수, 세빛둥둥섬", "분수 운영시간 확인 (4-10월)"),
    spot("뚝섬 한강공원", "광진구", "수영장(여름), 자벌레 전망대", "여름 야외수영장 인기"),
    spot("서울숲", "성동구", "사슴 방사장, 넓은 잔디밭", "돗자리 필수, 성수동 카페 연계"),
    spot("올림픽공원", "송파구", "9경 산책로, 들꽃마루", "들꽃마루 가을 핑크뮬리"),
];

const DRIVE: &[Spot] = &[
    spot("서해안 드라이브 (시화방조제)", "경기 시흥/안산", "서해 일몰, 바다 위 드라이브", "일몰 1시간 전 출발 추천"),
    spot("북한강 드라이브", "경기 남양주/가평", "강변 드라이브 + 카페거리", "가평 닭갈비 필수"),
    spot("남한강 드라이브", "경기 양평/여주", "강변 뷰 + 두물머리 일출", "두물머리 새벽 물안개 추천"),
    spot("파주 헤이리 드라이브", "경기 파주", "예술마을 + 아울렛", "주말 혼잡, 평일 추천"),
    spot("강화도 드라이브", "인천 강화군", "섬 일주 + 역사탐방", "젓갈, 순무김치 기념품"),
];

const FISHING: &[Spot] = &[
    spot("팔당댐", "경기 남양주/하남", "서울 근교 대표 낚시터", "새벽 출조 추천"),
    spot("청평호", "경기 가평", "배스낚시 명소", "보트 대여 가능"),
    spot("소양호", "강원 춘천", "겨울 빙어낚시 유명", "겨울 빙어축제 연계"),
    spot("시화방조제", "경기 시흥/안산", "방파제 낚시, 접근성 좋음", "일몰 드라이브 연계"),
    spot("인천 연안부두", "인천 중구", "배낚시 출항지", "선상낚시 배 예약 필수"),
];

const GOLF: &[Spot] = &[
    spot("남서울CC", "경기 성남", "도심 접근성 최고", "예약 경쟁 치열"),
    spot("안양CC", "경기 안양", "아름다운 코스 디자인", "주중 추천"),
    spot("용인CC", "경기 용인", "자연 경관 우수", "가을 단풍 최고"),
    spot("가평베네스트", "경기 가평", "리조트형 골프장", "숙박 패키지 인기"),
];

const RUNNING: &[Spot] = &[
    spot("여의도 한강 러닝 코스", "영등포구", "평탄한 한강변 코스", "야간 조명 잘 되어있음"),
    spot("반포 한강 러닝 코스", "서초구", "야경 좋은 코스", "분수 운영 시간 러닝 추천"),
    spot("올림픽공원 러닝 코스", "송파구", "공원 내 순환 코스", "9경 둘러보며 러닝"),
    spot("서울숲 러닝 코스", "성동구", "숲속 러닝", "평일 한적함"),
    spot("경의선숲길", "마포구", "도심 속 선형 공원", "연남동 → 홍대 코스"),
];

const BBQ: &[Spot] = &[
    spot("여의도 한강공원 바베큐존", "영등포구", "한강 치맥의 성지", "장작불 금지, 가스/숯 OK"),
    spot("뚝섬 한강공원 바베큐존", "광진구", "수영장 옆 바베큐", "여름 물놀이 + 바베큐"),
    spot("난지 한강공원 바베큐존", "마포구", "캠핑장 분위기", "노을공원 연계"),
    spot("서울숲 캠핑장", "성동구", "도심 속 캠핑", "주말 예약 빨리 마감"),
];

const ROMANTIC: &[DateCourse] = &[
    DateCourse {
        name: "북촌 한옥마을 → 삼청동 카페거리",
        location: "종로구",
        duration: "3-4시간",
        feature: "전통 한옥과 현대적 카페가 어우러진 서울 대표 데이트 코스",
        spots: &["북촌 한옥마을", "삼청동 카페거리", "국립현대미술관"],
        tip: "늦은 오후 방문 시 일몰 명소로 유명",
    },
    DateCourse {
        name: "경복궁 야간개장 → 광화문",
        location: "종로구",
        duration: "2-3시간",
        feature: "야간에 조명이 켜진 경복궁의 신비로운 분위기",
        spots: &["경복궁", "광화문광장", "서촌"],
        tip: "야간개장 기간 확인 필수 (계절별 상이)",
    },
    DateCourse {
        name: "반포 한강공원 → 달빛무지개분수",
        location: "서초구",
        duration: "2-3시간",
        feature: "한강 야경과 세계 최장 교량 분수",
        spots: &["반포 한강공원", "세빛둥둥섬", "반포대교"],
        tip: "분수 운영시간 확인 (4-10월)",
    },
    DateCourse {
        name: "남산타워 → 명동",
        location: "중구/용산구",
        duration: "3-4시간",
        feature: "서울 전경과 맛집 거리의 조합",
        spots: &["남산타워", "남산공원", "명동"],
        tip: "케이블카 or 남산 산책로 둘 다 추천",
    },
];

const ACTIVE: &[DateCourse] = &[
    DateCourse {
        name: "뚝섬 한강공원 자전거",
        location: "광진구",
        duration: "2-3시간",
        feature: "한강 자전거길 + 수영장(여름)",
        spots: &["뚝섬 한강공원", "자벌레", "뚝섬유원지역"],
        tip: "자전거 대여소 이용 가능",
    },
    DateCourse {
        name: "서울숲 피크닉",
        location: "성동구",
        duration: "3-4시간",
        feature: "도심 속 대형 공원, 사슴 방사장",
        spots: &["서울숲", "언더스탠드에비뉴", "성수동 카페거리"],
        tip: "돗자리, 간식 준비하면 완벽",
    },
    DateCourse {
        name: "롯데월드 + 석촌호수",
        location: "송파구",
        duration: "4-5시간",
        feature: "테마파크와 벚꽃 명소",
        spots: &["롯데월드", "석촌호수", "롯데타워"],
        tip: "봄 벚꽃 시즌 강추",
    },
];

const CULTURAL: &[DateCourse] = &[
    DateCourse {
        name: "이태원 → 해방촌",
        location: "용산구",
        duration: "3-4시간",
        feature: "이국적인 분위기와 루프탑 카페",
        spots: &["이태원", "경리단길", "해방촌"],
        tip: "해방촌 뷰 맛집 예약 추천",
    },
    DateCourse {
        name: "DDP → 동대문",
        location: "중구",
        duration: "2-3시간",
        feature: "미래적 건축물과 야경",
        spots: &["DDP", "동대문역사문화공원", "청계천"],
        tip: "야간 LED 장미정원 포토존",
    },
];

const FOOD: &[DateCourse] = &[
    DateCourse {
        name: "망원동 → 연남동",
        location: "마포구",
        duration: "3-4시간",
        feature: "힙한 카페와 맛집 투어",
        spots: &["망원시장", "연남동 경의선숲길", "연트럴파크"],
        tip: "망원시장 먹거리 투어 추천",
    },
    DateCourse {
        name: "익선동 → 종로",
        location: "종로구",
        duration: "2-3시간",
        feature: "한옥 골목 카페와 로컬 맛집",
        spots: &["익선동 한옥거리", "낙원상가", "종로3가"],
        tip: "예쁜 한옥 카페 많음",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_spot_activity_has_places() {
        for activity in Activity::WITH_SPOTS {
            assert!(!SeoulCatalog.spots(activity).is_empty(), "{activity}");
        }
        assert!(SeoulCatalog.spots(Activity::Laundry).is_empty());
    }

    #[test]
    fn every_style_has_courses() {
        for style in [DateStyle::Romantic, DateStyle::Active, DateStyle::Cultural, DateStyle::Food] {
            assert!(!SeoulCatalog.date_courses(style).is_empty());
        }
        assert_eq!(DateStyle::from_name("맛집"), Some(DateStyle::Food));
    }
}
