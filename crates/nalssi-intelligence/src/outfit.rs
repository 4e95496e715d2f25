// ABOUTME: Clothing recommendation from temperature bands with weather modifiers
// ABOUTME: Combined with the outing score for the comprehensive going-out advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::composite::outing::{outing_score, OutingReport};
use crate::config::OutingWeights;
use crate::engine::Conditions;
use nalssi_core::grade::{GradeStep, GradeTable};
use serde::Serialize;

const UMBRELLA: &str = "우산";
const MASK: &str = "마스크";

/// Clothing for one temperature band
#[derive(Debug, PartialEq, Eq)]
pub struct OutfitBand {
    /// Band name
    pub category: &'static str,
    /// Tops
    pub top: &'static [&'static str],
    /// Bottoms
    pub bottom: &'static [&'static str],
    /// Outerwear
    pub outer: &'static [&'static str],
    /// Accessories
    pub accessories: &'static [&'static str],
    /// Base tip
    pub tip: &'static str,
}

/// Bands are contiguous; each lower bound is inclusive
pub const BANDS: GradeTable<&OutfitBand> = GradeTable::new(
    &[
        GradeStep::new(
            28.0,
            &OutfitBand {
                category: "한여름",
                top: &["민소매", "반팔 티셔츠", "린넨 셔츠"],
                bottom: &["반바지", "린넨 팬츠", "면바지"],
                outer: &[],
                accessories: &["모자", "선글라스"],
                tip: "더위 조심! 시원한 소재의 옷을 입으세요.",
            },
        ),
        GradeStep::new(
            23.0,
            &OutfitBand {
                category: "초여름/초가을",
                top: &["반팔 티셔츠", "얇은 셔츠", "블라우스"],
                bottom: &["면바지", "청바지", "슬랙스"],
                outer: &["얇은 가디건"],
                accessories: &[],
                tip: "일교차에 대비해 얇은 겉옷을 챙기세요.",
            },
        ),
        GradeStep::new(
            20.0,
            &OutfitBand {
                category: "환절기",
                top: &["긴팔 티셔츠", "얇은 니트", "맨투맨"],
                bottom: &["청바지", "슬랙스", "면바지"],
                outer: &["가디건", "얇은 자켓"],
                accessories: &[],
                tip: "아침저녁으로 쌀쌀할 수 있어요.",
            },
        ),
        GradeStep::new(
            17.0,
            &OutfitBand {
                category: "선선한 날씨",
                top: &["니트", "맨투맨", "후드티"],
                bottom: &["청바지", "슬랙스"],
                outer: &["자켓", "야상", "트렌치코트"],
                accessories: &[],
                tip: "겉옷은 필수! 레이어드 스타일 추천.",
            },
        ),
        GradeStep::new(
            12.0,
            &OutfitBand {
                category: "쌀쌀한 날씨",
                top: &["니트", "기모 맨투맨", "셔츠 레이어드"],
                bottom: &["청바지", "기모 팬츠"],
                outer: &["자켓", "코트", "가죽자켓"],
                accessories: &["스카프"],
                tip: "두꺼운 겉옷을 준비하세요.",
            },
        ),
        GradeStep::new(
            9.0,
            &OutfitBand {
                category: "초겨울",
                top: &["두꺼운 니트", "기모 후드"],
                bottom: &["기모 팬츠", "코듀로이"],
                outer: &["코트", "패딩", "무스탕"],
                accessories: &["머플러", "장갑"],
                tip: "보온에 신경 쓰세요.",
            },
        ),
        GradeStep::new(
            5.0,
            &OutfitBand {
                category: "겨울",
                top: &["두꺼운 니트", "히트텍"],
                bottom: &["기모 팬츠", "울 팬츠"],
                outer: &["두꺼운 코트", "롱패딩", "숏패딩"],
                accessories: &["머플러", "장갑", "귀마개"],
                tip: "따뜻하게 입으세요!",
            },
        ),
    ],
    &OutfitBand {
        category: "한겨울",
        top: &["히트텍", "두꺼운 니트", "기모 후드"],
        bottom: &["기모 팬츠", "발열 내의"],
        outer: &["롱패딩", "두꺼운 코트"],
        accessories: &["머플러", "장갑", "귀마개", "핫팩"],
        tip: "최대한 따뜻하게! 동상 주의.",
    },
);

/// Items to wear
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clothing {
    /// Tops
    pub top: Vec<&'static str>,
    /// Bottoms
    pub bottom: Vec<&'static str>,
    /// Outerwear
    pub outer: Vec<&'static str>,
    /// Accessories including weather additions
    pub accessories: Vec<&'static str>,
}

/// Outfit advice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitReport {
    /// Current temperature
    pub temperature: f64,
    /// Band name
    pub category: &'static str,
    /// Items
    pub recommendation: Clothing,
    /// Band tip plus weather notes
    pub tip: String,
}

impl OutfitReport {
    fn add_accessory(&mut self, item: &'static str) -> bool {
        if self.recommendation.accessories.contains(&item) {
            return false;
        }
        self.recommendation.accessories.push(item);
        true
    }
}

/// Dress for the current weather
#[must_use]
pub fn outfit(c: &Conditions) -> OutfitReport {
    let weather = &c.weather;
    let band = BANDS.bucket(weather.temperature);
    let mut report = OutfitReport {
        temperature: weather.temperature,
        category: band.category,
        recommendation: Clothing {
            top: band.top.to_vec(),
            bottom: band.bottom.to_vec(),
            outer: band.outer.to_vec(),
            accessories: band.accessories.to_vec(),
        },
        tip: band.tip.to_owned(),
    };

    if weather.sky.is_rain() {
        report.add_accessory(UMBRELLA);
        report.tip.push_str(" 비 예보가 있으니 우산을 챙기세요!");
    } else if weather.sky.is_snow() {
        report.add_accessory("방수 신발");
        report.tip.push_str(" 눈 예보가 있으니 미끄럼 주의!");
    }
    if weather.rain_probability >= 60.0 {
        report.add_accessory(UMBRELLA);
    }
    if weather.wind_speed >= 5.0 {
        report.tip.push_str(" 바람이 강해요, 방풍 자켓 추천!");
    }
    if weather.humidity >= 80.0 {
        report.tip.push_str(" 습도가 높아 불쾌할 수 있어요.");
    }
    report
}

/// Outing score and outfit together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComprehensiveReport {
    /// Outing suitability
    pub outing_score: OutingReport,
    /// Outfit advice, with a mask on dusty days
    pub outfit_recommendation: OutfitReport,
    /// One-line summary
    pub summary: String,
}

/// Going-out advice combining the outing score and the outfit
#[must_use]
pub fn comprehensive(c: &Conditions, weights: &OutingWeights) -> ComprehensiveReport {
    let outing = outing_score(c, weights);
    let mut dress = outfit(c);

    if (c.air.pm10_grade.is_bad() || c.air.pm25_grade.is_bad()) && dress.add_accessory(MASK) {
        dress.tip.push_str(" 미세먼지가 나쁘니 마스크를 착용하세요.");
    }

    ComprehensiveReport {
        summary: format!(
            "외출 적합도 {}점 ({}). {}",
            outing.score, outing.grade, dress.tip
        ),
        outing_score: outing,
        outfit_recommendation: dress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, Sky, WeatherSnapshot};

    fn at(weather: WeatherSnapshot, air: AirQualitySnapshot) -> Conditions {
        Conditions::new(weather, air, NaiveDate::from_ymd_opt(2025, 11, 2).unwrap())
    }

    #[test]
    fn bands_have_no_gaps() {
        assert_eq!(BANDS.bucket(27.5).category, "초여름/초가을");
        assert_eq!(BANDS.bucket(22.5).category, "환절기");
        assert_eq!(BANDS.bucket(4.5).category, "한겨울");
        assert_eq!(BANDS.bucket(40.0).category, "한여름");
        assert_eq!(BANDS.len(), 8);
    }

    #[test]
    fn rain_adds_single_umbrella() {
        let weather = WeatherSnapshot::new(15.0, 85.0, 6.0, 90.0).with_sky(Sky::Rain);
        let report = outfit(&at(weather, AirQualitySnapshot::default()));
        assert_eq!(report.category, "쌀쌀한 날씨");
        assert_eq!(report.recommendation.accessories, vec!["스카프", UMBRELLA]);
        assert_eq!(
            report.tip,
            "두꺼운 겉옷을 준비하세요. 비 예보가 있으니 우산을 챙기세요! \
             바람이 강해요, 방풍 자켓 추천! 습도가 높아 불쾌할 수 있어요."
        );
    }

    #[test]
    fn snow_asks_for_waterproof_shoes() {
        let weather = WeatherSnapshot::new(-2.0, 60.0, 1.0, 70.0).with_sky(Sky::Snow);
        let report = outfit(&at(weather, AirQualitySnapshot::default()));
        assert!(report.recommendation.accessories.contains(&"방수 신발"));
        assert!(report.recommendation.accessories.contains(&UMBRELLA));
        assert!(report.tip.ends_with("미끄럼 주의!"));
    }

    #[test]
    fn dusty_day_adds_mask_to_summary() {
        let weather = WeatherSnapshot::new(20.0, 50.0, 2.0, 0.0);
        let report = comprehensive(
            &at(weather, AirQualitySnapshot::from_values(100.0, 20.0)),
            &OutingWeights::default(),
        );
        assert!(report.outfit_recommendation.recommendation.accessories.contains(&MASK));
        assert!(report.summary.starts_with("외출 적합도 88점 (좋음)."));
        assert!(report.summary.ends_with("마스크를 착용하세요."));
    }
}
