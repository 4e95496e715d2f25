// ABOUTME: Sky condition enum with Korean labels, upstream SKY/PTY code mapping, and text parsing
// ABOUTME: Precipitation type takes precedence over cloud cover when both are reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sky condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Sky {
    /// 맑음
    #[default]
    Clear,
    /// 구름많음
    PartlyCloudy,
    /// 흐림
    Overcast,
    /// 비
    Rain,
    /// 눈
    Snow,
    /// 비/눈 (mixed precipitation)
    Sleet,
    /// 소나기
    Shower,
    /// 뇌우
    Thunderstorm,
    /// 안개
    Fog,
}

impl Sky {
    /// Every variant, in declaration order
    pub const ALL: [Self; 9] = [
        Self::Clear,
        Self::PartlyCloudy,
        Self::Overcast,
        Self::Rain,
        Self::Snow,
        Self::Sleet,
        Self::Shower,
        Self::Thunderstorm,
        Self::Fog,
    ];

    /// Korean display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "맑음",
            Self::PartlyCloudy => "구름많음",
            Self::Overcast => "흐림",
            Self::Rain => "비",
            Self::Snow => "눈",
            Self::Sleet => "비/눈",
            Self::Shower => "소나기",
            Self::Thunderstorm => "뇌우",
            Self::Fog => "안개",
        }
    }

    /// Parse upstream text by containment, most severe phenomenon first
    #[must_use]
    pub fn from_label(text: &str) -> Self {
        let has = |needle: &str| text.contains(needle);

        if ["천둥", "번개", "뇌우", "낙뢰"].iter().any(|n| has(n)) {
            Self::Thunderstorm
        } else if has("소나기") {
            Self::Shower
        } else if has("비/눈") || has("진눈깨비") || (has("빗방울") && has("눈날림")) {
            Self::Sleet
        } else if has("눈") {
            Self::Snow
        } else if has("비") || has("빗방울") {
            Self::Rain
        } else if has("안개") {
            Self::Fog
        } else if has("흐") {
            Self::Overcast
        } else if has("구름") {
            Self::PartlyCloudy
        } else {
            Self::Clear
        }
    }

    /// Map the upstream SKY (cloud cover) and PTY (precipitation type) codes
    #[must_use]
    pub const fn from_codes(sky_code: u8, pty_code: u8) -> Self {
        match pty_code {
            1 | 5 => Self::Rain,
            2 | 6 => Self::Sleet,
            3 | 7 => Self::Snow,
            4 => Self::Shower,
            _ => match sky_code {
                3 => Self::PartlyCloudy,
                4 => Self::Overcast,
                _ => Self::Clear,
            },
        }
    }

    /// Precipitation label when anything is falling
    #[must_use]
    pub const fn precipitation(self) -> Option<&'static str> {
        match self {
            Self::Rain | Self::Snow | Self::Sleet | Self::Shower | Self::Thunderstorm => {
                Some(self.label())
            }
            Self::Clear | Self::PartlyCloudy | Self::Overcast | Self::Fog => None,
        }
    }

    /// Rain is falling (pure rain or mixed)
    #[must_use]
    pub const fn is_rain(self) -> bool {
        matches!(self, Self::Rain | Self::Sleet)
    }

    /// Snow is falling (pure snow or mixed)
    #[must_use]
    pub const fn is_snow(self) -> bool {
        matches!(self, Self::Snow | Self::Sleet)
    }
}

impl From<String> for Sky {
    fn from(text: String) -> Self {
        Self::from_label(&text)
    }
}

impl From<Sky> for &'static str {
    fn from(sky: Sky) -> Self {
        sky.label()
    }
}

impl fmt::Display for Sky {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_parser() {
        for sky in Sky::ALL {
            assert_eq!(Sky::from_label(sky.label()), sky);
        }
    }

    #[test]
    fn precipitation_code_overrides_cloud_cover() {
        assert_eq!(Sky::from_codes(1, 0), Sky::Clear);
        assert_eq!(Sky::from_codes(3, 0), Sky::PartlyCloudy);
        assert_eq!(Sky::from_codes(4, 0), Sky::Overcast);
        assert_eq!(Sky::from_codes(1, 1), Sky::Rain);
        assert_eq!(Sky::from_codes(4, 2), Sky::Sleet);
        assert_eq!(Sky::from_codes(4, 3), Sky::Snow);
        assert_eq!(Sky::from_codes(3, 4), Sky::Shower);
        assert_eq!(Sky::from_codes(4, 6), Sky::Sleet);
        assert_eq!(Sky::from_codes(4, 7), Sky::Snow);
    }

    #[test]
    fn free_text_parsing() {
        assert_eq!(Sky::from_label("천둥번개"), Sky::Thunderstorm);
        assert_eq!(Sky::from_label("빗방울눈날림"), Sky::Sleet);
        assert_eq!(Sky::from_label("흐리고 비"), Sky::Rain);
        assert_eq!(Sky::from_label("구름조금"), Sky::PartlyCloudy);
        assert_eq!(Sky::from_label(""), Sky::Clear);
    }

    #[test]
    fn mixed_precipitation_counts_as_rain_and_snow() {
        assert!(Sky::Sleet.is_rain());
        assert!(Sky::Sleet.is_snow());
        assert!(!Sky::Shower.is_rain());
        assert_eq!(Sky::Fog.precipitation(), None);
    }
}
