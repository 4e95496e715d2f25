// ABOUTME: Placeholder substitution for factor, recommendation, and warning texts
// ABOUTME: Numbers print without decimals when integral and with one decimal otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::condition::{Conditions, Field};

/// Format a reading the way messages display it
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && (value.fract()).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn field_text(field: Field, c: &Conditions) -> String {
    field
        .value(c)
        .map_or_else(|| "-".to_owned(), format_number)
}

fn placeholder(name: &str, c: &Conditions) -> Option<String> {
    let text = match name {
        "temp" => field_text(Field::Temperature, c),
        "temp_min" => field_text(Field::TempMinOrEstimate, c),
        "humidity" => field_text(Field::Humidity, c),
        "wind" => field_text(Field::WindSpeed, c),
        "rain" => field_text(Field::RainProbability, c),
        "rain_tomorrow" => field_text(Field::RainProbabilityTomorrow, c),
        "uv" => field_text(Field::UvIndex, c),
        "pm25" => field_text(Field::Pm25, c),
        "pm10" => field_text(Field::Pm10, c),
        "pm25_grade" => c.air.pm25_grade.label().to_owned(),
        "pm10_grade" => c.air.pm10_grade.label().to_owned(),
        "sky" => c.weather.sky.label().to_owned(),
        "swing" => Field::DailySwingOrDefault
            .value(c)
            .map_or_else(|| "-".to_owned(), |v| format!("{v:.0}")),
        "delta" => Field::YesterdayDelta
            .value(c)
            .map_or_else(|| "-".to_owned(), |v| format!("{v:.1}")),
        "aqi" => Field::EstimatedAqi
            .value(c)
            .map_or_else(|| "-".to_owned(), |v| format!("{v:.0}")),
        _ => return None,
    };
    Some(text)
}

/// Substitute `{name}` placeholders with readings from the conditions
///
/// Unknown placeholders are left untouched.
#[must_use]
pub fn render(template: &str, c: &Conditions) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match placeholder(name, c) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn conditions() -> Conditions {
        Conditions::new(
            WeatherSnapshot::new(23.5, 60.0, 3.0, 40.0).with_daily_range(15.0, 27.0),
            AirQualitySnapshot::from_values(45.0, 20.0),
            NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
        )
    }

    #[test]
    fn numbers_drop_trailing_zero() {
        assert_eq!(format_number(18.0), "18");
        assert_eq!(format_number(18.25), "18.2");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn substitutes_known_placeholders() {
        let c = conditions();
        assert_eq!(
            render("기온 {temp}도, 습도 {humidity}%, 일교차 {swing}도", &c),
            "기온 23.5도, 습도 60%, 일교차 12도"
        );
        assert_eq!(render("미세먼지 {pm10_grade} ({pm25}ug/m3)", &c), "미세먼지 보통 (20ug/m3)");
    }

    #[test]
    fn leaves_unknown_and_unbalanced_text() {
        let c = conditions();
        assert_eq!(render("{unknown} {temp", &c), "{unknown} {temp");
    }

    #[test]
    fn sentinel_prints_dash() {
        let c = Conditions::new(
            WeatherSnapshot::default(),
            AirQualitySnapshot::unavailable(),
            NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
        );
        assert_eq!(render("PM2.5 {pm25}", &c), "PM2.5 -");
    }
}
