// ABOUTME: Korean air quality grade thresholds for PM10 and PM2.5 (µg/m³)
// ABOUTME: Lower bound of each grade; readings below zero are the unavailable sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Sentinel value for a failed or missing measurement
pub const UNAVAILABLE: f64 = -1.0;

/// PM10 lower bound of "보통"
pub const PM10_MODERATE_MIN: f64 = 31.0;
/// PM10 lower bound of "나쁨"
pub const PM10_BAD_MIN: f64 = 81.0;
/// PM10 lower bound of "매우나쁨"
pub const PM10_VERY_BAD_MIN: f64 = 151.0;

/// PM2.5 lower bound of "보통"
pub const PM25_MODERATE_MIN: f64 = 16.0;
/// PM2.5 lower bound of "나쁨"
pub const PM25_BAD_MIN: f64 = 36.0;
/// PM2.5 lower bound of "매우나쁨"
pub const PM25_VERY_BAD_MIN: f64 = 76.0;
