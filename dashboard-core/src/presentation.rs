//! Pure mapping from raw snapshot fields to display values.

use chrono::{DateTime, Datelike, TimeZone};
use serde::Serialize;
use std::fmt::Display;

pub mod dashboard;

/// Icon bucket derived from an upstream condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    PartlyCloudy,
    Cloudy,
    Fallback,
}

impl IconCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Thunderstorm => "thunderstorm",
            IconCategory::Drizzle => "drizzle",
            IconCategory::Rain => "rain",
            IconCategory::Snow => "snow",
            IconCategory::Atmosphere => "atmosphere",
            IconCategory::Clear => "clear",
            IconCategory::PartlyCloudy => "partly_cloudy",
            IconCategory::Cloudy => "cloudy",
            IconCategory::Fallback => "fallback",
        }
    }

    /// Terminal glyph for the category.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconCategory::Thunderstorm => "⛈",
            IconCategory::Drizzle => "🌦",
            IconCategory::Rain => "🌧",
            IconCategory::Snow => "❄",
            IconCategory::Atmosphere => "🌫",
            IconCategory::Clear => "☀",
            IconCategory::PartlyCloudy => "⛅",
            IconCategory::Cloudy => "☁",
            IconCategory::Fallback => "☄",
        }
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a condition code to its icon. Total over `i32`; 400-498 is left
/// unmapped on purpose and falls through to `Fallback`.
pub fn icon_for(condition_id: i32) -> IconCategory {
    match condition_id {
        200..=299 => IconCategory::Thunderstorm,
        300..=399 => IconCategory::Drizzle,
        499..=599 => IconCategory::Rain,
        600..=699 => IconCategory::Snow,
        700..=799 => IconCategory::Atmosphere,
        800 => IconCategory::Clear,
        801 | 802 => IconCategory::PartlyCloudy,
        803 | 804 => IconCategory::Cloudy,
        _ => IconCategory::Fallback,
    }
}

fn local<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(tz))
}

/// English weekday name for a day-of-week number, 1 = Sunday through 7 = Saturday.
pub fn weekday_name(day_of_week: u32) -> &'static str {
    match day_of_week {
        1 => "Sunday",
        2 => "Monday",
        3 => "Tuesday",
        4 => "Wednesday",
        5 => "Thursday",
        6 => "Friday",
        7 => "Saturday",
        _ => "Unknown",
    }
}

/// Weekday of a UNIX timestamp in `tz`, e.g. `Friday`.
pub fn day_name<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> &'static str {
    local(timestamp, tz)
        .map(|dt| weekday_name(dt.weekday().number_from_sunday()))
        .unwrap_or("Unknown")
}

/// 12-hour clock time with minutes, e.g. `08:59 am`.
pub fn clock_time<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    local(timestamp, tz)
        .map(|dt| dt.format("%I:%M %P").to_string().to_lowercase())
        .unwrap_or_else(|| "--:--".to_string())
}

/// 12-hour clock hour without padding, e.g. `8 am`.
pub fn hour_label<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    local(timestamp, tz)
        .map(|dt| dt.format("%-I %P").to_string().to_lowercase())
        .unwrap_or_else(|| "--".to_string())
}

/// Label of the hourly tile at `index`; the first tile always reads `Now`.
pub fn hourly_label<Tz: TimeZone>(index: usize, timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    if index == 0 {
        "Now".to_string()
    } else {
        hour_label(timestamp, tz)
    }
}

/// Rounds half away from zero. Every displayed number goes through here.
pub fn round_display(value: f64) -> i64 {
    value.round() as i64
}

/// A 0.0-1.0 probability as a whole percentage.
pub fn percent(probability: f64) -> i64 {
    round_display(probability * 100.0)
}

/// Eight-point compass direction for a wind bearing in degrees.
pub fn compass_point(degrees: i32) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let normalized = degrees.rem_euclid(360) as f64;
    let index = ((normalized + 22.5) / 45.0) as usize % POINTS.len();
    POINTS[index]
}
