use chrono::TimeZone;
use serde::Serialize;
use std::fmt::Display;

use super::{
    IconCategory, clock_time, compass_point, day_name, hourly_label, icon_for, percent,
    round_display,
};
use crate::model::{ConditionCode, WeatherSnapshot};

/// Everything the screen shows, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub header: Header,
    pub hourly: Vec<HourlyTile>,
    pub daily: Vec<DailyRow>,
    pub details: Details,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub location_name: String,
    pub temperature: i64,
    /// Today's high and low; absent when the payload has no daily entries.
    pub max_temperature: Option<i64>,
    pub min_temperature: Option<i64>,
    pub condition: String,
    pub feels_like: i64,
    pub icon: IconCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyTile {
    pub label: String,
    pub temperature: i64,
    pub icon: IconCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRow {
    pub day: String,
    pub icon: Option<IconCategory>,
    /// Only set when there is a chance of precipitation at all.
    pub precipitation: Option<i64>,
    pub max_temperature: i64,
    pub min_temperature: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Details {
    pub sunrise: String,
    pub sunset: String,
    pub precipitation: String,
    pub humidity: String,
    pub wind: String,
    pub wind_direction: &'static str,
    pub pressure: String,
}

fn primary_icon(conditions: &[ConditionCode]) -> IconCategory {
    conditions
        .first()
        .map(|c| icon_for(c.id))
        .unwrap_or(IconCategory::Fallback)
}

impl Dashboard {
    /// Derive the dashboard for `snapshot`, formatting times in `tz` and
    /// showing at most `hourly_limit` hourly tiles.
    pub fn build<Tz: TimeZone>(
        snapshot: &WeatherSnapshot,
        location_name: &str,
        hourly_limit: usize,
        tz: &Tz,
    ) -> Self
    where
        Tz::Offset: Display,
    {
        let current = &snapshot.current;
        let today = snapshot.today();

        let header = Header {
            location_name: location_name.to_string(),
            temperature: round_display(current.temperature),
            max_temperature: today.map(|d| round_display(d.temp_range.max)),
            min_temperature: today.map(|d| round_display(d.temp_range.min)),
            condition: current
                .primary_condition()
                .map(|c| c.label.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            feels_like: round_display(current.feels_like),
            icon: primary_icon(&current.conditions),
        };

        let hourly = snapshot
            .hourly
            .iter()
            .take(hourly_limit)
            .enumerate()
            .map(|(index, point)| HourlyTile {
                label: hourly_label(index, point.timestamp, tz),
                temperature: round_display(point.temperature),
                icon: primary_icon(&point.conditions),
            })
            .collect();

        let daily = snapshot
            .daily
            .iter()
            .map(|point| {
                let chance = percent(point.precipitation_probability);
                DailyRow {
                    day: day_name(point.timestamp, tz).to_string(),
                    icon: point.primary_condition().map(|c| icon_for(c.id)),
                    precipitation: (chance > 0).then_some(chance),
                    max_temperature: round_display(point.temp_range.max),
                    min_temperature: round_display(point.temp_range.min),
                }
            })
            .collect();

        let details = Details {
            sunrise: clock_time(current.sunrise, tz),
            sunset: clock_time(current.sunset, tz),
            precipitation: today
                .map(|d| format!("{}%", percent(d.precipitation_probability)))
                .unwrap_or_else(|| "--".to_string()),
            humidity: format!("{}%", round_display(current.humidity)),
            wind: format!("{} km/h", round_display(current.wind_speed)),
            wind_direction: compass_point(current.wind_direction),
            pressure: format!("{} hPa", round_display(current.pressure)),
        };

        Self { header, hourly, daily, details }
    }
}
