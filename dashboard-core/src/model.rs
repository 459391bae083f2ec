use serde::{Deserialize, Serialize};

/// The place a dashboard is fetched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            name: "Stockholm".to_string(),
            latitude: 59.3467183,
            longitude: 17.9922661,
        }
    }
}

/// One OpenWeather "one call" payload. Immutable once received.
///
/// Field names follow the upstream JSON keys through serde renames; keys the
/// model does not know about are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(rename = "dt")]
    pub timestamp: i64,
    pub sunrise: i64,
    pub sunset: i64,
    #[serde(rename = "temp")]
    pub temperature: f64,
    pub feels_like: f64,
    /// hPa
    pub pressure: f64,
    /// Percent, 0-100.
    pub humidity: f64,
    pub wind_speed: f64,
    /// Meteorological degrees, 0 is north.
    #[serde(rename = "wind_deg")]
    pub wind_direction: i32,
    #[serde(rename = "weather")]
    pub conditions: Vec<ConditionCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    #[serde(rename = "dt")]
    pub timestamp: i64,
    #[serde(rename = "weather")]
    pub conditions: Vec<ConditionCode>,
    #[serde(rename = "temp")]
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    #[serde(rename = "dt")]
    pub timestamp: i64,
    #[serde(rename = "temp")]
    pub temp_range: TempRange,
    #[serde(rename = "weather")]
    pub conditions: Vec<ConditionCode>,
    /// Probability of precipitation, 0.0-1.0.
    #[serde(rename = "pop")]
    pub precipitation_probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempRange {
    pub min: f64,
    pub max: f64,
}

/// Upstream weather-condition entry. Only `id` drives icon selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionCode {
    pub id: i32,
    #[serde(rename = "main")]
    pub label: String,
}

impl CurrentConditions {
    pub fn primary_condition(&self) -> Option<&ConditionCode> {
        self.conditions.first()
    }
}

impl HourlyPoint {
    pub fn primary_condition(&self) -> Option<&ConditionCode> {
        self.conditions.first()
    }
}

impl DailyPoint {
    pub fn primary_condition(&self) -> Option<&ConditionCode> {
        self.conditions.first()
    }
}

impl WeatherSnapshot {
    /// Today's entry of the daily forecast, if the payload carried one.
    pub fn today(&self) -> Option<&DailyPoint> {
        self.daily.first()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub const ONECALL_JSON: &str = r#"{
        "lat": 59.3467,
        "lon": 17.9923,
        "timezone": "Europe/Stockholm",
        "timezone_offset": 7200,
        "current": {
            "dt": 1620377952,
            "sunrise": 1620355000,
            "sunset": 1620414000,
            "temp": 14.6,
            "feels_like": 13.2,
            "pressure": 1012,
            "humidity": 58,
            "dew_point": 6.4,
            "uvi": 3.1,
            "clouds": 75,
            "visibility": 10000,
            "wind_speed": 4.63,
            "wind_deg": 230,
            "weather": [
                { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }
            ]
        },
        "hourly": [
            {
                "dt": 1620374400,
                "temp": 14.2,
                "feels_like": 12.9,
                "weather": [ { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" } ],
                "pop": 0
            },
            {
                "dt": 1620378000,
                "temp": 15.5,
                "weather": [ { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" } ],
                "pop": 0.2
            }
        ],
        "daily": [
            {
                "dt": 1620381600,
                "sunrise": 1620355000,
                "sunset": 1620414000,
                "temp": { "day": 14.6, "min": 13.2, "max": 23.2, "night": 9.1, "eve": 12.0, "morn": 8.0 },
                "weather": [ { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" } ],
                "pop": 0.34
            },
            {
                "dt": 1620468000,
                "temp": { "min": -2.5, "max": 4.5 },
                "weather": [],
                "pop": 0
            }
        ]
    }"#;

    pub fn snapshot() -> WeatherSnapshot {
        serde_json::from_str(ONECALL_JSON).expect("fixture must decode")
    }
}
