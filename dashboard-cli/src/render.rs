use dashboard_core::{
    Dashboard,
    presentation::dashboard::{DailyRow, HourlyTile},
};
use std::{
    fmt,
    io::Write,
    time::Duration,
};
use tokio::sync::oneshot;

const TILE_WIDTH: usize = 7;
const METEOR_TRACK: usize = 10;

/// Plain-text rendering of a dashboard.
pub struct TextDashboard<'a>(pub &'a Dashboard);

impl fmt::Display for TextDashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Dashboard { header, hourly, daily, details } = self.0;

        writeln!(f, "{}", header.location_name)?;
        writeln!(f)?;
        writeln!(f, "{}°  {}", header.temperature, header.icon.glyph())?;
        if let (Some(max), Some(min)) = (header.max_temperature, header.min_temperature) {
            writeln!(f, "↑ {max}°  ↓ {min}°")?;
        }
        writeln!(f, "{}", header.condition)?;
        writeln!(f, "Feels like {}°", header.feels_like)?;

        writeln!(f)?;
        write_hourly(f, hourly)?;

        writeln!(f)?;
        for row in daily {
            write_daily_row(f, row)?;
        }

        writeln!(f)?;
        writeln!(f, "{:<16}{:<16}", "Sunrise", "Sunset")?;
        writeln!(f, "{:<16}{:<16}", details.sunrise, details.sunset)?;
        writeln!(f, "{:<16}{:<16}", "Precipitation", "Humidity")?;
        writeln!(f, "{:<16}{:<16}", details.precipitation, details.humidity)?;
        writeln!(f, "{:<16}{:<16}", "Wind", "Pressure")?;
        writeln!(
            f,
            "{:<16}{:<16}",
            format!("{} {}", details.wind, details.wind_direction),
            details.pressure
        )
    }
}

fn write_hourly(f: &mut fmt::Formatter<'_>, tiles: &[HourlyTile]) -> fmt::Result {
    for tile in tiles {
        write!(f, "{:^TILE_WIDTH$}", tile.label)?;
    }
    writeln!(f)?;
    for tile in tiles {
        write!(f, "{:^TILE_WIDTH$}", format!("{}°", tile.temperature))?;
    }
    writeln!(f)
}

fn write_daily_row(f: &mut fmt::Formatter<'_>, row: &DailyRow) -> fmt::Result {
    let icon = row.icon.map(|icon| icon.glyph()).unwrap_or(" ");
    let chance = row.precipitation.map(|p| format!("{p}%")).unwrap_or_default();

    writeln!(
        f,
        "{:<11}{} {:>4}   {:>4} {:>4}",
        row.day, icon, chance, row.max_temperature, row.min_temperature
    )
}

/// One frame of the loading animation: a meteor bouncing along a short track.
pub fn loading_frame(tick: usize) -> String {
    let period = 2 * METEOR_TRACK;
    let step = tick % period;
    let position = if step <= METEOR_TRACK { step } else { period - step };

    format!(
        "{}☄{} Loading weather",
        " ".repeat(position),
        " ".repeat(METEOR_TRACK - position)
    )
}

/// Draws the loading animation on stderr until `stop` fires, then clears it.
pub async fn loading_animation(mut stop: oneshot::Receiver<()>) {
    let mut ticker = tokio::time::interval(Duration::from_millis(120));
    let mut stderr = std::io::stderr();

    for tick in 0.. {
        tokio::select! {
            _ = ticker.tick() => {
                write!(stderr, "\r{}", loading_frame(tick)).ok();
                stderr.flush().ok();
            }
            _ = &mut stop => break,
        }
    }

    let blank = " ".repeat(loading_frame(0).chars().count());
    write!(stderr, "\r{blank}\r").ok();
    stderr.flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{
        IconCategory,
        presentation::dashboard::{Details, Header},
    };

    fn dashboard() -> Dashboard {
        Dashboard {
            header: Header {
                location_name: "Stockholm".into(),
                temperature: 15,
                max_temperature: Some(23),
                min_temperature: Some(13),
                condition: "Clouds".into(),
                feels_like: 13,
                icon: IconCategory::Cloudy,
            },
            hourly: vec![
                HourlyTile { label: "Now".into(), temperature: 15, icon: IconCategory::Cloudy },
                HourlyTile { label: "9 am".into(), temperature: 16, icon: IconCategory::Rain },
            ],
            daily: vec![
                DailyRow {
                    day: "Friday".into(),
                    icon: Some(IconCategory::Rain),
                    precipitation: Some(34),
                    max_temperature: 23,
                    min_temperature: 13,
                },
                DailyRow {
                    day: "Saturday".into(),
                    icon: None,
                    precipitation: None,
                    max_temperature: 5,
                    min_temperature: -3,
                },
            ],
            details: Details {
                sunrise: "02:36 am".into(),
                sunset: "07:00 pm".into(),
                precipitation: "34%".into(),
                humidity: "58%".into(),
                wind: "5 km/h".into(),
                wind_direction: "SW",
                pressure: "1012 hPa".into(),
            },
        }
    }

    #[test]
    fn renders_every_section() {
        let text = TextDashboard(&dashboard()).to_string();

        assert!(text.starts_with("Stockholm\n"));
        assert!(text.contains("15°  ☁"));
        assert!(text.contains("↑ 23°  ↓ 13°"));
        assert!(text.contains("Feels like 13°"));
        assert!(text.contains("  Now  "));
        assert!(text.contains(" 9 am  "));
        assert!(text.contains("34%"));
        assert!(text.contains("5 km/h SW"));
        assert!(text.contains("1012 hPa"));
    }

    #[test]
    fn daily_rows_skip_absent_precipitation() {
        let text = TextDashboard(&dashboard()).to_string();
        let saturday = text.lines().find(|l| l.starts_with("Saturday")).unwrap();

        assert!(!saturday.contains('%'));
        assert!(saturday.trim_end().ends_with("5   -3"));
    }

    #[test]
    fn header_without_daily_data_omits_range() {
        let mut dashboard = dashboard();
        dashboard.header.max_temperature = None;
        dashboard.header.min_temperature = None;

        let text = TextDashboard(&dashboard).to_string();
        assert!(!text.contains('↑'));
    }

    #[test]
    fn meteor_bounces_back_and_forth() {
        assert!(loading_frame(0).starts_with('☄'));
        assert!(loading_frame(METEOR_TRACK).starts_with(&" ".repeat(METEOR_TRACK)));
        assert_eq!(loading_frame(1), loading_frame(2 * METEOR_TRACK - 1));
        assert_eq!(loading_frame(3), loading_frame(3 + 2 * METEOR_TRACK));

        let widths: Vec<usize> = (0..40).map(|t| loading_frame(t).chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[tokio::test]
    async fn animation_stops_on_signal() {
        let (stop, stopped) = oneshot::channel();
        let handle = tokio::spawn(loading_animation(stopped));

        stop.send(()).unwrap();
        handle.await.unwrap();
    }
}
