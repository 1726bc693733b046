use crate::domain::SpeedMultiplier;
use crate::extensions::duration_ext::ClockFormat;
use crate::playback::PlaybackSnapshot;
use chrono::{DateTime, FixedOffset, TimeZone};
use std::fmt;
use tokio::time::Instant;

/// `route_index / (total - 1) * 100`, or 0 if the route has no segments.
pub fn progress_percent(route_index: usize, total_waypoints: usize) -> f64 {
    if total_waypoints <= 1 {
        return 0.0;
    }

    route_index as f64 / (total_waypoints - 1) as f64 * 100.0
}

/// A cosmetic speed, not a measured one.
pub fn display_speed_kmh(speed: SpeedMultiplier, base_speed_kmh: f64) -> f64 {
    speed.factor() * base_speed_kmh
}

pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<FixedOffset>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    timestamp.with_timezone(tz).format("%H:%M:%S").to_string()
}

pub fn waypoint_counter(route_index: usize, total_waypoints: usize) -> String {
    if total_waypoints == 0 {
        return "0 of 0".to_string();
    }

    format!("{} of {}", route_index + 1, total_waypoints)
}

/// What the control surface shows, derived from a snapshot.
#[derive(Clone, PartialEq, Debug)]
pub struct DisplayValues {
    pub coordinates: Option<String>,
    pub timestamp: Option<String>,
    pub speed: String,
    pub speed_label: String,
    pub elapsed: String,
    pub progress: String,
    pub counter: String,
}

impl DisplayValues {
    pub fn derive<Tz: TimeZone>(snapshot: &PlaybackSnapshot, now: Instant, base_speed_kmh: f64, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        DisplayValues {
            coordinates: snapshot.current_waypoint.as_ref().map(|waypoint| waypoint.position.to_string()),
            timestamp: snapshot.current_waypoint.as_ref().map(|waypoint| format_timestamp(&waypoint.timestamp, tz)),
            speed: format!("{:.1} km/h", display_speed_kmh(snapshot.speed, base_speed_kmh)),
            speed_label: snapshot.speed.to_string(),
            elapsed: snapshot.stopwatch.elapsed(now).to_clock_string(),
            progress: format!("{:.1}%", progress_percent(snapshot.route_index, snapshot.total_waypoints)),
            counter: waypoint_counter(snapshot.route_index, snapshot.total_waypoints),
        }
    }
}

impl fmt::Display for DisplayValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "📍 {} | 🕒 {} | ⚡ {} ({}) | ⏱️ {} | 📈 {} ({})",
            self.coordinates.as_deref().unwrap_or("-"),
            self.timestamp.as_deref().unwrap_or("-"),
            self.speed,
            self.speed_label,
            self.elapsed,
            self.progress,
            self.counter
        )
    }
}
