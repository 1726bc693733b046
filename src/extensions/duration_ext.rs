use std::time::Duration;

pub trait ClockFormat {
    /// Formats as `HH:MM:SS`, sub-second precision is truncated.
    fn to_clock_string(&self) -> String;
}

impl ClockFormat for Duration {
    fn to_clock_string(&self) -> String {
        let seconds = self.as_secs();
        format!("{:02}:{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60, seconds % 60)
    }
}
