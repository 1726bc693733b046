use std::time::Duration;
use tokio::time::Instant;

/// Measures playing time, paused intervals are not counted.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    running_since: Option<Instant>,
    banked: Duration,
}

impl Stopwatch {
    /// Starts or resumes, the first start after a reset is remembered as `started_at`.
    pub fn start(&mut self, now: Instant) {
        self.started_at.get_or_insert(now);
        self.running_since.get_or_insert(now);
    }

    pub fn stop(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.banked += now.saturating_duration_since(since);
        }
    }

    pub fn reset(&mut self) {
        *self = Stopwatch::default();
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        let running = self.running_since.map(|since| now.saturating_duration_since(since)).unwrap_or_default();
        self.banked + running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_stopwatch_has_not_started() {
        let stopwatch = Stopwatch::default();

        assert_eq!(stopwatch.started_at(), None);
        assert_eq!(stopwatch.elapsed(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn elapsed_excludes_paused_time() {
        let t0 = Instant::now();
        let mut stopwatch = Stopwatch::default();

        stopwatch.start(t0);
        stopwatch.stop(t0 + Duration::from_secs(5));
        assert_eq!(stopwatch.elapsed(t0 + Duration::from_secs(15)), Duration::from_secs(5));

        stopwatch.start(t0 + Duration::from_secs(15));
        assert_eq!(stopwatch.elapsed(t0 + Duration::from_secs(17)), Duration::from_secs(7));
        assert_eq!(stopwatch.started_at(), Some(t0));
    }

    #[test]
    fn starting_twice_keeps_the_first_start() {
        let t0 = Instant::now();
        let mut stopwatch = Stopwatch::default();

        stopwatch.start(t0);
        stopwatch.start(t0 + Duration::from_secs(3));

        assert_eq!(stopwatch.elapsed(t0 + Duration::from_secs(4)), Duration::from_secs(4));
    }

    #[test]
    fn reset_clears_everything() {
        let t0 = Instant::now();
        let mut stopwatch = Stopwatch::default();
        stopwatch.start(t0);
        stopwatch.stop(t0 + Duration::from_secs(2));

        stopwatch.reset();

        assert_eq!(stopwatch, Stopwatch::default());
    }
}
