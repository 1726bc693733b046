use crate::app_config::Display;
use crate::display::DisplayValues;
use crate::playback::PlaybackSnapshot;
use chrono::{Local, TimeZone};
use std::fmt;
use tokio::sync::watch::Receiver;
use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::{info, instrument};

/// Logs the display values whenever they change, the elapsed time is refreshed on a fixed interval.
#[instrument(skip_all)]
pub async fn display_listener(mut rx: Receiver<PlaybackSnapshot>, config: Display) {
    let mut refresh = interval(config.refresh_interval());
    refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut previous = None;

    loop {
        let snapshot = tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                rx.borrow_and_update().clone()
            }
            _ = refresh.tick() => rx.borrow().clone(),
        };

        if let Some(values) = next_display(previous.as_ref(), &snapshot, Instant::now(), &config, &Local) {
            info!("{}", values);
            previous = Some(values);
        }
    }
}

/// The values to show, or `None` if nothing visible changed since `previous`.
fn next_display<Tz: TimeZone>(previous: Option<&DisplayValues>, snapshot: &PlaybackSnapshot, now: Instant, config: &Display, tz: &Tz) -> Option<DisplayValues>
where
    Tz::Offset: fmt::Display,
{
    let values = DisplayValues::derive(snapshot, now, config.base_speed_kmh(), tz);
    (previous != Some(&values)).then_some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::SpeedMultiplier;
    use crate::domain::fixtures::diagonal_route;
    use crate::playback::{PlaybackEngine, PlaybackTiming};
    use chrono::Utc;
    use std::time::Duration;

    #[test]
    fn next_display_skips_unchanged_values() {
        let config = AppConfigBuilder::new().build();
        let mut engine = PlaybackEngine::new(diagonal_route(3), PlaybackTiming::default(), SpeedMultiplier::Normal);
        let t0 = Instant::now();
        engine.play(t0);

        let first = next_display(None, &engine.snapshot(), t0, config.display(), &Utc);
        assert_eq!(first.as_ref().map(|values| values.elapsed.as_str()), Some("00:00:00"));

        let same_second = next_display(first.as_ref(), &engine.snapshot(), t0 + Duration::from_millis(400), config.display(), &Utc);
        assert_eq!(same_second, None);

        let next_second = next_display(first.as_ref(), &engine.snapshot(), t0 + Duration::from_millis(1_100), config.display(), &Utc);
        assert_eq!(next_second.map(|values| values.elapsed), Some("00:00:01".to_string()));
    }

    #[test]
    fn elapsed_time_freezes_while_paused() {
        let config = AppConfigBuilder::new().build();
        let mut engine = PlaybackEngine::new(diagonal_route(3), PlaybackTiming::default(), SpeedMultiplier::Normal);
        let t0 = Instant::now();
        engine.play(t0);
        engine.pause(t0 + Duration::from_secs(5));

        let paused = next_display(None, &engine.snapshot(), t0 + Duration::from_secs(15), config.display(), &Utc).unwrap();
        assert_eq!(paused.elapsed, "00:00:05");
        assert_eq!(next_display(Some(&paused), &engine.snapshot(), t0 + Duration::from_secs(60), config.display(), &Utc), None);
    }
}
