use crate::domain::events::PlaybackEvent;
use crate::domain::{LatLng, Route, SpeedMultiplier};
use crate::playback::{PlaybackSnapshot, Stopwatch};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PlaybackTiming {
    segment_duration: Duration,
    sub_steps: u32,
}

impl PlaybackTiming {
    /// `segment_duration` is the time between two waypoints at 1x speed, split into `sub_steps` position updates.
    pub fn new(segment_duration: Duration, sub_steps: u32) -> Self {
        PlaybackTiming {
            segment_duration: segment_duration.max(Duration::from_millis(1)),
            sub_steps: sub_steps.max(1),
        }
    }
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        PlaybackTiming::new(Duration::from_secs(1), 10)
    }
}

/// Moves a vehicle along a route. Segment progress is derived from elapsed time, so the tick cadence only
/// determines how often a position is emitted.
#[derive(Debug)]
pub struct PlaybackEngine {
    route: Route,
    timing: PlaybackTiming,
    route_index: usize,
    is_playing: bool,
    speed: SpeedMultiplier,
    stopwatch: Stopwatch,
    // Travelled part of the current segment, in 1x time
    segment_progress: Duration,
    last_tick: Option<Instant>,
    position: Option<LatLng>,
    completed: bool,
}

impl PlaybackEngine {
    pub fn new(route: Route, timing: PlaybackTiming, speed: SpeedMultiplier) -> Self {
        PlaybackEngine {
            position: route.start(),
            route,
            timing,
            route_index: 0,
            is_playing: false,
            speed,
            stopwatch: Stopwatch::default(),
            segment_progress: Duration::ZERO,
            last_tick: None,
            completed: false,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    #[cfg(test)]
    pub fn route_index(&self) -> usize {
        self.route_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> SpeedMultiplier {
        self.speed
    }

    #[cfg(test)]
    pub fn position(&self) -> Option<LatLng> {
        self.position
    }

    #[cfg(test)]
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn completed_path(&self) -> Vec<LatLng> {
        self.route.path_until(self.route_index)
    }

    /// Returns `true` if playback started.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.is_playing {
            return false;
        }

        if !self.route.is_playable() {
            debug!("⏯️ Ignoring play, the route has {} waypoint(s)", self.route.len());
            return false;
        }

        if self.completed {
            debug!("⏯️ Ignoring play, the route is completed and needs a reset first");
            return false;
        }

        let action = if self.stopwatch.started_at().is_some() { "Resuming" } else { "Playing" };
        self.stopwatch.start(now);
        self.is_playing = true;
        self.last_tick = Some(now);
        info!(speed = %self.speed, "▶️ {} from waypoint {} of {}", action, self.route_index + 1, self.route.len());
        true
    }

    /// Returns `true` if playback was paused.
    pub fn pause(&mut self, now: Instant) -> bool {
        if !self.is_playing {
            return false;
        }

        self.is_playing = false;
        self.last_tick = None;
        self.stopwatch.stop(now);
        info!("⏸️ Paused at waypoint {} of {}", self.route_index + 1, self.route.len());
        true
    }

    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_playing { self.pause(now) } else { self.play(now) }
    }

    pub fn reset(&mut self) -> Vec<PlaybackEvent> {
        self.is_playing = false;
        self.route_index = 0;
        self.segment_progress = Duration::ZERO;
        self.last_tick = None;
        self.stopwatch.reset();
        self.completed = false;
        self.position = self.route.start();
        info!("⏮️ Reset to the start of the route");

        let mut events = Vec::with_capacity(2);
        if let Some(position) = self.position {
            events.push(PlaybackEvent::PositionChanged(position));
        }
        events.push(PlaybackEvent::CompletedPathChanged(Vec::new()));
        events
    }

    /// Changes the speed for the remainder of the current segment. Returns `true` if the speed changed.
    pub fn set_speed(&mut self, speed: SpeedMultiplier, now: Instant) -> bool {
        if self.speed == speed {
            return false;
        }

        // Bank the progress made at the old speed
        if let Some(last_tick) = self.last_tick {
            self.segment_progress += self.speed.scale_elapsed(now.saturating_duration_since(last_tick));
            self.last_tick = Some(now);
        }

        info!("⏩ Changed speed from {} to {}", self.speed, speed);
        self.speed = speed;
        true
    }

    /// Replaces the route and starts over.
    pub fn load_route(&mut self, route: Route) -> Vec<PlaybackEvent> {
        if route.is_empty() {
            warn!("⚠️ Loaded an empty route, there is nothing to play");
        } else {
            info!("🗺️ Loaded a route with {} waypoint(s)", route.len());
        }
        self.route = route;
        self.reset()
    }

    /// The time between two position updates at the current speed.
    pub fn tick_interval(&self) -> Duration {
        (self.speed.scale_interval(self.timing.segment_duration) / self.timing.sub_steps).max(Duration::from_micros(1))
    }

    pub fn tick(&mut self, now: Instant) -> Vec<PlaybackEvent> {
        if !self.is_playing {
            return Vec::new();
        }

        let mut events = Vec::new();
        if self.route_index >= self.route.last_index() {
            self.finish(now, &mut events);
            return events;
        }

        if let Some(last_tick) = self.last_tick.replace(now) {
            self.segment_progress += self.speed.scale_elapsed(now.saturating_duration_since(last_tick));
        }

        let segment_duration = self.timing.segment_duration;
        let mut committed = false;
        while self.segment_progress >= segment_duration {
            self.segment_progress -= segment_duration;
            self.commit_next_waypoint(&mut events);
            committed = true;

            if self.route_index >= self.route.last_index() {
                self.finish(now, &mut events);
                return events;
            }
        }

        if !committed || !self.segment_progress.is_zero() {
            let ratio = self.segment_progress.as_secs_f64() / segment_duration.as_secs_f64();
            self.position = self.route.interpolate(self.route_index, ratio);
            if let Some(position) = self.position {
                events.push(PlaybackEvent::PositionChanged(position));
            }
        }

        events
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            route_index: self.route_index,
            total_waypoints: self.route.len(),
            is_playing: self.is_playing,
            speed: self.speed,
            position: self.position,
            current_waypoint: self.route.waypoint(self.route_index).cloned(),
            stopwatch: self.stopwatch,
            completed: self.completed,
        }
    }

    fn commit_next_waypoint(&mut self, events: &mut Vec<PlaybackEvent>) {
        self.route_index += 1;
        let Some(waypoint) = self.route.waypoint(self.route_index).cloned() else {
            return;
        };

        debug!("🚗 Reached waypoint {} of {} at {}", self.route_index + 1, self.route.len(), waypoint.position);
        self.position = Some(waypoint.position);
        events.push(PlaybackEvent::PositionChanged(waypoint.position));
        events.push(PlaybackEvent::CompletedPathChanged(self.completed_path()));
        events.push(PlaybackEvent::WaypointReached {
            waypoint,
            index: self.route_index,
        });
    }

    fn finish(&mut self, now: Instant, events: &mut Vec<PlaybackEvent>) {
        self.is_playing = false;
        self.last_tick = None;
        self.segment_progress = Duration::ZERO;
        self.stopwatch.stop(now);

        if !self.completed {
            self.completed = true;
            info!("🏁 Completed the route");
            events.push(PlaybackEvent::Completed);
        }
    }
}
