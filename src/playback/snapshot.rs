use crate::domain::{LatLng, SpeedMultiplier, Waypoint};
use crate::playback::Stopwatch;

/// A read-only copy of the playback state, published after every change.
#[derive(Clone, PartialEq, Debug)]
pub struct PlaybackSnapshot {
    pub route_index: usize,
    pub total_waypoints: usize,
    pub is_playing: bool,
    pub speed: SpeedMultiplier,
    pub position: Option<LatLng>,
    pub current_waypoint: Option<Waypoint>,
    pub stopwatch: Stopwatch,
    pub completed: bool,
}
