use crate::domain::{LatLng, Waypoint};

#[derive(Clone, PartialEq, Debug)]
pub enum PlaybackEvent {
    PositionChanged(LatLng),
    CompletedPathChanged(Vec<LatLng>),
    WaypointReached { waypoint: Waypoint, index: usize },
    Completed,
}
