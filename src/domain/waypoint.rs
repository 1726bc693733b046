use crate::domain::LatLng;
use chrono::{DateTime, FixedOffset};

#[derive(Clone, PartialEq, Debug)]
pub struct Waypoint {
    pub position: LatLng,
    pub timestamp: DateTime<FixedOffset>,
}

impl Waypoint {
    pub fn new(position: LatLng, timestamp: DateTime<FixedOffset>) -> Self {
        Waypoint { position, timestamp }
    }
}
