use crate::domain::{LatLng, Waypoint};
use serde::Deserialize;

/// An ordered sequence of waypoints, the order defines the direction of travel.
#[derive(Clone, Default, PartialEq, Debug, Deserialize)]
#[serde(transparent)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    #[cfg(test)]
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Route { waypoints }
    }

    pub fn empty() -> Self {
        Route::default()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// A route needs at least two waypoints to have something to travel along.
    pub fn is_playable(&self) -> bool {
        self.waypoints.len() >= 2
    }

    pub fn last_index(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn start(&self) -> Option<LatLng> {
        self.waypoints.first().map(|waypoint| waypoint.position)
    }

    pub fn coords(&self) -> Vec<LatLng> {
        self.waypoints.iter().map(|waypoint| waypoint.position).collect()
    }

    /// The travelled path up to and including the waypoint at `index`, empty at the start.
    pub fn path_until(&self, index: usize) -> Vec<LatLng> {
        if index == 0 {
            return Vec::new();
        }

        self.waypoints.iter().take(index + 1).map(|waypoint| waypoint.position).collect()
    }

    /// The position at `ratio` of the segment that starts at waypoint `index`.
    pub fn interpolate(&self, index: usize, ratio: f64) -> Option<LatLng> {
        let from = self.waypoints.get(index)?;
        match self.waypoints.get(index + 1) {
            Some(to) => Some(from.position.lerp(&to.position, ratio)),
            None => Some(from.position),
        }
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    pub fn timestamp(seconds: i64) -> DateTime<chrono::FixedOffset> {
        Utc.timestamp_opt(1_714_550_400 + seconds, 0).unwrap().fixed_offset()
    }

    /// A route through `(0, 0)`, `(1, 1)`, ... with one waypoint per coordinate.
    pub fn diagonal_route(len: usize) -> Route {
        Route::new(
            (0..len)
                .map(|i| Waypoint::new(LatLng::new(i as f64, i as f64), timestamp(i as i64 * 10)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::diagonal_route;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn an_empty_route_is_not_playable() {
        let route = Route::empty();

        assert!(route.is_empty());
        assert!(!route.is_playable());
        assert_eq!(route.last_index(), 0);
        assert_eq!(route.start(), None);
    }

    #[test]
    fn a_single_waypoint_route_is_not_playable() {
        let route = diagonal_route(1);

        assert!(!route.is_playable());
        assert_eq!(route.interpolate(0, 0.5), Some(LatLng::new(0.0, 0.0)));
    }

    #[test]
    fn interpolate_between_waypoints() {
        let route = diagonal_route(3);

        assert_eq!(route.interpolate(1, 0.0), Some(LatLng::new(1.0, 1.0)));
        assert_eq!(route.interpolate(1, 0.5), Some(LatLng::new(1.5, 1.5)));
        assert_eq!(route.interpolate(1, 1.0), Some(LatLng::new(2.0, 2.0)));
        assert_eq!(route.interpolate(3, 0.5), None);
    }

    #[test]
    fn path_until_includes_the_start_and_the_reached_waypoint() {
        let route = diagonal_route(4);

        assert_eq!(route.path_until(0), Vec::<LatLng>::new());
        assert_eq!(route.path_until(2), vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0), LatLng::new(2.0, 2.0)]);
    }

    #[test]
    fn deserializes_from_a_json_array() {
        let route: Route = serde_json::from_str(
            r#"[
                { "latitude": 51.9225, "longitude": 4.47917, "timestamp": "2024-05-01T08:00:00Z" },
                { "latitude": 51.9230, "longitude": 4.48010, "timestamp": "2024-05-01T08:00:10Z" }
            ]"#,
        )
        .unwrap();

        assert_eq!(route.len(), 2);
        assert_eq!(route.coords(), vec![LatLng::new(51.9225, 4.47917), LatLng::new(51.9230, 4.48010)]);
    }
}
