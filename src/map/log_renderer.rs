use crate::domain::{Bounds, LatLng};
use crate::map::MapRenderer;
use tracing::{debug, info, trace};

/// Renders the map to the log.
#[derive(Default, Debug)]
pub struct LogRenderer {
    route_len: usize,
}

pub const RENDERER_ID: &str = "log";

impl MapRenderer for LogRenderer {
    fn id(&self) -> &'static str {
        RENDERER_ID
    }

    fn draw_full_route(&mut self, coords: &[LatLng]) {
        self.route_len = coords.len();
        info!("🗺️ Drawing route with {} waypoint(s)", coords.len());
    }

    fn set_vehicle_position(&mut self, position: LatLng) {
        trace!("🚗 Vehicle at {}", position);
    }

    fn set_completed_path(&mut self, coords: &[LatLng]) {
        match coords.last() {
            Some(last) => debug!("🛣️ Completed {} of {} waypoint(s), up to {}", coords.len(), self.route_len, last),
            None => debug!("🛣️ Cleared the completed path"),
        }
    }

    fn fit_to_bounds(&mut self, coords: &[LatLng]) {
        if let Some(bounds) = Bounds::around(coords) {
            info!(
                center = %bounds.center(),
                "🔍 Fitting viewport to [{}] - [{}]",
                bounds.south_west,
                bounds.north_east
            );
        }
    }

    fn release(&mut self) {
        debug!("🗺️ Releasing map with {} waypoint(s)", self.route_len);
        self.route_len = 0;
    }
}
