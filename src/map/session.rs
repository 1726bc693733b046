use crate::domain::Route;
use crate::domain::events::PlaybackEvent;
use crate::map::MapRenderer;
use tracing::{debug, instrument};

/// Owns a renderer for the lifetime of one route. The renderer is released when the route changes and when the
/// session is dropped.
#[derive(Debug)]
pub struct MapSession {
    renderer: Option<Box<dyn MapRenderer>>,
}

impl MapSession {
    #[instrument(skip_all, fields(renderer = renderer.id()))]
    pub fn open(mut renderer: Box<dyn MapRenderer>, route: &Route) -> Self {
        draw(renderer.as_mut(), route);
        MapSession { renderer: Some(renderer) }
    }

    /// Releases what was drawn for the previous route and draws `route`.
    pub fn reload(&mut self, route: &Route) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.release();
            draw(renderer.as_mut(), route);
        }
    }

    pub fn apply(&mut self, events: &[PlaybackEvent]) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        for event in events {
            match event {
                PlaybackEvent::PositionChanged(position) => renderer.set_vehicle_position(*position),
                PlaybackEvent::CompletedPathChanged(coords) => renderer.set_completed_path(coords),
                PlaybackEvent::WaypointReached { .. } | PlaybackEvent::Completed => {}
            }
        }
    }
}

impl Drop for MapSession {
    fn drop(&mut self) {
        if let Some(mut renderer) = self.renderer.take() {
            debug!(renderer = renderer.id(), "🗺️ Closing map session");
            renderer.release();
        }
    }
}

fn draw(renderer: &mut dyn MapRenderer, route: &Route) {
    let Some(start) = route.start() else {
        debug!("🗺️ Nothing to draw, the route is empty");
        return;
    };

    let coords = route.coords();
    renderer.draw_full_route(&coords);
    renderer.set_completed_path(&[]);
    renderer.set_vehicle_position(start);
    renderer.fit_to_bounds(&coords);
}
