use crate::domain::LatLng;
use std::fmt::Debug;

/// The drawing capabilities playback needs from a map.
pub trait MapRenderer: Debug + Send {
    fn id(&self) -> &'static str;

    /// Draws the whole route, called once when the route becomes available.
    fn draw_full_route(&mut self, coords: &[LatLng]);

    fn set_vehicle_position(&mut self, position: LatLng);

    /// Replaces the travelled path, an empty slice clears it.
    fn set_completed_path(&mut self, coords: &[LatLng]);

    fn fit_to_bounds(&mut self, coords: &[LatLng]);

    /// Removes everything drawn for the current route.
    fn release(&mut self);
}

#[cfg(test)]
pub mod recording {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, PartialEq, Debug)]
    pub enum RenderCall {
        DrawFullRoute(Vec<LatLng>),
        SetVehiclePosition(LatLng),
        SetCompletedPath(Vec<LatLng>),
        FitToBounds(Vec<LatLng>),
        Release,
    }

    /// Records every call, clones share the same recording.
    #[derive(Clone, Default, Debug)]
    pub struct RecordingRenderer {
        calls: Arc<Mutex<Vec<RenderCall>>>,
    }

    impl RecordingRenderer {
        pub fn calls(&self) -> Vec<RenderCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn completed_paths(&self) -> Vec<Vec<LatLng>> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    RenderCall::SetCompletedPath(coords) => Some(coords),
                    _ => None,
                })
                .collect()
        }

        pub fn vehicle_positions(&self) -> Vec<LatLng> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    RenderCall::SetVehiclePosition(position) => Some(position),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, call: RenderCall) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl MapRenderer for RecordingRenderer {
        fn id(&self) -> &'static str {
            "recording"
        }

        fn draw_full_route(&mut self, coords: &[LatLng]) {
            self.record(RenderCall::DrawFullRoute(coords.to_vec()));
        }

        fn set_vehicle_position(&mut self, position: LatLng) {
            self.record(RenderCall::SetVehiclePosition(position));
        }

        fn set_completed_path(&mut self, coords: &[LatLng]) {
            self.record(RenderCall::SetCompletedPath(coords.to_vec()));
        }

        fn fit_to_bounds(&mut self, coords: &[LatLng]) {
            self.record(RenderCall::FitToBounds(coords.to_vec()));
        }

        fn release(&mut self) {
            self.record(RenderCall::Release);
        }
    }
}
