pub mod commands;
pub mod events;
mod lat_lng;
mod route;
mod speed;
mod waypoint;

pub use lat_lng::{Bounds, LatLng};
pub use route::Route;
pub use speed::{InvalidSpeed, SpeedMultiplier};
pub use waypoint::Waypoint;

#[cfg(test)]
pub use route::fixtures;
