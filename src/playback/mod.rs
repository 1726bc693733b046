mod engine;
mod runner;
mod snapshot;
mod stopwatch;

pub use engine::{PlaybackEngine, PlaybackTiming};
pub use runner::run;
pub use snapshot::PlaybackSnapshot;
pub use stopwatch::Stopwatch;
