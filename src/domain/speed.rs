use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The simulation speeds offered to the user.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(try_from = "f64")]
pub enum SpeedMultiplier {
    Half,
    #[default]
    Normal,
    Double,
    Quadruple,
}

impl SpeedMultiplier {
    pub fn factor(&self) -> f64 {
        match self {
            SpeedMultiplier::Half => 0.5,
            SpeedMultiplier::Normal => 1.0,
            SpeedMultiplier::Double => 2.0,
            SpeedMultiplier::Quadruple => 4.0,
        }
    }

    /// The distance covered in `elapsed` wall time, expressed as time at 1x speed.
    pub fn scale_elapsed(&self, elapsed: Duration) -> Duration {
        match self {
            SpeedMultiplier::Half => elapsed / 2,
            SpeedMultiplier::Normal => elapsed,
            SpeedMultiplier::Double => elapsed * 2,
            SpeedMultiplier::Quadruple => elapsed * 4,
        }
    }

    /// The wall time needed to cover `interval` of 1x time.
    pub fn scale_interval(&self, interval: Duration) -> Duration {
        match self {
            SpeedMultiplier::Half => interval * 2,
            SpeedMultiplier::Normal => interval,
            SpeedMultiplier::Double => interval / 2,
            SpeedMultiplier::Quadruple => interval / 4,
        }
    }

    pub fn all() -> [SpeedMultiplier; 4] {
        [SpeedMultiplier::Half, SpeedMultiplier::Normal, SpeedMultiplier::Double, SpeedMultiplier::Quadruple]
    }
}

impl TryFrom<f64> for SpeedMultiplier {
    type Error = InvalidSpeed;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        SpeedMultiplier::all()
            .into_iter()
            .find(|speed| speed.factor() == value)
            .ok_or(InvalidSpeed(value))
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}

#[derive(Error, PartialEq, Debug)]
#[error("invalid speed {0}, must be one of 0.5, 1, 2 or 4")]
pub struct InvalidSpeed(pub f64);
