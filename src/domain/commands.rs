use crate::domain::{Route, SpeedMultiplier};

#[derive(PartialEq, Debug)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Toggle,
    Reset,
    SetSpeed(SpeedMultiplier),
    LoadRoute(Route),
}
