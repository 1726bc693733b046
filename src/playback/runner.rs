use crate::domain::commands::PlaybackCommand;
use crate::map::MapSession;
use crate::playback::{PlaybackEngine, PlaybackSnapshot};
use std::future;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch::Sender as WatchSender;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, info, instrument};

/// Drives the engine until the command channel closes. Commands take priority over ticks, and the ticker only exists
/// while playing so nothing moves after a pause or reset.
#[instrument(skip_all)]
pub async fn run(mut engine: PlaybackEngine, mut session: MapSession, mut rx: Receiver<PlaybackCommand>, snapshot_tx: WatchSender<PlaybackSnapshot>) {
    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            biased;
            command = rx.recv() => {
                let Some(command) = command else {
                    break;
                };

                let was_playing = engine.is_playing();
                let previous_speed = engine.speed();
                handle_command(&mut engine, &mut session, command);

                if !engine.is_playing() {
                    ticker = None;
                } else if !was_playing || engine.speed() != previous_speed {
                    ticker = Some(new_ticker(engine.tick_interval()));
                }
            }
            _ = next_tick(&mut ticker) => {
                let events = engine.tick(Instant::now());
                session.apply(&events);

                if !engine.is_playing() {
                    ticker = None;
                }
            }
        }

        snapshot_tx.send_replace(engine.snapshot());
    }

    info!("⏹️ Playback stopped");
}

fn handle_command(engine: &mut PlaybackEngine, session: &mut MapSession, command: PlaybackCommand) {
    let now = Instant::now();
    match command {
        PlaybackCommand::Play => {
            engine.play(now);
        }
        PlaybackCommand::Pause => {
            engine.pause(now);
        }
        PlaybackCommand::Toggle => {
            engine.toggle(now);
        }
        PlaybackCommand::Reset => {
            let events = engine.reset();
            session.apply(&events);
        }
        PlaybackCommand::SetSpeed(speed) => {
            engine.set_speed(speed, now);
        }
        PlaybackCommand::LoadRoute(route) => {
            debug!("🔵 Received a route with {} waypoint(s)", route.len());
            // Reloading the session draws the start position and clears the path already
            engine.load_route(route);
            session.reload(engine.route());
        }
    }
}

fn new_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

async fn next_tick(ticker: &mut Option<Interval>) -> Instant {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => future::pending().await,
    }
}
