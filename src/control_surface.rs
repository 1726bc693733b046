use crate::domain::commands::PlaybackCommand;
use crate::domain::{InvalidSpeed, SpeedMultiplier};
use crate::route_source::RouteSource;
use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tokio::task;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Sender;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, error, info, instrument, warn};

#[derive(PartialEq, Debug)]
pub enum ControlInput {
    Command(PlaybackCommand),
    Reload,
}

/// Parses one line of user input, an empty line toggles play/pause.
pub fn parse_input(line: &str) -> Result<ControlInput, CommandParseError> {
    let line = line.trim().to_lowercase();
    let mut words = line.split_whitespace();

    let input = match words.next() {
        None | Some("toggle") => ControlInput::Command(PlaybackCommand::Toggle),
        Some("play") => ControlInput::Command(PlaybackCommand::Play),
        Some("pause") => ControlInput::Command(PlaybackCommand::Pause),
        Some("reset") => ControlInput::Command(PlaybackCommand::Reset),
        Some("reload") => ControlInput::Reload,
        Some("speed") => {
            let value = words.next().ok_or(CommandParseError::MissingSpeed)?;
            let factor = value
                .trim_end_matches('x')
                .parse::<f64>()
                .map_err(|_| CommandParseError::NotANumber(value.to_string()))?;
            ControlInput::Command(PlaybackCommand::SetSpeed(SpeedMultiplier::try_from(factor)?))
        }
        Some(other) => return Err(CommandParseError::Unknown(other.to_string())),
    };

    Ok(input)
}

/// Lines typed on stdin. The read happens on a plain thread, a pending read cannot be cancelled and must not hold up
/// the runtime on shutdown.
pub fn stdin_lines(buffer_size: usize) -> ReceiverStream<io::Result<String>> {
    let (tx, rx) = mpsc::channel(buffer_size);
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    ReceiverStream::new(rx)
}

/// Forwards commands from `lines` until the input ends or the engine goes away.
#[instrument(skip_all)]
pub async fn listen<S>(mut lines: S, tx: Sender<PlaybackCommand>, source: Arc<dyn RouteSource>)
where
    S: Stream<Item = io::Result<String>> + Unpin,
{
    info!("⌨️ Commands: play, pause, toggle (or enter), reset, speed <0.5|1|2|4>, reload");

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("⚠️ Unable to read command: {}", err);
                break;
            }
        };

        let command = match parse_input(&line) {
            Ok(ControlInput::Command(command)) => command,
            Ok(ControlInput::Reload) => {
                task::spawn(reload(source.clone(), tx.clone()));
                continue;
            }
            Err(err) => {
                warn!("⚠️ {}", err);
                continue;
            }
        };

        if tx.send(command).await.is_err() {
            break;
        }
    }

    debug!("⌨️ Control surface closed");
}

/// Loads the route again and hands it to the engine, runs on its own task next to the command loop.
async fn reload(source: Arc<dyn RouteSource>, tx: Sender<PlaybackCommand>) {
    match source.load().await {
        Ok(route) => {
            if tx.send(PlaybackCommand::LoadRoute(route)).await.is_err() {
                debug!("⌨️ Dropping the reloaded route, playback stopped");
            }
        }
        Err(err) => error!("❌ Unable to reload route from '{}': {}", source.location(), err),
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum CommandParseError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("missing speed, expected one of 0.5, 1, 2 or 4")]
    MissingSpeed,
    #[error("speed '{0}' is not a number")]
    NotANumber(String),
    #[error(transparent)]
    InvalidSpeed(#[from] InvalidSpeed),
}
