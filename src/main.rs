use crate::app_config::AppConfig;
use crate::display::display_listener;
use crate::domain::Route;
use crate::domain::commands::PlaybackCommand;
use crate::map::MapSession;
use crate::map::log_renderer::LogRenderer;
use crate::playback::{PlaybackEngine, PlaybackSnapshot};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task;
use tracing::{error, info};

mod app_config;
mod control_surface;
mod display;
mod domain;
mod extensions;
mod map;
mod playback;
mod route_source;
mod waypoint_deserializer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.core().log_level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let source: Arc<dyn route_source::RouteSource> = route_source::from_config(config.route())?.into();
    let route = source.load().await.unwrap_or_else(|e| {
        error!("❌ Unable to load route from '{}': {}", source.location(), e);
        Route::empty()
    });

    let session = MapSession::open(Box::new(LogRenderer::default()), &route);
    let engine = PlaybackEngine::new(route, config.playback().timing(), config.playback().default_speed());

    let (tx, rx) = mpsc::channel::<PlaybackCommand>(config.core().command_buffer_size());
    let (snapshot_tx, snapshot_rx) = watch::channel::<PlaybackSnapshot>(engine.snapshot());

    let runner = task::spawn(playback::run(engine, session, rx, snapshot_tx));
    info!("✅  Initialized playback");

    task::spawn(display_listener(snapshot_rx.clone(), config.display().clone()));
    info!("✅  Initialized display");

    let control_surface = task::spawn(control_surface::listen(control_surface::stdin_lines(config.core().command_buffer_size()), tx.clone(), source.clone()));
    info!("✅  Initialized control surface");

    if config.playback().autoplay() {
        tx.send(PlaybackCommand::Play).await?;
    }

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    let exit_on_complete = config.playback().exit_on_complete();
    let mut completion_rx = snapshot_rx.clone();
    tokio::select! {
        _ = completion_rx.wait_for(|snapshot| snapshot.completed), if exit_on_complete => info!("🏁 Route completed, shutting down"),
        _ = tokio::signal::ctrl_c() => info!("👋 Interrupted, shutting down"),
    }

    // Closing every sender stops the runner, which releases the map
    control_surface.abort();
    drop(tx);
    runner.await?;

    Ok(())
}
