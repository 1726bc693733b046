use crate::app_config::RouteResource;
use crate::domain::Route;
use crate::route_source::{FileRouteSource, HttpRouteSource};
use async_trait::async_trait;
use std::fmt::Debug;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;

#[async_trait]
pub trait RouteSource: Debug + Send + Sync {
    fn location(&self) -> &str;

    async fn load(&self) -> Result<Route, RouteLoadError>;
}

/// Picks the source for the configured location, URLs are fetched and everything else is read from disk.
pub fn from_config(config: &RouteResource) -> Result<Box<dyn RouteSource>, RouteLoadError> {
    let location = config.location();
    if location.starts_with("http://") || location.starts_with("https://") {
        let client = reqwest::Client::builder().build()?;
        return Ok(Box::new(HttpRouteSource::new(client, location.to_string(), config)));
    }

    Ok(Box::new(FileRouteSource::new(PathBuf::from(location))))
}

pub(super) fn parse_route(content: &str, location: &str) -> Result<Route, RouteLoadError> {
    serde_json::from_str(content).map_err(|source| RouteLoadError::Parse {
        source,
        location: location.to_string(),
    })
}

#[derive(Error, Debug)]
pub enum RouteLoadError {
    #[error("unable to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid route in '{location}': {source}")]
    Parse { source: serde_json::Error, location: String },
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
