use crate::domain::Route;
use crate::route_source::source::parse_route;
use crate::route_source::{RouteLoadError, RouteSource};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::{fs, task};
use tracing::{info, instrument};

#[derive(Debug)]
pub struct FileRouteSource {
    path: PathBuf,
    location: String,
}

impl FileRouteSource {
    pub fn new(path: PathBuf) -> Self {
        let location = path.to_string_lossy().into_owned();
        FileRouteSource { path, location }
    }
}

#[async_trait]
impl RouteSource for FileRouteSource {
    fn location(&self) -> &str {
        &self.location
    }

    #[instrument(skip(self), fields(path = %self.location))]
    async fn load(&self) -> Result<Route, RouteLoadError> {
        info!("📁 Loading route...");
        let content = fs::read_to_string(&self.path).await.map_err(|source| RouteLoadError::Io {
            source,
            path: self.path.clone(),
        })?;

        let location = self.location.clone();
        let route = task::spawn_blocking(move || parse_route(&content, &location)).await??;

        info!("📁 Loading route... OK, {} waypoint(s)", route.len());
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LatLng;
    use test_log::test;

    fn resource(name: &str) -> PathBuf {
        PathBuf::from(format!("{}/tests/resources/{}", env!("CARGO_MANIFEST_DIR"), name))
    }

    #[test(tokio::test)]
    async fn load_returns_the_route() -> Result<(), RouteLoadError> {
        let path = resource("route.json");
        assert!(path.is_file(), "expected path to be a file");

        let route = FileRouteSource::new(path).load().await?;

        assert_eq!(route.len(), 3);
        assert_eq!(route.start(), Some(LatLng::new(51.9225, 4.47917)));
        Ok(())
    }

    #[test(tokio::test)]
    async fn load_fails_for_a_missing_file() {
        let result = FileRouteSource::new(resource("missing.json")).load().await;

        assert!(matches!(result, Err(RouteLoadError::Io { .. })));
    }

    #[test(tokio::test)]
    async fn load_fails_for_an_invalid_waypoint() {
        let result = FileRouteSource::new(resource("invalid_route.json")).load().await;

        match result {
            Err(RouteLoadError::Parse { source, .. }) => assert!(source.to_string().contains("invalid waypoint latitude")),
            other => panic!("Expected a parse error, found {:?}", other),
        }
    }
}
