use crate::app_config::RouteResource;
use crate::domain::Route;
use crate::route_source::source::parse_route;
use crate::route_source::{RouteLoadError, RouteSource};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, instrument, warn};

#[derive(Debug)]
pub struct HttpRouteSource {
    client: Client,
    url: String,
    retry_ms: u64,
    retry_max_delay: Duration,
    retry_attempts: usize,
}

impl HttpRouteSource {
    pub fn new(client: Client, url: String, config: &RouteResource) -> Self {
        HttpRouteSource {
            client,
            url,
            retry_ms: config.retry_ms(),
            retry_max_delay: config.retry_max_delay_ms(),
            retry_attempts: config.retry_attempts(),
        }
    }

    async fn fetch(&self) -> Result<String, reqwest::Error> {
        let result = async { self.client.get(&self.url).send().await?.error_for_status()?.text().await }.await;
        if let Err(e) = &result {
            warn!("⚠️ Unable to fetch route: {}", e);
        }
        result
    }
}

#[async_trait]
impl RouteSource for HttpRouteSource {
    fn location(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn load(&self) -> Result<Route, RouteLoadError> {
        info!("🌐 Fetching route...");
        let strategy = ExponentialBackoff::from_millis(self.retry_ms)
            .max_delay(self.retry_max_delay)
            .map(jitter)
            .take(self.retry_attempts);

        let content = Retry::spawn(strategy, || self.fetch()).await?;
        let route = parse_route(&content, &self.url)?;

        info!("🌐 Fetching route... OK, {} waypoint(s)", route.len());
        Ok(route)
    }
}
