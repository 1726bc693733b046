use crate::domain::SpeedMultiplier;
use crate::playback::PlaybackTiming;
use config::Config;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    route: RouteResource,
    playback: Playback,
    display: Display,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("TRACKER").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppConfigError> {
        if self.core.log_level.parse::<Level>().is_err() {
            return Err(AppConfigError::Invalid(format!("unknown log level '{}'", self.core.log_level)));
        }

        if self.core.command_buffer_size == 0 {
            return Err(AppConfigError::Invalid("core.command_buffer_size must be positive".to_string()));
        }

        if self.route.location.trim().is_empty() {
            return Err(AppConfigError::Invalid("route.location must not be empty".to_string()));
        }

        if self.playback.segment_duration.is_zero() {
            return Err(AppConfigError::Invalid("playback.segment_duration must be positive".to_string()));
        }

        if self.playback.sub_steps == 0 {
            return Err(AppConfigError::Invalid("playback.sub_steps must be positive".to_string()));
        }

        if self.display.refresh_interval.is_zero() {
            return Err(AppConfigError::Invalid("display.refresh_interval must be positive".to_string()));
        }

        Ok(())
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn route(&self) -> &RouteResource {
        &self.route
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn display(&self) -> &Display {
        &self.display
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    log_level: String,
    command_buffer_size: usize,
}

impl Core {
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    pub fn command_buffer_size(&self) -> usize {
        self.command_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct RouteResource {
    location: String,
    retry_ms: u64,
    retry_max_delay_ms: u64,
    retry_attempts: usize,
}

impl RouteResource {
    /// A file path, or an `http(s)://` URL.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay_ms(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }

    pub fn retry_attempts(&self) -> usize {
        self.retry_attempts
    }
}

#[derive(Debug, Deserialize)]
pub struct Playback {
    #[serde(with = "humantime_serde")]
    segment_duration: Duration,
    sub_steps: u32,
    default_speed: SpeedMultiplier,
    autoplay: bool,
    exit_on_complete: bool,
}

impl Playback {
    pub fn timing(&self) -> PlaybackTiming {
        PlaybackTiming::new(self.segment_duration, self.sub_steps)
    }

    pub fn default_speed(&self) -> SpeedMultiplier {
        self.default_speed
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn exit_on_complete(&self) -> bool {
        self.exit_on_complete
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Display {
    base_speed_kmh: f64,
    #[serde(with = "humantime_serde")]
    refresh_interval: Duration,
}

impl Display {
    pub fn base_speed_kmh(&self) -> f64 {
        self.base_speed_kmh
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    log_level: "debug".to_string(),
                    command_buffer_size: 8,
                },
                route: RouteResource {
                    location: "tests/resources/route.json".to_string(),
                    retry_ms: 10,
                    retry_max_delay_ms: 20,
                    retry_attempts: 2,
                },
                playback: Playback {
                    segment_duration: Duration::from_secs(1),
                    sub_steps: 10,
                    default_speed: SpeedMultiplier::Normal,
                    autoplay: false,
                    exit_on_complete: false,
                },
                display: Display {
                    base_speed_kmh: 45.0,
                    refresh_interval: Duration::from_secs(1),
                },
            },
        }
    }

    pub fn route_location(mut self, location: String) -> Self {
        self.config.route.location = location;
        self
    }

    pub fn sub_steps(mut self, sub_steps: u32) -> Self {
        self.config.playback.sub_steps = sub_steps;
        self
    }

    pub fn log_level(mut self, log_level: &str) -> Self {
        self.config.core.log_level = log_level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
