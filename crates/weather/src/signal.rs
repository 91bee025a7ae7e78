use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A successful weather lookup for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Coarse condition, e.g. "Rain", "Clear".
    pub condition: String,
    /// Human-readable description, e.g. "light rain".
    pub description: String,
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status and an error message.
    #[error("weather api error: {0}")]
    Api(String),

    /// The response body did not carry a usable reading (e.g. no numeric
    /// temperature).
    #[error("malformed weather response: {0}")]
    Malformed(String),

    #[error("no api key configured (set {0})")]
    MissingApiKey(&'static str),

    /// No weather collaborator is wired in at all.
    #[error("weather signal unavailable")]
    Unavailable,
}

/// Blocking lookup of current weather for a location string ("London",
/// "New York", ...).
///
/// The call may fail or take unbounded time; no retry, timeout, or
/// cancellation policy is part of this contract. A failed lookup means
/// "no reading available"; consumers must not treat it as fatal.
pub trait WeatherSignal {
    fn fetch(&self, location: &str) -> Result<WeatherReading, WeatherError>;
}

impl<W: WeatherSignal + ?Sized> WeatherSignal for &W {
    fn fetch(&self, location: &str) -> Result<WeatherReading, WeatherError> {
        (**self).fetch(location)
    }
}

/// Null collaborator: every lookup reports unavailability.
///
/// For callers that have no weather service wired in; the forecast engine
/// then always takes its degraded (unadjusted) path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWeather;

impl WeatherSignal for NoWeather {
    fn fetch(&self, _location: &str) -> Result<WeatherReading, WeatherError> {
        Err(WeatherError::Unavailable)
    }
}
