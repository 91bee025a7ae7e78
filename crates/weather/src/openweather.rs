//! Blocking client for the OpenWeatherMap current-weather endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::signal::{WeatherError, WeatherReading, WeatherSignal};

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";
const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
const BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    main: String,
    description: String,
}

/// Success body. Only `main.temp` is strictly required; a body without it
/// fails deserialization and is reported as malformed.
#[derive(Debug, Deserialize)]
struct ApiWeatherResponse {
    main: ApiMain,
    #[serde(default)]
    weather: Vec<ApiCondition>,
}

/// Error body on non-success status, e.g. `{"cod": "404", "message": "city not found"}`.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Typed client for OpenWeatherMap (metric units).
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Ok(Self {
            http: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the endpoint base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a client from `OPENWEATHER_API_KEY` (and optional
    /// `OPENWEATHER_BASE_URL`).
    pub fn from_env() -> Result<Self, WeatherError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| WeatherError::MissingApiKey(API_KEY_ENV))?;
        let client = Self::new(api_key)?;
        Ok(match std::env::var(BASE_URL_ENV) {
            Ok(base) => client.with_base_url(base),
            Err(_) => client,
        })
    }
}

impl WeatherSignal for OpenWeatherClient {
    fn fetch(&self, location: &str) -> Result<WeatherReading, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        tracing::debug!(%location, "fetching current weather");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ApiErrorResponse>()
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("failed to fetch weather ({status})"));
            return Err(WeatherError::Api(message));
        }

        let body: ApiWeatherResponse = response
            .json()
            .map_err(|e| WeatherError::Malformed(e.to_string()))?;

        let (condition, description) = body
            .weather
            .into_iter()
            .next()
            .map(|c| (c.main, c.description))
            .unwrap_or_default();

        Ok(WeatherReading {
            temperature: body.main.temp,
            humidity: body.main.humidity,
            condition,
            description,
        })
    }
}
