//! Weather signal collaborator.
//!
//! The forecast engine treats weather as an external collaborator: a blocking
//! lookup that either yields a structured reading or fails. Failures are a
//! normal outcome here (network, bad location, missing key); consumers are
//! expected to degrade, not propagate.

pub mod openweather;
pub mod signal;

pub use openweather::OpenWeatherClient;
pub use signal::{NoWeather, WeatherError, WeatherReading, WeatherSignal};
