use reqwest::StatusCode;
use thiserror::Error;

use crate::constants::INVALID_CITY_MESSAGE;

/// Everything that can go wrong between sending a forecast request and
/// holding a complete `CityForecast`
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status: {status}")]
    Status { status: StatusCode },

    #[error("failed to decode forecast response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("forecast has {found} days, expected {expected}")]
    IncompleteForecast { expected: usize, found: usize },

    #[error("forecast day {day} has no weather condition")]
    MissingCondition { day: usize },

    #[error("forecast day {day} has an unrepresentable maximum temperature: {max}")]
    TemperatureOutOfRange { day: usize, max: f64 },
}

impl ForecastError {
    /// The message shown to the user; identical for every variant
    pub fn user_message(&self) -> &'static str {
        INVALID_CITY_MESSAGE
    }
}
