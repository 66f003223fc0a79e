use clap::Parser;

use crate::constants::OPENWEATHERMAP_API_BASE;

/// Compare weather forecasts between two cities.
///
/// Wrap a city name with more than one word in quotes, e.g. "Sao Paulo".
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The first city
    pub city1: String,

    /// The second city
    pub city2: String,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHERMAP_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// OpenWeatherMap API base URL
    #[arg(long, env = "OPENWEATHERMAP_BASE_URL", default_value = OPENWEATHERMAP_API_BASE)]
    pub base_url: String,
}

/// Settings for talking to the forecast API
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Args {
    pub fn config(&self) -> ForecastConfig {
        ForecastConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.trim_end_matches('/').to_string(),
        }
    }
}
