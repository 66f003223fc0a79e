use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::ForecastConfig;
use crate::constants::{FORECAST_DAYS, UNITS, USER_AGENT};
use crate::error::ForecastError;
use crate::formatters::format_comparison;
use crate::models::{CityForecast, DailyForecastResponse};

/// Client for the OpenWeatherMap daily forecast API
#[derive(Clone)]
pub struct ForecastClient {
    client: Arc<Client>,
    config: ForecastConfig,
}

impl ForecastClient {
    /// Creates a new forecast client
    pub fn new(config: ForecastConfig) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ForecastError> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        tracing::debug!("Forecast request returned {}", status);
        if !status.is_success() {
            return Err(ForecastError::Status { status });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches the next `FORECAST_DAYS` days of forecast for a city
    pub async fn fetch_forecast(&self, city: &str) -> Result<CityForecast, ForecastError> {
        tracing::info!("Getting forecast for city: {}", city);

        let url = format!("{}/forecast/daily", self.config.base_url);
        let count = FORECAST_DAYS.to_string();

        let response = self
            .make_request::<DailyForecastResponse>(
                &url,
                &[
                    ("q", city),
                    ("appid", self.config.api_key.as_str()),
                    ("units", UNITS),
                    ("cnt", count.as_str()),
                ],
            )
            .await?;

        tracing::debug!("Received {} forecast entries for {}", response.list.len(), city);

        CityForecast::from_response(city, &response)
    }
}

/// Fetches both cities and renders their comparison; nothing is rendered unless both succeed
pub async fn compare_forecasts(
    client: &ForecastClient,
    city1: &str,
    city2: &str,
) -> Result<String, ForecastError> {
    let (first, second) = tokio::try_join!(
        client.fetch_forecast(city1),
        client.fetch_forecast(city2)
    )?;

    Ok(format_comparison(&first, &second))
}

/// Produces the text to print: the report, or the fixed invalid-city message on any failure
pub async fn run(client: &ForecastClient, city1: &str, city2: &str) -> String {
    match compare_forecasts(client, city1, city2).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Forecast comparison failed: {}", e);
            format!("{}\n", e.user_message())
        }
    }
}
