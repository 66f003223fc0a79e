use serde::Deserialize;

use crate::constants::FORECAST_DAYS;
use crate::error::ForecastError;

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DailyForecastResponse {
    pub list: Vec<DailyEntry>,
}

#[derive(Debug, Deserialize)]
pub struct DailyEntry {
    pub temp: DailyTemperature,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
pub struct DailyTemperature {
    pub max: f64,
}

#[derive(Debug, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

// ============================================================================
// Forecast Models
// ============================================================================

/// One day's summary for a city
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastDay {
    /// Maximum temperature in °C, rounded up
    pub temperature: i32,
    pub description: String,
}

impl TryFrom<(usize, &DailyEntry)> for ForecastDay {
    type Error = ForecastError;

    fn try_from((day, entry): (usize, &DailyEntry)) -> Result<Self, Self::Error> {
        let condition = entry
            .weather
            .first()
            .ok_or(ForecastError::MissingCondition { day: day + 1 })?;

        let max = entry.temp.max.ceil();
        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&max) {
            return Err(ForecastError::TemperatureOutOfRange {
                day: day + 1,
                max: entry.temp.max,
            });
        }

        Ok(Self {
            temperature: max as i32,
            description: condition.description.clone(),
        })
    }
}

/// The ordered forecast days for one city; always exactly `FORECAST_DAYS` long
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityForecast {
    city: String,
    days: Vec<ForecastDay>,
}

impl CityForecast {
    /// Keeps the first `FORECAST_DAYS` days, rejecting anything shorter
    pub fn new(
        city: impl Into<String>,
        mut days: Vec<ForecastDay>,
    ) -> Result<Self, ForecastError> {
        if days.len() < FORECAST_DAYS {
            return Err(ForecastError::IncompleteForecast {
                expected: FORECAST_DAYS,
                found: days.len(),
            });
        }
        days.truncate(FORECAST_DAYS);

        Ok(Self {
            city: city.into(),
            days,
        })
    }

    /// Extracts the forecast days from an API response
    pub fn from_response(
        city: impl Into<String>,
        response: &DailyForecastResponse,
    ) -> Result<Self, ForecastError> {
        let days = response
            .list
            .iter()
            .take(FORECAST_DAYS)
            .enumerate()
            .map(ForecastDay::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(city, days)
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn days(&self) -> &[ForecastDay] {
        &self.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(entries: &[(f64, &str)]) -> DailyForecastResponse {
        DailyForecastResponse {
            list: entries
                .iter()
                .map(|(max, description)| DailyEntry {
                    temp: DailyTemperature { max: *max },
                    weather: vec![WeatherCondition {
                        description: description.to_string(),
                    }],
                })
                .collect(),
        }
    }

    #[test]
    fn temperatures_are_rounded_up() {
        let response = response(&[
            (17.01, "clear sky"),
            (18.0, "rain"),
            (-0.5, "snow"),
            (-3.7, "light snow"),
            (21.99, "few clouds"),
        ]);

        let forecast = CityForecast::from_response("Toronto", &response).unwrap();
        let temperatures: Vec<i32> = forecast.days().iter().map(|d| d.temperature).collect();

        assert_eq!(temperatures, vec![18, 18, 0, -3, 22]);
        assert_eq!(forecast.days()[1].description, "rain");
        assert_eq!(forecast.city(), "Toronto");
    }

    #[test]
    fn only_the_first_five_days_are_kept() {
        let response = response(&[
            (1.0, "a"),
            (2.0, "b"),
            (3.0, "c"),
            (4.0, "d"),
            (5.0, "e"),
            (6.0, "f"),
            (7.0, "g"),
        ]);

        let forecast = CityForecast::from_response("Oslo", &response).unwrap();

        assert_eq!(forecast.days().len(), FORECAST_DAYS);
        assert_eq!(forecast.days()[4].description, "e");
    }

    #[test]
    fn short_forecast_is_rejected() {
        let response = response(&[(1.0, "a"), (2.0, "b"), (3.0, "c")]);

        let error = CityForecast::from_response("Lima", &response).unwrap_err();

        assert!(matches!(
            error,
            ForecastError::IncompleteForecast {
                expected: 5,
                found: 3
            }
        ));
    }

    #[test]
    fn day_without_weather_condition_is_rejected() {
        let mut response = response(&[
            (1.0, "a"),
            (2.0, "b"),
            (3.0, "c"),
            (4.0, "d"),
            (5.0, "e"),
        ]);
        response.list[2].weather.clear();

        let error = CityForecast::from_response("Lima", &response).unwrap_err();

        assert!(matches!(error, ForecastError::MissingCondition { day: 3 }));
    }

    #[test]
    fn unrepresentable_temperature_is_rejected() {
        let response = response(&[
            (3e9, "clear sky"),
            (2.0, "b"),
            (3.0, "c"),
            (4.0, "d"),
            (5.0, "e"),
        ]);

        let error = CityForecast::from_response("Lima", &response).unwrap_err();

        assert!(matches!(
            error,
            ForecastError::TemperatureOutOfRange { day: 1, max } if max == 3e9
        ));
    }

    #[test]
    fn huge_temperature_in_json_is_rejected() {
        let json = r#"{"list": [
            {"temp": {"max": -5.0}, "weather": [{"description": "snow"}]},
            {"temp": {"max": 1e300}, "weather": [{"description": "snow"}]},
            {"temp": {"max": -5.0}, "weather": [{"description": "snow"}]},
            {"temp": {"max": -5.0}, "weather": [{"description": "snow"}]},
            {"temp": {"max": -5.0}, "weather": [{"description": "snow"}]}
        ]}"#;
        let response: DailyForecastResponse = serde_json::from_str(json).unwrap();

        let error = CityForecast::from_response("Oslo", &response).unwrap_err();

        assert!(matches!(
            error,
            ForecastError::TemperatureOutOfRange { day: 2, .. }
        ));
    }

    #[test]
    fn only_first_weather_condition_is_used() {
        let json = r#"{
            "city": {"name": "Cleveland"},
            "list": [
                {
                    "temp": {"min": 10.2, "max": 20.4},
                    "weather": [
                        {"id": 500, "description": "light rain"},
                        {"id": 701, "description": "mist"}
                    ]
                },
                {"temp": {"max": 20.0}, "weather": [{"description": "rain"}]},
                {"temp": {"max": 20.0}, "weather": [{"description": "rain"}]},
                {"temp": {"max": 20.0}, "weather": [{"description": "rain"}]},
                {"temp": {"max": 20.0}, "weather": [{"description": "rain"}]}
            ]
        }"#;
        let response: DailyForecastResponse = serde_json::from_str(json).unwrap();

        let forecast = CityForecast::from_response("Cleveland", &response).unwrap();

        assert_eq!(
            forecast.days()[0],
            ForecastDay {
                temperature: 21,
                description: "light rain".to_string(),
            }
        );
    }

    #[test]
    fn response_without_list_fails_to_decode() {
        let json = r#"{"cod": "404", "message": "city not found"}"#;

        assert!(serde_json::from_str::<DailyForecastResponse>(json).is_err());
    }
}
