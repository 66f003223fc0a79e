/// User agent string for HTTP requests
pub const USER_AGENT: &str = "compare-forecasts/0.1.0";

/// OpenWeatherMap API base URL
pub const OPENWEATHERMAP_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Unit system requested from OpenWeatherMap (Celsius)
pub const UNITS: &str = "metric";

/// Number of forecast days fetched and compared per city
pub const FORECAST_DAYS: usize = 5;

/// Printed in place of the report whenever either city cannot be fetched
pub const INVALID_CITY_MESSAGE: &str =
    "One or both of the cities inputted are invalid. Please input a valid city name.";
