use std::cmp::Ordering;

use crate::models::CityForecast;

/// How the first city's temperature relates to the second's on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureComparison {
    /// First city is colder by this many degrees
    Cooler(u32),
    /// First city is warmer by this many degrees
    Warmer(u32),
    /// Both cities share this temperature
    Same(i32),
}

impl TemperatureComparison {
    pub fn between(first: i32, second: i32) -> Self {
        match first.cmp(&second) {
            Ordering::Less => Self::Cooler(first.abs_diff(second)),
            Ordering::Greater => Self::Warmer(first.abs_diff(second)),
            Ordering::Equal => Self::Same(first),
        }
    }
}

/// Formats the temperature line for one day
pub fn temperature_sentence(city1: &str, temp1: i32, city2: &str, temp2: i32) -> String {
    match TemperatureComparison::between(temp1, temp2) {
        TemperatureComparison::Cooler(delta) => format!(
            "{} ({}C) will be {}C cooler than {} ({}C).",
            city1, temp1, delta, city2, temp2
        ),
        TemperatureComparison::Warmer(delta) => format!(
            "{} ({}C) will be {}C warmer than {} ({}C).",
            city1, temp1, delta, city2, temp2
        ),
        TemperatureComparison::Same(temp) => format!(
            "{} and {} will both have the same temperature ({}C).",
            city1, city2, temp
        ),
    }
}

/// Formats the sky conditions line for one day; descriptions must match exactly
pub fn description_sentence(city1: &str, desc1: &str, city2: &str, desc2: &str) -> String {
    if desc1 == desc2 {
        format!("{} and {} will both have {}.", city1, city2, desc1)
    } else {
        format!(
            "{} will have {}, but {} will have {}.",
            city1, desc1, city2, desc2
        )
    }
}

/// Formats the day-by-day comparison of two city forecasts into a human-readable string
pub fn format_comparison(first: &CityForecast, second: &CityForecast) -> String {
    let (city1, city2) = (first.city(), second.city());

    let mut output = format!(
        "\nWeather forecast comparison between {} and {}:\n\n",
        city1, city2
    );

    for (i, (day1, day2)) in first.days().iter().zip(second.days()).enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "Day {}:\n{}\n{}\n",
            i + 1,
            temperature_sentence(city1, day1.temperature, city2, day2.temperature),
            description_sentence(city1, &day1.description, city2, &day2.description)
        ));
    }
    output
}
