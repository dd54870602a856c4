use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Travel time in hours.
pub type Weight = f64;

/// Weather condition selecting which travel time profile drives routing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Normal,
    Rain,
    Snow,
    Storm,
}

impl Weather {
    pub const ALL: [Weather; 4] = [
        Weather::Normal,
        Weather::Rain,
        Weather::Snow,
        Weather::Storm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Normal => "normal",
            Weather::Rain => "rain",
            Weather::Snow => "snow",
            Weather::Storm => "storm",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Weather::Normal),
            "rain" => Ok(Weather::Rain),
            "snow" => Ok(Weather::Snow),
            "storm" => Ok(Weather::Storm),
            _ => Err(GraphError::InvalidWeatherProfile(s.to_string())),
        }
    }
}

/// The four travel times of a connection, one per weather condition.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WeatherProfiles {
    pub normal: Weight,
    pub rain: Weight,
    pub snow: Weight,
    pub storm: Weight,
}

impl WeatherProfiles {
    pub fn new(normal: Weight, rain: Weight, snow: Weight, storm: Weight) -> Self {
        WeatherProfiles {
            normal,
            rain,
            snow,
            storm,
        }
    }

    /// Same travel time regardless of the weather.
    pub fn uniform(weight: Weight) -> Self {
        Self::new(weight, weight, weight, weight)
    }

    #[inline(always)]
    pub fn weight(&self, weather: Weather) -> Weight {
        match weather {
            Weather::Normal => self.normal,
            Weather::Rain => self.rain,
            Weather::Snow => self.snow,
            Weather::Storm => self.storm,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weather, Weight)> + '_ {
        Weather::ALL
            .into_iter()
            .map(move |weather| (weather, self.weight(weather)))
    }

    /// Rejects NaN, infinite and negative travel times.
    pub fn validate(&self, from: &str, to: &str) -> Result<(), GraphError> {
        for (weather, value) in self.iter() {
            if !value.is_finite() {
                return Err(GraphError::NonFiniteWeight {
                    from: from.to_string(),
                    to: to.to_string(),
                    weather,
                    value,
                });
            }

            if value < 0.0 {
                return Err(GraphError::NegativeWeight {
                    from: from.to_string(),
                    to: to.to_string(),
                    weather,
                    value,
                });
            }
        }

        Ok(())
    }
}
