use thiserror::Error;

use crate::weather::{Weather, Weight};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Unknown city '{0}'")]
    UnknownNode(String),

    #[error("No route from '{from}' to '{to}'")]
    NoPath { from: String, to: String },

    #[error("No connection from '{from}' to '{to}'")]
    EdgeNotFound { from: String, to: String },

    #[error("Invalid weather profile '{0}' (expected normal, rain, snow or storm)")]
    InvalidWeatherProfile(String),

    #[error("Negative {weather} time {value} from '{from}' to '{to}'")]
    NegativeWeight {
        from: String,
        to: String,
        weather: Weather,
        value: Weight,
    },

    #[error("Non-finite {weather} time {value} from '{from}' to '{to}'")]
    NonFiniteWeight {
        from: String,
        to: String,
        weather: Weather,
        value: Weight,
    },

    /// Empty, containing whitespace or starting with `#`.
    #[error("Invalid city name '{0}' (use a single word not starting with '#')")]
    InvalidCityName(String),

    #[error("City '{0}' already exists")]
    DuplicateNode(String),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read road network file")]
    Read(#[source] std::io::Error),

    #[error("Failed to write road network file")]
    Write(#[source] std::io::Error),

    #[error("Line {line}: invalid {weather} time '{value}'")]
    InvalidNumber {
        line: usize,
        weather: Weather,
        value: String,
    },

    #[error("Line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: GraphError,
    },
}
