use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flightpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The path-finding functions never return these: an unreachable destination
/// is reported as `None` or an empty list. Errors only come from loading a
/// dataset or from the name-resolving routing facade.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset location")]
    ProjectDirsUnavailable,

    /// Raised when the dataset file extension is neither JSON nor CSV.
    #[error("unsupported dataset format for {path}; expected .json or .csv")]
    UnsupportedDatasetFormat { path: PathBuf },

    /// Raised when flight or city data fails validation.
    #[error("invalid dataset: {message}")]
    DatasetValidation { message: String },

    /// Raised when two flights share an identifier.
    #[error("duplicate flight id encountered: {id}")]
    DuplicateFlightId { id: String },

    /// Raised when a city code or name could not be found in the dataset.
    #[error("unknown city: {name}{}", format_suggestions(.suggestions))]
    UnknownCity {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no connection could be found between two cities.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
