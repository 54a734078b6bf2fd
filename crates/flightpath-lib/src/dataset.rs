//! Flight dataset loading, validation and city lookup.
//!
//! A dataset is a list of cities plus a list of flights. It can be read from
//! a JSON document (`{"cities": [...], "flights": [...]}`) or a CSV flight
//! table, and a built-in sample dataset is always available as a fallback.

use std::collections::{BTreeMap, HashSet};
use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::flight::{City, Flight};

/// Default filename looked up in the platform data directory.
const DATASET_FILENAME: &str = "flights.json";

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "FLIGHTPATH_DATASET";

const SAMPLE_DATASET_JSON: &str = include_str!("../data/sample_flights.json");

static SAMPLE_DATASET: Lazy<FlightDataset> = Lazy::new(|| {
    FlightDataset::from_json_reader(SAMPLE_DATASET_JSON.as_bytes())
        .expect("embedded sample dataset is valid")
});

/// Minimum Jaro-Winkler similarity for a city to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

#[derive(Debug, Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    cities: Vec<City>,
    flights: Vec<Flight>,
}

/// Cities and flights loaded from a single source.
#[derive(Debug, Clone, Default)]
pub struct FlightDataset {
    cities: Vec<City>,
    flights: Vec<Flight>,
    source: Option<PathBuf>,
}

impl FlightDataset {
    /// Build a dataset from in-memory records.
    ///
    /// Cities referenced by flights but missing from `cities` are added with
    /// their code as display name. Fails when the flights do not validate.
    pub fn from_parts(cities: Vec<City>, flights: Vec<Flight>) -> Result<Self> {
        let mut dataset = Self {
            cities,
            flights,
            source: None,
        };
        dataset.infer_missing_cities();
        dataset.validate()?;
        Ok(dataset)
    }

    /// The built-in ten-city sample dataset.
    pub fn sample() -> Self {
        SAMPLE_DATASET.clone()
    }

    /// Load a dataset from a `.json` or `.csv` file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase());
        let file = fs::File::open(path)?;
        let mut dataset = match extension.as_deref() {
            Some("json") => Self::from_json_reader(file)?,
            Some("csv") => Self::from_csv_reader(file)?,
            _ => {
                return Err(Error::UnsupportedDatasetFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        dataset.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            cities = dataset.cities.len(),
            flights = dataset.flights.len(),
            "loaded flight dataset"
        );
        Ok(dataset)
    }

    /// Parse a JSON dataset document.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let document: DatasetDocument = serde_json::from_reader(reader)?;
        Self::from_parts(document.cities, document.flights)
    }

    /// Parse a CSV flight table. Cities are inferred from the flight codes.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

        // canonical field -> accepted header spellings (already normalized)
        let synonyms: &[(&str, &[&str])] = &[
            ("id", &["id", "flight_id", "flightid", "flight"]),
            ("from", &["from", "origin", "departure_city", "source"]),
            ("to", &["to", "destination", "arrival_city", "target"]),
            ("airline", &["airline", "carrier"]),
            ("price", &["price", "cost", "fare"]),
            ("duration", &["duration", "duration_minutes", "minutes"]),
            (
                "departure_time",
                &["departure_time", "departuretime", "departure", "departs"],
            ),
            (
                "arrival_time",
                &["arrival_time", "arrivaltime", "arrival", "arrives"],
            ),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(position) = normalized_headers
                .iter()
                .position(|header| alts.contains(&header.as_str()))
            {
                index_map.insert(*canon, position);
            }
        }

        let missing: Vec<&str> = ["id", "from", "to", "airline", "price", "duration"]
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();
        if !missing.is_empty() {
            return Err(Error::DatasetValidation {
                message: format!(
                    "flight table missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut flights = Vec::new();
        for (offset, record) in csv_reader.records().enumerate() {
            let record = record?;
            // header is line 1
            let row = offset + 2;
            let get = |field: &str| -> String {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .unwrap_or_default()
                    .to_string()
            };
            let number = |field: &str| -> Result<f64> {
                get(field)
                    .parse::<f64>()
                    .map_err(|err| Error::DatasetValidation {
                        message: format!("invalid {field} at row {row}: {err}"),
                    })
            };

            flights.push(Flight {
                id: get("id"),
                from: get("from"),
                to: get("to"),
                airline: get("airline"),
                price: number("price")?,
                duration: number("duration")?,
                departure_time: get("departure_time"),
                arrival_time: get("arrival_time"),
            });
        }

        Self::from_parts(Vec::new(), flights)
    }

    /// Check the invariants the routing algorithms rely on.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for flight in &self.flights {
            if flight.id.trim().is_empty() {
                return Err(Error::DatasetValidation {
                    message: format!("flight {} -> {} has an empty id", flight.from, flight.to),
                });
            }
            if flight.from.trim().is_empty() || flight.to.trim().is_empty() {
                return Err(Error::DatasetValidation {
                    message: format!("flight {} is missing an origin or destination", flight.id),
                });
            }
            for (field, value) in [("price", flight.price), ("duration", flight.duration)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::DatasetValidation {
                        message: format!(
                            "flight {} has invalid {field} {value}; expected a non-negative number",
                            flight.id
                        ),
                    });
                }
            }
            if !seen.insert(flight.id.as_str()) {
                return Err(Error::DuplicateFlightId {
                    id: flight.id.clone(),
                });
            }
        }
        Ok(())
    }

    fn infer_missing_cities(&mut self) {
        let mut known: HashSet<String> = self.cities.iter().map(|c| c.code.clone()).collect();
        for flight in &self.flights {
            for code in [&flight.from, &flight.to] {
                if known.insert(code.clone()) {
                    self.cities.push(City {
                        code: code.clone(),
                        name: code.clone(),
                    });
                }
            }
        }
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Path the dataset was read from, if it came from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Lookup a city by exact code.
    pub fn city(&self, code: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.code == code)
    }

    /// Display name for a city code.
    pub fn city_name(&self, code: &str) -> Option<&str> {
        self.city(code).map(|city| city.name.as_str())
    }

    /// Resolve a user-supplied code or name (case-insensitive).
    pub fn resolve_city(&self, query: &str) -> Result<&City> {
        let needle = query.trim();
        self.cities
            .iter()
            .find(|city| {
                city.code.eq_ignore_ascii_case(needle) || city.name.eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownCity {
                name: query.to_string(),
                suggestions: self.fuzzy_city_matches(query, 3),
            })
    }

    /// City codes whose code or name resembles `query`, best match first.
    pub fn fuzzy_city_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .cities
            .iter()
            .map(|city| {
                let by_code = strsim::jaro_winkler(&needle, &city.code.to_lowercase());
                let by_name = strsim::jaro_winkler(&needle, &city.name.to_lowercase());
                (by_code.max(by_name), city.code.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }

    /// Flights matching an optional origin and destination code.
    pub fn filter_flights(&self, from: Option<&str>, to: Option<&str>) -> Vec<Flight> {
        self.flights
            .iter()
            .filter(|flight| from.map_or(true, |code| flight.from == code))
            .filter(|flight| to.map_or(true, |code| flight.to == code))
            .cloned()
            .collect()
    }
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "flightpath", "flightpath")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Load the dataset a command should run against.
///
/// Resolution order: the explicit path, the `FLIGHTPATH_DATASET` environment
/// variable, `flights.json` in the platform data directory, then the built-in
/// sample dataset.
pub fn load_dataset(explicit: Option<&Path>) -> Result<FlightDataset> {
    if let Some(path) = explicit {
        return FlightDataset::from_path(path);
    }

    if let Ok(value) = env::var(DATASET_ENV_VAR) {
        if !value.trim().is_empty() {
            return FlightDataset::from_path(Path::new(value.trim()));
        }
    }

    match default_dataset_path() {
        Ok(path) if path.exists() => return FlightDataset::from_path(&path),
        Ok(path) => debug!(path = %path.display(), "no dataset in data directory"),
        Err(err) => debug!(error = %err, "data directory unavailable"),
    }

    debug!("falling back to the built-in sample dataset");
    Ok(FlightDataset::sample())
}

fn normalize_header(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
