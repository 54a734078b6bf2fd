//! Shared fixtures for integration tests.

use std::path::PathBuf;

use flightpath_lib::{Flight, FlightDataset};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Flight with placeholder airline and times.
#[allow(dead_code)]
pub fn flight(id: &str, from: &str, to: &str, price: f64, duration: f64) -> Flight {
    Flight {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        airline: "Test Air".to_string(),
        price,
        duration,
        departure_time: "08:00".to_string(),
        arrival_time: "10:00".to_string(),
    }
}

/// The NYC/CHI/DEN triangle: a two-leg route via Chicago and a direct flight.
#[allow(dead_code)]
pub fn nyc_chi_den() -> Vec<Flight> {
    vec![
        flight("F002", "NYC", "CHI", 180.0, 150.0),
        flight("F011", "CHI", "DEN", 160.0, 135.0),
        flight("F043", "NYC", "DEN", 200.0, 240.0),
    ]
}

#[allow(dead_code)]
pub fn sample_flights() -> Vec<Flight> {
    FlightDataset::sample().flights().to_vec()
}

/// `true` when no city appears twice along the connection.
#[allow(dead_code)]
pub fn is_simple(cities: &[&str]) -> bool {
    let mut seen = std::collections::HashSet::new();
    cities.iter().all(|city| seen.insert(*city))
}
