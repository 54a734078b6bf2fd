//! Flight, city and connection records shared by every algorithm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque city token (for example `"NYC"`).
pub type CityCode = String;

/// Display metadata for a city. The routing algorithms never read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub code: CityCode,
    pub name: String,
}

/// A scheduled, directed connection between two cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub from: CityCode,
    pub to: CityCode,
    pub airline: String,
    pub price: f64,
    /// Flight time in minutes.
    pub duration: f64,
    /// Local `HH:MM`; informational only.
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub arrival_time: String,
}

/// Edge weight used by the shortest-path solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostKey {
    /// Ticket price.
    #[default]
    Price,
    /// Flight time in minutes.
    Duration,
}

impl CostKey {
    /// Weight of `flight` under this key.
    pub fn cost(self, flight: &Flight) -> f64 {
        match self {
            CostKey::Price => flight.price,
            CostKey::Duration => flight.duration,
        }
    }

    /// Total of this key over a connection.
    pub fn total(self, connection: &Connection) -> f64 {
        match self {
            CostKey::Price => connection.total_price,
            CostKey::Duration => connection.total_duration,
        }
    }
}

impl fmt::Display for CostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostKey::Price => "price",
            CostKey::Duration => "duration",
        };
        f.write_str(value)
    }
}

impl FromStr for CostKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "price" | "cheapest" => Ok(CostKey::Price),
            "duration" | "fastest" => Ok(CostKey::Duration),
            other => Err(format!("unknown cost key '{other}'")),
        }
    }
}

/// An itinerary of one or more consecutive flights.
///
/// Totals are always summed from the original flight records, whichever key
/// was used to select the path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub flights: Vec<Flight>,
    pub total_price: f64,
    pub total_duration: f64,
    pub transfers: usize,
}

impl Connection {
    /// Build a connection from an ordered flight sequence.
    pub fn from_flights(flights: Vec<Flight>) -> Self {
        let total_price = flights.iter().map(|f| f.price).sum();
        let total_duration = flights.iter().map(|f| f.duration).sum();
        let transfers = flights.len().saturating_sub(1);
        Self {
            flights,
            total_price,
            total_duration,
            transfers,
        }
    }

    /// Number of flights taken.
    pub fn hop_count(&self) -> usize {
        self.flights.len()
    }

    /// `true` for the zero-flight connection returned when origin equals
    /// destination.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Cities visited in order, origin first. Empty for the zero-flight
    /// connection.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities = Vec::with_capacity(self.flights.len() + 1);
        if let Some(first) = self.flights.first() {
            cities.push(first.from.as_str());
        }
        cities.extend(self.flights.iter().map(|f| f.to.as_str()));
        cities
    }

    /// Identifiers of the flights taken, in order.
    pub fn flight_ids(&self) -> Vec<&str> {
        self.flights.iter().map(|f| f.id.as_str()).collect()
    }
}
