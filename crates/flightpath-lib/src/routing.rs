//! Name-resolving route planning on top of the path algorithms.
//!
//! The algorithms in [`crate::path`] take raw city codes and report missing
//! routes as `None`. Presentation layers usually start from user input
//! instead, so this module resolves codes or names against a
//! [`FlightDataset`] and turns "no route" into [`Error::RouteNotFound`].

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::dataset::FlightDataset;
use crate::error::{Error, Result};
use crate::flight::{CityCode, Connection, CostKey};
use crate::path::{find_all_paths_ranked, find_optimal_path};
use crate::sort::RankKey;

/// Transfers allowed by default when enumerating connections.
pub const DEFAULT_MAX_TRANSFERS: usize = 3;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Single optimal path (Dijkstra).
    Dijkstra,
    /// Every simple path within a transfer budget (breadth-first).
    Bfs,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::Bfs => "bfs",
        };
        f.write_str(value)
    }
}

/// Request for the single best connection.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub optimization: CostKey,
}

impl RouteRequest {
    /// Convenience constructor for the cheapest connection.
    pub fn cheapest(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            optimization: CostKey::Price,
        }
    }

    /// Convenience constructor for the fastest connection.
    pub fn fastest(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            optimization: CostKey::Duration,
        }
    }
}

/// Planned optimal connection.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub optimization: CostKey,
    pub start: CityCode,
    pub goal: CityCode,
    pub connection: Connection,
}

impl RoutePlan {
    /// Number of flights in the route.
    pub fn hop_count(&self) -> usize {
        self.connection.hop_count()
    }
}

/// Request for every connection within a transfer budget.
#[derive(Debug, Clone)]
pub struct AllRoutesRequest {
    pub start: String,
    pub goal: String,
    pub max_transfers: usize,
    pub rank_by: RankKey,
}

impl AllRoutesRequest {
    /// Price-ranked search allowing [`DEFAULT_MAX_TRANSFERS`] transfers.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            max_transfers: DEFAULT_MAX_TRANSFERS,
            rank_by: RankKey::Price,
        }
    }

    /// Flight budget passed to the enumerator.
    pub fn max_hops(&self) -> usize {
        self.max_transfers.saturating_add(1)
    }
}

/// Ranked set of connections between two cities. May be empty.
#[derive(Debug, Clone, Serialize)]
pub struct AllRoutesPlan {
    pub algorithm: RouteAlgorithm,
    pub start: CityCode,
    pub goal: CityCode,
    pub max_transfers: usize,
    pub rank_by: RankKey,
    pub connections: Vec<Connection>,
}

/// Compute the optimal connection for `request`.
pub fn plan_route(dataset: &FlightDataset, request: &RouteRequest) -> Result<RoutePlan> {
    let start = dataset.resolve_city(&request.start)?.code.clone();
    let goal = dataset.resolve_city(&request.goal)?.code.clone();

    let Some(connection) =
        find_optimal_path(dataset.flights(), &start, &goal, request.optimization)
    else {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    };

    debug!(
        %start,
        %goal,
        flights = connection.hop_count(),
        "planned optimal route"
    );

    Ok(RoutePlan {
        algorithm: RouteAlgorithm::Dijkstra,
        optimization: request.optimization,
        start,
        goal,
        connection,
    })
}

/// Enumerate and rank every connection allowed by `request`.
///
/// Unknown cities are errors; an empty `connections` list is not.
pub fn plan_all_routes(dataset: &FlightDataset, request: &AllRoutesRequest) -> Result<AllRoutesPlan> {
    let start = dataset.resolve_city(&request.start)?.code.clone();
    let goal = dataset.resolve_city(&request.goal)?.code.clone();

    let connections = find_all_paths_ranked(
        dataset.flights(),
        &start,
        &goal,
        request.max_hops(),
        request.rank_by,
    );

    Ok(AllRoutesPlan {
        algorithm: RouteAlgorithm::Bfs,
        start,
        goal,
        max_transfers: request.max_transfers,
        rank_by: request.rank_by,
        connections,
    })
}
