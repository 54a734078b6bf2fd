//! Side-by-side view of an optimal connection and its runner-up
//! alternatives.

use serde::Serialize;

use crate::flight::{Connection, CostKey, Flight};
use crate::path::find_all_paths;
use crate::sort::{rank_connections, RankKey};

/// Alternatives only cover direct flights and single-stop connections.
const ALTERNATIVE_MAX_HOPS: usize = 2;

/// Alternatives shown when the caller does not choose a limit.
pub const DEFAULT_ALTERNATIVES: usize = 3;

/// A non-optimal connection and how much worse it is.
#[derive(Debug, Clone, Serialize)]
pub struct Alternative {
    pub connection: Connection,
    /// Extra price or minutes compared to the optimal connection.
    pub savings: f64,
    /// `savings` as a whole percentage of this alternative's total.
    pub savings_percent: f64,
}

/// Optimal connection plus the alternatives it beats.
#[derive(Debug, Clone, Serialize)]
pub struct RouteComparison {
    pub optimization: CostKey,
    pub optimal: Connection,
    pub alternatives: Vec<Alternative>,
}

/// Collect up to `limit` direct or one-stop alternatives to `optimal`,
/// ranked by `optimization`. Connections made of exactly the same flights as
/// `optimal` are skipped. A zero-flight `optimal` has no alternatives.
pub fn compare_alternatives(
    flights: &[Flight],
    optimal: &Connection,
    optimization: CostKey,
    limit: usize,
) -> RouteComparison {
    let endpoints = optimal
        .flights
        .first()
        .zip(optimal.flights.last())
        .map(|(first, last)| (first.from.as_str(), last.to.as_str()));

    let alternatives = match endpoints {
        Some((origin, destination)) => {
            let mut candidates = find_all_paths(flights, origin, destination, ALTERNATIVE_MAX_HOPS);
            rank_connections(&mut candidates, rank_key(optimization));

            let optimal_ids = optimal.flight_ids();
            let optimal_value = optimization.total(optimal);
            candidates
                .into_iter()
                .filter(|candidate| candidate.flight_ids() != optimal_ids)
                .take(limit)
                .map(|connection| {
                    let value = optimization.total(&connection);
                    let savings = value - optimal_value;
                    let savings_percent = if value == 0.0 {
                        0.0
                    } else {
                        (savings / value * 100.0).round()
                    };
                    Alternative {
                        connection,
                        savings,
                        savings_percent,
                    }
                })
                .collect()
        }
        None => Vec::new(),
    };

    RouteComparison {
        optimization,
        optimal: optimal.clone(),
        alternatives,
    }
}

fn rank_key(optimization: CostKey) -> RankKey {
    match optimization {
        CostKey::Price => RankKey::Price,
        CostKey::Duration => RankKey::Duration,
    }
}
