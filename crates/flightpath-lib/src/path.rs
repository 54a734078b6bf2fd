use std::collections::VecDeque;

use tracing::debug;

use crate::flight::{Connection, CostKey, Flight};
use crate::graph::Graph;
use crate::sort::{rank_connections, RankKey};

/// Find the cheapest connection between `origin` and `destination`.
pub fn find_cheapest_path(
    flights: &[Flight],
    origin: &str,
    destination: &str,
) -> Option<Connection> {
    find_optimal_path(flights, origin, destination, CostKey::Price)
}

/// Find the fastest connection between `origin` and `destination`.
///
/// The returned totals still carry the true ticket price of every flight.
pub fn find_fastest_path(
    flights: &[Flight],
    origin: &str,
    destination: &str,
) -> Option<Connection> {
    find_optimal_path(flights, origin, destination, CostKey::Duration)
}

/// Run Dijkstra's algorithm over `flights`, weighting each flight by `cost`.
///
/// The unsettled node with the smallest tentative distance is picked with a
/// linear scan in first-appearance order, so among equal distances the city
/// seen first in the flight list wins. Returns `None` when either endpoint is
/// unknown or the destination is unreachable. When `origin == destination`
/// the result is a connection with no flights.
pub fn find_optimal_path(
    flights: &[Flight],
    origin: &str,
    destination: &str,
    cost: CostKey,
) -> Option<Connection> {
    let graph = Graph::build(flights);
    let start = graph.city_index(origin)?;
    let goal = graph.city_index(destination)?;

    let cities = graph.cities();
    let mut distances = vec![f64::INFINITY; cities.len()];
    let mut parents: Vec<Option<(usize, &Flight)>> = vec![None; cities.len()];
    let mut settled = vec![false; cities.len()];
    distances[start] = 0.0;

    let mut settled_count = 0usize;
    while let Some(current) = closest_unsettled(&distances, &settled) {
        if current == goal || distances[current].is_infinite() {
            break;
        }
        settled[current] = true;
        settled_count += 1;

        for &flight in graph.neighbours(cities[current]) {
            let Some(next) = graph.city_index(&flight.to) else {
                continue;
            };
            if settled[next] {
                continue;
            }

            let next_cost = distances[current] + cost.cost(flight);
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some((current, flight));
            }
        }
    }

    debug!(
        origin,
        destination,
        %cost,
        settled = settled_count,
        "dijkstra search finished"
    );

    if distances[goal].is_infinite() {
        return None;
    }

    Some(Connection::from_flights(reconstruct_flights(
        &parents, start, goal,
    )))
}

fn closest_unsettled(distances: &[f64], settled: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, distance) in distances.iter().enumerate() {
        if settled[index] {
            continue;
        }
        match best {
            Some(current) if *distance >= distances[current] => {}
            _ => best = Some(index),
        }
    }
    best
}

fn reconstruct_flights(
    parents: &[Option<(usize, &Flight)>],
    start: usize,
    goal: usize,
) -> Vec<Flight> {
    let mut flights = Vec::new();
    let mut current = goal;
    while current != start {
        let Some((previous, flight)) = parents[current] else {
            break;
        };
        flights.push(flight.clone());
        current = previous;
    }
    flights.reverse();
    flights
}

/// Entry in the enumeration arena. Each state only knows the flight that
/// reached it and the state it was extended from.
#[derive(Debug, Clone, Copy)]
struct PathState<'a> {
    city: &'a str,
    via: Option<&'a Flight>,
    parent: Option<usize>,
    depth: usize,
}

/// Enumerate every simple connection from `origin` to `destination` with at
/// most `max_hops` flights, in breadth-first discovery order.
///
/// A connection never visits the same city twice. Nothing is returned for
/// `origin == destination` since only connections with at least one flight
/// are reported.
pub fn find_all_paths(
    flights: &[Flight],
    origin: &str,
    destination: &str,
    max_hops: usize,
) -> Vec<Connection> {
    let graph = Graph::build(flights);
    let mut arena: Vec<PathState<'_>> = vec![PathState {
        city: origin,
        via: None,
        parent: None,
        depth: 0,
    }];
    let mut queue = VecDeque::from([0usize]);
    let mut connections = Vec::new();

    while let Some(id) = queue.pop_front() {
        let state = arena[id];

        if state.city == destination && state.depth > 0 {
            connections.push(Connection::from_flights(collect_flights(&arena, id)));
            continue;
        }

        if state.depth >= max_hops {
            continue;
        }

        for &flight in graph.neighbours(state.city) {
            if visits(&arena, id, &flight.to) {
                continue;
            }
            arena.push(PathState {
                city: flight.to.as_str(),
                via: Some(flight),
                parent: Some(id),
                depth: state.depth + 1,
            });
            queue.push_back(arena.len() - 1);
        }
    }

    debug!(
        origin,
        destination,
        max_hops,
        explored = arena.len(),
        found = connections.len(),
        "path enumeration finished"
    );

    connections
}

/// [`find_all_paths`] followed by an ascending sort on `rank`.
pub fn find_all_paths_ranked(
    flights: &[Flight],
    origin: &str,
    destination: &str,
    max_hops: usize,
    rank: RankKey,
) -> Vec<Connection> {
    let mut connections = find_all_paths(flights, origin, destination, max_hops);
    rank_connections(&mut connections, rank);
    connections
}

fn visits(arena: &[PathState<'_>], mut id: usize, city: &str) -> bool {
    loop {
        let state = &arena[id];
        if state.city == city {
            return true;
        }
        match state.parent {
            Some(parent) => id = parent,
            None => return false,
        }
    }
}

fn collect_flights(arena: &[PathState<'_>], mut id: usize) -> Vec<Flight> {
    let mut flights = Vec::with_capacity(arena[id].depth);
    while let Some(flight) = arena[id].via {
        flights.push(flight.clone());
        match arena[id].parent {
            Some(parent) => id = parent,
            None => break,
        }
    }
    flights.reverse();
    flights
}
