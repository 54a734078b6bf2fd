use std::collections::HashMap;

use crate::flight::Flight;

/// Adjacency index over a borrowed flight list.
///
/// Each origin maps to its outgoing flights in input order, which fixes the
/// order in which both path algorithms visit neighbours. The graph also
/// records every city that appears as an origin or destination, in order of
/// first appearance.
#[derive(Debug, Clone, Default)]
pub struct Graph<'a> {
    cities: Vec<&'a str>,
    index: HashMap<&'a str, usize>,
    adjacency: HashMap<&'a str, Vec<&'a Flight>>,
}

impl<'a> Graph<'a> {
    /// Group `flights` by origin.
    pub fn build(flights: &'a [Flight]) -> Self {
        let mut graph = Graph::default();
        for flight in flights {
            graph.register(&flight.from);
            graph.register(&flight.to);
            graph
                .adjacency
                .entry(flight.from.as_str())
                .or_default()
                .push(flight);
        }
        graph
    }

    fn register(&mut self, city: &'a str) {
        if !self.index.contains_key(city) {
            self.index.insert(city, self.cities.len());
            self.cities.push(city);
        }
    }

    /// Outgoing flights from `city`; empty when the city has none or is not
    /// part of the graph.
    pub fn neighbours(&self, city: &str) -> &[&'a Flight] {
        self.adjacency
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every known city, in first-appearance order.
    pub fn cities(&self) -> &[&'a str] {
        &self.cities
    }

    /// Position of `city` in [`Graph::cities`].
    pub fn city_index(&self, city: &str) -> Option<usize> {
        self.index.get(city).copied()
    }

    pub fn contains(&self, city: &str) -> bool {
        self.index.contains_key(city)
    }

    /// Number of cities with at least one outgoing flight.
    pub fn origin_count(&self) -> usize {
        self.adjacency.len()
    }
}

/// Build the routing graph for a flight list.
pub fn build_graph(flights: &[Flight]) -> Graph<'_> {
    Graph::build(flights)
}
