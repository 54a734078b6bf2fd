mod common;

use std::collections::BTreeMap;

use flightpath_lib::{rank_connections, sort_flights, Connection, Flight, RankKey, SortKey};

use common::{flight, nyc_chi_den, sample_flights};

fn id_multiset(flights: &[Flight]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for flight in flights {
        *counts.entry(flight.id.clone()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn every_key_yields_a_sorted_permutation() {
    let flights = sample_flights();
    for key in [SortKey::Price, SortKey::Duration, SortKey::Airline] {
        let sorted = sort_flights(&flights, key);
        assert_eq!(id_multiset(&sorted), id_multiset(&flights), "{key}");
        let ordered = sorted.windows(2).all(|pair| match key {
            SortKey::Price => pair[0].price <= pair[1].price,
            SortKey::Duration => pair[0].duration <= pair[1].duration,
            SortKey::Airline => pair[0].airline <= pair[1].airline,
        });
        assert!(ordered, "flights not ordered by {key}");
    }
}

#[test]
fn sorting_leaves_input_untouched() {
    let flights = nyc_chi_den();
    let before: Vec<String> = flights.iter().map(|f| f.id.clone()).collect();
    let sorted = sort_flights(&flights, SortKey::Price);
    let after: Vec<String> = flights.iter().map(|f| f.id.clone()).collect();
    assert_eq!(before, after);
    let ids: Vec<&str> = sorted.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["F011", "F002", "F043"]);
}

#[test]
fn sample_price_extremes() {
    let sorted = sort_flights(&sample_flights(), SortKey::Price);
    assert_eq!(sorted.first().map(|f| f.id.as_str()), Some("F065"));
    assert_eq!(sorted.last().map(|f| f.id.as_str()), Some("F061"));
}

#[test]
fn airline_order_uses_plain_string_comparison() {
    let mut flights = vec![
        flight("1", "A", "B", 1.0, 1.0),
        flight("2", "A", "B", 1.0, 1.0),
        flight("3", "A", "B", 1.0, 1.0),
    ];
    flights[0].airline = "delta".to_string();
    flights[1].airline = "United".to_string();
    flights[2].airline = "Alaska".to_string();
    let sorted = sort_flights(&flights, SortKey::Airline);
    let airlines: Vec<&str> = sorted.iter().map(|f| f.airline.as_str()).collect();
    assert_eq!(airlines, vec!["Alaska", "United", "delta"]);
}

#[test]
fn empty_input_sorts_to_empty() {
    assert!(sort_flights(&[], SortKey::Duration).is_empty());
}

#[test]
fn connections_rank_by_each_key() {
    let mut connections = vec![
        Connection::from_flights(vec![
            flight("a", "X", "Y", 100.0, 60.0),
            flight("b", "Y", "Z", 100.0, 60.0),
        ]),
        Connection::from_flights(vec![flight("c", "X", "Z", 300.0, 90.0)]),
        Connection::from_flights(vec![
            flight("d", "X", "W", 50.0, 200.0),
            flight("e", "W", "Z", 50.0, 200.0),
        ]),
    ];

    rank_connections(&mut connections, RankKey::Price);
    let prices: Vec<f64> = connections.iter().map(|c| c.total_price).collect();
    assert_eq!(prices, vec![100.0, 200.0, 300.0]);

    rank_connections(&mut connections, RankKey::Duration);
    let durations: Vec<f64> = connections.iter().map(|c| c.total_duration).collect();
    assert_eq!(durations, vec![90.0, 120.0, 400.0]);

    rank_connections(&mut connections, RankKey::Transfers);
    assert_eq!(connections[0].transfers, 0);
    assert!(connections[1..].iter().all(|c| c.transfers == 1));
}
