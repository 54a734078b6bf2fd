mod common;

use flightpath_lib::{
    find_all_paths, find_cheapest_path, find_fastest_path, find_optimal_path, CostKey,
};

use common::{flight, is_simple, nyc_chi_den, sample_flights};

#[test]
fn direct_flight_is_cheapest_in_triangle() {
    let connection = find_cheapest_path(&nyc_chi_den(), "NYC", "DEN").expect("route exists");
    assert_eq!(connection.flight_ids(), vec!["F043"]);
    assert_eq!(connection.total_price, 200.0);
    assert_eq!(connection.total_duration, 240.0);
    assert_eq!(connection.transfers, 0);
}

#[test]
fn direct_flight_is_fastest_in_triangle() {
    let connection = find_fastest_path(&nyc_chi_den(), "NYC", "DEN").expect("route exists");
    assert_eq!(connection.flight_ids(), vec!["F043"]);
    assert_eq!(connection.total_duration, 240.0);
    assert_eq!(connection.total_price, 200.0);
}

#[test]
fn connecting_route_wins_when_cheaper() {
    let mut flights = nyc_chi_den();
    flights[2].price = 400.0;
    let connection = find_cheapest_path(&flights, "NYC", "DEN").expect("route exists");
    assert_eq!(connection.flight_ids(), vec!["F002", "F011"]);
    assert_eq!(connection.total_price, 340.0);
    assert_eq!(connection.total_duration, 285.0);
    assert_eq!(connection.transfers, 1);
}

#[test]
fn fastest_route_reports_true_prices() {
    let connection = find_fastest_path(&sample_flights(), "NYC", "SFO").expect("route exists");
    assert_eq!(connection.flight_ids(), vec!["F061"]);
    assert_eq!(connection.total_duration, 350.0);
    assert_eq!(connection.total_price, 480.0);
}

#[test]
fn cheapest_sample_route_connects_through_denver() {
    let connection = find_cheapest_path(&sample_flights(), "NYC", "SFO").expect("route exists");
    assert_eq!(connection.flight_ids(), vec!["F043", "F071"]);
    assert_eq!(connection.total_price, 350.0);
    assert_eq!(connection.total_duration, 415.0);
}

#[test]
fn same_city_yields_empty_connection() {
    let connection =
        find_optimal_path(&nyc_chi_den(), "NYC", "NYC", CostKey::Price).expect("trivial route");
    assert!(connection.is_empty());
    assert_eq!(connection.total_price, 0.0);
    assert_eq!(connection.total_duration, 0.0);
}

#[test]
fn unreachable_or_unknown_cities_return_none() {
    let flights = nyc_chi_den();
    assert!(find_cheapest_path(&flights, "DEN", "NYC").is_none());
    assert!(find_cheapest_path(&flights, "NYC", "LAX").is_none());
    assert!(find_cheapest_path(&flights, "LAX", "NYC").is_none());
    assert!(find_cheapest_path(&flights, "LAX", "LAX").is_none());
    assert!(find_cheapest_path(&[], "NYC", "DEN").is_none());
}

#[test]
fn cycles_do_not_trap_the_solver() {
    let flights = vec![
        flight("1", "A", "B", 1.0, 1.0),
        flight("2", "B", "A", 1.0, 1.0),
        flight("3", "B", "C", 5.0, 1.0),
        flight("4", "C", "B", 1.0, 1.0),
    ];
    let connection = find_cheapest_path(&flights, "A", "C").expect("route exists");
    assert_eq!(connection.flight_ids(), vec!["1", "3"]);
}

#[test]
fn optimal_path_beats_every_enumerated_path() {
    let flights = sample_flights();
    let cities = ["NYC", "LAX", "MIA", "BOS", "SEA"];
    for origin in cities {
        for destination in cities {
            if origin == destination {
                continue;
            }
            let all = find_all_paths(&flights, origin, destination, 3);
            for key in [CostKey::Price, CostKey::Duration] {
                let best = find_optimal_path(&flights, origin, destination, key)
                    .expect("sample network is strongly connected");
                assert!(is_simple(&best.cities()));
                for candidate in &all {
                    assert!(
                        key.total(&best) <= key.total(candidate),
                        "{origin}->{destination} by {key}: {:?} beats {:?}",
                        candidate.flight_ids(),
                        best.flight_ids()
                    );
                }
            }
        }
    }
}

#[test]
fn reachability_agrees_with_enumeration() {
    let flights = vec![
        flight("1", "A", "B", 1.0, 1.0),
        flight("2", "B", "C", 1.0, 1.0),
        flight("3", "D", "A", 1.0, 1.0),
    ];
    for (origin, destination) in [("A", "C"), ("C", "A"), ("D", "C"), ("B", "D")] {
        let solved = find_cheapest_path(&flights, origin, destination);
        let enumerated = find_all_paths(&flights, origin, destination, 10);
        assert_eq!(solved.is_none(), enumerated.is_empty(), "{origin}->{destination}");
    }
}
