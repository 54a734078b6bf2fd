//! Quicksort over flights and connections.
//!
//! Both the flight listing and the ranking of enumerated connections go
//! through [`quick_sort_by`], a partition-exchange sort using the last
//! element of each range as the pivot. The sort is not stable: the relative
//! order of equal keys is whatever the partition scheme produces, which is a
//! deterministic function of the input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::flight::{Connection, Flight};

/// Ordering applied to a flight listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Airline,
}

impl SortKey {
    fn compare(self, a: &Flight, b: &Flight) -> Ordering {
        match self {
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Duration => a.duration.total_cmp(&b.duration),
            SortKey::Airline => a.airline.cmp(&b.airline),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SortKey::Price => "price",
            SortKey::Duration => "duration",
            SortKey::Airline => "airline",
        };
        f.write_str(value)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "duration" => Ok(SortKey::Duration),
            "airline" | "carrier" => Ok(SortKey::Airline),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

/// Ordering applied to enumerated connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankKey {
    #[default]
    Price,
    Duration,
    Transfers,
}

impl RankKey {
    fn compare(self, a: &Connection, b: &Connection) -> Ordering {
        match self {
            RankKey::Price => a.total_price.total_cmp(&b.total_price),
            RankKey::Duration => a.total_duration.total_cmp(&b.total_duration),
            RankKey::Transfers => a.transfers.cmp(&b.transfers),
        }
    }
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RankKey::Price => "price",
            RankKey::Duration => "duration",
            RankKey::Transfers => "transfers",
        };
        f.write_str(value)
    }
}

impl FromStr for RankKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "price" => Ok(RankKey::Price),
            "duration" => Ok(RankKey::Duration),
            "transfers" | "hops" => Ok(RankKey::Transfers),
            other => Err(format!("unknown rank key '{other}'")),
        }
    }
}

/// Return a copy of `flights` ordered ascending by `key`. The input is left
/// untouched.
pub fn sort_flights(flights: &[Flight], key: SortKey) -> Vec<Flight> {
    let mut sorted = flights.to_vec();
    quick_sort_by(&mut sorted, |a, b| key.compare(a, b));
    sorted
}

/// Order connections ascending by `key` in place.
pub fn rank_connections(connections: &mut [Connection], key: RankKey) {
    quick_sort_by(connections, |a, b| key.compare(a, b));
}

/// In-place quicksort with a last-element pivot.
///
/// Average O(n log n), worst case O(n²) comparisons (for example when every
/// key is equal). Only the smaller partition is sorted recursively, so stack
/// depth stays logarithmic regardless of the input.
pub fn quick_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_range(items, &mut compare);
}

fn quick_sort_range<T, F>(mut items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let pivot = partition(items, compare);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort_range(left, compare);
            items = right;
        } else {
            quick_sort_range(right, compare);
            items = left;
        }
    }
}

/// Lomuto partition: everything comparing `<=` the pivot moves left of it.
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = items.len() - 1;
    let mut store = 0;
    for index in 0..last {
        if compare(&items[index], &items[last]) != Ordering::Greater {
            items.swap(store, index);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}
