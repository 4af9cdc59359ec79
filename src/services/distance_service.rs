//! Distance Service
//!
//! Relative distances and flight-cost estimates on the abstract planning plane.
//! Destinations and origin cities both carry plane coordinates, not lat/lng, so
//! a plain Euclidean distance is all the scorer needs.
//!
//! ## Flight cost
//! `300 + 8 * distance`, truncated to whole currency units. Unknown origin
//! cities are placed at [`DEFAULT_ORIGIN_COORDS`].

use crate::models::destination::{Destination, Point};
use std::collections::HashMap;

pub const DEFAULT_ORIGIN_COORDS: Point = (65.0, 55.0);
/// Fixed point the season-aware strategy measures distance from.
pub const SEASON_REFERENCE_POINT: Point = (50.0, 50.0);

const FLIGHT_BASE_COST: f64 = 300.0;
const FLIGHT_COST_PER_UNIT: f64 = 8.0;
const DISTANCE_SCALING: f64 = 0.005;
const MIN_DISTANCE_SCORE: f64 = 0.1;

/// Supported origin cities in display order.
pub const ORIGIN_CITIES: [(&str, Point); 20] = [
    ("Karachi", (65.0, 55.0)),
    ("Lahore", (68.0, 60.0)),
    ("Islamabad", (68.0, 62.0)),
    ("Rawalpindi", (68.0, 62.0)),
    ("Faisalabad", (67.0, 59.0)),
    ("Multan", (66.0, 58.0)),
    ("Peshawar", (67.0, 63.0)),
    ("Quetta", (64.0, 58.0)),
    ("Sialkot", (69.0, 61.0)),
    ("Hyderabad", (65.0, 56.0)),
    ("Gujranwala", (68.0, 61.0)),
    ("Rahim Yar Khan", (66.0, 57.0)),
    ("Bahawalpur", (67.0, 57.0)),
    ("Sargodha", (67.0, 60.0)),
    ("Abbottabad", (69.0, 63.0)),
    ("Sukkur", (66.0, 56.0)),
    ("Larkana", (65.0, 57.0)),
    ("Sheikhupura", (68.0, 60.0)),
    ("Jhelum", (69.0, 62.0)),
    ("Gwadar", (62.0, 55.0)),
];

pub struct DistanceService;

impl DistanceService {
    pub fn euclidean_distance(start: Point, end: Point) -> f64 {
        ((end.0 - start.0).powi(2) + (end.1 - start.1).powi(2)).sqrt()
    }

    pub fn is_known_origin(origin_city: &str) -> bool {
        ORIGIN_CITIES.iter().any(|(city, _)| *city == origin_city)
    }

    /// Coordinates of a known origin city (exact name match), or the default.
    pub fn origin_coordinates(origin_city: &str) -> Point {
        ORIGIN_CITIES
            .iter()
            .find(|(city, _)| *city == origin_city)
            .map(|(_, coords)| *coords)
            .unwrap_or(DEFAULT_ORIGIN_COORDS)
    }

    pub fn origin_cities() -> Vec<&'static str> {
        ORIGIN_CITIES.iter().map(|(city, _)| *city).collect()
    }

    pub fn estimate_flight_cost(origin: Point, destination: Point) -> u32 {
        let distance = Self::euclidean_distance(origin, destination);
        (FLIGHT_BASE_COST + distance * FLIGHT_COST_PER_UNIT) as u32
    }

    /// Flight cost for every destination, keyed by destination id.
    pub fn estimate_flight_costs(
        destinations: &[Destination],
        origin_city: &str,
    ) -> HashMap<String, u32> {
        let origin = Self::origin_coordinates(origin_city);

        destinations
            .iter()
            .map(|destination| {
                (
                    destination.id.clone(),
                    Self::estimate_flight_cost(origin, destination.coordinates),
                )
            })
            .collect()
    }

    /// Closer is better, floored at 0.1.
    pub fn distance_score(distance: f64) -> f64 {
        (1.0 - distance * DISTANCE_SCALING).max(MIN_DISTANCE_SCORE)
    }
}
