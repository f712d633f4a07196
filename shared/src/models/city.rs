//! Fixed list of cities offered by the widget's picker

use serde::Serialize;

/// A selectable city
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

pub static CITIES: [City; 5] = [
    City {
        id: "new-york",
        name: "New York",
        lat: 40.7128,
        lon: -74.006,
    },
    City {
        id: "london",
        name: "London",
        lat: 51.5074,
        lon: -0.1278,
    },
    City {
        id: "tokyo",
        name: "Tokyo",
        lat: 35.6762,
        lon: 139.6503,
    },
    City {
        id: "sydney",
        name: "Sydney",
        lat: -33.8688,
        lon: 151.2093,
    },
    City {
        id: "sao-paulo",
        name: "São Paulo",
        lat: -23.5505,
        lon: -46.6333,
    },
];

/// Look up a city by id
pub fn find_city(id: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.id == id)
}

/// City selected when nothing else has been chosen
pub fn default_city() -> &'static City {
    &CITIES[0]
}
