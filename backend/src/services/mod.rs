//! Business logic services for the weather proxy

pub mod weather;

pub use weather::WeatherService;
