//! Request state of the widget
//!
//! Each trigger (initial load, city change, refresh) issues a [`FetchTicket`]
//! stamped with a new generation. Only the ticket from the latest trigger may
//! resolve the state; anything older is discarded when it arrives.

use shared::{default_city, City, WeatherReading};

/// Lifecycle of the current lookup
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success(WeatherReading),
    Error(String),
}

impl FetchStatus {
    pub fn reading(&self) -> Option<&WeatherReading> {
        match self {
            FetchStatus::Success(reading) => Some(reading),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }
}

/// Handle for one in-flight lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    generation: u64,
    city: &'static City,
    nonce: u64,
}

impl FetchTicket {
    pub fn city(&self) -> &'static City {
        self.city
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    pub city: &'static City,
    pub nonce: u64,
    pub status: FetchStatus,
    generation: u64,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(default_city())
    }
}

impl WidgetState {
    pub fn new(city: &'static City) -> Self {
        Self {
            city,
            nonce: 0,
            status: FetchStatus::Idle,
            generation: 0,
        }
    }

    /// Start a lookup for the current city and nonce, superseding any other
    pub fn issue(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = FetchStatus::Loading;

        FetchTicket {
            generation: self.generation,
            city: self.city,
            nonce: self.nonce,
        }
    }

    /// Switch city and start a lookup for it
    pub fn select(&mut self, city: &'static City) -> FetchTicket {
        self.city = city;
        self.issue()
    }

    /// Bump the nonce and start a lookup for the same city
    pub fn bump_nonce(&mut self) -> FetchTicket {
        self.nonce += 1;
        self.issue()
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of `ticket`. Returns `false` and leaves the state
    /// untouched when a newer ticket has been issued since.
    pub fn resolve(&mut self, ticket: &FetchTicket, outcome: Result<WeatherReading, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.status = match outcome {
            Ok(reading) => FetchStatus::Success(reading),
            Err(message) => FetchStatus::Error(message),
        };
        true
    }
}
