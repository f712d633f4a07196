//! City picker + current-conditions widget

use parking_lot::Mutex;
use shared::{find_city, ForecastQuery};
use thiserror::Error;

use crate::card::WeatherCard;
use crate::source::WeatherSource;
use crate::state::{FetchTicket, WidgetState};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Unknown city: {0}")]
    UnknownCity(String),
}

/// Drives lookups for the selected city and keeps only the latest result.
///
/// Triggers return a [`FetchTicket`]; pass it to [`WeatherWidget::load`] to run
/// the lookup. Results for superseded tickets are dropped on arrival.
pub struct WeatherWidget<S> {
    source: S,
    state: Mutex<WidgetState>,
}

impl<S: WeatherSource> WeatherWidget<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(WidgetState::default()),
        }
    }

    /// Ticket for the current city and nonce (initial load)
    pub fn begin(&self) -> FetchTicket {
        self.state.lock().issue()
    }

    pub fn select_city(&self, id: &str) -> Result<FetchTicket, WidgetError> {
        let city = find_city(id).ok_or_else(|| WidgetError::UnknownCity(id.to_string()))?;
        Ok(self.state.lock().select(city))
    }

    /// Force a re-fetch of the selected city
    pub fn refresh(&self) -> FetchTicket {
        self.state.lock().bump_nonce()
    }

    /// Run the lookup for `ticket`. Returns whether its result was applied.
    pub async fn load(&self, ticket: FetchTicket) -> bool {
        let query = ForecastQuery::for_city(ticket.city());
        let outcome = self
            .source
            .fetch(&query)
            .await
            .map_err(|e| e.to_string());

        self.apply(&ticket, outcome)
    }

    /// Resolve `ticket` with an already-fetched outcome
    pub fn apply(
        &self,
        ticket: &FetchTicket,
        outcome: Result<shared::WeatherReading, String>,
    ) -> bool {
        if let Err(message) = &outcome {
            tracing::warn!(city = ticket.city().id, "Weather lookup failed: {}", message);
        }

        let applied = self.state.lock().resolve(ticket, outcome);
        if !applied {
            tracing::debug!(
                city = ticket.city().id,
                generation = ticket.generation(),
                "Discarding superseded weather result"
            );
        }
        applied
    }

    pub fn snapshot(&self) -> WidgetState {
        self.state.lock().clone()
    }

    /// Card for the current reading, if the last lookup succeeded
    pub fn card(&self) -> Option<WeatherCard> {
        let state = self.state.lock();
        state
            .status
            .reading()
            .map(|reading| WeatherCard::new(state.city, reading))
    }
}
