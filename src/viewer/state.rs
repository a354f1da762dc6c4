use tracing::{debug, warn};

use crate::errors::LumeraError;

/// Rendering states of the viewer. Populated and NotFound are the only
/// terminal states; every failure mode collapses into NotFound.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Populated(T),
    NotFound,
}

/// Proof that a load was started. Completing with a ticket from a superseded
/// load is a no-op, which keeps out-of-order responses from overwriting the
/// state of a newer identifier.
#[derive(Debug)]
pub struct LoadTicket {
    generation: u64,
}

/// Single-record viewer state machine: Idle -> Loading -> {Populated, NotFound}.
/// Re-entering with a new load always restarts at Loading; nothing is cached
/// across loads.
#[derive(Debug)]
pub struct Viewer<T> {
    generation: u64,
    state: ViewState<T>,
}

impl<T> Viewer<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Transition to Loading and issue a ticket for the new fetch. Any
    /// previously issued ticket is invalidated.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply a fetch result. Stale tickets are discarded without touching
    /// state; failures of any kind land in NotFound.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<T, LumeraError>) {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding stale fetch response"
            );
            return;
        }

        self.state = match result {
            Ok(record) => ViewState::Populated(record),
            Err(e) => {
                warn!(error = %e, "Report fetch failed");
                ViewState::NotFound
            }
        };
    }
}

impl<T> Default for Viewer<T> {
    fn default() -> Self {
        Self::new()
    }
}
