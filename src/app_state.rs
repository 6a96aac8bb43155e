// Application state shared by the odds and bet slip handlers

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::Event;
use crate::feed::OddsDatabase;
use crate::slip::BetSlip;

pub type SharedState = Arc<Mutex<AppState>>;

/// Open bet slip sessions kept at once; creation is refused beyond this
pub const MAX_SESSIONS: usize = 10_000;

pub struct AppState {
    /// Catalog served by the odds endpoints
    pub database: OddsDatabase,

    /// One bet slip per client session
    pub slips: HashMap<Uuid, BetSlip>,

    /// Cap on `slips`
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(database: OddsDatabase) -> Self {
        Self::with_session_limit(database, MAX_SESSIONS)
    }

    pub fn with_session_limit(database: OddsDatabase, max_sessions: usize) -> Self {
        info!(
            events = database.events.len(),
            live = database.live.len(),
            featured = database.featured.len(),
            "🎯 odds catalog ready"
        );

        Self {
            database,
            slips: HashMap::new(),
            max_sessions,
        }
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }

    pub fn event(&self, id: u64) -> Option<&Event> {
        self.database.event(id)
    }

    /// Open a new session with an empty slip; `None` when the session cap is reached
    pub fn create_slip(&mut self) -> Option<Uuid> {
        if self.slips.len() >= self.max_sessions {
            warn!(sessions = self.slips.len(), "session cap reached, refusing new bet slip");
            return None;
        }

        let id = Uuid::new_v4();
        self.slips.insert(id, BetSlip::new());
        info!(slip_id = %id, sessions = self.slips.len(), "🧾 bet slip opened");
        Some(id)
    }

    /// End a session and drop its slip. Returns whether it existed.
    pub fn close_slip(&mut self, id: &Uuid) -> bool {
        let closed = self.slips.remove(id).is_some();
        if closed {
            info!(slip_id = %id, sessions = self.slips.len(), "🧾 bet slip closed");
        }
        closed
    }

    pub fn slip(&self, id: &Uuid) -> Option<&BetSlip> {
        self.slips.get(id)
    }

    pub fn slip_mut(&mut self, id: &Uuid) -> Option<&mut BetSlip> {
        self.slips.get_mut(id)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::generate_with_seed;

    #[test]
    fn test_sessions_own_separate_slips() {
        let mut state = AppState::new(generate_with_seed(Some(1)));
        let first = state.create_slip().unwrap();
        let second = state.create_slip().unwrap();
        assert_ne!(first, second);

        let event = state.event(1).cloned().unwrap();
        let selection = crate::slip::Selection::from_event(&event, "1X2", "home").unwrap();
        state.slip_mut(&first).unwrap().add_selection(selection);

        assert_eq!(state.slip(&first).unwrap().len(), 1);
        assert!(state.slip(&second).unwrap().is_empty());
        assert!(state.slip(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_session_cap_and_close() {
        let mut state = AppState::with_session_limit(generate_with_seed(Some(1)), 2);
        let first = state.create_slip().unwrap();
        state.create_slip().unwrap();
        assert!(state.create_slip().is_none());
        assert_eq!(state.slips.len(), 2);

        assert!(state.close_slip(&first));
        assert!(!state.close_slip(&first));
        assert!(state.slip(&first).is_none());
        assert!(state.create_slip().is_some());
    }
}
