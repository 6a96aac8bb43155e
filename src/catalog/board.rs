use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use tracing::{info, warn};

use super::{Event, Sport};
use crate::error::FeedError;
use crate::feed::OddsClient;

/// Order events for an odds board: live events first (furthest into the
/// match first), then upcoming events by kick-off.
pub fn sort_for_board(events: &mut [Event]) {
    events.sort_by_key(|event| {
        (
            !event.is_live,
            Reverse(if event.is_live { event.minute.unwrap_or(0) } else { 0 }),
            event.start_time,
        )
    });
}

/// The catalog an odds page is currently showing
///
/// A failed refresh leaves the previous catalog in place, so a flaky feed
/// never blanks the page.
#[derive(Debug, Clone, Default)]
pub struct OddsBoard {
    events: Vec<Event>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl OddsBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog with `events`, sorted for display
    pub fn replace(&mut self, mut events: Vec<Event>) {
        sort_for_board(&mut events);
        self.events = events;
        self.last_refreshed = Some(Utc::now());
    }

    /// Fetch a fresh catalog (all sports, or one). Returns the number of
    /// events now shown.
    pub async fn refresh(&mut self, client: &OddsClient, sport: Option<Sport>) -> Result<usize, FeedError> {
        let fetched = match sport {
            Some(sport) => client.events_by_sport(sport).await,
            None => client.all_events().await,
        };

        match fetched {
            Ok(events) => {
                self.replace(events);
                info!(count = self.events.len(), "odds board refreshed");
                Ok(self.events.len())
            }
            Err(e) => {
                warn!(error = %e, kept = self.events.len(), "odds refresh failed, keeping previous catalog");
                Err(e)
            }
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// First `limit` events in board order
    pub fn visible(&self, limit: usize) -> &[Event] {
        &self.events[..limit.min(self.events.len())]
    }

    pub fn live(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| event.is_live)
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::football_event;
    use chrono::Duration;

    fn at(id: u64, hours: i64, live_minute: Option<u32>) -> Event {
        let mut event = football_event(id, 1.9, 3.4, 3.8);
        event.start_time = event.start_time + Duration::hours(hours);
        event.is_live = live_minute.is_some();
        event.minute = live_minute;
        event
    }

    fn ids(events: &[Event]) -> Vec<u64> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_live_first_then_by_start_time() {
        let mut events = vec![
            at(1, 5, None),
            at(2, 1, None),
            at(3, -1, Some(20)),
            at(4, 3, None),
            at(5, -2, Some(75)),
        ];
        sort_for_board(&mut events);
        assert_eq!(ids(&events), vec![5, 3, 2, 4, 1]);
    }

    #[test]
    fn test_replace_sorts_and_stamps() {
        let mut board = OddsBoard::new();
        assert!(board.is_empty());
        assert!(board.last_refreshed().is_none());

        board.replace(vec![at(1, 2, None), at(2, 0, Some(10))]);

        assert_eq!(ids(board.events()), vec![2, 1]);
        assert_eq!(board.live().count(), 1);
        assert!(board.last_refreshed().is_some());
    }

    #[test]
    fn test_visible_clamps_to_catalog() {
        let mut board = OddsBoard::new();
        board.replace((1..=4).map(|id| at(id, id as i64, None)).collect());

        assert_eq!(board.visible(2).len(), 2);
        assert_eq!(board.visible(10).len(), 4);
        assert!(board.visible(0).is_empty());
    }
}
