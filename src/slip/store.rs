use serde::Serialize;
use tracing::debug;

use super::payout::{self, SlipQuote};
use super::selection::{OutcomeType, Selection};

/// The bet slip: an ordered set of selections, one per event
///
/// Owned by whoever renders odds for one user session; there is no global
/// instance. Display order is insertion order, and a replaced selection moves
/// to the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BetSlip {
    selections: Vec<Selection>,
}

impl BetSlip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selection, replacing any selection already held for its event.
    pub fn add_selection(&mut self, selection: Selection) {
        debug_assert!(selection.price() > 1.0);

        let before = self.selections.len();
        self.selections
            .retain(|existing| existing.event_id() != selection.event_id());

        if self.selections.len() != before {
            debug!(
                event_id = selection.event_id(),
                outcome = %selection.outcome_type(),
                "replaced selection for event"
            );
        } else {
            debug!(
                event_id = selection.event_id(),
                outcome = %selection.outcome_type(),
                price = selection.price(),
                "added selection"
            );
        }

        self.selections.push(selection);
    }

    /// Remove the selection with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op.
    pub fn remove_selection(&mut self, id: &str) -> bool {
        let before = self.selections.len();
        self.selections.retain(|selection| selection.id() != id);

        let removed = self.selections.len() != before;
        if removed {
            debug!(selection_id = id, "removed selection");
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!(count = self.selections.len(), "cleared bet slip");
        self.selections.clear();
    }

    /// Whether the slip holds `outcome_type` for `event_id` (button highlighting)
    pub fn is_selected(&self, event_id: &str, outcome_type: &OutcomeType) -> bool {
        self.selections.iter().any(|selection| {
            selection.event_id() == event_id && selection.outcome_type() == outcome_type
        })
    }

    /// Click on an odds button: deselect it if it is the current pick for its
    /// event, otherwise add it (replacing the event's previous pick).
    /// Returns whether the selection is on the slip afterwards.
    pub fn toggle_selection(&mut self, selection: Selection) -> bool {
        if self.is_selected(selection.event_id(), selection.outcome_type()) {
            self.remove_selection(selection.id());
            false
        } else {
            self.add_selection(selection);
            true
        }
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn selection_for_event(&self, event_id: &str) -> Option<&Selection> {
        self.selections
            .iter()
            .find(|selection| selection.event_id() == event_id)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn combined_odds(&self) -> f64 {
        payout::combined_odds(&self.selections)
    }

    /// Quote the slip for a stake typed by the user
    pub fn quote(&self, stake_text: &str) -> SlipQuote {
        payout::quote(stake_text, &self.selections)
    }
}

// ============================================================================
// TESTS
// ============================================================================
