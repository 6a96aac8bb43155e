// ============================================================================
// Catalog Module - Odds Feed Event Documents
// ============================================================================
//
// The odds feed publishes one document per sporting event. Participants and
// live score fields differ per sport (home/away teams vs. two players), and
// the markets attached to an event are a sport-specific nested tree:
//
//   football    1X2, doubleChance, overUnder ladder, correctScore grid, ...
//   tennis      matchWinner, setBetting, gameHandicap ladder, ...
//   basketball  moneyline, spread ladder, quarters, playerProps, ...
//
//   - markets: closed variant set for market nodes + the normalizer
//   - board:   board ordering and the last-good catalog held by a page
//
// ============================================================================

pub mod board;
pub mod markets;

pub use board::*;
pub use markets::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SPORT
// ============================================================================

/// Sport tag carried by every event; decides the primary market vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Tennis,
    Basketball,
    #[serde(other)]
    Other,
}

impl Sport {
    /// Market rendered on the event card itself
    pub fn primary_market(&self) -> Option<&'static str> {
        match self {
            Sport::Football => Some("1X2"),
            Sport::Tennis => Some("matchWinner"),
            Sport::Basketball => Some("moneyline"),
            Sport::Other => None,
        }
    }

    /// Number of outcomes in the primary market (three-way or two-way)
    pub fn primary_outcome_count(&self) -> usize {
        match self {
            Sport::Football => 3,
            Sport::Tennis | Sport::Basketball => 2,
            Sport::Other => 0,
        }
    }

    /// Whether `market_key` is this sport's primary market
    pub fn is_primary_market(&self, market_key: &str) -> bool {
        self.primary_market() == Some(market_key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Tennis => "tennis",
            Sport::Basketball => "basketball",
            Sport::Other => "other",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// EVENT
// ============================================================================

/// One event document from the odds feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Feed-assigned numeric id, unique across sports
    pub id: u64,

    pub sport: Sport,

    /// League (football, basketball)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,

    /// Tournament (tennis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player2: Option<String>,

    pub start_time: DateTime<Utc>,

    #[serde(default)]
    pub is_live: bool,

    // === LIVE SCORE FIELDS (only set while live) ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_set: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player1_sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player2_sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player1_games: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player2_games: Option<u32>,

    /// Market name → market tree
    #[serde(default)]
    pub markets: Markets,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u32>,
}

impl Event {
    /// Key used as the slip's event id, e.g. `football-12`
    pub fn event_key(&self) -> String {
        format!("{}-{}", self.sport, self.id)
    }

    /// The two competing parties, players for tennis and teams otherwise
    pub fn participants(&self) -> (&str, &str) {
        let (first, second) = match self.sport {
            Sport::Tennis => (&self.player1, &self.player2),
            _ => (&self.home_team, &self.away_team),
        };
        (
            first.as_deref().unwrap_or("TBD"),
            second.as_deref().unwrap_or("TBD"),
        )
    }

    /// Display string for the event, e.g. `Liverpool vs Arsenal`
    pub fn description(&self) -> String {
        let (first, second) = self.participants();
        format!("{} vs {}", first, second)
    }

    pub fn primary_market(&self) -> Option<&MarketNode> {
        self.sport
            .primary_market()
            .and_then(|key| self.markets.get(key))
    }

    /// Case-insensitive match against participants, league and tournament
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            &self.home_team,
            &self.away_team,
            &self.player1,
            &self.player2,
            &self.league,
            &self.tournament,
        ]
        .iter()
        .filter_map(|field| field.as_deref())
        .any(|value| value.to_lowercase().contains(&needle))
    }
}

// ============================================================================
// SPORT SUMMARY
// ============================================================================

/// Entry of the `/sports` listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportSummary {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub event_count: usize,
    pub icon: String,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn football_event(id: u64, home: f64, draw: f64, away: f64) -> Event {
        serde_json::from_value(json!({
            "id": id,
            "sport": "football",
            "league": "Premier League",
            "homeTeam": "Liverpool",
            "awayTeam": "Arsenal",
            "startTime": "2026-10-18T15:00:00Z",
            "isLive": false,
            "markets": {
                "1X2": { "home": home, "draw": draw, "away": away }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_event_deserializes_feed_document() {
        let event: Event = serde_json::from_value(json!({
            "id": 31,
            "sport": "tennis",
            "tournament": "Wimbledon",
            "player1": "Novak Djokovic",
            "player2": "Rafael Nadal",
            "startTime": "2026-10-18T12:30:00.000Z",
            "isLive": true,
            "currentSet": 2,
            "player1Sets": 1,
            "player2Sets": 0,
            "player1Games": 3,
            "player2Games": 4,
            "minute": null,
            "markets": {
                "matchWinner": { "player1": 1.85, "player2": 2.05 }
            }
        }))
        .unwrap();

        assert_eq!(event.sport, Sport::Tennis);
        assert_eq!(event.current_set, Some(2));
        assert_eq!(event.minute, None);
        assert_eq!(event.description(), "Novak Djokovic vs Rafael Nadal");
        assert_eq!(event.event_key(), "tennis-31");
        assert!(event.primary_market().is_some());
    }

    #[test]
    fn test_unknown_sport_maps_to_other() {
        let event: Event = serde_json::from_value(json!({
            "id": 1,
            "sport": "cricket",
            "startTime": "2026-10-18T12:30:00Z",
            "markets": {}
        }))
        .unwrap();

        assert_eq!(event.sport, Sport::Other);
        assert_eq!(event.sport.primary_market(), None);
        assert_eq!(event.description(), "TBD vs TBD");
    }

    #[test]
    fn test_matches_query() {
        let event = football_event(1, 1.9, 3.4, 3.8);
        assert!(event.matches_query("liver"));
        assert!(event.matches_query("PREMIER"));
        assert!(event.matches_query(""));
        assert!(!event.matches_query("Barcelona"));
    }
}
