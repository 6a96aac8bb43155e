use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Event;

/// Market name → market tree, as attached to an event
pub type Markets = BTreeMap<String, MarketNode>;

/// Separator used when nested market keys are flattened into one outcome key
pub const OUTCOME_PATH_SEPARATOR: char = '.';

/// Key holding the handicap or total line inside a market object; not a price
pub const LINE_KEY: &str = "line";

/// Market keys that always render as a two-button market
pub const TWO_SIDED_MARKET_KEYS: [&str; 2] = ["spread", "total"];

// ============================================================================
// MARKET NODES
// ============================================================================

/// A node of a market tree
///
/// The feed nests markets to arbitrary depth (handicap ladders, correct
/// score grids, per-quarter sub-markets). Every node is one of:
///
/// ```json
/// 1.95                                        // Price
/// { "line": -3.5, "home": 1.9, "away": 1.9 }  // TwoSided
/// { "over2.5": 1.8, "under2.5": 2.0 }         // Group
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarketNode {
    /// Decimal odds of a single wagerable outcome
    Price(f64),

    /// Structured line market with exactly two sides
    TwoSided(TwoSidedMarket),

    /// Named children (outcomes or sub-markets)
    Group(BTreeMap<String, MarketNode>),
}

/// Line markets carried as one object rather than a key/price map
///
/// Only exact shapes match: an object with any extra outcome (a three-way
/// handicap's `draw`) is a `Group` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TwoSidedMarket {
    Spread(SpreadLine),
    Total(TotalLine),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpreadLine {
    pub line: f64,
    pub home: f64,
    pub away: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TotalLine {
    pub line: f64,
    pub over: f64,
    pub under: f64,
}

impl TwoSidedMarket {
    pub fn line(&self) -> f64 {
        match self {
            TwoSidedMarket::Spread(spread) => spread.line,
            TwoSidedMarket::Total(total) => total.line,
        }
    }

    /// Both sides as `(outcome key, price)`
    pub fn sides(&self) -> [(&'static str, f64); 2] {
        match self {
            TwoSidedMarket::Spread(spread) => [("home", spread.home), ("away", spread.away)],
            TwoSidedMarket::Total(total) => [("over", total.over), ("under", total.under)],
        }
    }
}

impl MarketNode {
    /// Number of wagerable prices below this node. Structure nodes are not counted.
    pub fn leaf_count(&self) -> usize {
        match self {
            MarketNode::Price(_) => 1,
            MarketNode::TwoSided(_) => 2,
            MarketNode::Group(children) => children
                .iter()
                .filter(|(key, node)| !is_line_entry(key, node))
                .map(|(_, node)| node.leaf_count())
                .sum(),
        }
    }

    /// Look up a price by its flattened outcome key
    pub fn find_price(&self, outcome_key: &str) -> Option<f64> {
        flatten_market(self)
            .into_iter()
            .find(|(key, _)| key == outcome_key)
            .map(|(_, price)| price)
    }
}

// ============================================================================
// NORMALIZER
// ============================================================================

/// Flatten a market tree into `(outcome key, price)` pairs.
///
/// Nested keys are joined with `.`, so the asian handicap ladder yields
/// `"-2.5.home"`, `"-2.5.away"`, ... A bare price has a single unnamed outcome
/// (empty key).
pub fn flatten_market(node: &MarketNode) -> Vec<(String, f64)> {
    let mut outcomes = Vec::new();
    collect_outcomes(node, "", &mut outcomes);
    outcomes
}

fn collect_outcomes(node: &MarketNode, prefix: &str, out: &mut Vec<(String, f64)>) {
    match node {
        MarketNode::Price(price) => out.push((prefix.to_string(), *price)),
        MarketNode::TwoSided(market) => {
            for (side, price) in market.sides() {
                out.push((join_key(prefix, side), price));
            }
        }
        MarketNode::Group(children) => {
            for (key, child) in children.iter().filter(|(key, node)| !is_line_entry(key, node)) {
                collect_outcomes(child, &join_key(prefix, key), out);
            }
        }
    }
}

/// A `line` number inside a group is metadata of its outcomes
fn is_line_entry(key: &str, node: &MarketNode) -> bool {
    key == LINE_KEY && matches!(node, MarketNode::Price(_))
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, OUTCOME_PATH_SEPARATOR, key)
    }
}

/// Price of `outcome_key` in market `market_key`, if both exist
pub fn find_price(markets: &Markets, market_key: &str, outcome_key: &str) -> Option<f64> {
    markets
        .get(market_key)
        .and_then(|node| node.find_price(outcome_key))
}

/// Count the wagerable outcomes an event offers beyond its primary market.
///
/// `spread` and `total` markets count as 2 whatever their shape. The primary
/// market's outcomes are rendered on the card and are subtracted when that
/// market is present. Never negative.
pub fn count_secondary_outcomes(event: &Event) -> usize {
    let total: usize = event
        .markets
        .iter()
        .map(|(key, node)| {
            if TWO_SIDED_MARKET_KEYS.contains(&key.as_str()) {
                2
            } else {
                node.leaf_count()
            }
        })
        .sum();

    let primary = match event.sport.primary_market() {
        Some(key) if event.markets.contains_key(key) => event.sport.primary_outcome_count(),
        _ => 0,
    };

    total.saturating_sub(primary)
}

// ============================================================================
// OUTCOME LABELS
// ============================================================================

/// Human readable label for an outcome button / slip line
pub fn outcome_label(event: &Event, market_key: &str, outcome_key: &str) -> String {
    let (first, second) = event.participants();

    match (market_key, outcome_key) {
        ("1X2", "home") => event.home_team.clone().unwrap_or_else(|| "1".to_string()),
        ("1X2", "away") => event.away_team.clone().unwrap_or_else(|| "2".to_string()),
        ("1X2", _) => "Draw".to_string(),

        ("matchWinner", "player1") => event.player1.clone().unwrap_or_else(|| "P1".to_string()),
        ("matchWinner", _) => event.player2.clone().unwrap_or_else(|| "P2".to_string()),

        ("moneyline", "home") => event.home_team.clone().unwrap_or_else(|| "Home".to_string()),
        ("moneyline", _) => event.away_team.clone().unwrap_or_else(|| "Away".to_string()),

        ("btts" | "bothTeamsToScore", "yes") => "Both Teams Score - Yes".to_string(),
        ("btts" | "bothTeamsToScore", _) => "Both Teams Score - No".to_string(),

        ("doubleChance", "1X" | "homeOrDraw") => "1X (Home/Draw)".to_string(),
        ("doubleChance", "X2" | "awayOrDraw") => "X2 (Draw/Away)".to_string(),
        ("doubleChance", _) => "12 (Home/Away)".to_string(),

        ("spread", side) => spread_label(event, side, first, second),
        ("total", side) => total_label(event, side),

        ("correctScore", score) => format!("Score: {}", score),
        ("firstScorer", player) => format!("First Scorer: {}", player),

        (_, key) => key.to_string(),
    }
}

fn spread_label(event: &Event, side: &str, home: &str, away: &str) -> String {
    // Structured spread: { line, home, away }; the away line is mirrored
    if let Some(MarketNode::TwoSided(market)) = event.markets.get("spread") {
        let line = market.line();
        return match side {
            "home" => format!("{} {:+}", home, line),
            _ => format!("{} {:+}", away, -line),
        };
    }

    // Spread ladder: "-7.5.home"
    match side.rsplit_once(OUTCOME_PATH_SEPARATOR) {
        Some((line, "home")) => format!("{} {}", home, line),
        Some((line, "away")) => match line.parse::<f64>() {
            Ok(value) => format!("{} {:+}", away, -value),
            Err(_) => format!("{} {}", away, line),
        },
        _ => side.to_string(),
    }
}

fn total_label(event: &Event, side: &str) -> String {
    let line = match event.markets.get("total") {
        Some(MarketNode::TwoSided(market)) => market.line(),
        _ => return side.to_string(),
    };

    match side {
        "over" => format!("Over {}", line),
        "under" => format!("Under {}", line),
        _ => side.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::football_event;
    use serde_json::json;

    fn basketball_event(markets: serde_json::Value) -> Event {
        serde_json::from_value(json!({
            "id": 61,
            "sport": "basketball",
            "league": "NBA",
            "homeTeam": "Los Angeles Lakers",
            "awayTeam": "Boston Celtics",
            "startTime": "2026-10-18T19:00:00Z",
            "isLive": false,
            "markets": markets
        }))
        .unwrap()
    }

    #[test]
    fn test_node_shapes_deserialize() {
        let markets: Markets = serde_json::from_value(json!({
            "moneyline": { "home": 1.8, "away": 2.1 },
            "spread": { "line": -3.5, "home": 1.91, "away": 1.91 },
            "total": { "line": 215.5, "over": 1.87, "under": 1.95 },
            "quarters": { "q1": { "moneyline": { "home": 1.9, "away": 1.9 } } },
            "bare": 4
        }))
        .unwrap();

        assert!(matches!(markets["moneyline"], MarketNode::Group(_)));
        assert!(matches!(
            markets["spread"],
            MarketNode::TwoSided(TwoSidedMarket::Spread(_))
        ));
        assert!(matches!(
            markets["total"],
            MarketNode::TwoSided(TwoSidedMarket::Total(_))
        ));
        assert!(matches!(markets["quarters"], MarketNode::Group(_)));
        assert_eq!(markets["bare"], MarketNode::Price(4.0));
    }

    #[test]
    fn test_flatten_nested_market() {
        let node: MarketNode = serde_json::from_value(json!({
            "-2.5": { "home": 3.1, "away": 1.35 },
            "0": { "home": 1.9, "away": 1.9 }
        }))
        .unwrap();

        let outcomes = flatten_market(&node);
        assert_eq!(
            outcomes,
            vec![
                ("-2.5.away".to_string(), 1.35),
                ("-2.5.home".to_string(), 3.1),
                ("0.away".to_string(), 1.9),
                ("0.home".to_string(), 1.9),
            ]
        );
        assert_eq!(node.find_price("-2.5.home"), Some(3.1));
        assert_eq!(node.find_price("-2.5"), None);
    }

    #[test]
    fn test_flatten_two_sided() {
        let node = MarketNode::TwoSided(TwoSidedMarket::Total(TotalLine {
            line: 2.5,
            over: 1.8,
            under: 2.0,
        }));
        assert_eq!(
            flatten_market(&node),
            vec![("over".to_string(), 1.8), ("under".to_string(), 2.0)]
        );
    }

    #[test]
    fn test_primary_only_event_has_no_secondary_outcomes() {
        let event = football_event(1, 1.9, 3.4, 3.8);
        assert_eq!(count_secondary_outcomes(&event), 0);
    }

    #[test]
    fn test_secondary_count_counts_leaves_not_structure() {
        let event = basketball_event(json!({
            "moneyline": { "home": 1.8, "away": 2.1 },
            "quarters": {
                "q1": {
                    "moneyline": { "home": 1.9, "away": 1.9 },
                    "total": { "over52.5": 1.9, "under52.5": 1.9 }
                }
            }
        }));

        // 2 primary + 4 quarter leaves, minus the 2 primary outcomes
        assert_eq!(count_secondary_outcomes(&event), 4);
    }

    #[test]
    fn test_spread_and_total_count_two_whatever_the_shape() {
        let event = basketball_event(json!({
            "moneyline": { "home": 1.8, "away": 2.1 },
            "spread": {
                "-7.5": { "home": 2.1, "away": 1.75 },
                "+7.5": { "home": 1.75, "away": 2.1 }
            },
            "total": { "line": 215.5, "over": 1.87, "under": 1.95 }
        }));

        assert_eq!(count_secondary_outcomes(&event), 4);
    }

    #[test]
    fn test_secondary_count_floors_at_zero() {
        // Primary market present but short of its nominal three outcomes
        let event: Event = serde_json::from_value(json!({
            "id": 2,
            "sport": "football",
            "startTime": "2026-10-18T15:00:00Z",
            "markets": { "1X2": { "home": 1.5 } }
        }))
        .unwrap();

        assert_eq!(count_secondary_outcomes(&event), 0);
    }

    #[test]
    fn test_primary_not_subtracted_when_absent() {
        let event: Event = serde_json::from_value(json!({
            "id": 3,
            "sport": "tennis",
            "startTime": "2026-10-18T15:00:00Z",
            "markets": { "tieBreak": { "yes": 3.5, "no": 1.3 } }
        }))
        .unwrap();

        assert_eq!(count_secondary_outcomes(&event), 2);
    }

    #[test]
    fn test_outcome_labels() {
        let event = basketball_event(json!({
            "moneyline": { "home": 1.8, "away": 2.1 },
            "spread": { "line": -3.5, "home": 1.91, "away": 1.91 },
            "total": { "line": 215.5, "over": 1.87, "under": 1.95 }
        }));

        assert_eq!(outcome_label(&event, "moneyline", "home"), "Los Angeles Lakers");
        assert_eq!(outcome_label(&event, "spread", "home"), "Los Angeles Lakers -3.5");
        assert_eq!(outcome_label(&event, "spread", "away"), "Boston Celtics +3.5");
        assert_eq!(outcome_label(&event, "total", "under"), "Under 215.5");
        assert_eq!(outcome_label(&event, "winningMargin", "home1-5"), "home1-5");

        let football = football_event(1, 1.9, 3.4, 3.8);
        assert_eq!(outcome_label(&football, "1X2", "draw"), "Draw");
        assert_eq!(outcome_label(&football, "correctScore", "2-1"), "Score: 2-1");
    }

    #[test]
    fn test_spread_ladder_label() {
        let event = basketball_event(json!({
            "spread": { "-7.5": { "home": 2.1, "away": 1.75 } }
        }));
        assert_eq!(outcome_label(&event, "spread", "-7.5.home"), "Los Angeles Lakers -7.5");
    }

    #[test]
    fn test_three_way_line_market_keeps_every_outcome() {
        let event = basketball_event(json!({
            "handicap3way": { "line": 0.0, "home": 2.5, "draw": 3.4, "away": 2.6 }
        }));
        let node = &event.markets["handicap3way"];

        assert!(matches!(node, MarketNode::Group(_)));
        assert_eq!(
            flatten_market(node),
            vec![
                ("away".to_string(), 2.6),
                ("draw".to_string(), 3.4),
                ("home".to_string(), 2.5),
            ]
        );
        assert_eq!(node.find_price("line"), None);
        assert_eq!(count_secondary_outcomes(&event), 3);
    }
}
