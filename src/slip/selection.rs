use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{outcome_label, Event, Sport};
use crate::error::SlipError;

// ============================================================================
// OUTCOME TYPE
// ============================================================================

/// Outcome family of a selection
///
/// Primary markets use the plain family tags (`home`, `draw`, `away`,
/// `player1`, `player2`). Every other market is keyed `"{market}-{outcome}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutcomeType {
    Home,
    Draw,
    Away,
    Player1,
    Player2,
    Market { market: String, outcome: String },
}

impl OutcomeType {
    /// Outcome type for `outcome_key` of `market_key` on an event of `sport`
    pub fn from_keys(sport: Sport, market_key: &str, outcome_key: &str) -> Self {
        if sport.is_primary_market(market_key) {
            match outcome_key {
                "home" => return OutcomeType::Home,
                "draw" => return OutcomeType::Draw,
                "away" => return OutcomeType::Away,
                "player1" => return OutcomeType::Player1,
                "player2" => return OutcomeType::Player2,
                _ => {}
            }
        }

        OutcomeType::Market {
            market: market_key.to_string(),
            outcome: outcome_key.to_string(),
        }
    }
}

impl fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeType::Home => write!(f, "home"),
            OutcomeType::Draw => write!(f, "draw"),
            OutcomeType::Away => write!(f, "away"),
            OutcomeType::Player1 => write!(f, "player1"),
            OutcomeType::Player2 => write!(f, "player2"),
            OutcomeType::Market { market, outcome } => write!(f, "{}-{}", market, outcome),
        }
    }
}

impl FromStr for OutcomeType {
    type Err = SlipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(OutcomeType::Home),
            "draw" => Ok(OutcomeType::Draw),
            "away" => Ok(OutcomeType::Away),
            "player1" => Ok(OutcomeType::Player1),
            "player2" => Ok(OutcomeType::Player2),
            // Market keys are camelCase, so the first '-' ends the market name.
            // A bare-price market has the empty outcome key: "bare-".
            composite => match composite.split_once('-') {
                Some((market, outcome)) if !market.is_empty() => {
                    Ok(OutcomeType::Market {
                        market: market.to_string(),
                        outcome: outcome.to_string(),
                    })
                }
                _ => Err(SlipError::MissingField {
                    field: "outcome_type",
                }),
            },
        }
    }
}

impl Serialize for OutcomeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OutcomeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SELECTION
// ============================================================================

/// One proposed wager line on the slip
///
/// Fields are private: a `Selection` can only be obtained through
/// `Selection::new` / `Selection::from_event`, which guarantee `price > 1.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// `"{event_id}-{market}-{outcome}"`
    id: String,
    event_id: String,
    outcome_label: String,
    outcome_type: OutcomeType,
    /// Decimal odds, always > 1.0
    price: f64,
    event_description: String,
    sport: Sport,
}

/// Compose a selection id from its identity triple
pub fn selection_id(event_id: &str, market_key: &str, outcome_key: &str) -> String {
    format!("{}-{}-{}", event_id, market_key, outcome_key)
}

impl Selection {
    pub fn new(
        event_id: impl Into<String>,
        market_key: &str,
        outcome_key: &str,
        outcome_label: impl Into<String>,
        price: f64,
        event_description: impl Into<String>,
        sport: Sport,
    ) -> Result<Self, SlipError> {
        let event_id = event_id.into();
        if event_id.trim().is_empty() {
            return Err(SlipError::MissingField { field: "event_id" });
        }
        if market_key.is_empty() {
            return Err(SlipError::MissingField { field: "market_key" });
        }
        if !price.is_finite() || price <= 1.0 {
            return Err(SlipError::InvalidPrice { price });
        }

        Ok(Self {
            id: selection_id(&event_id, market_key, outcome_key),
            outcome_type: OutcomeType::from_keys(sport, market_key, outcome_key),
            event_id,
            outcome_label: outcome_label.into(),
            price,
            event_description: event_description.into(),
            sport,
        })
    }

    /// Build the selection behind an odds button: price, label and event
    /// description all come from the event document.
    pub fn from_event(event: &Event, market_key: &str, outcome_key: &str) -> Result<Self, SlipError> {
        let market = event
            .markets
            .get(market_key)
            .ok_or_else(|| SlipError::UnknownMarket {
                event_id: event.event_key(),
                market: market_key.to_string(),
            })?;

        let price = market
            .find_price(outcome_key)
            .ok_or_else(|| SlipError::UnknownOutcome {
                market: market_key.to_string(),
                outcome: outcome_key.to_string(),
            })?;

        Self::new(
            event.event_key(),
            market_key,
            outcome_key,
            outcome_label(event, market_key, outcome_key),
            price,
            event.description(),
            event.sport,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn outcome_label(&self) -> &str {
        &self.outcome_label
    }

    pub fn outcome_type(&self) -> &OutcomeType {
        &self.outcome_type
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn event_description(&self) -> &str {
        &self.event_description
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::football_event;

    #[test]
    fn test_new_composes_id_and_outcome_type() {
        let selection = Selection::new(
            "E1",
            "1X2",
            "home",
            "Liverpool",
            1.90,
            "Liverpool vs Arsenal",
            Sport::Football,
        )
        .unwrap();

        assert_eq!(selection.id(), "E1-1X2-home");
        assert_eq!(selection.outcome_type(), &OutcomeType::Home);
        assert_eq!(selection.price(), 1.90);
    }

    #[test]
    fn test_non_primary_market_gets_composite_type() {
        let selection = Selection::new(
            "E1",
            "correctScore",
            "2-1",
            "Score: 2-1",
            9.5,
            "Liverpool vs Arsenal",
            Sport::Football,
        )
        .unwrap();

        assert_eq!(selection.outcome_type().to_string(), "correctScore-2-1");
    }

    #[test]
    fn test_rejects_degenerate_prices() {
        for price in [1.0, 0.5, -2.0, f64::NAN, f64::INFINITY] {
            let result = Selection::new("E1", "1X2", "home", "x", price, "x", Sport::Football);
            assert!(matches!(result, Err(SlipError::InvalidPrice { .. })), "price {}", price);
        }
    }

    #[test]
    fn test_rejects_missing_event_id() {
        let result = Selection::new("  ", "1X2", "home", "x", 2.0, "x", Sport::Football);
        assert_eq!(result, Err(SlipError::MissingField { field: "event_id" }));
    }

    #[test]
    fn test_from_event() {
        let event = football_event(7, 1.90, 3.40, 3.80);
        let selection = Selection::from_event(&event, "1X2", "away").unwrap();

        assert_eq!(selection.event_id(), "football-7");
        assert_eq!(selection.id(), "football-7-1X2-away");
        assert_eq!(selection.outcome_label(), "Arsenal");
        assert_eq!(selection.event_description(), "Liverpool vs Arsenal");
        assert_eq!(selection.outcome_type(), &OutcomeType::Away);
        assert_eq!(selection.price(), 3.80);
    }

    #[test]
    fn test_from_event_unknown_market_and_outcome() {
        let event = football_event(7, 1.90, 3.40, 3.80);

        assert!(matches!(
            Selection::from_event(&event, "moneyline", "home"),
            Err(SlipError::UnknownMarket { .. })
        ));
        assert!(matches!(
            Selection::from_event(&event, "1X2", "player1"),
            Err(SlipError::UnknownOutcome { .. })
        ));
    }

    #[test]
    fn test_outcome_type_parse() {
        assert_eq!("draw".parse::<OutcomeType>().unwrap(), OutcomeType::Draw);
        assert_eq!(
            "asianHandicap--2.5.home".parse::<OutcomeType>().unwrap(),
            OutcomeType::Market {
                market: "asianHandicap".to_string(),
                outcome: "-2.5.home".to_string(),
            }
        );
        assert!("nonsense".parse::<OutcomeType>().is_err());
        assert!("-home".parse::<OutcomeType>().is_err());
    }

    #[test]
    fn test_bare_price_outcome_type_round_trips() {
        let selection =
            Selection::new("E1", "bare", "", "bare", 4.0, "A vs B", Sport::Football).unwrap();
        let outcome_type = selection.outcome_type().clone();
        assert_eq!(outcome_type.to_string(), "bare-");

        let json = serde_json::to_string(&outcome_type).unwrap();
        let back: OutcomeType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome_type);
    }

    #[test]
    fn test_from_event_three_way_line_market() {
        let mut event = football_event(7, 1.90, 3.40, 3.80);
        event.markets.insert(
            "handicap3way".to_string(),
            serde_json::from_value(serde_json::json!({
                "line": 0.0, "home": 2.5, "draw": 3.4, "away": 2.6
            }))
            .unwrap(),
        );

        let draw = Selection::from_event(&event, "handicap3way", "draw").unwrap();
        assert_eq!(draw.price(), 3.4);
        assert!(matches!(
            Selection::from_event(&event, "handicap3way", "line"),
            Err(SlipError::UnknownOutcome { .. })
        ));
    }
}
