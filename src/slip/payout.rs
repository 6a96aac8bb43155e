use rust_decimal::prelude::*;
use serde::Serialize;

use super::selection::Selection;

/// Decimal places shown for odds, stakes and payouts
pub const DISPLAY_DECIMALS: u32 = 2;

/// Largest stake or payout a quote can show at two decimals
pub const MAX_DISPLAY_VALUE: f64 = 1e26;

// ============================================================================
// AGGREGATION
// ============================================================================

/// Product of all prices; 1.0 (no multiplier) for an empty slip
pub fn combined_odds(selections: &[Selection]) -> f64 {
    selections.iter().map(Selection::price).product()
}

/// `stake * combined_odds`, kept at full precision
pub fn potential_payout(stake: f64, selections: &[Selection]) -> f64 {
    stake * combined_odds(selections)
}

/// Parse the stake text box. Empty, non-numeric, non-finite, negative or
/// undisplayably large input is a stake of 0 so a stray keystroke never
/// breaks the slip.
pub fn parse_stake(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(stake) if stake.is_finite() && stake > 0.0 && stake <= MAX_DISPLAY_VALUE => stake,
        _ => 0.0,
    }
}

// ============================================================================
// QUOTE
// ============================================================================

/// What the slip footer shows, rounded for display only
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlipQuote {
    pub stake: Decimal,
    pub combined_odds: Decimal,
    pub potential_payout: Decimal,
    pub selection_count: usize,
    /// False for an empty slip or a zero stake; the payout is then zero
    pub betting_enabled: bool,
}

/// Quote `selections` for the stake text typed by the user.
///
/// All arithmetic runs on the unrounded prices; rounding to two decimals
/// happens once, here, so long accumulators do not drift.
pub fn quote(stake_text: &str, selections: &[Selection]) -> SlipQuote {
    let stake = parse_stake(stake_text);
    let odds = combined_odds(selections);

    // No selections means no active bet, not a stake-for-stake payout
    let payout = if selections.is_empty() {
        0.0
    } else {
        potential_payout(stake, selections)
    };
    let showable = odds <= MAX_DISPLAY_VALUE && payout <= MAX_DISPLAY_VALUE;

    SlipQuote {
        stake: to_display(stake),
        combined_odds: to_display(odds.min(MAX_DISPLAY_VALUE)),
        potential_payout: to_display(if showable { payout } else { 0.0 }),
        selection_count: selections.len(),
        betting_enabled: !selections.is_empty() && stake > 0.0 && showable,
    }
}

/// Round a full-precision value for display, always with two decimals
pub fn to_display(value: f64) -> Decimal {
    let mut display = Decimal::from_f64_retain(value)
        .unwrap_or(if value.is_sign_negative() { Decimal::MIN } else { Decimal::MAX })
        .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    display.rescale(DISPLAY_DECIMALS);
    display
}

/// Odds as shown on a button, e.g. `3.80`
pub fn format_odds(price: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS as usize, price)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Sport;
    use crate::slip::BetSlip;
    use rust_decimal_macros::dec;

    fn leg(event_id: &str, price: f64) -> Selection {
        Selection::new(event_id, "1X2", "home", "Home", price, "A vs B", Sport::Football).unwrap()
    }

    #[test]
    fn test_empty_slip_identity() {
        assert_eq!(combined_odds(&[]), 1.0);

        let quote = quote("50", &[]);
        assert_eq!(quote.combined_odds, dec!(1.00));
        assert_eq!(quote.potential_payout, Decimal::ZERO);
        assert!(!quote.betting_enabled);
    }

    #[test]
    fn test_multiplicative_and_commutative() {
        let a = leg("E1", 1.9);
        let b = leg("E2", 2.35);
        let c = leg("E3", 1.45);

        assert_eq!(combined_odds(&[a.clone(), b.clone()]), 1.9 * 2.35);

        let forward = combined_odds(&[a.clone(), b.clone(), c.clone()]);
        let backward = combined_odds(&[c, b, a]);
        assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn test_scenario_two_events() {
        let mut slip = BetSlip::new();
        slip.add_selection(
            Selection::new("E1", "1X2", "home", "Home", 1.90, "A vs B", Sport::Football).unwrap(),
        );
        slip.add_selection(
            Selection::new("E1", "1X2", "away", "Away", 3.80, "A vs B", Sport::Football).unwrap(),
        );
        assert_eq!(slip.quote("").combined_odds, dec!(3.80));

        slip.add_selection(leg("E2", 2.00));
        let quote = slip.quote("25");

        assert_eq!(quote.combined_odds, dec!(7.60));
        assert_eq!(quote.potential_payout, dec!(190.00));
        assert_eq!(quote.stake, dec!(25));
        assert_eq!(quote.selection_count, 2);
        assert!(quote.betting_enabled);
    }

    #[test]
    fn test_payout_strictly_increasing_in_stake() {
        let legs = [leg("E1", 1.9), leg("E2", 2.05)];
        let mut previous = 0.0;
        for stake in [0.01, 0.5, 1.0, 10.0, 25.0, 99.99, 1000.0] {
            let payout = potential_payout(stake, &legs);
            assert!(payout > previous, "stake {}", stake);
            previous = payout;
        }
    }

    #[test]
    fn test_parse_stake_coerces_bad_input_to_zero() {
        assert_eq!(parse_stake("25"), 25.0);
        assert_eq!(parse_stake(" 12.5 "), 12.5);
        assert_eq!(parse_stake(""), 0.0);
        assert_eq!(parse_stake("abc"), 0.0);
        assert_eq!(parse_stake("-10"), 0.0);
        assert_eq!(parse_stake("NaN"), 0.0);
        assert_eq!(parse_stake("inf"), 0.0);
        assert_eq!(parse_stake("1e300"), 0.0);

        let quote = quote("oops", &[leg("E1", 2.0)]);
        assert_eq!(quote.potential_payout, Decimal::ZERO);
        assert!(!quote.betting_enabled);
    }

    #[test]
    fn test_huge_stake_is_not_quoted() {
        let quote = quote("1e300", &[leg("E1", 2.0)]);
        assert_eq!(quote.stake, Decimal::ZERO);
        assert_eq!(quote.potential_payout, Decimal::ZERO);
        assert!(!quote.betting_enabled);
    }

    #[test]
    fn test_payout_beyond_display_range_disables_betting() {
        let legs: Vec<_> = (0..4).map(|i| leg(&format!("E{}", i), 1e6)).collect();
        let quote = quote("1e5", &legs);
        assert_eq!(quote.potential_payout, Decimal::ZERO);
        assert!(!quote.betting_enabled);
    }

    #[test]
    fn test_no_premature_rounding_across_legs() {
        // Rounding after every leg would give 5.60; the exact product is 5.6102...
        let legs: Vec<_> = (0..6).map(|i| leg(&format!("E{}", i), 1.333)).collect();
        assert_eq!(quote("1", &legs).combined_odds, dec!(5.61));
    }

    #[test]
    fn test_display_always_two_decimals() {
        assert_eq!(to_display(1.0).to_string(), "1.00");
        assert_eq!(to_display(0.0).to_string(), "0.00");
        assert_eq!(to_display(2.0 * 3.8).to_string(), "7.60");
    }

    #[test]
    fn test_format_odds() {
        assert_eq!(format_odds(3.8), "3.80");
        assert_eq!(format_odds(1.9), "1.90");
        assert_eq!(format_odds(12.0), "12.00");
    }
}
