//! Tests for the statement-minimum projection variant
//!
//! These tests verify:
//! - Payments sized from statement balances, capped at card balances
//! - The early-stop contract: either the run ends with checking negative,
//!   or it covers the full horizon with checking never negative
//! - Configured fixed-payment amounts are ignored in this mode

use jiff::civil::date;

use crate::config::ProjectionRules;
use crate::date_math;
use crate::model::{CardId, CardSet};
use crate::simulation::{simulate, simulate_minimum_payments};

#[test]
fn test_payments_sized_from_statements_and_capped() {
    let rules = ProjectionRules {
        checking_balance: 10_000.0,
        card_balances: CardSet::new(800.0, 300.0, 0.0),
        statement_balances: CardSet::new(600.0, 500.0, 0.0),
        start_date: Some(date(2026, 9, 1)),
        ..Default::default()
    };

    let projection = simulate_minimum_payments(&rules, date(2026, 9, 1), 2);

    // Card A (due 3rd): statement 600 against balance 800
    let sep_3 = projection.iter().find(|d| d.date == date(2026, 9, 3)).unwrap();
    assert_eq!(sep_3.card_payments[CardId::A], 600.0);
    assert_eq!(sep_3.cards[CardId::A], 200.0);

    // Card B (due 8th): statement 500 capped at the 300 balance
    let sep_8 = projection.iter().find(|d| d.date == date(2026, 9, 8)).unwrap();
    assert_eq!(sep_8.card_payments[CardId::B], 300.0);
    assert_eq!(sep_8.cards[CardId::B], 0.0);

    // Next month card A pays down the 200 remainder, card B stays quiet
    let oct_3 = projection.iter().find(|d| d.date == date(2026, 10, 3)).unwrap();
    assert_eq!(oct_3.card_payments[CardId::A], 200.0);
    assert_eq!(oct_3.cards[CardId::A], 0.0);
    let oct_8 = projection.iter().find(|d| d.date == date(2026, 10, 8)).unwrap();
    assert_eq!(oct_8.card_payments[CardId::B], 0.0);
}

#[test]
fn test_stops_with_annotation_when_cash_exhausted() {
    let rules = ProjectionRules {
        checking_balance: 500.0,
        card_balances: CardSet::new(1_000.0, 0.0, 0.0),
        statement_balances: CardSet::new(600.0, 0.0, 0.0),
        start_date: Some(date(2026, 9, 1)),
        ..Default::default()
    };

    let projection = simulate_minimum_payments(&rules, date(2026, 9, 1), 12);

    // The 600 statement payment on the 3rd overdraws the 500 balance and
    // ends the run immediately
    assert_eq!(projection.len(), 3);
    let last = projection.final_record().unwrap();
    assert_eq!(last.date, date(2026, 9, 3));
    assert_eq!(last.checking, -100.0);
    assert!(last.notes.contains("(stopped: cash exhausted)"), "notes: {}", last.notes);
    assert!(projection.ends_exhausted());
}

#[test]
fn test_full_horizon_when_cash_holds() {
    let rules = ProjectionRules {
        checking_balance: 5_000.0,
        paycheck_amount: 2_000.0,
        payday_reference: date(2026, 8, 20),
        card_balances: CardSet::new(100.0, 0.0, 0.0),
        statement_balances: CardSet::new(100.0, 0.0, 0.0),
        start_date: Some(date(2026, 9, 1)),
        ..Default::default()
    };

    let projection = simulate_minimum_payments(&rules, date(2026, 9, 1), 3);

    let expected_len = date_math::days_between(date(2026, 9, 1), date(2026, 12, 1)) + 1;
    assert_eq!(projection.len(), expected_len as usize);
    assert!(
        projection.iter().all(|day| day.checking >= 0.0),
        "a full-horizon run must never hold a negative checking day"
    );
    assert!(!projection.ends_exhausted());
}

#[test]
fn test_truncation_implies_negative_final_checking() {
    // The contract in one assertion: truncated-but-solvent results must not
    // exist, whatever the inputs
    let rules = ProjectionRules {
        checking_balance: 2_100.0,
        paycheck_amount: 900.0,
        payday_reference: date(2026, 8, 20),
        rent: 1_400.0,
        rent_day: 23,
        card_balances: CardSet::new(2_500.0, 900.0, 0.0),
        statement_balances: CardSet::new(700.0, 450.0, 0.0),
        start_date: Some(date(2026, 9, 1)),
        ..Default::default()
    };

    let horizon = 12;
    let projection = simulate_minimum_payments(&rules, date(2026, 9, 1), horizon);
    let full_len =
        date_math::days_between(date(2026, 9, 1), date(2027, 9, 1)) + 1;

    if projection.len() < full_len as usize {
        assert!(projection.ends_exhausted(), "truncated run must end negative");
    } else {
        assert!(projection.iter().all(|day| day.checking >= 0.0));
    }
}

#[test]
fn test_configured_payment_amounts_ignored() {
    let rules = ProjectionRules {
        checking_balance: 2_000.0,
        card_balances: CardSet::new(100.0, 0.0, 0.0),
        statement_balances: CardSet::new(50.0, 0.0, 0.0),
        start_date: Some(date(2026, 9, 1)),
        ..Default::default()
    };

    // Fixed mode: payment amounts default to zero, so nothing fires
    let fixed = simulate(&rules, date(2026, 9, 1), 1);
    assert!(fixed.iter().all(|day| day.card_payments.total() == 0.0));

    // Minimum mode pays the statement regardless
    let minimum = simulate_minimum_payments(&rules, date(2026, 9, 1), 1);
    let sep_3 = minimum.iter().find(|d| d.date == date(2026, 9, 3)).unwrap();
    assert_eq!(sep_3.card_payments[CardId::A], 50.0);
}
