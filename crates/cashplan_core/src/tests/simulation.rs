//! Tests for the fixed-payment projection variant
//!
//! These tests verify:
//! - Window length and shape (explicit vs implicit starts, partial months)
//! - Biweekly payday cadence inside a projection
//! - Rent, weekly spending, and payment-capping behavior
//! - Pending-charge posting and negative-checking annotation

use jiff::civil::{Weekday, date};

use crate::config::ProjectionRules;
use crate::date_math;
use crate::model::{CardId, EventKind};
use crate::simulation::simulate;

/// Rules with no cards, no pending, and a biweekly Thursday paycheck.
///
/// 2026-08-20 is a Thursday two weeks before the 2026-09-01 window start
/// used throughout these tests; September 2026 starts on a Tuesday and has
/// 30 days.
fn cash_only_rules() -> ProjectionRules {
    ProjectionRules {
        checking_balance: 1_000.0,
        paycheck_amount: 1_900.0,
        payday_reference: date(2026, 8, 20),
        rent: 1_760.0,
        rent_day: 23,
        weekly_spending: 200.0,
        start_date: Some(date(2026, 9, 1)),
        ..Default::default()
    }
}

#[test]
fn test_window_length_matches_calendar_days() {
    let today = date(2026, 9, 12);

    // One month over an explicit start runs through the end of that month
    let rules = cash_only_rules();
    let projection = simulate(&rules, today, 1);
    assert_eq!(projection.len(), 30);
    assert_eq!(projection.days[0].date, date(2026, 9, 1));
    assert_eq!(projection.final_record().unwrap().date, date(2026, 9, 30));

    // A mid-month explicit start produces a partial first month
    let rules = rules.with_start_date(date(2026, 9, 12));
    let projection = simulate(&rules, today, 1);
    assert_eq!(projection.len(), 19);
    assert_eq!(projection.final_record().unwrap().date, date(2026, 9, 30));

    // No explicit start: one month means a flat 31-day window from today
    let mut rules = cash_only_rules();
    rules.start_date = None;
    let projection = simulate(&rules, today, 1);
    assert_eq!(projection.len(), 31);
    assert_eq!(projection.days[0].date, today);

    // Longer horizons add calendar months, endpoints inclusive
    let rules = cash_only_rules();
    let projection = simulate(&rules, today, 4);
    let expected_end = date(2027, 1, 1);
    let expected_len = date_math::days_between(date(2026, 9, 1), expected_end) + 1;
    assert_eq!(projection.len(), expected_len as usize);
    assert_eq!(projection.final_record().unwrap().date, expected_end);
}

#[test]
fn test_paydays_every_fourteen_days_on_reference_weekday() {
    let rules = cash_only_rules();
    let projection = simulate(&rules, date(2026, 9, 1), 12);

    let paydays: Vec<_> = projection
        .iter()
        .filter(|day| day.paycheck > 0.0)
        .map(|day| day.date)
        .collect();

    assert!(!paydays.is_empty(), "expected paydays over a year");
    assert_eq!(paydays[0], date(2026, 9, 3));
    for day in &paydays {
        assert_eq!(day.weekday(), Weekday::Thursday, "payday {day} not a Thursday");
    }
    for pair in paydays.windows(2) {
        assert_eq!(
            date_math::days_between(pair[0], pair[1]),
            14,
            "paydays {} and {} not 14 days apart",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_one_month_rent_and_spending_scenario() {
    let rules = cash_only_rules();
    let projection = simulate(&rules, date(2026, 9, 1), 1);

    // Exactly one rent debit, on the 23rd
    let rent_days: Vec<_> = projection.iter().filter(|day| day.rent > 0.0).collect();
    assert_eq!(rent_days.len(), 1);
    assert_eq!(rent_days[0].date, date(2026, 9, 23));
    assert_eq!(rent_days[0].rent, 1_760.0);

    // Spending fires on every Thursday of the month, 200 each, to the
    // designated card rather than checking
    let spending_days: Vec<_> = projection.iter().filter(|day| day.spending > 0.0).collect();
    let expected = [date(2026, 9, 3), date(2026, 9, 10), date(2026, 9, 17), date(2026, 9, 24)];
    assert_eq!(
        spending_days.iter().map(|day| day.date).collect::<Vec<_>>(),
        expected
    );
    for day in &spending_days {
        assert_eq!(day.spending, 200.0);
    }
    let last = projection.final_record().unwrap();
    assert_eq!(last.cards[CardId::C], 4.0 * 200.0);
    assert_eq!(last.cards[CardId::A], 0.0);
    assert_eq!(last.cards[CardId::B], 0.0);

    // Two paydays (3rd, 17th); checking ends at start + paychecks - rent,
    // untouched by card-bound spending
    let paycheck_total: f64 = projection.iter().map(|day| day.paycheck).sum();
    assert_eq!(paycheck_total, 2.0 * 1_900.0);
    assert_eq!(last.checking, 1_000.0 + 2.0 * 1_900.0 - 1_760.0);
}

#[test]
fn test_spending_events_spaced_at_least_seven_days() {
    let rules = cash_only_rules();
    let projection = simulate(&rules, date(2026, 9, 1), 6);

    let spending_days: Vec<_> = projection
        .iter()
        .filter(|day| day.spending > 0.0)
        .map(|day| day.date)
        .collect();

    assert!(spending_days.len() > 20, "expected weekly spending over 6 months");
    for pair in spending_days.windows(2) {
        assert!(
            date_math::days_between(pair[0], pair[1]) >= 7,
            "spending on {} and {} closer than 7 days",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_card_payment_capped_at_balance() {
    let mut rules = ProjectionRules {
        checking_balance: 5_000.0,
        card_balances: crate::model::CardSet::new(500.0, 0.0, 0.0),
        start_date: Some(date(2026, 9, 1)),
        ..Default::default()
    };
    rules.card_plans[CardId::A].payment_amount = 1_000.0;

    let projection = simulate(&rules, date(2026, 9, 1), 4);

    // Due-day 3: the payment is capped at the balance and zeroes the card
    let due_day = projection
        .iter()
        .find(|day| day.date == date(2026, 9, 3))
        .unwrap();
    assert_eq!(due_day.card_payments[CardId::A], 500.0);
    assert_eq!(due_day.cards[CardId::A], 0.0);
    assert!(due_day.checking >= 0.0);

    // With the balance at zero, later due-days never fire
    let total_paid: f64 = projection.iter().map(|day| day.card_payments[CardId::A]).sum();
    assert_eq!(total_paid, 500.0);
    assert!(
        projection
            .iter()
            .all(|day| day.cards[CardId::A] >= 0.0),
        "payment drove a card balance negative"
    );
}

#[test]
fn test_zero_payment_amount_never_fires() {
    let rules = ProjectionRules {
        checking_balance: 5_000.0,
        card_balances: crate::model::CardSet::new(400.0, 300.0, 200.0),
        start_date: Some(date(2026, 9, 1)),
        ..Default::default()
    };

    let projection = simulate(&rules, date(2026, 9, 1), 3);
    for day in &projection {
        assert_eq!(day.card_payments.total(), 0.0, "payment fired on {}", day.date);
    }
}

#[test]
fn test_pending_charges_post_exactly_once() {
    let mut rules = cash_only_rules();
    rules.card_balances = crate::model::CardSet::new(250.0, 80.0, 0.0);
    rules.pending_charges = crate::model::CardSet::new(100.0, 50.0, 0.0);

    let projection = simulate(&rules, date(2026, 9, 1), 3);

    // Day one carries the opening balances; the pending amounts land the
    // next day and never again
    assert_eq!(projection.days[0].cards[CardId::A], 250.0);
    assert_eq!(projection.days[1].date, date(2026, 9, 2));
    assert_eq!(projection.days[1].cards[CardId::A], 350.0);
    assert_eq!(projection.days[1].cards[CardId::B], 130.0);

    let posting_days = projection
        .iter()
        .filter(|day| day.notes.contains("pending posted"))
        .count();
    assert_eq!(posting_days, 1);
    assert!(projection.days[1].notes.contains("Card A pending posted"));
    assert!(projection.days[1].notes.contains("Card B pending posted"));
    assert!(!projection.days[1].notes.contains("Card C"));
}

#[test]
fn test_negative_checking_is_annotated_not_fatal() {
    let rules = ProjectionRules {
        checking_balance: 100.0,
        rent: 1_760.0,
        rent_day: 23,
        payday_reference: date(2026, 8, 20),
        start_date: Some(date(2026, 9, 1)),
        ..Default::default()
    };

    let projection = simulate(&rules, date(2026, 9, 1), 1);

    // The run covers the full window even though cash goes negative
    assert_eq!(projection.len(), 30);

    let rent_day = projection.first_negative_checking().unwrap();
    assert_eq!(rent_day.date, date(2026, 9, 23));
    assert_eq!(rent_day.checking, 100.0 - 1_760.0);
    assert!(rent_day.notes.contains("Rent"));
    assert!(rent_day.notes.contains("(checking negative)"));

    // The warning marks the crossing day only
    let warnings = projection
        .iter()
        .filter(|day| day.notes.contains("(checking negative)"))
        .count();
    assert_eq!(warnings, 1);
}

#[test]
fn test_upcoming_feed_flattens_nonzero_events() {
    let rules = cash_only_rules();
    let projection = simulate(&rules, date(2026, 9, 1), 1);

    let upcoming = projection.upcoming(date(2026, 9, 1), 7);
    let kinds: Vec<_> = upcoming.iter().map(|item| item.kind).collect();
    assert!(kinds.contains(&EventKind::Payday));
    assert!(kinds.contains(&EventKind::Spending));
    assert!(!kinds.contains(&EventKind::Rent), "rent is outside the 7-day window");

    let payday = upcoming
        .iter()
        .find(|item| item.kind == EventKind::Payday)
        .unwrap();
    assert_eq!(payday.date, date(2026, 9, 3));
    assert_eq!(payday.amount, 1_900.0);
}
