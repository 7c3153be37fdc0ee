//! End-to-end booking-flow scenarios over in-memory data sources.

use std::collections::BTreeMap;

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use rink_core::availability::BookedInterval;
use rink_core::booking::{BookingDraft, ViolationKind};
use rink_core::rules::BookingRules;
use rink_planner::{InMemoryCatalog, InMemoryDirectory, PlannerError, SchedulePlanner};

const RINK: i64 = 1;
const SKATES: i64 = 10;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn at(hour: u32, min: u32) -> NaiveDateTime {
    date().and_hms_opt(hour, min, 0).unwrap()
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 14)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn planner_with(
    bookings: Vec<BookedInterval>,
) -> SchedulePlanner<InMemoryDirectory, InMemoryCatalog> {
    let mut directory = InMemoryDirectory::new();
    for interval in bookings {
        directory.add_booking(RINK, interval);
    }
    let mut catalog = InMemoryCatalog::new();
    catalog.set_rate(SKATES, dec!(2.50));

    SchedulePlanner::new(directory, catalog, BookingRules::default()).unwrap()
}

fn draft(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> BookingDraft {
    BookingDraft {
        rink_id: Some(RINK),
        start: Some(at(start_h, start_m)),
        end: Some(at(end_h, end_m)),
        equipment: BTreeMap::new(),
    }
}

// -- day_schedule --

#[tokio::test]
async fn day_schedule_overlays_bookings_and_prices() {
    let planner = planner_with(vec![BookedInterval {
        start: at(10, 0),
        end: at(11, 0),
    }]);

    let schedule = planner
        .day_schedule(RINK, date(), 30, dec!(20))
        .await
        .unwrap();

    assert_eq!(schedule.slots.len(), 48);
    let summary = schedule.summary();
    assert_eq!(summary.booked, 2);
    assert_eq!(summary.available, 46);
    assert!(schedule.slots.iter().all(|s| s.price == dec!(10.00)));

    let blocked: Vec<_> = schedule.slots.iter().filter(|s| !s.available).collect();
    assert_eq!(blocked[0].start, at(10, 0));
    assert_eq!(blocked[1].start, at(10, 30));
}

#[tokio::test]
async fn day_schedule_for_other_rink_is_unaffected() {
    let planner = planner_with(vec![BookedInterval {
        start: at(10, 0),
        end: at(11, 0),
    }]);

    let schedule = planner
        .day_schedule(RINK + 1, date(), 60, dec!(20))
        .await
        .unwrap();
    assert_eq!(schedule.summary().booked, 0);
}

// -- review --

#[tokio::test]
async fn clean_draft_gets_a_quote() {
    let planner = planner_with(vec![]);
    let mut draft = draft(10, 0, 11, 30);
    draft.equipment.insert(SKATES, 4);

    let review = planner.review(&draft, dec!(20), now()).await.unwrap();

    assert!(review.report.is_valid);
    assert!(!review.conflict);
    let quote = review.quote.unwrap();
    assert_eq!(quote.duration_minutes, 90);
    assert_eq!(quote.ice_price, dec!(30.00));
    // 4 pairs of skates at 2.50/h for 1.5 h.
    assert_eq!(quote.equipment[0].line_total, dec!(15.00));
    assert_eq!(quote.total, dec!(45.00));
}

#[tokio::test]
async fn conflicting_draft_reports_conflict_and_no_quote() {
    let planner = planner_with(vec![BookedInterval {
        start: at(10, 30),
        end: at(12, 0),
    }]);

    let review = planner
        .review(&draft(10, 0, 11, 0), dec!(20), now())
        .await
        .unwrap();

    assert!(review.report.is_valid);
    assert!(review.conflict);
    assert!(review.quote.is_none());
}

#[tokio::test]
async fn adjacent_booking_is_not_a_conflict() {
    let planner = planner_with(vec![BookedInterval {
        start: at(11, 0),
        end: at(12, 0),
    }]);

    let review = planner
        .review(&draft(10, 0, 11, 0), dec!(20), now())
        .await
        .unwrap();

    assert!(!review.conflict);
    assert!(review.quote.is_some());
}

#[tokio::test]
async fn invalid_draft_reports_violations_without_quoting() {
    let planner = planner_with(vec![]);

    // 45-minute duration: off the 30-minute granularity.
    let review = planner
        .review(&draft(10, 0, 10, 45), dec!(20), now())
        .await
        .unwrap();

    assert!(!review.report.is_valid);
    assert_eq!(review.report.errors.len(), 1);
    assert_eq!(
        review.report.errors[0].kind,
        ViolationKind::InvalidDuration
    );
    assert!(review.quote.is_none());
}

#[tokio::test]
async fn incomplete_draft_skips_conflict_check() {
    let planner = planner_with(vec![BookedInterval {
        start: at(10, 0),
        end: at(11, 0),
    }]);

    let incomplete = BookingDraft {
        rink_id: Some(RINK),
        start: Some(at(10, 0)),
        end: None,
        equipment: BTreeMap::new(),
    };
    let review = planner.review(&incomplete, dec!(20), now()).await.unwrap();

    assert!(!review.report.is_valid);
    assert!(!review.conflict);
    assert!(review.quote.is_none());
}

// -- quote --

#[tokio::test]
async fn unknown_equipment_is_an_error() {
    let planner = planner_with(vec![]);
    let mut draft = draft(10, 0, 11, 0);
    draft.equipment.insert(999, 2);
    let request = draft.finalize().unwrap();

    let err = planner.quote(&request, dec!(20)).await.unwrap_err();
    assert_matches!(err, PlannerError::UnknownEquipment { equipment_id: 999 });
}

// -- construction --

#[tokio::test]
async fn inconsistent_rules_rejected_at_construction() {
    let rules = BookingRules {
        min_duration_minutes: 120,
        max_duration_minutes: 60,
        ..BookingRules::default()
    };
    let result = SchedulePlanner::new(InMemoryDirectory::new(), InMemoryCatalog::new(), rules);
    assert_matches!(result, Err(PlannerError::Core(_)));
}
