//! Candidate-interval availability against committed reservations.
//!
//! A candidate `[start, end)` conflicts with a booked interval when either
//! of its endpoints falls strictly inside the booking, or when it fully
//! contains the booking. The engulfing arm is required: a candidate longer
//! than an existing booking shares no endpoint with it and would slip past
//! endpoint-containment checks alone. Adjacent intervals, where one ends
//! exactly when the other starts, are NOT conflicts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::slots::TimeSlot;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A committed reservation occupying part of a rink's schedule.
///
/// Sourced from the external booking API; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedInterval {
    pub start: Timestamp,
    pub end: Timestamp,
}

// ---------------------------------------------------------------------------
// Conflict checks
// ---------------------------------------------------------------------------

/// Whether a candidate `[start, end)` conflicts with one booked interval.
pub fn conflicts_with(start: Timestamp, end: Timestamp, booked: &BookedInterval) -> bool {
    let start_inside = start > booked.start && start < booked.end;
    let end_inside = end > booked.start && end < booked.end;
    let engulfs = start <= booked.start && end >= booked.end;
    start_inside || end_inside || engulfs
}

/// Whether a candidate interval is free of conflicts with every booking.
///
/// Trivially true for an empty collection. Pure and deterministic; the
/// booked intervals are a value fetched by the caller, not ambient state.
pub fn is_slot_available(start: Timestamp, end: Timestamp, booked: &[BookedInterval]) -> bool {
    booked.iter().all(|b| !conflicts_with(start, end, b))
}

// ---------------------------------------------------------------------------
// Overlay passes
// ---------------------------------------------------------------------------

/// Mark every generated slot that conflicts with a booking as unavailable.
///
/// Consumes and returns the slot vector; generated slots are never edited
/// behind the caller's back.
pub fn overlay_bookings(slots: Vec<TimeSlot>, booked: &[BookedInterval]) -> Vec<TimeSlot> {
    slots
        .into_iter()
        .map(|slot| {
            let available = slot.available && is_slot_available(slot.start, slot.end, booked);
            TimeSlot { available, ..slot }
        })
        .collect()
}

/// Fill per-slot prices from an hourly rate, pro-rated by slot length.
///
/// A truncated final slot is charged for its actual minutes, not the full
/// nominal length. Prices are rounded to 2 decimal places, half-up.
pub fn apply_hourly_rate(slots: Vec<TimeSlot>, hourly_rate: Decimal) -> Vec<TimeSlot> {
    slots
        .into_iter()
        .map(|slot| {
            let hours = Decimal::from(slot.duration_minutes()) / Decimal::from(60);
            let price = (hourly_rate * hours)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            TimeSlot { price, ..slot }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
