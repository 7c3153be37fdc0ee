//! Day-schedule slot generation.
//!
//! Produces the full set of candidate bookable intervals for one rink-day.
//! Every slot starts available with a zero price; availability and pricing
//! are layered on afterwards (see `availability`), so a fresh slot set is
//! produced per query rather than mutating shared state.

use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{RinkId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minutes in a schedule day (1440).
pub const MINUTES_PER_DAY: u32 = 1440;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A discrete bookable interval on a rink's daily schedule.
///
/// Invariant: `start < end`. Slots are immutable once generated; overlay
/// passes build new vectors instead of editing in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: Timestamp,
    pub end: Timestamp,
    pub available: bool,
    pub price: Decimal,
}

impl TimeSlot {
    /// Slot length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// One rink-day's slots, ordered by `start` ascending.
///
/// Slots are contiguous and non-overlapping by construction of the
/// generator; this is not re-validated post-hoc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RinkSchedule {
    pub rink_id: RinkId,
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

/// Slot counts for schedule display.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSummary {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the candidate slots covering the full 24-hour span of `date`.
///
/// The first slot starts at local midnight, adjacent slots share a
/// boundary (`slots[i].end == slots[i + 1].start`), and no slot crosses
/// into the next day. When `slot_minutes` does not divide 1440 evenly,
/// the final slot is truncated to end exactly at the next midnight; this
/// is policy, not an error.
///
/// Precondition: `slot_minutes > 0`. A zero length is a caller bug.
pub fn generate_time_slots(date: NaiveDate, slot_minutes: u32) -> Vec<TimeSlot> {
    debug_assert!(slot_minutes > 0, "slot_minutes must be positive");

    let day_start = date.and_time(NaiveTime::MIN);
    let day_end = day_start + Duration::days(1);
    let step = Duration::minutes(i64::from(slot_minutes));

    let mut slots = Vec::with_capacity(MINUTES_PER_DAY.div_ceil(slot_minutes) as usize);
    let mut cursor = day_start;
    while cursor < day_end {
        // Truncate the last slot at midnight instead of overflowing.
        let end = (cursor + step).min(day_end);
        slots.push(TimeSlot {
            start: cursor,
            end,
            available: true,
            price: Decimal::ZERO,
        });
        cursor = end;
    }
    slots
}

impl RinkSchedule {
    /// Build a rink-day schedule from freshly generated slots.
    pub fn generate(rink_id: RinkId, date: NaiveDate, slot_minutes: u32) -> Self {
        Self {
            rink_id,
            date,
            slots: generate_time_slots(date, slot_minutes),
        }
    }

    /// Slots still open for booking.
    pub fn available_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|s| s.available)
    }

    /// Counts for display next to the day picker.
    pub fn summary(&self) -> ScheduleSummary {
        let available = self.slots.iter().filter(|s| s.available).count();
        ScheduleSummary {
            total: self.slots.len(),
            available,
            booked: self.slots.len() - available,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
