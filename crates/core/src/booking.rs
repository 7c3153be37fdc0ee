//! Booking drafts, requests, and pre-submission validation.
//!
//! A [`BookingDraft`] is what the booking form holds mid-edit: every field
//! optional, invalid states representable on purpose. Validation is a
//! stateless collect-all pass, re-run on every field change and again
//! before submission; rule violations are data for display, never errors.
//! A draft whose required fields are present upgrades to a
//! [`BookingRequest`] via [`BookingDraft::finalize`], after which presence
//! is enforced by the type.

use std::collections::BTreeMap;

use chrono::Months;
use serde::{Deserialize, Serialize};

use crate::rules::BookingRules;
use crate::types::{EquipmentId, RinkId, Timestamp};

// ---------------------------------------------------------------------------
// Draft & request
// ---------------------------------------------------------------------------

/// A booking form's in-progress state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDraft {
    pub rink_id: Option<RinkId>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    /// Requested equipment quantities, keyed by catalog id.
    #[serde(default)]
    pub equipment: BTreeMap<EquipmentId, i64>,
}

/// A validated booking ready for submission. Required fields are present
/// by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub rink_id: RinkId,
    pub start: Timestamp,
    pub end: Timestamp,
    pub equipment: BTreeMap<EquipmentId, i64>,
}

impl BookingDraft {
    /// Upgrade the draft to a request when every required field is set.
    pub fn finalize(&self) -> Option<BookingRequest> {
        Some(BookingRequest {
            rink_id: self.rink_id?,
            start: self.start?,
            end: self.end?,
            equipment: self.equipment.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Violations
// ---------------------------------------------------------------------------

/// The category of a booking-rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ViolationKind {
    /// Start is in the past or too far ahead.
    DateOutOfRange,
    /// Duration off-granularity or outside the bookable bounds.
    InvalidDuration,
    /// A requested quantity is out of bounds for one item.
    InvalidEquipmentQuantity { equipment_id: EquipmentId },
    /// A required form field has not been filled in.
    MissingField { field: String },
}

/// A single rule violation with a message ready for form display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingViolation {
    #[serde(flatten)]
    pub kind: ViolationKind,
    pub message: String,
}

/// Aggregated result of validating one draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<BookingViolation>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn missing(field: &str) -> BookingViolation {
    BookingViolation {
        kind: ViolationKind::MissingField {
            field: field.to_string(),
        },
        message: format!("{field} is required"),
    }
}

/// Validate a draft against the business rules.
///
/// Every rule is checked independently and all violations are collected;
/// nothing short-circuits, so the form can annotate every offending field
/// at once. `now` is passed in by the caller, keeping the pass pure and
/// repeat calls on an unchanged draft identical.
///
/// Duration rules are only evaluated once both endpoints are present;
/// until then the missing-field violations already describe the state.
pub fn validate_booking(
    draft: &BookingDraft,
    rules: &BookingRules,
    now: Timestamp,
) -> ValidationReport {
    let mut errors: Vec<BookingViolation> = Vec::new();

    // Field presence.
    if draft.rink_id.is_none() {
        errors.push(missing("rink"));
    }
    if draft.start.is_none() {
        errors.push(missing("start time"));
    }
    if draft.end.is_none() {
        errors.push(missing("end time"));
    }

    // Date range.
    if let Some(start) = draft.start {
        if start < now {
            errors.push(BookingViolation {
                kind: ViolationKind::DateOutOfRange,
                message: "Start time is in the past".to_string(),
            });
        } else if let Some(limit) = now.checked_add_months(Months::new(rules.max_advance_months)) {
            if start > limit {
                errors.push(BookingViolation {
                    kind: ViolationKind::DateOutOfRange,
                    message: format!(
                        "Bookings may start at most {} months in advance",
                        rules.max_advance_months
                    ),
                });
            }
        }
    }

    // Duration granularity and bounds.
    if let (Some(start), Some(end)) = (draft.start, draft.end) {
        let minutes = (end - start).num_minutes();
        if minutes <= 0 {
            errors.push(BookingViolation {
                kind: ViolationKind::InvalidDuration,
                message: "End time must be after start time".to_string(),
            });
        } else {
            if minutes % rules.duration_step_minutes != 0 {
                errors.push(BookingViolation {
                    kind: ViolationKind::InvalidDuration,
                    message: format!(
                        "Duration must be a multiple of {} minutes",
                        rules.duration_step_minutes
                    ),
                });
            }
            if minutes < rules.min_duration_minutes || minutes > rules.max_duration_minutes {
                errors.push(BookingViolation {
                    kind: ViolationKind::InvalidDuration,
                    message: format!(
                        "Duration must be between {} and {} minutes",
                        rules.min_duration_minutes, rules.max_duration_minutes
                    ),
                });
            }
        }
    }

    // Equipment quantities.
    for (&equipment_id, &quantity) in &draft.equipment {
        if quantity <= 0 || quantity > rules.max_equipment_per_item {
            errors.push(BookingViolation {
                kind: ViolationKind::InvalidEquipmentQuantity { equipment_id },
                message: format!(
                    "Equipment quantity must be between 1 and {}, got {quantity}",
                    rules.max_equipment_per_item
                ),
            });
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
