//! Booking-flow orchestration over the pure scheduling core.
//!
//! Each operation fetches the data it needs through the collaborator
//! seams, then delegates to `rink-core`. Core errors auto-convert via
//! `#[from]`, so the pure functions are called with plain `?`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use rink_core::availability::{apply_hourly_rate, is_slot_available, overlay_bookings};
use rink_core::booking::{validate_booking, BookingDraft, BookingRequest, ValidationReport};
use rink_core::pricing::{calculate_price, EquipmentHire, PriceBreakdown};
use rink_core::rules::BookingRules;
use rink_core::slots::{generate_time_slots, RinkSchedule};
use rink_core::types::{EquipmentId, RinkId, Timestamp};
use rink_core::CoreError;

use crate::sources::{BookingDirectory, EquipmentCatalog, SourceError};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Unknown equipment: {equipment_id}")]
    UnknownEquipment { equipment_id: EquipmentId },
}

// ---------------------------------------------------------------------------
// Review result
// ---------------------------------------------------------------------------

/// Outcome of the pre-submission pipeline for one draft.
#[derive(Debug, Clone, Serialize)]
pub struct BookingReview {
    pub report: ValidationReport,
    /// Whether the requested interval collides with a committed booking.
    pub conflict: bool,
    /// Present only when the draft passed validation with no conflict.
    pub quote: Option<PriceBreakdown>,
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Orchestrates the booking control flow: generate a day's slots, overlay
/// committed bookings, validate a user's draft, and quote the price.
#[derive(Debug)]
pub struct SchedulePlanner<D, C> {
    directory: D,
    catalog: C,
    rules: BookingRules,
}

impl<D: BookingDirectory, C: EquipmentCatalog> SchedulePlanner<D, C> {
    /// Build a planner over the given collaborators.
    ///
    /// The rules configuration is checked for internal consistency once
    /// here, not on every validation pass.
    pub fn new(directory: D, catalog: C, rules: BookingRules) -> Result<Self, PlannerError> {
        rules.validate()?;
        Ok(Self {
            directory,
            catalog,
            rules,
        })
    }

    /// Produce a rink-day schedule with availability and prices filled in.
    pub async fn day_schedule(
        &self,
        rink_id: RinkId,
        date: NaiveDate,
        slot_minutes: u32,
        hourly_rate: Decimal,
    ) -> Result<RinkSchedule, PlannerError> {
        let booked = self.directory.booked_intervals(rink_id, date).await?;

        let slots = generate_time_slots(date, slot_minutes);
        let slots = overlay_bookings(slots, &booked);
        let slots = apply_hourly_rate(slots, hourly_rate);

        tracing::debug!(
            rink_id,
            %date,
            slot_minutes,
            booked = booked.len(),
            slots = slots.len(),
            "Day schedule computed",
        );

        Ok(RinkSchedule {
            rink_id,
            date,
            slots,
        })
    }

    /// Price a finalized request, resolving equipment rates via the catalog.
    ///
    /// An id the catalog does not know is an error, never a silent zero
    /// rate.
    pub async fn quote(
        &self,
        request: &BookingRequest,
        hourly_rate: Decimal,
    ) -> Result<PriceBreakdown, PlannerError> {
        let ids: Vec<EquipmentId> = request.equipment.keys().copied().collect();
        let rates = self.catalog.hourly_rates(&ids).await?;

        let mut hires = Vec::with_capacity(ids.len());
        for (&equipment_id, &quantity) in &request.equipment {
            let rate = rates
                .get(&equipment_id)
                .copied()
                .ok_or(PlannerError::UnknownEquipment { equipment_id })?;
            hires.push(EquipmentHire {
                equipment_id,
                quantity,
                hourly_rate: rate,
            });
        }

        Ok(calculate_price(
            request.start,
            request.end,
            hourly_rate,
            &hires,
        )?)
    }

    /// The pre-submission pipeline: validate the draft, check the
    /// requested interval against committed bookings, and quote when
    /// clean.
    ///
    /// `now` is passed by the caller so repeated reviews of an unchanged
    /// draft are identical.
    pub async fn review(
        &self,
        draft: &BookingDraft,
        hourly_rate: Decimal,
        now: Timestamp,
    ) -> Result<BookingReview, PlannerError> {
        let report = validate_booking(draft, &self.rules, now);

        // Conflicts are only checkable once the draft names an interval.
        let request = draft.finalize();
        let conflict = match &request {
            Some(req) if req.start < req.end => {
                let booked = self
                    .directory
                    .booked_intervals(req.rink_id, req.start.date())
                    .await?;
                !is_slot_available(req.start, req.end, &booked)
            }
            _ => false,
        };

        let quote = match request {
            Some(req) if report.is_valid && !conflict => {
                Some(self.quote(&req, hourly_rate).await?)
            }
            _ => None,
        };

        tracing::info!(
            rink_id = draft.rink_id,
            valid = report.is_valid,
            violations = report.errors.len(),
            conflict,
            quoted = quote.is_some(),
            "Booking draft reviewed",
        );

        Ok(BookingReview {
            report,
            conflict,
            quote,
        })
    }
}
