//! Collaborator seams for server-derived booking data.
//!
//! The planner never fetches anything itself; callers plug in
//! implementations of these traits. The in-memory implementations serve
//! tests and callers that already hold a snapshot of the data.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use rink_core::availability::BookedInterval;
use rink_core::types::{EquipmentId, RinkId};

/// Failure to obtain data from a collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Booking data unavailable: {0}")]
    Unavailable(String),
}

/// Supplies committed reservations for a rink-day.
#[async_trait]
pub trait BookingDirectory: Send + Sync {
    async fn booked_intervals(
        &self,
        rink_id: RinkId,
        date: NaiveDate,
    ) -> Result<Vec<BookedInterval>, SourceError>;
}

/// Supplies hourly hire rates for equipment items.
#[async_trait]
pub trait EquipmentCatalog: Send + Sync {
    /// Rates for the requested ids. Unknown ids are simply absent from
    /// the returned map; the planner decides whether that is an error.
    async fn hourly_rates(
        &self,
        ids: &[EquipmentId],
    ) -> Result<BTreeMap<EquipmentId, Decimal>, SourceError>;
}

// ---------------------------------------------------------------------------
// In-memory snapshots
// ---------------------------------------------------------------------------

/// A directory over a pre-loaded snapshot of reservations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    bookings: BTreeMap<(RinkId, NaiveDate), Vec<BookedInterval>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed reservation under its rink-day.
    pub fn add_booking(&mut self, rink_id: RinkId, interval: BookedInterval) {
        self.bookings
            .entry((rink_id, interval.start.date()))
            .or_default()
            .push(interval);
    }
}

#[async_trait]
impl BookingDirectory for InMemoryDirectory {
    async fn booked_intervals(
        &self,
        rink_id: RinkId,
        date: NaiveDate,
    ) -> Result<Vec<BookedInterval>, SourceError> {
        Ok(self
            .bookings
            .get(&(rink_id, date))
            .cloned()
            .unwrap_or_default())
    }
}

/// A catalog over a pre-loaded rate table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    rates: BTreeMap<EquipmentId, Decimal>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rate(&mut self, equipment_id: EquipmentId, hourly_rate: Decimal) {
        self.rates.insert(equipment_id, hourly_rate);
    }
}

#[async_trait]
impl EquipmentCatalog for InMemoryCatalog {
    async fn hourly_rates(
        &self,
        ids: &[EquipmentId],
    ) -> Result<BTreeMap<EquipmentId, Decimal>, SourceError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.rates.get(id).map(|rate| (*id, *rate)))
            .collect())
    }
}
