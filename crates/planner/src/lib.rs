//! Composition layer between a booking front end and the scheduling core.
//!
//! Defines the two external-collaborator seams as traits (booked
//! intervals and equipment rates), plus a planner that fetches the data
//! and then delegates to the pure functions in `rink-core`: generate,
//! overlay, validate, quote. Asynchrony lives only at the data-request
//! seam; the scheduling logic itself never awaits.

pub mod planner;
pub mod sources;

pub use planner::{BookingReview, PlannerError, SchedulePlanner};
pub use sources::{
    BookingDirectory, EquipmentCatalog, InMemoryCatalog, InMemoryDirectory, SourceError,
};
