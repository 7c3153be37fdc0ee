//! Pure scheduling domain for ice-rink bookings.
//!
//! Models a rink's day as discrete, non-overlapping bookable time slots,
//! checks candidate intervals against committed reservations, derives
//! booking duration and price, and validates booking drafts against
//! business rules. This crate contains no database or network
//! dependencies; all server-derived data (booked intervals, equipment
//! rates) is passed in by the caller as values.

pub mod availability;
pub mod booking;
pub mod error;
pub mod format;
pub mod pricing;
pub mod rules;
pub mod slots;
pub mod types;

pub use error::CoreError;
