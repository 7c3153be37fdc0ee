//! Booking business-rule configuration.
//!
//! Rules are plain data deserialized from the platform's configuration
//! surface; `Default` carries the platform defaults. Internal consistency
//! is checked once with [`BookingRules::validate`] when the configuration
//! is loaded, not on every booking validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Shortest bookable duration (minutes).
pub const DEFAULT_MIN_DURATION_MINUTES: i64 = 30;
/// Longest bookable duration (minutes).
pub const DEFAULT_MAX_DURATION_MINUTES: i64 = 180;
/// Required duration granularity (minutes).
pub const DEFAULT_DURATION_STEP_MINUTES: i64 = 30;
/// How far ahead a booking may start (months).
pub const DEFAULT_MAX_ADVANCE_MONTHS: u32 = 6;
/// Per-item equipment quantity cap.
pub const DEFAULT_MAX_EQUIPMENT_PER_ITEM: i64 = 10;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Configurable business rules applied to a booking draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRules {
    pub min_duration_minutes: i64,
    pub max_duration_minutes: i64,
    pub duration_step_minutes: i64,
    pub max_advance_months: u32,
    pub max_equipment_per_item: i64,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            min_duration_minutes: DEFAULT_MIN_DURATION_MINUTES,
            max_duration_minutes: DEFAULT_MAX_DURATION_MINUTES,
            duration_step_minutes: DEFAULT_DURATION_STEP_MINUTES,
            max_advance_months: DEFAULT_MAX_ADVANCE_MONTHS,
            max_equipment_per_item: DEFAULT_MAX_EQUIPMENT_PER_ITEM,
        }
    }
}

impl BookingRules {
    /// Check the configuration for internal consistency.
    ///
    /// The duration bounds must be positive multiples of the step, in
    /// order; otherwise no duration could ever satisfy all three rules.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.duration_step_minutes <= 0 {
            return Err(CoreError::Validation(
                "duration_step_minutes must be positive".to_string(),
            ));
        }
        if self.min_duration_minutes <= 0 {
            return Err(CoreError::Validation(
                "min_duration_minutes must be positive".to_string(),
            ));
        }
        if self.min_duration_minutes > self.max_duration_minutes {
            return Err(CoreError::Validation(format!(
                "min_duration_minutes ({}) must not exceed max_duration_minutes ({})",
                self.min_duration_minutes, self.max_duration_minutes
            )));
        }
        if self.min_duration_minutes % self.duration_step_minutes != 0
            || self.max_duration_minutes % self.duration_step_minutes != 0
        {
            return Err(CoreError::Validation(format!(
                "duration bounds ({}..{}) must be multiples of duration_step_minutes ({})",
                self.min_duration_minutes, self.max_duration_minutes, self.duration_step_minutes
            )));
        }
        if self.max_advance_months == 0 {
            return Err(CoreError::Validation(
                "max_advance_months must be positive".to_string(),
            ));
        }
        if self.max_equipment_per_item <= 0 {
            return Err(CoreError::Validation(
                "max_equipment_per_item must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
