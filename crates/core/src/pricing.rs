//! Booking duration and price derivation.
//!
//! Derives whole-minute durations and a line-item price breakdown (ice
//! time plus equipment hire) from a selected interval and hourly rates.
//! Every money component is rounded to 2 decimal places half-up and the
//! total is the sum of the rounded components, so a rendered breakdown
//! always adds up.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EquipmentId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minutes per billable hour (60).
pub const MINUTES_PER_HOUR: i64 = 60;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One requested equipment rental, with the catalog rate already resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentHire {
    pub equipment_id: EquipmentId,
    pub quantity: i64,
    pub hourly_rate: Decimal,
}

/// A priced equipment line in a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentLine {
    pub equipment_id: EquipmentId,
    pub quantity: i64,
    pub line_total: Decimal,
}

/// Full price derivation for a booking.
#[derive(Debug, Clone, Serialize)]
pub struct PriceBreakdown {
    pub duration_minutes: i64,
    pub ice_price: Decimal,
    pub equipment: Vec<EquipmentLine>,
    pub total: Decimal,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Round a money amount to 2 decimal places, half-up.
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole minutes between `start` and `end`.
///
/// An interval with `end <= start` is a caller bug, reported as
/// `CoreError::InvalidInterval` rather than clamped.
pub fn duration_minutes(start: Timestamp, end: Timestamp) -> Result<i64, CoreError> {
    if end <= start {
        return Err(CoreError::InvalidInterval { start, end });
    }
    Ok((end - start).num_minutes())
}

/// Price a booking: ice time at `hourly_rate` plus each equipment hire at
/// `rate x quantity x hours`.
pub fn calculate_price(
    start: Timestamp,
    end: Timestamp,
    hourly_rate: Decimal,
    equipment: &[EquipmentHire],
) -> Result<PriceBreakdown, CoreError> {
    let minutes = duration_minutes(start, end)?;
    let hours = Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR);

    let ice_price = round_currency(hourly_rate * hours);
    let mut total = ice_price;

    let mut lines = Vec::with_capacity(equipment.len());
    for hire in equipment {
        let line_total = round_currency(hire.hourly_rate * Decimal::from(hire.quantity) * hours);
        total += line_total;
        lines.push(EquipmentLine {
            equipment_id: hire.equipment_id,
            quantity: hire.quantity,
            line_total,
        });
    }

    Ok(PriceBreakdown {
        duration_minutes: minutes,
        ice_price,
        equipment: lines,
        total,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(hour: u32, min: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2025, 6, 14)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    // -- duration_minutes --

    #[test]
    fn duration_in_whole_minutes() {
        assert_eq!(duration_minutes(at(10, 0), at(11, 30)).unwrap(), 90);
    }

    #[test]
    fn inverted_interval_rejected() {
        assert_matches!(
            duration_minutes(at(11, 0), at(10, 0)),
            Err(CoreError::InvalidInterval { .. })
        );
    }

    #[test]
    fn zero_length_interval_rejected() {
        assert_matches!(
            duration_minutes(at(10, 0), at(10, 0)),
            Err(CoreError::InvalidInterval { .. })
        );
    }

    // -- calculate_price --

    #[test]
    fn ice_only_price() {
        let breakdown = calculate_price(at(10, 0), at(11, 30), dec!(20), &[]).unwrap();
        assert_eq!(breakdown.duration_minutes, 90);
        assert_eq!(breakdown.ice_price, dec!(30.00));
        assert_eq!(breakdown.total, dec!(30.00));
        assert!(breakdown.equipment.is_empty());
    }

    #[test]
    fn equipment_lines_added_to_total() {
        // 2 hours of ice at 40 plus 4 skate hires at 2.50/h and one
        // helmet at 1/h.
        let equipment = [
            EquipmentHire {
                equipment_id: 1,
                quantity: 4,
                hourly_rate: dec!(2.50),
            },
            EquipmentHire {
                equipment_id: 2,
                quantity: 1,
                hourly_rate: dec!(1),
            },
        ];
        let breakdown = calculate_price(at(18, 0), at(20, 0), dec!(40), &equipment).unwrap();

        assert_eq!(breakdown.ice_price, dec!(80.00));
        assert_eq!(breakdown.equipment[0].line_total, dec!(20.00));
        assert_eq!(breakdown.equipment[1].line_total, dec!(2.00));
        assert_eq!(breakdown.total, dec!(102.00));
    }

    #[test]
    fn components_round_half_up() {
        // 50 minutes at 9.99/h = 8.325, displayed as 8.33.
        let breakdown = calculate_price(at(10, 0), at(10, 50), dec!(9.99), &[]).unwrap();
        assert_eq!(breakdown.ice_price, dec!(8.33));
        assert_eq!(breakdown.total, dec!(8.33));
    }

    #[test]
    fn total_is_sum_of_rounded_components() {
        // Both the ice line and the equipment line carry sub-cent
        // remainders; the total must reconcile with the displayed lines.
        let equipment = [EquipmentHire {
            equipment_id: 1,
            quantity: 3,
            hourly_rate: dec!(1.11),
        }];
        let breakdown = calculate_price(at(10, 0), at(10, 50), dec!(9.99), &equipment).unwrap();

        let line_sum: Decimal = breakdown.ice_price
            + breakdown
                .equipment
                .iter()
                .map(|l| l.line_total)
                .sum::<Decimal>();
        assert_eq!(breakdown.total, line_sum);
    }

    #[test]
    fn invalid_interval_propagates() {
        assert_matches!(
            calculate_price(at(11, 0), at(10, 0), dec!(20), &[]),
            Err(CoreError::InvalidInterval { .. })
        );
    }
}
