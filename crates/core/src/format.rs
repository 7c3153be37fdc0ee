//! Display helpers for the booking UI.

use rust_decimal::Decimal;

use crate::pricing::MINUTES_PER_HOUR;
use crate::types::Timestamp;

/// Format an interval as "10:00 - 11:30".
pub fn format_time_range(start: Timestamp, end: Timestamp) -> String {
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}

/// Format a duration in minutes as "1 h 30 min", "2 h", or "45 min".
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / MINUTES_PER_HOUR;
    let rest = minutes % MINUTES_PER_HOUR;
    match (hours, rest) {
        (0, _) => format!("{rest} min"),
        (_, 0) => format!("{hours} h"),
        _ => format!("{hours} h {rest} min"),
    }
}

/// Format a money amount with exactly two decimal places.
pub fn format_price(amount: Decimal) -> String {
    format!("{amount:.2}")
}
