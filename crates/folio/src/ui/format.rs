use std::time::SystemTime;

use time::{OffsetDateTime, UtcOffset};

/// Placeholder rendered for unknown sizes and timestamps.
pub const MISSING_VALUE: &str = "-";

const BYTES_PER_UNIT: u64 = 1024;
const UNIT_STEP: f64 = 1024.0;
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with binary units (e.g., `1.5 KB`).
pub fn format_size(size_bytes: Option<u64>) -> String {
    let Some(size_bytes) = size_bytes else {
        return MISSING_VALUE.to_string();
    };

    if size_bytes < BYTES_PER_UNIT {
        return format!("{size_bytes} B");
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = size_bytes as f64;
    let mut unit_index = 0;
    while value >= UNIT_STEP && unit_index < SIZE_UNITS.len() - 1 {
        value /= UNIT_STEP;
        unit_index += 1;
    }

    format!("{value:.1} {}", SIZE_UNITS[unit_index])
}

/// Formats a modification time in local time as `YYYY-MM-DD HH:MM`.
///
/// Falls back to UTC when the local offset cannot be determined.
pub fn format_modified(modified_at: Option<SystemTime>) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    format_modified_with_offset(modified_at, offset)
}

fn format_modified_with_offset(modified_at: Option<SystemTime>, offset: UtcOffset) -> String {
    let Some(modified_at) = modified_at else {
        return MISSING_VALUE.to_string();
    };

    let date_time = OffsetDateTime::from(modified_at).to_offset(offset);

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        date_time.year(),
        u8::from(date_time.month()),
        date_time.day(),
        date_time.hour(),
        date_time.minute()
    )
}
