use crate::constants::{SIZE_UNITS, SIZE_UNIT_BASE};

/// Round to two decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Human-readable size with binary units.
/// - Two-decimal precision, trailing zeros trimmed: 1536 -> "1.5 KB", 1024 -> "1 KB".
/// - Picks the largest unit whose value is >= 1, capped at GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let mut exp = 0usize;
    let mut next_unit = SIZE_UNIT_BASE as u64;
    while exp + 1 < SIZE_UNITS.len() && bytes >= next_unit {
        exp += 1;
        next_unit = next_unit.saturating_mul(SIZE_UNIT_BASE as u64);
    }

    let value = bytes as f64 / SIZE_UNIT_BASE.powi(exp as i32);
    format!("{} {}", trim_decimals(&format!("{:.2}", value)), SIZE_UNITS[exp])
}

/// Percentage saved by compression: round2((1 - result / original) * 100).
/// Undefined for an empty original, hence `None`.
pub fn percent_saved(original: u64, result: u64) -> Option<f64> {
    if original == 0 {
        return None;
    }
    Some(round2((1.0 - result as f64 / original as f64) * 100.0))
}

fn trim_decimals(fixed: &str) -> &str {
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.')
}
