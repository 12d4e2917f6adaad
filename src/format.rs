//! Formatting utility functions.
//!
//! Human-scaled renderings of byte counts and row counts for status output.

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
const ROW_SUFFIXES: [&str; 5] = ["", "k", "m", "b", "t"];

/// Returned for byte counts beyond the terabyte range
pub const BYTES_OVERFLOW: &str = "> 1024 TB";

/// Format a byte count with one decimal in the largest fitting unit.
///
/// Magnitudes of 1024^5 and above saturate to [`BYTES_OVERFLOW`]. Negative
/// counts scale by their magnitude and keep their sign.
///
/// # Examples
/// ```
/// use nestkit::format::format_bytes;
/// assert_eq!(format_bytes(1030.0), "1.0 KB");
/// assert_eq!(format_bytes(-1.0), "-1.0 Bytes");
/// assert_eq!(format_bytes(1024f64.powi(5) + 1.0), "> 1024 TB");
/// ```
pub fn format_bytes(bytes: f64) -> String {
    let mut scaled = bytes;
    for unit in BYTE_UNITS {
        // NaN never compares >= and stays in Bytes
        if !(scaled.abs() >= 1024.0) {
            return format!("{:.1} {}", scaled, unit);
        }
        scaled /= 1024.0;
    }
    BYTES_OVERFLOW.to_string()
}

/// Format a row count with one decimal and a thousands suffix.
///
/// Counts beyond the trillions keep the `t` suffix.
///
/// ```
/// use nestkit::format::format_rows_number;
/// assert_eq!(format_rows_number(1500.0), "1.5k");
/// assert_eq!(format_rows_number(999.0), "999.0");
/// ```
pub fn format_rows_number(rows: f64) -> String {
    let mut scaled = rows;
    for suffix in ROW_SUFFIXES {
        if !(scaled.abs() >= 1000.0) {
            return format!("{:.1}{}", scaled, suffix);
        }
        scaled /= 1000.0;
    }
    format!("{:.1}{}", scaled * 1000.0, ROW_SUFFIXES[ROW_SUFFIXES.len() - 1])
}
