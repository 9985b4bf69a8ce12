//! Time conversion between digit entry, milliseconds, and clock labels

const MAX_DIGITS: usize = 6;

const MILLIS_PER_HOUR: u64 = 3_600_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_SECOND: u64 = 1_000;

/// Convert a raw digit-entry string into milliseconds.
///
/// The string is left-padded with zeros to six characters and read as
/// `HHMMSS`, so `"000130"` is one minute thirty seconds. Minutes or seconds
/// above 59 are not rejected here; entry bounds are the caller's concern.
pub fn digits_to_millis(digits: &str) -> Result<u64, String> {
    if digits.len() > MAX_DIGITS {
        return Err(format!(
            "digit entry too long: {} characters (max {})",
            digits.len(),
            MAX_DIGITS
        ));
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("digit entry contains non-digit characters: {digits:?}"));
    }

    let padded = format!("{digits:0>6}");
    let field = |range: std::ops::Range<usize>| -> u64 {
        // Always two ASCII digits after padding, so this cannot fail.
        padded[range].parse().unwrap_or(0)
    };

    let hours = field(0..2);
    let minutes = field(2..4);
    let seconds = field(4..6);

    Ok(hours * MILLIS_PER_HOUR + minutes * MILLIS_PER_MINUTE + seconds * MILLIS_PER_SECOND)
}

/// Format a remaining-seconds count as a clock label.
///
/// With nonzero hours the label is `H:MM:SS`; otherwise `M:SS` with the
/// minutes field unpadded. Hours wrap at 24.
pub fn clock_label(total_seconds: u64) -> String {
    let hours = (total_seconds / 3600) % 24;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
