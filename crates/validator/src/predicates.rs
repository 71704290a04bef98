//! Format checks shared by entry and category validation.

use chrono::NaiveDate;

/// Match `s` against a fixed-width pattern where `d` stands for an ASCII
/// digit and every other byte must appear literally.
fn matches_shape(s: &str, pattern: &str) -> bool {
    s.len() == pattern.len()
        && s.bytes().zip(pattern.bytes()).all(|(c, p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}

/// `YYYY-MM-DD` that also names a real calendar day
pub fn is_valid_date(s: &str) -> bool {
    matches_shape(s, "dddd-dd-dd") && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Parse `HH:MM` into minutes since midnight
pub fn parse_clock_time(s: &str) -> Option<u32> {
    if !matches_shape(s, "dd:dd") {
        return None;
    }

    let (hours, minutes) = s.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;

    if hours > 23 || minutes > 59 {
        return None;
    }

    Some(hours * 60 + minutes)
}

/// Parse `HH:MM-HH:MM` into (start, end) minutes; start must be before end
pub fn parse_time_range(s: &str) -> Option<(u32, u32)> {
    if !matches_shape(s, "dd:dd-dd:dd") {
        return None;
    }

    let (start, end) = s.split_once('-')?;
    let start = parse_clock_time(start)?;
    let end = parse_clock_time(end)?;

    (start < end).then_some((start, end))
}

pub fn is_valid_time_range(s: &str) -> bool {
    parse_time_range(s).is_some()
}

/// `#RGB` or `#RRGGBB`, hex digits in any case
pub fn is_valid_color(s: &str) -> bool {
    conference_kit_core::is_hex_color(s)
}
