//! Display formatting for costs, durations, and server timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Two-decimal currency amount, e.g. `42.50`.
pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Hours with one decimal and unit, e.g. `1.5 h`.
pub fn hours(value: f64) -> String {
    format!("{value:.1} h")
}

/// Shorten an ISO-8601 timestamp (`2025-01-01T10:00:00.123456`) to
/// `2025-01-01 10:00`. Unrecognized text is returned unchanged.
pub fn timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let hm: String = time.chars().take(5).collect();
    if hm.len() == 5 && hm.as_bytes()[2] == b':' {
        format!("{date} {hm}")
    } else {
        raw.to_owned()
    }
}

/// Occupancy text such as `3 / 10 free`.
pub fn availability(available: u32, total: u32) -> String {
    format!("{available} / {total} free")
}
