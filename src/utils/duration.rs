use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DURATION_PATTERN: Regex =
        Regex::new(r"(\d+)h\s*(\d+)m").expect("duration pattern is valid");
}

/// Parse a payroll duration such as "5h 10m" into fractional hours.
///
/// Returns `None` when the text holds no `<int>h <int>m` pattern.
pub fn try_parse_hours(text: &str) -> Option<f64> {
    let caps = DURATION_PATTERN.captures(text)?;
    let hours = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let minutes = caps.get(2)?.as_str().parse::<f64>().ok()?;
    Some(hours + minutes / 60.0)
}

/// Parse a payroll duration, falling back to zero hours for empty or malformed text
pub fn parse_hours(text: Option<&str>) -> f64 {
    match text {
        Some(text) if !text.is_empty() => try_parse_hours(text).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Render fractional hours back into the "Xh Ym" form, rounded to the minute
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as u64;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
