use calamine::Data;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use lazy_static::lazy_static;
use regex::Regex;

/// Milliseconds in one spreadsheet day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Canonical date format shared by every normalized record
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    static ref CANONICAL_PATTERN: Regex =
        Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("canonical date pattern is valid");
    static ref CANONICAL_EXACT: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("canonical date pattern is valid");
}

/// Date-only layouts tried for free-text dates, in order
const DATE_FORMATS: &[&str] = &[
    // Two-digit years first; `%y` refuses a four-digit year
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%A, %B %d, %Y",
    "%A %B %d %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%m-%d-%Y",
];

/// Date-time layouts tried after the date-only ones
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M %p",
    "%Y/%m/%d %H:%M:%S",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %H:%M",
    "%B %d %Y %H:%M",
];

/// The spreadsheet epoch, 1899-12-30.
///
/// Starting a day early absorbs the phantom 1900-02-29 of the spreadsheet date system.
fn serial_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)
}

/// Convert a spreadsheet serial number into a calendar date-time
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let millis = (serial * MS_PER_DAY).round();
    if millis.abs() >= i64::MAX as f64 {
        return None;
    }
    let offset = TimeDelta::try_milliseconds(millis as i64)?;
    serial_epoch()?.checked_add_signed(offset)
}

/// Normalize a serial number to `YYYY-MM-DD`, or its plain text form when out of range
pub fn normalize_serial(serial: f64) -> String {
    match serial_to_datetime(serial) {
        Some(datetime) => datetime.format(CANONICAL_FORMAT).to_string(),
        None => serial.to_string(),
    }
}

/// Normalize free text to `YYYY-MM-DD`.
///
/// An embedded `YYYY-MM-DD` wins over any surrounding text. Otherwise the common
/// export layouts are tried; if none fits the text is returned unchanged.
pub fn normalize_date_text(text: &str) -> String {
    if let Some(found) = CANONICAL_PATTERN.find(text) {
        return found.as_str().to_string();
    }

    match parse_loose_date(text) {
        Some(date) => date.format(CANONICAL_FORMAT).to_string(),
        None => text.to_string(),
    }
}

fn parse_loose_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(datetime.date_naive());
    }

    None
}

/// Normalize any spreadsheet cell holding a date.
///
/// Numbers and typed date cells go through the serial path, text through the
/// text path; anything else is returned as its plain text form.
pub fn normalize_date(cell: &Data) -> String {
    match cell {
        Data::Float(serial) => normalize_serial(*serial),
        Data::Int(serial) => normalize_serial(*serial as f64),
        Data::DateTime(datetime) => normalize_serial(datetime.as_f64()),
        Data::String(text) | Data::DateTimeIso(text) => normalize_date_text(text),
        other => other.to_string(),
    }
}

/// Whether a normalized value is a real `YYYY-MM-DD` calendar date
pub fn is_canonical_date(value: &str) -> bool {
    CANONICAL_EXACT.is_match(value) && NaiveDate::parse_from_str(value, CANONICAL_FORMAT).is_ok()
}
