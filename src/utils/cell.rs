use calamine::Data;

use super::date::serial_to_datetime;

/// Shared stand-in for cells outside a sheet's used range
pub static EMPTY_CELL: Data = Data::Empty;

/// Whether a cell counts as empty for row scanning.
///
/// Zero and `false` count as empty too, matching how exported sheets pad unused rows.
pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        Data::Float(f) => *f == 0.0,
        Data::Int(i) => *i == 0,
        Data::Bool(b) => !b,
        Data::Error(_) | Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => false,
    }
}

/// Render a cell as text, `None` for empty and error cells
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            // Whole numbers (booking IDs, years) print without a fraction
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                Some((*f as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(datetime) => {
            let serial = datetime.as_f64();
            let value = serial_to_datetime(serial)?;
            if serial.abs() < 1.0 {
                Some(value.format("%H:%M").to_string())
            } else if serial.fract() == 0.0 {
                Some(value.format("%Y-%m-%d").to_string())
            } else {
                Some(value.format("%Y-%m-%d %H:%M").to_string())
            }
        }
    }
}

/// Read a numeric amount from a cell, accepting currency-formatted text
pub fn cell_amount(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok()
        }
        _ => None,
    }
}
