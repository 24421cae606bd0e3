use serde::{Deserialize, Serialize};

/// One cell value that fell back to a permissive default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellIssue {
    pub sheet: String,
    pub row: u32,
    pub value: String,
}

impl CellIssue {
    pub fn new(sheet: &str, row: u32, value: impl Into<String>) -> Self {
        Self {
            sheet: sheet.to_string(),
            row,
            value: value.into(),
        }
    }
}

/// Data-quality record of one load.
///
/// None of these conditions fail a load; they are collected so callers and tests
/// can see what was silently absorbed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadDiagnostics {
    /// Duration texts that did not match "Xh Ym" and counted as zero hours
    pub unparsed_durations: Vec<CellIssue>,
    /// Dates that could not be brought to `YYYY-MM-DD` and were kept as-is
    pub non_canonical_dates: Vec<CellIssue>,
    /// Payroll sheets that produced no employee
    pub skipped_sheets: Vec<String>,
    /// Payroll rows with a date but no duration
    pub dropped_shift_rows: usize,
    /// Appointment rows missing a date or customer
    pub dropped_appointments: usize,
    /// Cost cells that could not be read as an amount
    pub unparsed_costs: Vec<CellIssue>,
}

impl LoadDiagnostics {
    /// Whether every value was read without a fallback
    pub fn is_clean(&self) -> bool {
        self.unparsed_durations.is_empty()
            && self.non_canonical_dates.is_empty()
            && self.skipped_sheets.is_empty()
            && self.dropped_shift_rows == 0
            && self.dropped_appointments == 0
            && self.unparsed_costs.is_empty()
    }

    /// Fold another record into this one
    pub fn merge(&mut self, other: LoadDiagnostics) {
        self.unparsed_durations.extend(other.unparsed_durations);
        self.non_canonical_dates.extend(other.non_canonical_dates);
        self.skipped_sheets.extend(other.skipped_sheets);
        self.dropped_shift_rows += other.dropped_shift_rows;
        self.dropped_appointments += other.dropped_appointments;
        self.unparsed_costs.extend(other.unparsed_costs);
    }
}
