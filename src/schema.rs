//! Layout description of the two source workbooks.
//!
//! Every row offset, column index and column header the extractors rely on lives
//! here so it can be overridden from `config/schema.toml` or varied in tests.

use serde::{Deserialize, Serialize};

/// Layout of the multi-sheet payroll workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollSchema {
    /// Leading sheets that hold summaries rather than employees
    pub summary_sheets: usize,
    /// Zero-based row where shift rows start
    pub first_data_row: u32,
    /// Zero-based column holding the shift date
    pub date_column: u32,
    /// Zero-based column holding the "Xh Ym" duration
    pub duration_column: u32,
    /// Separator between the ordinal and the employee name in sheet labels
    pub name_separator: char,
}

impl Default for PayrollSchema {
    fn default() -> Self {
        Self {
            summary_sheets: 1,
            first_data_row: 6,
            date_column: 1,
            duration_column: 4,
            name_separator: '.',
        }
    }
}

/// Header names of the flat appointment workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentColumns {
    pub date: String,
    pub time: String,
    pub service: String,
    pub cost: String,
    pub team: String,
    pub customer: String,
    pub address: String,
    pub city: String,
    pub status: String,
    pub booking_id: String,
}

impl Default for AppointmentColumns {
    fn default() -> Self {
        Self {
            date: "Appointment date".to_string(),
            time: "Appointment time".to_string(),
            service: "Service/class/event".to_string(),
            cost: "Cost".to_string(),
            team: "Team member".to_string(),
            customer: "Customer name".to_string(),
            address: "Address".to_string(),
            city: "City".to_string(),
            status: "Status".to_string(),
            booking_id: "Booking ID".to_string(),
        }
    }
}

/// Complete layout description for one load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSchema {
    pub payroll: PayrollSchema,
    pub appointments: AppointmentColumns,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let schema: SheetSchema = toml::from_str(
            r#"
            [payroll]
            first_data_row = 4

            [appointments]
            customer = "Client"
            "#,
        )
        .unwrap();

        assert_eq!(schema.payroll.first_data_row, 4);
        assert_eq!(schema.payroll.date_column, 1);
        assert_eq!(schema.payroll.name_separator, '.');
        assert_eq!(schema.appointments.customer, "Client");
        assert_eq!(schema.appointments.date, "Appointment date");
    }

    #[test]
    fn test_empty_document_is_default() {
        let schema: SheetSchema = toml::from_str("").unwrap();
        assert_eq!(schema, SheetSchema::default());
    }
}
