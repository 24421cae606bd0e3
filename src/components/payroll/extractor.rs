use super::aggregator::aggregate_work_days;
use super::models::{Employee, EmployeeSheet, RawEntry};
use crate::components::diagnostics::LoadDiagnostics;
use crate::components::workbook::{Sheet, Workbook};
use crate::schema::PayrollSchema;
use crate::utils::cell::{cell_text, is_blank};
use tracing::{debug, info};

/// Employee name from a sheet label such as "1.Angela Batang".
///
/// Everything after the first separator is the name. Labels without the
/// separator, or with nothing after it, name no employee.
pub fn employee_name(label: &str, separator: char) -> Option<String> {
    let (_, name) = label.split_once(separator)?;
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Collect the shift rows of one employee sheet.
///
/// Scanning stops for good at the first row whose date cell is empty; rows with a
/// date but no duration are dropped and counted.
pub fn extract_entries(
    sheet: &Sheet,
    schema: &PayrollSchema,
    diagnostics: &mut LoadDiagnostics,
) -> Vec<RawEntry> {
    let mut entries = Vec::new();
    let Some(last_row) = sheet.last_row() else {
        return entries;
    };

    for row in schema.first_data_row..=last_row {
        let date = sheet.cell(row, schema.date_column);
        if is_blank(date) {
            debug!("Sheet '{}' ends at row {}", sheet.name, row);
            break;
        }

        let duration = sheet.cell(row, schema.duration_column);
        let duration_text = match cell_text(duration) {
            Some(text) if !is_blank(duration) => text,
            _ => {
                debug!("Dropping row {} of '{}': no duration", row, sheet.name);
                diagnostics.dropped_shift_rows += 1;
                continue;
            }
        };

        entries.push(RawEntry::new(date.clone(), duration_text, row));
    }

    entries
}

/// Walk every employee sheet of a payroll workbook, in workbook order
pub fn extract_employee_sheets(
    workbook: &Workbook,
    schema: &PayrollSchema,
    diagnostics: &mut LoadDiagnostics,
) -> Vec<EmployeeSheet> {
    let mut employee_sheets = Vec::new();

    for sheet in workbook.sheets().iter().skip(schema.summary_sheets) {
        let Some(name) = employee_name(&sheet.name, schema.name_separator) else {
            debug!("Skipping sheet '{}': no employee name in label", sheet.name);
            diagnostics.skipped_sheets.push(sheet.name.clone());
            continue;
        };

        let entries = extract_entries(sheet, schema, diagnostics);
        employee_sheets.push(EmployeeSheet {
            name,
            sheet_name: sheet.name.clone(),
            entries,
        });
    }

    employee_sheets
}

/// Extract and aggregate every employee of a payroll workbook.
///
/// Employees whose sheets yield no work-days are left out.
pub fn extract_employees(
    workbook: &Workbook,
    schema: &PayrollSchema,
    diagnostics: &mut LoadDiagnostics,
) -> Vec<Employee> {
    let sheets = extract_employee_sheets(workbook, schema, diagnostics);
    let mut employees = Vec::with_capacity(sheets.len());

    for sheet in sheets {
        let work_days = aggregate_work_days(&sheet.sheet_name, &sheet.entries, diagnostics);
        if work_days.is_empty() {
            debug!("Skipping sheet '{}': no work-days", sheet.sheet_name);
            diagnostics.skipped_sheets.push(sheet.sheet_name);
            continue;
        }

        debug!(
            "{}: {} shift rows, {} work-days",
            sheet.name,
            sheet.entries.len(),
            work_days.len()
        );
        employees.push(Employee {
            name: sheet.name,
            work_days,
        });
    }

    info!("Extracted {} employees from payroll workbook", employees.len());
    employees
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Range};

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    /// Sheet with header filler in the first rows and the given shift rows from row 6
    fn employee_sheet(label: &str, rows: &[(Data, Data)]) -> Sheet {
        let last_row = 6 + rows.len() as u32;
        let mut range = Range::new((0, 0), (last_row, 5));
        range.set_value((0, 0), text("Payroll report"));
        range.set_value((5, 1), text("Start date"));
        range.set_value((5, 4), text("Duration"));
        for (offset, (date, duration)) in rows.iter().enumerate() {
            let row = 6 + offset as u32;
            range.set_value((row, 1), date.clone());
            range.set_value((row, 4), duration.clone());
        }
        Sheet {
            name: label.to_string(),
            range,
        }
    }

    fn summary_sheet() -> Sheet {
        let mut range = Range::new((0, 0), (2, 2));
        range.set_value((0, 0), text("Summary"));
        Sheet {
            name: "Summary".to_string(),
            range,
        }
    }

    #[test]
    fn test_employee_name() {
        assert_eq!(employee_name("1.Angela Batang", '.'), Some("Angela Batang".to_string()));
        assert_eq!(employee_name("12. Paul Smith ", '.'), Some("Paul Smith".to_string()));
        assert_eq!(employee_name("3.Mary J. Blige", '.'), Some("Mary J. Blige".to_string()));
        assert_eq!(employee_name("Summary", '.'), None);
        assert_eq!(employee_name("4.", '.'), None);
    }

    #[test]
    fn test_stops_at_first_empty_date() {
        let sheet = employee_sheet(
            "1.Angela Batang",
            &[
                (Data::Float(45964.0), text("5h 10m")),
                (Data::Empty, text("1h 0m")),
                (Data::Float(45965.0), text("8h 0m")),
            ],
        );
        let mut diagnostics = LoadDiagnostics::default();

        let entries = extract_entries(&sheet, &PayrollSchema::default(), &mut diagnostics);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, Data::Float(45964.0));
        assert_eq!(entries[0].row, 6);
    }

    #[test]
    fn test_drops_rows_without_duration() {
        let sheet = employee_sheet(
            "1.Angela Batang",
            &[
                (Data::Float(45964.0), Data::Empty),
                (Data::Float(45965.0), text("8h 0m")),
            ],
        );
        let mut diagnostics = LoadDiagnostics::default();

        let entries = extract_entries(&sheet, &PayrollSchema::default(), &mut diagnostics);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration_text, "8h 0m");
        assert_eq!(diagnostics.dropped_shift_rows, 1);
    }

    #[test]
    fn test_header_rows_are_never_read() {
        let mut sheet = employee_sheet("1.Angela Batang", &[(Data::Float(45964.0), text("2h 0m"))]);
        sheet.range.set_value((3, 1), Data::Float(45000.0));
        sheet.range.set_value((3, 4), text("9h 0m"));
        let mut diagnostics = LoadDiagnostics::default();

        let entries = extract_entries(&sheet, &PayrollSchema::default(), &mut diagnostics);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration_text, "2h 0m");
    }

    #[test]
    fn test_extract_employees_skips_summary_and_unlabelled_sheets() {
        let workbook = Workbook::from_sheets(vec![
            summary_sheet(),
            employee_sheet(
                "1.Angela Batang",
                &[
                    (Data::Float(45964.0), text("2h 0m")),
                    (Data::Float(45964.0), text("1h 30m")),
                    (Data::Float(45965.0), text("3h 0m")),
                ],
            ),
            employee_sheet("Notes", &[(Data::Float(45964.0), text("1h 0m"))]),
            employee_sheet("2.Paul", &[]),
            employee_sheet("3.Mariana", &[(text("2025-11-04"), text("6h 45m"))]),
        ]);
        let mut diagnostics = LoadDiagnostics::default();

        let employees = extract_employees(&workbook, &PayrollSchema::default(), &mut diagnostics);

        let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Angela Batang", "Mariana"]);
        assert_eq!(employees[0].work_days.len(), 2);
        assert_eq!(employees[0].work_days[0].date, "2025-11-03");
        assert!((employees[0].work_days[0].hours - 3.5).abs() < 1e-9);
        assert_eq!(employees[1].work_days[0].hours_display, "6h 45m");
        assert_eq!(diagnostics.skipped_sheets, vec!["Notes", "2.Paul"]);
    }

    #[test]
    fn test_custom_schema_offsets() {
        let mut range = Range::new((0, 0), (3, 2));
        range.set_value((1, 0), Data::Float(45964.0));
        range.set_value((1, 2), text("4h 0m"));
        let workbook = Workbook::from_sheets(vec![Sheet {
            name: "1.Solo".to_string(),
            range,
        }]);
        let schema = PayrollSchema {
            summary_sheets: 0,
            first_data_row: 1,
            date_column: 0,
            duration_column: 2,
            name_separator: '.',
        };
        let mut diagnostics = LoadDiagnostics::default();

        let employees = extract_employees(&workbook, &schema, &mut diagnostics);

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].work_days[0].hours_display, "4h 0m");
    }
}
