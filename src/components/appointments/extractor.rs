use super::models::Appointment;
use crate::components::diagnostics::{CellIssue, LoadDiagnostics};
use crate::components::workbook::{Sheet, Workbook};
use crate::error::{sheet_error, NormalizerResult};
use crate::schema::AppointmentColumns;
use crate::utils::cell::{cell_amount, cell_text, EMPTY_CELL};
use crate::utils::date::{is_canonical_date, normalize_date};
use calamine::Data;
use std::collections::HashMap;
use tracing::{debug, info};

/// Column positions resolved from the header row
struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    fn from_header(header: &[Data]) -> Self {
        let mut positions = HashMap::new();
        for (index, cell) in header.iter().enumerate() {
            if let Some(name) = cell_text(cell) {
                // First column wins when a header repeats
                positions.entry(name.trim().to_string()).or_insert(index);
            }
        }
        Self { positions }
    }

    fn cell<'a>(&self, row: &'a [Data], column: &str) -> &'a Data {
        self.positions
            .get(column)
            .and_then(|&index| row.get(index))
            .unwrap_or(&EMPTY_CELL)
    }

    fn text(&self, row: &[Data], column: &str) -> Option<String> {
        cell_text(self.cell(row, column))
    }
}

/// Map each data row of the appointment sheet to an appointment.
///
/// The first row of the used range is the header. Rows without a date or a
/// customer name are dropped; fully blank rows are ignored. Duplicates are kept.
pub fn extract_sheet_appointments(
    sheet: &Sheet,
    columns: &AppointmentColumns,
    diagnostics: &mut LoadDiagnostics,
) -> Vec<Appointment> {
    let mut rows = sheet.range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let index = ColumnIndex::from_header(header);
    let first_row = sheet.range.start().map(|(row, _)| row).unwrap_or(0);

    let mut appointments = Vec::new();
    for (offset, row) in rows.enumerate() {
        let row_number = first_row + 1 + offset as u32;
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let date_cell = index.cell(row, &columns.date);
        let date = match date_cell {
            Data::Empty => None,
            cell => Some(normalize_date(cell)).filter(|date| !date.is_empty()),
        };
        let customer = index.text(row, &columns.customer);

        let (Some(date), Some(customer)) = (date, customer) else {
            debug!("Dropping appointment row {}: missing date or customer", row_number);
            diagnostics.dropped_appointments += 1;
            continue;
        };

        if !is_canonical_date(&date) {
            diagnostics
                .non_canonical_dates
                .push(CellIssue::new(&sheet.name, row_number, date.clone()));
        }

        let cost_cell = index.cell(row, &columns.cost);
        let cost = match cell_amount(cost_cell) {
            Some(cost) => cost,
            None => {
                if let Some(raw) = cell_text(cost_cell) {
                    diagnostics
                        .unparsed_costs
                        .push(CellIssue::new(&sheet.name, row_number, raw));
                }
                0.0
            }
        };

        appointments.push(Appointment {
            date,
            time: index.text(row, &columns.time),
            service: index.text(row, &columns.service),
            cost,
            team: index.text(row, &columns.team),
            customer,
            address: index.text(row, &columns.address),
            city: index.text(row, &columns.city),
            status: index.text(row, &columns.status),
            booking_id: index.text(row, &columns.booking_id),
        });
    }

    appointments
}

/// Extract appointments from the first sheet of an appointment workbook
pub fn extract_appointments(
    workbook: &Workbook,
    columns: &AppointmentColumns,
    diagnostics: &mut LoadDiagnostics,
) -> NormalizerResult<Vec<Appointment>> {
    let sheet = workbook
        .first_sheet()
        .ok_or_else(|| sheet_error("Appointment workbook has no sheets"))?;

    let appointments = extract_sheet_appointments(sheet, columns, diagnostics);
    info!(
        "Extracted {} appointments from sheet '{}'",
        appointments.len(),
        sheet.name
    );
    Ok(appointments)
}
