use super::models::{RawEntry, WorkDay};
use crate::components::diagnostics::{CellIssue, LoadDiagnostics};
use crate::utils::date::{is_canonical_date, normalize_date};
use crate::utils::duration::{format_hours, try_parse_hours};
use std::collections::HashMap;
use tracing::debug;

/// Merge shift entries into one work-day per date.
///
/// Dates keep the order of their first occurrence. Unparseable durations count as
/// zero hours and unparseable dates are kept verbatim; both are recorded in
/// `diagnostics` under `sheet_name`.
pub fn aggregate_work_days(
    sheet_name: &str,
    entries: &[RawEntry],
    diagnostics: &mut LoadDiagnostics,
) -> Vec<WorkDay> {
    let mut work_days: Vec<WorkDay> = Vec::new();
    let mut index_by_date: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let date = normalize_date(&entry.date);
        if !is_canonical_date(&date) {
            debug!("Keeping non-canonical date '{}' on {} row {}", date, sheet_name, entry.row);
            diagnostics
                .non_canonical_dates
                .push(CellIssue::new(sheet_name, entry.row, date.clone()));
        }

        let hours = match try_parse_hours(&entry.duration_text) {
            Some(hours) => hours,
            None => {
                debug!(
                    "Unparsed duration '{}' on {} row {}",
                    entry.duration_text, sheet_name, entry.row
                );
                diagnostics.unparsed_durations.push(CellIssue::new(
                    sheet_name,
                    entry.row,
                    entry.duration_text.clone(),
                ));
                0.0
            }
        };

        match index_by_date.get(&date) {
            Some(&index) => work_days[index].hours += hours,
            None => {
                index_by_date.insert(date.clone(), work_days.len());
                work_days.push(WorkDay {
                    date,
                    hours,
                    hours_display: String::new(),
                });
            }
        }
    }

    for day in &mut work_days {
        day.hours_display = format_hours(day.hours);
    }

    work_days
}
