use crate::components::appointments::earnings_by_team_member;
use crate::components::normalizer::NormalizedData;
use crate::utils::duration::format_hours;
use std::fmt::Write;

/// Plain-text overview of a load
pub fn render_summary(data: &NormalizedData) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Employees: {} ({} total)",
        data.employees.len(),
        format_hours(data.total_hours())
    );
    for employee in &data.employees {
        let _ = writeln!(
            out,
            "  {}: {} over {} days",
            employee.name,
            format_hours(employee.total_hours()),
            employee.work_days.len()
        );
    }

    let _ = writeln!(
        out,
        "Appointments: {} ({:.2} total)",
        data.appointments.len(),
        data.total_earnings()
    );
    for (member, earnings) in earnings_by_team_member(&data.appointments) {
        let _ = writeln!(out, "  {}: {:.2}", member, earnings);
    }

    let diagnostics = &data.diagnostics;
    if diagnostics.is_clean() {
        out.push_str("No data issues");
    } else {
        let _ = write!(
            out,
            "Data issues: {} unparsed durations, {} non-canonical dates, {} skipped sheets, \
             {} dropped shift rows, {} dropped appointments, {} unparsed costs",
            diagnostics.unparsed_durations.len(),
            diagnostics.non_canonical_dates.len(),
            diagnostics.skipped_sheets.len(),
            diagnostics.dropped_shift_rows,
            diagnostics.dropped_appointments,
            diagnostics.unparsed_costs.len()
        );
    }

    out
}
