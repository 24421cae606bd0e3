//! Shared fixtures: in-memory workbooks and a local HTTP server serving them.

#![allow(dead_code)]

use mpi_normalizer::config::Config;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tiny_http::{Response, Server, StatusCode};
use tokio::sync::RwLock;

pub const APPOINTMENT_HEADER: [&str; 10] = [
    "Appointment date",
    "Appointment time",
    "Service/class/event",
    "Cost",
    "Team member",
    "Customer name",
    "Address",
    "City",
    "Status",
    "Booking ID",
];

/// Payroll workbook with a summary sheet, two employees and one unlabelled sheet.
///
/// "1.Jane Doe" holds two shifts on 2025-01-01 (one serial, one text), one
/// date-formatted shift on 2025-01-02, then a blank date row followed by a shift
/// that must never be read. "2.John Smith" holds one text-dated shift.
pub fn payroll_workbook() -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let summary = workbook.add_worksheet();
    summary.set_name("Summary")?;
    summary.write_string(0, 0, "Payroll summary")?;
    summary.write_string(6, 1, "Total")?;
    summary.write_string(6, 4, "99h 0m")?;

    let jane = workbook.add_worksheet();
    jane.set_name("1.Jane Doe")?;
    write_payroll_header(jane)?;
    jane.write_number(6, 1, 45658.0)?;
    jane.write_string(6, 4, "2h 0m")?;
    jane.write_string(7, 1, "2025-01-01")?;
    jane.write_string(7, 4, "1h 30m")?;
    jane.write_number_with_format(8, 1, 45659.0, &date_format)?;
    jane.write_string(8, 4, "3h 0m")?;
    jane.write_string(10, 1, "2025-01-05")?;
    jane.write_string(10, 4, "8h 0m")?;

    let john = workbook.add_worksheet();
    john.set_name("2.John Smith")?;
    write_payroll_header(john)?;
    john.write_string(6, 1, "2025-01-03")?;
    john.write_string(6, 4, "0h 45m")?;

    let notes = workbook.add_worksheet();
    notes.set_name("Notes")?;
    notes.write_string(6, 1, "2025-01-01")?;
    notes.write_string(6, 4, "1h 0m")?;

    workbook.save_to_buffer()
}

fn write_payroll_header(sheet: &mut rust_xlsxwriter::Worksheet) -> Result<(), XlsxError> {
    sheet.write_string(0, 0, "Payroll report")?;
    sheet.write_string(5, 1, "Start date")?;
    sheet.write_string(5, 4, "Duration")?;
    Ok(())
}

/// Appointment workbook with two valid rows and one row missing its customer
pub fn appointments_workbook() -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Appointments")?;

    for (column, name) in APPOINTMENT_HEADER.iter().enumerate() {
        sheet.write_string(0, column as u16, *name)?;
    }

    sheet.write_string(1, 0, "2025-01-01")?;
    sheet.write_string(1, 1, "10:00")?;
    sheet.write_string(1, 2, "Deep clean")?;
    sheet.write_number(1, 3, 120.0)?;
    sheet.write_string(1, 4, "Jane")?;
    sheet.write_string(1, 5, "Alice")?;
    sheet.write_string(1, 6, "1 Main St")?;
    sheet.write_string(1, 7, "Springfield")?;
    sheet.write_string(1, 8, "Completed")?;
    sheet.write_string(1, 9, "B-1")?;

    sheet.write_number(2, 0, 45659.0)?;
    sheet.write_string(2, 3, "$1,234.50")?;
    sheet.write_string(2, 4, "John")?;
    sheet.write_string(2, 5, "Bob")?;

    sheet.write_string(3, 0, "2025-01-03")?;
    sheet.write_number(3, 3, 80.0)?;
    sheet.write_string(3, 4, "Jane")?;

    workbook.save_to_buffer()
}

/// Serve the two workbooks on an ephemeral port.
///
/// `/payroll.xlsx` and `/appointments.xlsx` return the fixtures; anything else is
/// a 404. The appointment response is held back for `appointments_delay`.
pub fn serve_workbooks(appointments_delay: Duration) -> SocketAddr {
    let payroll = Arc::new(payroll_workbook().unwrap());
    let appointments = Arc::new(appointments_workbook().unwrap());

    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();

    thread::spawn(move || {
        for request in server.incoming_requests() {
            let payroll = Arc::clone(&payroll);
            let appointments = Arc::clone(&appointments);
            thread::spawn(move || {
                let url = request.url().to_string();
                let result = match url.as_str() {
                    "/payroll.xlsx" => request.respond(Response::from_data(payroll.to_vec())),
                    "/appointments.xlsx" => {
                        thread::sleep(appointments_delay);
                        request.respond(Response::from_data(appointments.to_vec()))
                    }
                    _ => request.respond(Response::empty(StatusCode(404))),
                };
                let _ = result;
            });
        }
    });

    addr
}

/// Config pointing at a local workbook server
pub fn config_for(addr: SocketAddr) -> Arc<RwLock<Config>> {
    Arc::new(RwLock::new(Config {
        base_url: format!("http://{}", addr),
        fetch_timeout_secs: 10,
        ..Default::default()
    }))
}
