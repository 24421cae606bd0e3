mod extractor;
pub mod models;

pub use extractor::{extract_appointments, extract_sheet_appointments};
pub use models::{appointments_on, appointments_per_date, earnings_by_team_member, Appointment};
