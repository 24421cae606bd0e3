mod aggregator;
mod extractor;
pub mod models;

pub use aggregator::aggregate_work_days;
pub use extractor::{employee_name, extract_employee_sheets, extract_employees, extract_entries};
pub use models::{Employee, EmployeeSheet, RawEntry, WorkDay};
