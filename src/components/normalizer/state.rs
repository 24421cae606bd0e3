use crate::components::appointments::Appointment;
use crate::components::diagnostics::LoadDiagnostics;
use crate::components::payroll::Employee;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical output of one load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedData {
    pub employees: Vec<Employee>,
    pub appointments: Vec<Appointment>,
    pub diagnostics: LoadDiagnostics,
}

impl NormalizedData {
    /// Sum of every employee's hours
    pub fn total_hours(&self) -> f64 {
        self.employees.iter().map(Employee::total_hours).sum()
    }

    /// Sum of every appointment's cost
    pub fn total_earnings(&self) -> f64 {
        self.appointments.iter().map(|apt| apt.cost).sum()
    }
}

/// State published to observers of the normalizer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizerState {
    pub employees: Vec<Employee>,
    pub appointments: Vec<Appointment>,
    /// True for the whole duration of a load
    pub is_loading: bool,
    /// Message of the last failed load, cleared when a new load starts
    pub error: Option<String>,
    /// Diagnostics of the committed data
    pub diagnostics: LoadDiagnostics,
    /// When the committed data was loaded
    pub loaded_at: Option<DateTime<Utc>>,
}

impl NormalizerState {
    /// Replace the committed collections with a fresh load
    pub fn commit(&mut self, data: &NormalizedData) {
        self.employees = data.employees.clone();
        self.appointments = data.appointments.clone();
        self.diagnostics = data.diagnostics.clone();
        self.loaded_at = Some(Utc::now());
    }
}
