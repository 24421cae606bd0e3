use calamine::Data;
use serde::{Deserialize, Serialize};

/// One shift row as found on an employee sheet
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    /// Date cell exactly as stored (serial number or text)
    pub date: Data,
    /// Duration text in "Xh Ym" form
    pub duration_text: String,
    /// Zero-based row the entry came from
    pub row: u32,
}

impl RawEntry {
    pub fn new(date: Data, duration_text: impl Into<String>, row: u32) -> Self {
        Self {
            date,
            duration_text: duration_text.into(),
            row,
        }
    }
}

/// Shift rows of one employee sheet, in sheet order
#[derive(Debug, Clone)]
pub struct EmployeeSheet {
    pub name: String,
    pub sheet_name: String,
    pub entries: Vec<RawEntry>,
}

/// Represents one employee's total hours on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDay {
    /// The date of the work-day (YYYY-MM-DD)
    pub date: String,
    /// Summed hours of every shift on that date
    pub hours: f64,
    /// `hours` rendered as "Xh Ym"
    pub hours_display: String,
}

/// An employee and their work-days in first-seen order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    pub work_days: Vec<WorkDay>,
}

impl Employee {
    /// Total hours across every work-day
    pub fn total_hours(&self) -> f64 {
        self.work_days.iter().map(|day| day.hours).sum()
    }

    /// Hours worked on a canonical date, if any
    pub fn hours_on(&self, date: &str) -> Option<f64> {
        self.work_days
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.hours)
    }

    /// Work-days falling inside an inclusive canonical date range
    pub fn work_days_between<'a>(
        &'a self,
        start_date: &'a str,
        end_date: &'a str,
    ) -> impl Iterator<Item = &'a WorkDay> + 'a {
        self.work_days
            .iter()
            .filter(move |day| day.date.as_str() >= start_date && day.date.as_str() <= end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee {
            name: "Angela Batang".to_string(),
            work_days: vec![
                WorkDay {
                    date: "2025-11-04".to_string(),
                    hours: 3.5,
                    hours_display: "3h 30m".to_string(),
                },
                WorkDay {
                    date: "2025-11-03".to_string(),
                    hours: 8.0,
                    hours_display: "8h 0m".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_totals() {
        let employee = employee();
        assert!((employee.total_hours() - 11.5).abs() < 1e-9);
        assert_eq!(employee.hours_on("2025-11-03"), Some(8.0));
        assert_eq!(employee.hours_on("2025-11-05"), None);
    }

    #[test]
    fn test_work_days_between() {
        let employee = employee();
        let dates: Vec<&str> = employee
            .work_days_between("2025-11-04", "2025-11-08")
            .map(|day| day.date.as_str())
            .collect();
        assert_eq!(dates, vec!["2025-11-04"]);
    }

    #[test]
    fn test_serializes_with_downstream_field_names() {
        let json = serde_json::to_value(employee()).unwrap();
        assert_eq!(json["workDays"][0]["hoursDisplay"], "3h 30m");
        assert_eq!(json["name"], "Angela Batang");
    }
}
