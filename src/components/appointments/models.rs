use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents one booked appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Appointment date (YYYY-MM-DD when the source date was readable)
    pub date: String,
    pub time: Option<String>,
    pub service: Option<String>,
    pub cost: f64,
    /// Team member who served the appointment
    pub team: Option<String>,
    pub customer: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub status: Option<String>,
    pub booking_id: Option<String>,
}

/// Appointments on a canonical date
pub fn appointments_on<'a>(
    appointments: &'a [Appointment],
    date: &'a str,
) -> impl Iterator<Item = &'a Appointment> + 'a {
    appointments.iter().filter(move |apt| apt.date == date)
}

/// Summed cost per team member, keyed by name
pub fn earnings_by_team_member(appointments: &[Appointment]) -> BTreeMap<String, f64> {
    let mut earnings = BTreeMap::new();
    for apt in appointments {
        if let Some(team) = &apt.team {
            *earnings.entry(team.clone()).or_insert(0.0) += apt.cost;
        }
    }
    earnings
}

/// Number of appointments per canonical date
pub fn appointments_per_date(appointments: &[Appointment]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for apt in appointments {
        *counts.entry(apt.date.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(date: &str, team: Option<&str>, cost: f64) -> Appointment {
        Appointment {
            date: date.to_string(),
            time: None,
            service: Some("Cleaning".to_string()),
            cost,
            team: team.map(str::to_string),
            customer: "Jane Doe".to_string(),
            address: None,
            city: None,
            status: Some("Completed".to_string()),
            booking_id: None,
        }
    }

    #[test]
    fn test_summaries() {
        let appointments = vec![
            appointment("2025-11-03", Some("Angela Batang"), 120.0),
            appointment("2025-11-03", Some("Paul"), 80.0),
            appointment("2025-11-04", Some("Angela Batang"), 60.5),
            appointment("2025-11-04", None, 40.0),
        ];

        let earnings = earnings_by_team_member(&appointments);
        assert_eq!(earnings.len(), 2);
        assert!((earnings["Angela Batang"] - 180.5).abs() < 1e-9);
        assert!((earnings["Paul"] - 80.0).abs() < 1e-9);

        let per_date = appointments_per_date(&appointments);
        assert_eq!(per_date["2025-11-03"], 2);
        assert_eq!(per_date["2025-11-04"], 2);

        assert_eq!(appointments_on(&appointments, "2025-11-04").count(), 2);
    }
}
