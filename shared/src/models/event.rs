//! Event Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Event lifecycle derived from its date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Past,
}

impl EventStatus {
    /// Resolve the status of a `[start, end]` range relative to `today`
    pub fn resolve(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if today < start {
            Self::Upcoming
        } else if today <= end {
            Self::Ongoing
        } else {
            Self::Past
        }
    }

    /// Wire form, as used by `?status=` filters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Past => "past",
        }
    }

    /// Display priority: ongoing first, then upcoming, then past
    pub fn priority(&self) -> u8 {
        match self {
            Self::Ongoing => 0,
            Self::Upcoming => 1,
            Self::Past => 2,
        }
    }
}

/// Public event listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: EventStatus,
    #[serde(default)]
    pub detail_link: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_resolve_status() {
        let start = d(2026, 3, 1);
        let end = d(2026, 3, 10);
        assert_eq!(EventStatus::resolve(start, end, d(2026, 2, 28)), EventStatus::Upcoming);
        assert_eq!(EventStatus::resolve(start, end, start), EventStatus::Ongoing);
        assert_eq!(EventStatus::resolve(start, end, end), EventStatus::Ongoing);
        assert_eq!(EventStatus::resolve(start, end, d(2026, 3, 11)), EventStatus::Past);
    }

    #[test]
    fn test_as_str_matches_serde() {
        for status in [EventStatus::Upcoming, EventStatus::Ongoing, EventStatus::Past] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
