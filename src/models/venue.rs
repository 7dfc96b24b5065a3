use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::time_utils;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A catalog venue, immutable for the duration of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VenueRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Opaque vote/visit tally supplied by the catalog; not computed here.
    #[serde(default)]
    pub popularity: Option<i64>,
}

/// One row of weekly opening hours. `close_time` may wrap past midnight
/// (e.g. open "22:00", close "02:00").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursRecord {
    pub venue_id: String,
    /// Lowercase English day name ("monday" .. "sunday"). Compared
    /// case-insensitively.
    pub day: String,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub close_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HappyHourRecord {
    pub id: String,
    pub venue_id: String,
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl HappyHourRecord {
    pub fn runs_on(&self, day: &str) -> bool {
        self.days.iter().any(|d| d.eq_ignore_ascii_case(day))
    }
}

/// A venue event, either pinned to a calendar date or recurring weekly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub venue_id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub recurring_days: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl EventRecord {
    pub fn occurs_on(&self, date: NaiveDate, day: &str) -> bool {
        if let Some(raw) = &self.date {
            if let Ok(event_date) = time_utils::parse_date(raw) {
                if event_date == date {
                    return true;
                }
            }
        }
        self.recurring_days
            .iter()
            .any(|d| d.eq_ignore_ascii_case(day))
    }
}
