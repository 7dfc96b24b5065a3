use serde::{Deserialize, Serialize};

use crate::models::preferences::UserPreferences;
use crate::models::venue::{
    EventRecord, GeoPoint, HappyHourRecord, OpeningHoursRecord, VenueRecord,
};

/// The fixed dayparts of a generated plan. Scheduling always walks
/// [`Daypart::ORDER`]; the plan is a sequence over time, not a ranked list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Daypart {
    Breakfast,
    LateMorning,
    Lunch,
    Afternoon,
    HappyHour,
    Dinner,
    Evening,
}

impl Daypart {
    pub const ORDER: [Daypart; 7] = [
        Daypart::Breakfast,
        Daypart::LateMorning,
        Daypart::Lunch,
        Daypart::Afternoon,
        Daypart::HappyHour,
        Daypart::Dinner,
        Daypart::Evening,
    ];

    pub fn index(self) -> usize {
        match self {
            Daypart::Breakfast => 0,
            Daypart::LateMorning => 1,
            Daypart::Lunch => 2,
            Daypart::Afternoon => 3,
            Daypart::HappyHour => 4,
            Daypart::Dinner => 5,
            Daypart::Evening => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    Venue,
    HappyHour,
    Event,
}

/// One filled slot of a generated plan, snapshotting the winning venue's
/// display fields at generation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub slot: Daypart,
    pub venue_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub item_type: ItemType,
    #[serde(default)]
    pub happy_hour_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub reason: String,
    #[serde(default)]
    pub distance_from_previous: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPlan {
    pub id: String,
    pub date: String,
    pub day: String,
    #[serde(default)]
    pub mood: Option<String>,
    pub items: Vec<ItineraryItem>,
    pub skipped_slots: Vec<Daypart>,
}

/// A ranked substitute for one slot, returned by the alternatives resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeCandidate {
    pub venue_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub score: f64,
    pub reason: String,
}

/// The flat read-only catalog snapshot a generation run consumes. Fetching
/// it is the caller's concern; nothing here is mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItinerarySnapshot {
    #[serde(default)]
    pub venues: Vec<VenueRecord>,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHoursRecord>,
    #[serde(default)]
    pub happy_hours: Vec<HappyHourRecord>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateItineraryInput {
    /// Target calendar date, "YYYY-MM-DD".
    pub date: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    #[serde(default)]
    pub user_location: Option<GeoPoint>,
    #[serde(default)]
    pub favorite_venue_ids: Vec<String>,
    pub snapshot: ItinerarySnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlternativesInput {
    pub date: String,
    pub slot: Daypart,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    #[serde(default)]
    pub user_location: Option<GeoPoint>,
    #[serde(default)]
    pub favorite_venue_ids: Vec<String>,
    /// Venue ids to leave out, typically everything already placed in the
    /// itinerary being edited.
    #[serde(default)]
    pub exclude_venue_ids: Vec<String>,
    #[serde(default = "default_alternatives_limit")]
    pub limit: usize,
    pub snapshot: ItinerarySnapshot,
}

fn default_alternatives_limit() -> usize {
    5
}
