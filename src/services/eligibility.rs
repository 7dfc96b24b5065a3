use crate::models::itinerary::Daypart;
use crate::models::venue::VenueRecord;
use crate::services::slot_catalog::{self, SlotProfile};

/// Hard pass/fail filter applied before scoring. Venues that fail here are
/// invisible to the scorer and can never win the slot.
///
/// A venue passes when any one of these holds:
/// - a venue category is in the slot's category allow-list,
/// - its cuisine tag is in the slot's cuisine allow-list,
/// - the happy-hour slot and the venue has a happy hour running today,
/// - the evening slot and the venue has an event running today.
///
/// A slot with no allow-lists at all passes every active venue.
pub fn passes_gate(
    venue: &VenueRecord,
    profile: &SlotProfile,
    has_happy_hour_today: bool,
    has_event_today: bool,
) -> bool {
    if profile.gate_categories.is_empty() && profile.gate_cuisines.is_empty() {
        return true;
    }

    if slot_catalog::venue_has_any(&venue.categories, profile.gate_categories) {
        return true;
    }

    if let Some(cuisine) = &venue.cuisine {
        if slot_catalog::list_contains(profile.gate_cuisines, cuisine) {
            return true;
        }
    }

    match profile.slot {
        Daypart::HappyHour => has_happy_hour_today,
        Daypart::Evening => has_event_today,
        _ => false,
    }
}
