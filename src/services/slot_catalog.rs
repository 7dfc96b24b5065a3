//! Static heuristic tables for the itinerary generator: per-slot time
//! windows, gate allow-lists, thematic bonuses/penalties, mood presets and
//! the food-preference-to-cuisine mapping. Tuning the heuristic means
//! editing these tables, not control flow.

use crate::models::itinerary::Daypart;

#[derive(Debug)]
pub struct SlotProfile {
    pub slot: Daypart,
    pub label: &'static str,
    /// Clock window in minutes since midnight.
    pub window_start: i64,
    pub window_end: i64,
    /// Eligibility allow-lists. Both empty means every active venue passes
    /// (an unconstrained "activity" slot).
    pub gate_categories: &'static [&'static str],
    pub gate_cuisines: &'static [&'static str],
    /// Scoring lists, independent of the gate.
    pub preferred_categories: &'static [&'static str],
    pub preferred_cuisines: &'static [&'static str],
    pub penalty_categories: &'static [&'static str],
    pub penalty_cuisines: &'static [&'static str],
}

/// Indexed by `Daypart::index()`; order must match `Daypart::ORDER`.
pub const SLOT_PROFILES: [SlotProfile; 7] = [
    SlotProfile {
        slot: Daypart::Breakfast,
        label: "breakfast",
        window_start: 7 * 60,
        window_end: 10 * 60,
        gate_categories: &["breakfast", "brunch", "cafes", "coffee", "bakeries", "diners"],
        gate_cuisines: &["cafe", "bakery", "breakfast", "diner"],
        preferred_categories: &["breakfast", "brunch", "bakeries", "diners"],
        preferred_cuisines: &["cafe", "bakery", "diner"],
        penalty_categories: &["bars", "nightlife", "cocktail-bars", "breweries"],
        penalty_cuisines: &["bar-food", "cocktails"],
    },
    SlotProfile {
        slot: Daypart::LateMorning,
        label: "a late morning stop",
        window_start: 10 * 60,
        window_end: 12 * 60,
        gate_categories: &["brunch", "cafes", "coffee", "bakeries", "markets", "juice-bars"],
        gate_cuisines: &["cafe", "bakery", "juice"],
        preferred_categories: &["brunch", "cafes", "coffee"],
        preferred_cuisines: &["cafe"],
        penalty_categories: &["nightlife", "cocktail-bars"],
        penalty_cuisines: &["cocktails"],
    },
    SlotProfile {
        slot: Daypart::Lunch,
        label: "lunch",
        window_start: 11 * 60 + 30,
        window_end: 14 * 60,
        gate_categories: &["lunch", "sandwiches", "delis", "casual", "food-trucks", "brunch"],
        gate_cuisines: &[
            "sandwiches", "deli", "pizza", "burgers", "mexican", "salads", "american",
        ],
        preferred_categories: &["lunch", "sandwiches", "delis", "food-trucks"],
        preferred_cuisines: &["sandwiches", "deli", "salads"],
        penalty_categories: &["nightlife", "fine-dining"],
        penalty_cuisines: &["cocktails"],
    },
    SlotProfile {
        slot: Daypart::Afternoon,
        label: "an afternoon break",
        window_start: 14 * 60,
        window_end: 17 * 60,
        // Unconstrained activity slot: the gate passes every active venue.
        gate_categories: &[],
        gate_cuisines: &[],
        preferred_categories: &["coffee", "dessert", "ice-cream", "markets", "galleries"],
        preferred_cuisines: &["cafe", "dessert"],
        penalty_categories: &[],
        penalty_cuisines: &[],
    },
    SlotProfile {
        slot: Daypart::HappyHour,
        label: "happy hour",
        window_start: 16 * 60,
        window_end: 18 * 60 + 30,
        gate_categories: &["bars", "breweries", "cocktail-bars", "wineries", "happy-hour"],
        gate_cuisines: &["bar-food", "tapas", "cocktails"],
        preferred_categories: &["bars", "breweries", "cocktail-bars", "happy-hour"],
        preferred_cuisines: &["bar-food", "tapas"],
        penalty_categories: &["bakeries"],
        penalty_cuisines: &["bakery"],
    },
    SlotProfile {
        slot: Daypart::Dinner,
        label: "dinner",
        window_start: 18 * 60,
        window_end: 21 * 60,
        gate_categories: &["dinner", "restaurants", "fine-dining", "casual", "steakhouses"],
        gate_cuisines: &[
            "italian", "mexican", "american", "seafood", "steakhouse", "sushi", "thai",
            "indian", "french", "bbq", "pizza",
        ],
        preferred_categories: &["dinner", "restaurants", "fine-dining", "steakhouses"],
        preferred_cuisines: &["italian", "seafood", "steakhouse", "sushi", "french"],
        penalty_categories: &["coffee", "bakeries"],
        penalty_cuisines: &["cafe", "bakery"],
    },
    SlotProfile {
        slot: Daypart::Evening,
        label: "the evening",
        window_start: 20 * 60,
        window_end: 23 * 60 + 30,
        gate_categories: &[
            "bars", "nightlife", "live-music", "cocktail-bars", "breweries", "lounges",
            "rooftops",
        ],
        gate_cuisines: &["cocktails", "bar-food"],
        preferred_categories: &["nightlife", "live-music", "cocktail-bars", "rooftops"],
        preferred_cuisines: &["cocktails"],
        penalty_categories: &["bakeries", "coffee"],
        penalty_cuisines: &["cafe", "bakery"],
    },
];

pub fn profile_for(slot: Daypart) -> &'static SlotProfile {
    &SLOT_PROFILES[slot.index()]
}

#[derive(Debug)]
pub struct MoodProfile {
    pub id: &'static str,
    pub label: &'static str,
    pub category_boosts: &'static [(&'static str, f64)],
    pub cuisine_boosts: &'static [(&'static str, f64)],
    pub excluded_slots: &'static [Daypart],
}

pub const MOOD_PROFILES: [MoodProfile; 4] = [
    MoodProfile {
        id: "date-night",
        label: "Date Night",
        category_boosts: &[
            ("fine-dining", 20.0),
            ("cocktail-bars", 15.0),
            ("rooftops", 12.0),
            ("wineries", 12.0),
            ("live-music", 8.0),
        ],
        cuisine_boosts: &[("italian", 10.0), ("french", 12.0), ("sushi", 8.0)],
        excluded_slots: &[Daypart::Breakfast, Daypart::LateMorning],
    },
    MoodProfile {
        id: "bar-crawl",
        label: "Bar Crawl",
        category_boosts: &[
            ("bars", 25.0),
            ("breweries", 20.0),
            ("cocktail-bars", 20.0),
            ("nightlife", 15.0),
            ("lounges", 10.0),
        ],
        cuisine_boosts: &[("bar-food", 15.0), ("cocktails", 12.0)],
        excluded_slots: &[
            Daypart::Breakfast,
            Daypart::LateMorning,
            Daypart::Lunch,
            Daypart::Afternoon,
        ],
    },
    MoodProfile {
        id: "brunch-lover",
        label: "Brunch Lover",
        category_boosts: &[("brunch", 25.0), ("cafes", 15.0), ("bakeries", 10.0)],
        cuisine_boosts: &[("cafe", 10.0), ("bakery", 8.0)],
        excluded_slots: &[Daypart::Evening],
    },
    MoodProfile {
        id: "family-day",
        label: "Family Day",
        category_boosts: &[
            ("casual", 15.0),
            ("ice-cream", 12.0),
            ("markets", 10.0),
            ("diners", 8.0),
        ],
        cuisine_boosts: &[("pizza", 10.0), ("burgers", 8.0)],
        excluded_slots: &[Daypart::HappyHour, Daypart::Evening],
    },
];

pub fn mood_profile(id: &str) -> Option<&'static MoodProfile> {
    MOOD_PROFILES.iter().find(|m| m.id.eq_ignore_ascii_case(id))
}

/// Free-text food preference labels mapped to cuisine tags. Labels not in
/// the table are treated as cuisine tags themselves.
const FOOD_PREFERENCE_CUISINES: &[(&str, &str)] = &[
    ("tacos", "mexican"),
    ("pasta", "italian"),
    ("sushi", "sushi"),
    ("ramen", "japanese"),
    ("pizza", "pizza"),
    ("burgers", "burgers"),
    ("bbq", "bbq"),
    ("seafood", "seafood"),
    ("steak", "steakhouse"),
    ("wings", "bar-food"),
    ("coffee", "cafe"),
    ("pastries", "bakery"),
    ("curry", "indian"),
];

pub fn cuisine_for_preference(label: &str) -> String {
    let trimmed = label.trim();
    FOOD_PREFERENCE_CUISINES
        .iter()
        .find(|(pref, _)| pref.eq_ignore_ascii_case(trimmed))
        .map(|(_, cuisine)| (*cuisine).to_string())
        .unwrap_or_else(|| trimmed.to_ascii_lowercase())
}

pub fn list_contains(list: &[&str], tag: &str) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(tag))
}

pub fn venue_has_any(categories: &[String], list: &[&str]) -> bool {
    categories.iter().any(|tag| list_contains(list, tag))
}
