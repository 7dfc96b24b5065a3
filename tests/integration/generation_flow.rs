use tastetrail_core::models::itinerary::{
    Daypart, GenerateItineraryInput, ItemType, ItinerarySnapshot,
};
use tastetrail_core::models::venue::{
    GeoPoint, HappyHourRecord, OpeningHoursRecord, VenueRecord,
};
use tastetrail_core::services::itinerary_service::ItineraryGenerator;

// 2025-05-03 is a Saturday.
const SATURDAY: &str = "2025-05-03";

fn venue(id: &str, categories: &[&str], cuisine: Option<&str>) -> VenueRecord {
    VenueRecord {
        id: id.to_string(),
        name: format!("Venue {id}"),
        address: Some("100 Main St".to_string()),
        location: None,
        is_active: true,
        is_verified: false,
        categories: categories.iter().map(|c| c.to_string()).collect(),
        cuisine: cuisine.map(str::to_string),
        description: None,
        image_url: None,
        popularity: None,
    }
}

fn hours(venue_id: &str, day: &str, open: &str, close: &str) -> OpeningHoursRecord {
    OpeningHoursRecord {
        venue_id: venue_id.to_string(),
        day: day.to_string(),
        is_closed: false,
        open_time: Some(open.to_string()),
        close_time: Some(close.to_string()),
    }
}

fn input(snapshot: ItinerarySnapshot) -> GenerateItineraryInput {
    GenerateItineraryInput {
        date: SATURDAY.to_string(),
        mood: None,
        preferences: None,
        user_location: None,
        favorite_venue_ids: Vec::new(),
        snapshot,
    }
}

#[test]
fn saturday_brunch_venue_fills_breakfast_and_is_not_reused() {
    let snapshot = ItinerarySnapshot {
        venues: vec![venue("v-1", &["brunch"], Some("cafe"))],
        opening_hours: vec![hours("v-1", "saturday", "08:00", "14:00")],
        happy_hours: Vec::new(),
        events: Vec::new(),
    };

    let generator = ItineraryGenerator::new(Some(7));
    let plan = generator.generate(input(snapshot)).expect("plan");

    assert_eq!(plan.day, "saturday");
    assert_eq!(plan.items.len(), 1);

    let breakfast = &plan.items[0];
    assert_eq!(breakfast.slot, Daypart::Breakfast);
    assert_eq!(breakfast.venue_id, "v-1");
    assert!(!breakfast.reason.is_empty());
    assert_eq!(breakfast.item_type, ItemType::Venue);

    // v-1 would pass the late-morning and lunch gates too, but it is used;
    // every other slot must be visibly skipped, not silently dropped.
    assert_eq!(plan.skipped_slots.len(), Daypart::ORDER.len() - 1);
    assert!(!plan.skipped_slots.contains(&Daypart::Breakfast));
}

#[test]
fn no_venue_appears_twice_and_items_follow_daypart_order() {
    // No opening hours at all: every venue is assumed open.
    let snapshot = ItinerarySnapshot {
        venues: vec![
            venue("v-1", &["brunch", "cafes"], Some("cafe")),
            venue("v-2", &["brunch", "coffee"], Some("cafe")),
            venue("v-3", &["lunch", "sandwiches"], Some("deli")),
            venue("v-4", &["markets", "dessert"], None),
            venue("v-5", &["bars", "breweries"], Some("bar-food")),
            venue("v-6", &["dinner", "restaurants"], Some("italian")),
            venue("v-7", &["nightlife", "live-music"], Some("cocktails")),
        ],
        opening_hours: Vec::new(),
        happy_hours: Vec::new(),
        events: Vec::new(),
    };

    let generator = ItineraryGenerator::new(Some(11));
    let plan = generator.generate(input(snapshot)).expect("plan");

    let mut seen = std::collections::HashSet::new();
    for item in &plan.items {
        assert!(seen.insert(item.venue_id.clone()), "duplicate venue {}", item.venue_id);
    }

    let indexes: Vec<usize> = plan.items.iter().map(|item| item.slot.index()).collect();
    let mut sorted = indexes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(indexes, sorted, "items must follow fixed daypart order");

    assert_eq!(plan.items.len() + plan.skipped_slots.len(), Daypart::ORDER.len());
}

#[test]
fn identical_inputs_and_seed_produce_identical_plans() {
    let snapshot = ItinerarySnapshot {
        venues: vec![
            venue("v-1", &["brunch"], Some("cafe")),
            venue("v-2", &["brunch"], Some("bakery")),
            venue("v-3", &["dinner"], Some("italian")),
            venue("v-4", &["dinner"], Some("seafood")),
        ],
        opening_hours: Vec::new(),
        happy_hours: Vec::new(),
        events: Vec::new(),
    };

    let generator = ItineraryGenerator::new(Some(42));
    let first = generator.generate(input(snapshot.clone())).expect("first run");
    let second = generator.generate(input(snapshot)).expect("second run");

    assert_eq!(first.items, second.items);
    assert_eq!(first.skipped_slots, second.skipped_slots);
}

#[test]
fn live_happy_hour_wins_the_slot_with_an_override() {
    // The taqueria matches no happy-hour category; the live happy hour
    // must carry it through the gate and past the dive bar. The dessert
    // shop soaks up the unconstrained afternoon slot so the taqueria is
    // still available when happy hour comes around.
    let mut taqueria = venue("v-taq", &["restaurants"], None);
    taqueria.name = "La Esquina".to_string();
    let dive_bar = venue("v-bar", &["bars"], Some("bar-food"));
    let dessert_shop = venue("v-sweet", &["dessert"], None);

    let snapshot = ItinerarySnapshot {
        venues: vec![taqueria, dive_bar, dessert_shop],
        opening_hours: Vec::new(),
        happy_hours: vec![HappyHourRecord {
            id: "hh-1".to_string(),
            venue_id: "v-taq".to_string(),
            days: vec!["saturday".to_string()],
            start_time: "16:00".to_string(),
            end_time: "18:00".to_string(),
            label: Some("$2 tacos".to_string()),
        }],
        events: Vec::new(),
    };

    let generator = ItineraryGenerator::new(Some(3));
    let plan = generator.generate(input(snapshot)).expect("plan");

    let happy_hour_item = plan
        .items
        .iter()
        .find(|item| item.slot == Daypart::HappyHour)
        .expect("happy hour slot filled");

    assert_eq!(happy_hour_item.venue_id, "v-taq");
    assert_eq!(happy_hour_item.item_type, ItemType::HappyHour);
    assert_eq!(happy_hour_item.happy_hour_id.as_deref(), Some("hh-1"));
    assert_eq!(happy_hour_item.reason, "happy hour is running today");
}

#[test]
fn mood_excluded_slots_are_neither_filled_nor_skipped() {
    let snapshot = ItinerarySnapshot {
        venues: vec![
            venue("v-1", &["brunch"], Some("cafe")),
            venue("v-2", &["bars", "nightlife"], Some("cocktails")),
        ],
        opening_hours: Vec::new(),
        happy_hours: Vec::new(),
        events: Vec::new(),
    };

    let mut request = input(snapshot);
    request.mood = Some("bar-crawl".to_string());

    let generator = ItineraryGenerator::new(Some(5));
    let plan = generator.generate(request).expect("plan");

    for excluded in [
        Daypart::Breakfast,
        Daypart::LateMorning,
        Daypart::Lunch,
        Daypart::Afternoon,
    ] {
        assert!(plan.items.iter().all(|item| item.slot != excluded));
        assert!(!plan.skipped_slots.contains(&excluded));
    }
}

#[test]
fn unknown_mood_is_rejected() {
    let generator = ItineraryGenerator::new(Some(1));
    let mut request = input(ItinerarySnapshot::default());
    request.mood = Some("speedrun".to_string());

    assert!(generator.generate(request).is_err());
}

#[test]
fn empty_snapshot_skips_every_slot() {
    let generator = ItineraryGenerator::new(Some(1));
    let plan = generator.generate(input(ItinerarySnapshot::default())).expect("plan");

    assert!(plan.items.is_empty());
    assert_eq!(plan.skipped_slots, Daypart::ORDER.to_vec());
}

#[test]
fn closer_dinner_candidate_beats_the_distant_one() {
    let user = GeoPoint {
        latitude: 39.7392,
        longitude: -104.9903,
    };

    // Picked first (afternoon, unconstrained slot) and sitting at the
    // user's location, so dinner chains from here.
    let mut gallery = venue("v-gallery", &["galleries"], None);
    gallery.location = Some(user);

    let mut near = venue("v-near", &["dinner"], None);
    near.location = Some(GeoPoint {
        latitude: 39.7406,
        longitude: -104.9903,
    });
    let mut far = venue("v-far", &["dinner"], None);
    far.location = Some(GeoPoint {
        latitude: 39.7972,
        longitude: -104.9903,
    });

    let snapshot = ItinerarySnapshot {
        venues: vec![gallery, near, far],
        opening_hours: Vec::new(),
        happy_hours: Vec::new(),
        events: Vec::new(),
    };

    let mut request = input(snapshot);
    request.user_location = Some(user);

    let generator = ItineraryGenerator::new(Some(9));
    let plan = generator.generate(request).expect("plan");

    let afternoon = plan
        .items
        .iter()
        .find(|item| item.slot == Daypart::Afternoon)
        .expect("afternoon filled");
    assert_eq!(afternoon.venue_id, "v-gallery");
    assert!(afternoon.distance_from_previous.is_none(), "first stop has no walk");

    let dinner = plan
        .items
        .iter()
        .find(|item| item.slot == Daypart::Dinner)
        .expect("dinner filled");
    assert_eq!(dinner.venue_id, "v-near");
    assert!(dinner.distance_from_previous.is_some());
}
