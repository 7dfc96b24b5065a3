//! Additive heuristic scorer for slot candidates. Every term is an
//! independent, summable contribution from the tables in `slot_catalog`;
//! the category bonus and category penalty can both fire on the same venue.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::itinerary::Daypart;
use crate::models::preferences::UserPreferences;
use crate::models::venue::{GeoPoint, VenueRecord};
use crate::services::slot_catalog::{self, MoodProfile, SlotProfile};
use crate::utils::geo;

const SLOT_CATEGORY_BONUS: f64 = 30.0;
const SLOT_CATEGORY_PENALTY: f64 = 15.0;
const SLOT_CUISINE_BONUS: f64 = 20.0;
const SLOT_CUISINE_PENALTY: f64 = 10.0;
const PREFERENCE_BONUS: f64 = 15.0;
const FAVORITE_BONUS: f64 = 12.0;
const VERIFIED_BONUS: f64 = 5.0;
const OVERRIDE_BONUS: f64 = 60.0;
const SPECIAL_BONUS: f64 = 8.0;
const POPULARITY_WEIGHT: f64 = 0.2;
const POPULARITY_CAP: f64 = 10.0;

/// Step bonuses for proximity chaining: (miles threshold, bonus), strongest
/// first. Beyond `FAR_MILES` a flat penalty applies instead.
const PROXIMITY_STEPS: [(f64, f64); 4] = [(0.3, 25.0), (0.5, 18.0), (1.0, 12.0), (2.0, 6.0)];
const FAR_MILES: f64 = 3.0;
const FAR_PENALTY: f64 = 10.0;

const JITTER_MAX: f64 = 3.0;

/// Bounded random addend used purely to vary tie-breaks across repeated
/// generations. Seedable for reproducible tests, or disabled outright.
pub struct ScoreJitter {
    rng: Option<StdRng>,
}

impl ScoreJitter {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Some(StdRng::from_entropy()),
        }
    }

    pub fn disabled() -> Self {
        Self { rng: None }
    }

    pub fn next(&mut self) -> f64 {
        match &mut self.rng {
            Some(rng) => rng.gen_range(0.0..=JITTER_MAX),
            None => 0.0,
        }
    }
}

pub struct ScoreContext<'a> {
    pub profile: &'static SlotProfile,
    pub mood: Option<&'static MoodProfile>,
    pub preferences: Option<&'a UserPreferences>,
    pub favorites: &'a HashSet<String>,
    pub previous_location: Option<GeoPoint>,
    pub has_happy_hour_today: bool,
    pub has_event_today: bool,
    pub has_special_today: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VenueScore {
    pub score: f64,
    pub reason: String,
    pub distance_miles: Option<f64>,
}

pub fn score_venue(venue: &VenueRecord, ctx: &ScoreContext, jitter: &mut ScoreJitter) -> VenueScore {
    let profile = ctx.profile;
    let mut score = 0.0;
    let mut reason: Option<String> = None;

    // 1. Slot category match
    if slot_catalog::venue_has_any(&venue.categories, profile.preferred_categories) {
        score += SLOT_CATEGORY_BONUS;
        reason.get_or_insert_with(|| format!("great for {}", profile.label));
    }

    // 2. Slot category penalty, independent of the match above
    if slot_catalog::venue_has_any(&venue.categories, profile.penalty_categories) {
        score -= SLOT_CATEGORY_PENALTY;
    }

    // 3-4. Slot cuisine penalty and match
    if let Some(cuisine) = &venue.cuisine {
        if slot_catalog::list_contains(profile.penalty_cuisines, cuisine) {
            score -= SLOT_CUISINE_PENALTY;
        }
        if slot_catalog::list_contains(profile.preferred_cuisines, cuisine) {
            score += SLOT_CUISINE_BONUS;
        }
    }

    // 5. Mood boosts, summed across all matching tags
    if let Some(mood) = ctx.mood {
        for &(tag, boost) in mood.category_boosts {
            if slot_catalog::venue_has_any(&venue.categories, &[tag]) {
                score += boost;
            }
        }
        if let Some(cuisine) = &venue.cuisine {
            for &(tag, boost) in mood.cuisine_boosts {
                if tag.eq_ignore_ascii_case(cuisine) {
                    score += boost;
                }
            }
        }
    }

    // 6. User preference match
    if let (Some(preferences), Some(cuisine)) = (ctx.preferences, &venue.cuisine) {
        for label in &preferences.food_preferences {
            if slot_catalog::cuisine_for_preference(label).eq_ignore_ascii_case(cuisine) {
                score += PREFERENCE_BONUS;
                reason.get_or_insert_with(|| format!("matches your love of {}", label.trim()));
            }
        }
    }

    // 7. Proximity chaining
    let mut distance_miles = None;
    if let (Some(previous), Some(here)) = (ctx.previous_location, venue.location) {
        let miles = geo::haversine_miles(previous, here);
        distance_miles = Some(miles);

        if let Some(&(_, bonus)) = PROXIMITY_STEPS.iter().find(|(limit, _)| miles < *limit) {
            score += bonus;
            if miles < 0.5 {
                reason.get_or_insert_with(|| "right around the corner from your last stop".to_string());
            }
        } else if miles > FAR_MILES {
            score -= FAR_PENALTY;
        }
    }

    // 8. Favorites
    if ctx.favorites.contains(&venue.id) {
        score += FAVORITE_BONUS;
        reason.get_or_insert_with(|| "one of your favorites".to_string());
    }

    // 9. Verification
    if venue.is_verified {
        score += VERIFIED_BONUS;
    }

    // 10. Happy-hour / event overrides, strong enough to dominate the slot
    if profile.slot == Daypart::HappyHour && ctx.has_happy_hour_today {
        score += OVERRIDE_BONUS;
        reason = Some("happy hour is running today".to_string());
    }
    if profile.slot == Daypart::Evening && ctx.has_event_today {
        score += OVERRIDE_BONUS;
        reason = Some("hosting an event tonight".to_string());
    }

    // 11. Specials (snapshot does not populate this yet; always false in
    // the generation path)
    if ctx.has_special_today {
        score += SPECIAL_BONUS;
        reason.get_or_insert_with(|| "running a special today".to_string());
    }

    // Optional popularity signal from the catalog
    if let Some(popularity) = venue.popularity {
        if popularity > 0 {
            score += (popularity as f64 * POPULARITY_WEIGHT).min(POPULARITY_CAP);
        }
    }

    // 12. Jitter
    score += jitter.next();

    // 13. Fallback reason
    let reason = reason.unwrap_or_else(|| match &venue.cuisine {
        Some(cuisine) => format!("a local {cuisine} spot"),
        None => "a local favorite".to_string(),
    });

    VenueScore {
        score,
        reason,
        distance_miles,
    }
}
