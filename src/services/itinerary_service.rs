//! Greedy single-pass slot-fill scheduler and the alternatives resolver.
//!
//! The scheduler walks the fixed daypart order, gating and scoring the
//! remaining venues for each slot and chaining the last pick's location
//! into the next slot's proximity scoring. An early high-scoring pick can
//! starve a later slot of a good candidate; that is accepted behavior, not
//! a bug, and there is deliberately no lookahead or backtracking.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::itinerary::{
    AlternativeCandidate, AlternativesInput, Daypart, GenerateItineraryInput, ItemType,
    ItineraryItem, ItineraryPlan, ItinerarySnapshot,
};
use crate::models::preferences::UserPreferences;
use crate::models::venue::{
    EventRecord, GeoPoint, HappyHourRecord, OpeningHoursRecord, VenueRecord,
};
use crate::services::scoring_service::{self, ScoreContext, ScoreJitter, VenueScore};
use crate::services::slot_catalog::{self, MoodProfile};
use crate::services::{eligibility, open_hours, time_utils};

pub struct ItineraryGenerator {
    seed: Option<u64>,
}

struct SlotCandidate<'a> {
    venue: &'a VenueRecord,
    happy_hour: Option<&'a HappyHourRecord>,
    event: Option<&'a EventRecord>,
    score: VenueScore,
}

/// Per-day view over the snapshot: hours grouped by venue, plus the happy
/// hours and events live on the target day.
struct DayContext<'a> {
    day: &'static str,
    hours_by_venue: HashMap<&'a str, Vec<&'a OpeningHoursRecord>>,
    happy_hours_today: HashMap<&'a str, &'a HappyHourRecord>,
    events_today: HashMap<&'a str, &'a EventRecord>,
}

impl<'a> DayContext<'a> {
    fn build(snapshot: &'a ItinerarySnapshot, date: &str) -> AppResult<Self> {
        let date = time_utils::parse_date(date)?;
        let day = time_utils::day_name(date);

        let mut hours_by_venue: HashMap<&str, Vec<&OpeningHoursRecord>> = HashMap::new();
        for row in &snapshot.opening_hours {
            hours_by_venue
                .entry(row.venue_id.as_str())
                .or_default()
                .push(row);
        }

        let happy_hours_today = snapshot
            .happy_hours
            .iter()
            .filter(|hh| hh.runs_on(day))
            .map(|hh| (hh.venue_id.as_str(), hh))
            .collect();
        let events_today = snapshot
            .events
            .iter()
            .filter(|ev| ev.occurs_on(date, day))
            .map(|ev| (ev.venue_id.as_str(), ev))
            .collect();

        Ok(Self {
            day,
            hours_by_venue,
            happy_hours_today,
            events_today,
        })
    }

    /// Venues with zero hours rows are assumed open; incomplete catalog
    /// data must never hide a venue.
    fn is_open(&self, venue_id: &str, window_start: i64, window_end: i64) -> bool {
        match self.hours_by_venue.get(venue_id) {
            None => true,
            Some(rows) => open_hours::is_open_during(rows, self.day, window_start, window_end),
        }
    }
}

impl ItineraryGenerator {
    /// `seed` fixes the scoring jitter for reproducible output; `None`
    /// draws fresh entropy per run for day-to-day variety.
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn jitter(&self) -> ScoreJitter {
        match self.seed {
            Some(seed) => ScoreJitter::seeded(seed),
            None => ScoreJitter::from_entropy(),
        }
    }

    pub fn generate(&self, input: GenerateItineraryInput) -> AppResult<ItineraryPlan> {
        let day_ctx = DayContext::build(&input.snapshot, &input.date)?;
        let mood = resolve_mood(input.mood.as_deref())?;
        let favorites: HashSet<String> = input.favorite_venue_ids.iter().cloned().collect();
        let mut jitter = self.jitter();

        let mut used: HashSet<String> = HashSet::new();
        let mut last_location = input.user_location;
        let mut items: Vec<ItineraryItem> = Vec::new();
        let mut skipped_slots: Vec<Daypart> = Vec::new();

        for slot in Daypart::ORDER {
            if mood.map_or(false, |m| m.excluded_slots.contains(&slot)) {
                continue;
            }

            let mut candidates = score_slot(
                slot,
                &input.snapshot,
                &day_ctx,
                mood,
                input.preferences.as_ref(),
                &favorites,
                last_location,
                &used,
                &mut jitter,
            );

            let winner = match candidates.pop() {
                Some(winner) => winner,
                None => {
                    debug!(target: "app::itinerary", slot = ?slot, "no eligible open venues, skipping slot");
                    skipped_slots.push(slot);
                    continue;
                }
            };

            debug!(
                target: "app::itinerary",
                slot = ?slot,
                venue = %winner.venue.name,
                score = winner.score.score,
                remaining = candidates.len(),
                "filled slot"
            );

            used.insert(winner.venue.id.clone());
            if let Some(location) = winner.venue.location {
                last_location = Some(location);
            }
            // The annotation describes the walk from the previous stop, so
            // the first stop of the day never carries one.
            let annotate = !items.is_empty();
            items.push(build_item(slot, &winner, annotate));
        }

        info!(
            target: "app::itinerary",
            date = %input.date,
            day = %day_ctx.day,
            mood = input.mood.as_deref().unwrap_or("none"),
            items = items.len(),
            skipped = skipped_slots.len(),
            "generated itinerary"
        );

        Ok(ItineraryPlan {
            id: Uuid::new_v4().to_string(),
            date: input.date,
            day: day_ctx.day.to_string(),
            mood: input.mood,
            items,
            skipped_slots,
        })
    }

    /// Re-runs gate, hours and scoring for a single slot against an
    /// explicit exclusion set and returns the top candidates, best first.
    /// Mutates nothing; an empty result means no substitutes exist, which
    /// is a valid outcome.
    pub fn alternatives(&self, input: AlternativesInput) -> AppResult<Vec<AlternativeCandidate>> {
        let day_ctx = DayContext::build(&input.snapshot, &input.date)?;
        let mood = resolve_mood(input.mood.as_deref())?;
        let favorites: HashSet<String> = input.favorite_venue_ids.iter().cloned().collect();
        let excluded: HashSet<String> = input.exclude_venue_ids.iter().cloned().collect();
        let mut jitter = self.jitter();

        let mut candidates = score_slot(
            input.slot,
            &input.snapshot,
            &day_ctx,
            mood,
            input.preferences.as_ref(),
            &favorites,
            input.user_location,
            &excluded,
            &mut jitter,
        );

        debug!(
            target: "app::itinerary",
            slot = ?input.slot,
            candidates = candidates.len(),
            excluded = excluded.len(),
            "resolved alternatives"
        );

        let mut alternatives = Vec::with_capacity(input.limit.min(candidates.len()));
        while alternatives.len() < input.limit {
            let candidate = match candidates.pop() {
                Some(candidate) => candidate,
                None => break,
            };
            alternatives.push(AlternativeCandidate {
                venue_id: candidate.venue.id.clone(),
                name: candidate.venue.name.clone(),
                address: candidate.venue.address.clone(),
                location: candidate.venue.location,
                image_url: candidate.venue.image_url.clone(),
                score: candidate.score.score,
                reason: candidate.score.reason,
            });
        }

        Ok(alternatives)
    }
}

/// Gate, hours-filter and score every unused active venue for one slot.
/// Returns candidates sorted ascending by score so `pop()` yields the best.
#[allow(clippy::too_many_arguments)]
fn score_slot<'a>(
    slot: Daypart,
    snapshot: &'a ItinerarySnapshot,
    day_ctx: &DayContext<'a>,
    mood: Option<&'static MoodProfile>,
    preferences: Option<&UserPreferences>,
    favorites: &HashSet<String>,
    previous_location: Option<GeoPoint>,
    unavailable: &HashSet<String>,
    jitter: &mut ScoreJitter,
) -> Vec<SlotCandidate<'a>> {
    let profile = slot_catalog::profile_for(slot);
    let mut candidates: Vec<SlotCandidate> = Vec::new();

    for venue in &snapshot.venues {
        if !venue.is_active || unavailable.contains(&venue.id) {
            continue;
        }

        let happy_hour = day_ctx.happy_hours_today.get(venue.id.as_str()).copied();
        let event = day_ctx.events_today.get(venue.id.as_str()).copied();

        if !eligibility::passes_gate(venue, profile, happy_hour.is_some(), event.is_some()) {
            continue;
        }
        if !day_ctx.is_open(&venue.id, profile.window_start, profile.window_end) {
            continue;
        }

        let ctx = ScoreContext {
            profile,
            mood,
            preferences,
            favorites,
            previous_location,
            has_happy_hour_today: happy_hour.is_some(),
            has_event_today: event.is_some(),
            // The snapshot carries no specials collection yet, so this
            // signal is always false in the generation path.
            has_special_today: false,
        };
        let score = scoring_service::score_venue(venue, &ctx, jitter);

        candidates.push(SlotCandidate {
            venue,
            happy_hour,
            event,
            score,
        });
    }

    // Ties fall where the jitter and input order leave them; the tie-break
    // is documented as non-deterministic.
    candidates.sort_by(|a, b| {
        a.score
            .score
            .partial_cmp(&b.score.score)
            .unwrap_or(Ordering::Equal)
    });
    candidates
}

fn build_item(slot: Daypart, winner: &SlotCandidate, annotate_distance: bool) -> ItineraryItem {
    let (item_type, happy_hour_id, event_id) = match slot {
        Daypart::HappyHour if winner.happy_hour.is_some() => (
            ItemType::HappyHour,
            winner.happy_hour.map(|hh| hh.id.clone()),
            None,
        ),
        Daypart::Evening if winner.event.is_some() => {
            (ItemType::Event, None, winner.event.map(|ev| ev.id.clone()))
        }
        _ => (ItemType::Venue, None, None),
    };

    ItineraryItem {
        slot,
        venue_id: winner.venue.id.clone(),
        name: winner.venue.name.clone(),
        address: winner.venue.address.clone(),
        location: winner.venue.location,
        image_url: winner.venue.image_url.clone(),
        item_type,
        happy_hour_id,
        event_id,
        reason: winner.score.reason.clone(),
        distance_from_previous: if annotate_distance {
            winner.score.distance_miles.map(format_walk_distance)
        } else {
            None
        },
    }
}

fn resolve_mood(id: Option<&str>) -> AppResult<Option<&'static MoodProfile>> {
    match id {
        None => Ok(None),
        Some(raw) => slot_catalog::mood_profile(raw).map(Some).ok_or_else(|| {
            AppError::validation_with_details("unknown mood", json!({ "mood": raw }))
        }),
    }
}

/// Display-only walking distance: "nearby" under a tenth of a mile, feet
/// under a mile, miles otherwise.
fn format_walk_distance(miles: f64) -> String {
    if miles < 0.1 {
        "nearby".to_string()
    } else if miles < 1.0 {
        let feet = ((miles * 5280.0 / 10.0).round() as i64) * 10;
        format!("{feet} ft")
    } else {
        format!("{miles:.1} mi")
    }
}
