use tracing::warn;

use crate::models::venue::OpeningHoursRecord;
use crate::services::time_utils;

/// Decides whether a venue is open at some point during `[range_start,
/// range_end]` on `day`, given its hours rows. No row for the day, a row
/// marked closed, or a row missing either clock time all mean closed.
///
/// The scheduler separately treats venues with zero hours rows overall as
/// open, so incomplete catalog data never hides a venue; that rule lives at
/// the call site, not here.
pub fn is_open_during(
    rows: &[&OpeningHoursRecord],
    day: &str,
    range_start: i64,
    range_end: i64,
) -> bool {
    let row = match rows.iter().find(|r| r.day.eq_ignore_ascii_case(day)) {
        Some(row) => row,
        None => return false,
    };
    if row.is_closed {
        return false;
    }

    let (open_raw, close_raw) = match (&row.open_time, &row.close_time) {
        (Some(open), Some(close)) => (open, close),
        _ => return false,
    };

    let open = match time_utils::to_minutes(open_raw) {
        Ok(minutes) => minutes,
        Err(_) => {
            warn!(
                target: "app::hours",
                venue_id = %row.venue_id,
                value = %open_raw,
                "unparseable open time, treating row as closed"
            );
            return false;
        }
    };
    let close = match time_utils::to_minutes(close_raw) {
        Ok(minutes) => minutes,
        Err(_) => {
            warn!(
                target: "app::hours",
                venue_id = %row.venue_id,
                value = %close_raw,
                "unparseable close time, treating row as closed"
            );
            return false;
        }
    };

    time_utils::windows_overlap(open, close, range_start, range_end)
}
