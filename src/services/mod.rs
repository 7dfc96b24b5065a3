pub mod eligibility;
pub mod itinerary_service;
pub mod open_hours;
pub mod scoring_service;
pub mod slot_catalog;
pub mod time_utils;
