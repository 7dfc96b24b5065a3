use serde::{Deserialize, Serialize};

/// Stated user tastes. Free-text labels are mapped to cuisine tags by the
/// slot catalog's preference table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub food_preferences: Vec<String>,
}
