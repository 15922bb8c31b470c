use serde::{Deserialize, Serialize};

use crate::config::MoodConfig;
use crate::model::Recipe;

/// Coarse time-to-cook classification derived from how many ingredient
/// slots a record populates. Never stored on the record; every consumer
/// recomputes it via [`estimate_time_bucket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    Quick,
    // Also the defensive default when no record is available to estimate from.
    #[default]
    Moderate,
    Leisure,
}

impl TimeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBucket::Quick => "quick",
            TimeBucket::Moderate => "moderate",
            TimeBucket::Leisure => "leisure",
        }
    }
}

impl std::str::FromStr for TimeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick" => Ok(TimeBucket::Quick),
            "moderate" => Ok(TimeBucket::Moderate),
            "leisure" => Ok(TimeBucket::Leisure),
            other => Err(format!("unknown time bucket: {}", other)),
        }
    }
}

/// The fixed set of mood filters offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Comfort,
    Healthy,
    Indulgent,
    Adventurous,
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "comfort" => Ok(Mood::Comfort),
            "healthy" => Ok(Mood::Healthy),
            "indulgent" => Ok(Mood::Indulgent),
            "adventurous" => Ok(Mood::Adventurous),
            other => Err(format!("unknown mood: {}", other)),
        }
    }
}

/// Qualifying sets for one mood. An empty set imposes no constraint on its
/// axis; when both sets are non-empty a record must satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoodProfile {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub areas: Vec<String>,
}

impl MoodProfile {
    pub fn from_categories(names: &[&str]) -> Self {
        Self {
            categories: names.iter().map(|s| s.to_string()).collect(),
            areas: Vec::new(),
        }
    }

    pub fn from_areas(names: &[&str]) -> Self {
        Self {
            categories: Vec::new(),
            areas: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        let category_ok = self.categories.is_empty()
            || recipe
                .category
                .as_deref()
                .is_some_and(|c| self.categories.iter().any(|m| m == c));
        let area_ok = self.areas.is_empty()
            || recipe
                .area
                .as_deref()
                .is_some_and(|a| self.areas.iter().any(|m| m == a));
        category_ok && area_ok
    }
}

/// Per-search filter selection. Every field is optional; an absent field
/// imposes no constraint on its axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub area: Option<String>,
    pub time: Option<TimeBucket>,
    pub mood: Option<Mood>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.area.is_none() && self.time.is_none() && self.mood.is_none()
    }
}

/// Classify a record by its populated ingredient slot count: up to 6 slots
/// is `Quick`, 7 through 12 `Moderate`, 13 or more `Leisure`.
pub fn estimate_time_bucket(recipe: &Recipe) -> TimeBucket {
    match recipe.ingredients().len() {
        0..=6 => TimeBucket::Quick,
        7..=12 => TimeBucket::Moderate,
        _ => TimeBucket::Leisure,
    }
}

/// Keep the records that satisfy every constrained axis of `spec`.
///
/// Category and area compare exactly and case-sensitively. Filtering never
/// reorders and never adds records, and an empty spec is the identity.
pub fn apply_filters(records: Vec<Recipe>, spec: &FilterSpec, moods: &MoodConfig) -> Vec<Recipe> {
    if spec.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|recipe| passes(recipe, spec, moods))
        .collect()
}

fn passes(recipe: &Recipe, spec: &FilterSpec, moods: &MoodConfig) -> bool {
    if let Some(category) = &spec.category {
        if recipe.category.as_deref() != Some(category.as_str()) {
            return false;
        }
    }
    if let Some(area) = &spec.area {
        if recipe.area.as_deref() != Some(area.as_str()) {
            return false;
        }
    }
    if let Some(time) = spec.time {
        if estimate_time_bucket(recipe) != time {
            return false;
        }
    }
    if let Some(mood) = spec.mood {
        if !moods.profile(mood).matches(recipe) {
            return false;
        }
    }
    true
}
