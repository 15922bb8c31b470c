use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::filter::{Mood, MoodProfile};

/// Catalog client and engine configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL of the upstream recipe catalog
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Mood-to-category/area profile table
    #[serde(default)]
    pub moods: MoodConfig,
    /// Path of the favorites JSON file
    #[serde(default = "default_favorites_path")]
    pub favorites_path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            moods: MoodConfig::default(),
            favorites_path: default_favorites_path(),
        }
    }
}

/// Qualifying category and area sets per mood. Static reference data; a
/// config file can override individual profiles but the mood names are fixed.
#[derive(Debug, Deserialize, Clone)]
pub struct MoodConfig {
    #[serde(default = "default_comfort")]
    pub comfort: MoodProfile,
    #[serde(default = "default_healthy")]
    pub healthy: MoodProfile,
    #[serde(default = "default_indulgent")]
    pub indulgent: MoodProfile,
    #[serde(default = "default_adventurous")]
    pub adventurous: MoodProfile,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            comfort: default_comfort(),
            healthy: default_healthy(),
            indulgent: default_indulgent(),
            adventurous: default_adventurous(),
        }
    }
}

impl MoodConfig {
    pub fn profile(&self, mood: Mood) -> &MoodProfile {
        match mood {
            Mood::Comfort => &self.comfort,
            Mood::Healthy => &self.healthy,
            Mood::Indulgent => &self.indulgent,
            Mood::Adventurous => &self.adventurous,
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_favorites_path() -> String {
    "favorites.json".to_string()
}

fn default_comfort() -> MoodProfile {
    MoodProfile::from_categories(&["Beef", "Pasta", "Pork", "Breakfast"])
}

fn default_healthy() -> MoodProfile {
    MoodProfile::from_categories(&["Seafood", "Vegetarian", "Vegan"])
}

fn default_indulgent() -> MoodProfile {
    MoodProfile::from_categories(&["Dessert", "Lamb", "Goat"])
}

fn default_adventurous() -> MoodProfile {
    MoodProfile::from_areas(&["Thai", "Japanese", "Mexican", "Moroccan", "Indian"])
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCOUT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCOUT__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPE_SCOUT__MOODS__COMFORT
            .add_source(
                Environment::with_prefix("RECIPE_SCOUT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
