use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Upstream response envelope. Every catalog endpoint answers
/// `{"meals": [...]}` with `null` standing in for "no results".
#[derive(Debug, Deserialize)]
pub struct MealsResponse<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsResponse<T> {
    pub fn into_list(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// A full catalog record as returned by `search.php`, `lookup.php` and
/// `random.php`.
///
/// The catalog encodes ingredients as twenty positional slot pairs
/// (`strIngredient1`/`strMeasure1` .. `strIngredient20`/`strMeasure20`),
/// most of them blank. Those land in `slots` via `#[serde(flatten)]` and
/// are read back through [`Recipe::ingredients`], which skips unused slots.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Option<String>>,
}

impl Recipe {
    /// Populated (ingredient, measure) pairs in slot order. A slot counts as
    /// populated when its trimmed ingredient name is non-empty; the measure
    /// may still be blank.
    pub fn ingredients(&self) -> Vec<(String, String)> {
        (1..=20)
            .filter_map(|i| {
                let name = self.slot(&format!("strIngredient{}", i))?;
                let measure = self.slot(&format!("strMeasure{}", i)).unwrap_or_default();
                Some((name, measure))
            })
            .collect()
    }

    /// Instruction steps, one per non-blank line.
    pub fn steps(&self) -> Vec<&str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }

    fn slot(&self, key: &str) -> Option<String> {
        let value = self.slots.get(key)?.as_deref()?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// The truncated record shape returned by the `filter.php` endpoints.
/// Carries just enough to render a result tile; must be hydrated via a
/// detail lookup before category/area/time filters can apply.
#[derive(Debug, Clone, Deserialize)]
pub struct PartialRecipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
}

/// One search's output: four independently filtered buckets, one per
/// strategy. Buckets are never merged or deduplicated against each other.
///
/// `seq` is assigned from the engine's monotonic counter; when overlapping
/// searches complete out of order, callers keep the bundle with the highest
/// `seq` and drop the rest.
#[derive(Debug, Default)]
pub struct SearchResults {
    pub seq: u64,
    pub by_name: Vec<Recipe>,
    pub by_ingredient: Vec<Recipe>,
    pub by_category: Vec<Recipe>,
    pub by_area: Vec<Recipe>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
            && self.by_ingredient.is_empty()
            && self.by_category.is_empty()
            && self.by_area.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe_with_slots(slots: &[(&str, &str)]) -> Recipe {
        let mut body = json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven.\nCook the rice.\n\nServe.",
            "strMealThumb": "https://example.com/thumb.jpg",
            "strYoutube": null
        });
        for (k, v) in slots {
            body[*k] = json!(v);
        }
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn ingredients_skip_blank_slots() {
        let recipe = recipe_with_slots(&[
            ("strIngredient1", "soy sauce"),
            ("strMeasure1", "3/4 cup"),
            ("strIngredient2", "  "),
            ("strMeasure2", "1 tbsp"),
            ("strIngredient3", "sesame seed"),
        ]);

        let ingredients = recipe.ingredients();
        assert_eq!(
            ingredients,
            vec![
                ("soy sauce".to_string(), "3/4 cup".to_string()),
                ("sesame seed".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn ingredients_preserve_slot_order() {
        let recipe = recipe_with_slots(&[
            ("strIngredient12", "garlic"),
            ("strIngredient2", "ginger"),
            ("strIngredient7", "rice"),
        ]);

        let names: Vec<String> = recipe.ingredients().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["ginger", "rice", "garlic"]);
    }

    #[test]
    fn null_slots_are_unused() {
        let recipe: Recipe = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Minimal",
            "strCategory": null,
            "strArea": null,
            "strInstructions": "",
            "strMealThumb": "",
            "strYoutube": null,
            "strIngredient1": null,
            "strMeasure1": null
        }))
        .unwrap();

        assert!(recipe.ingredients().is_empty());
    }

    #[test]
    fn steps_split_on_lines() {
        let recipe = recipe_with_slots(&[]);
        assert_eq!(
            recipe.steps(),
            vec!["Preheat oven.", "Cook the rice.", "Serve."]
        );
    }

    #[test]
    fn null_meals_decodes_as_empty() {
        let response: MealsResponse<PartialRecipe> =
            serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.into_list().is_empty());
    }
}
