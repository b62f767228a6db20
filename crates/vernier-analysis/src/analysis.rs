// File: crates/vernier-analysis/src/analysis.rs
// Summary: Meal analysis payload: shape validation, static mock fallback, name derivation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures at the analysis boundary. They never cross into the selector
/// or chart components; callers substitute the mock payload instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("malformed analysis payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("analysis payload failed shape validation: {0}")]
    Invalid(&'static str),
    #[error("collaborator call failed: {0}")]
    Collaborator(String),
    #[error("record not found: {0}")]
    NotFound(String),
}

/// One recognized food item in an analyzed image.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub name: String,
    pub confidence: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub weight_grams: f64,
}

/// Structured nutrition breakdown returned by the analysis collaborator.
/// Field names match the collaborator's JSON wire shape.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MealAnalysis {
    pub food_items: Vec<FoodItem>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub confidence_score: f64,
}

impl MealAnalysis {
    /// Shape validation beyond what deserialization enforces:
    /// at least one item, confidences in [0, 1], non-negative quantities.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.food_items.is_empty() {
            return Err(AnalysisError::Invalid("food_items is empty"));
        }
        if !(0.0..=1.0).contains(&self.confidence_score) {
            return Err(AnalysisError::Invalid("confidence_score out of [0, 1]"));
        }
        for item in &self.food_items {
            if !(0.0..=1.0).contains(&item.confidence) {
                return Err(AnalysisError::Invalid("item confidence out of [0, 1]"));
            }
            if item.calories < 0.0
                || item.protein < 0.0
                || item.carbs < 0.0
                || item.fat < 0.0
                || item.weight_grams < 0.0
            {
                return Err(AnalysisError::Invalid("negative nutrient quantity"));
            }
        }
        if self.total_calories < 0.0 {
            return Err(AnalysisError::Invalid("negative total_calories"));
        }
        Ok(())
    }
}

/// Parse and validate a collaborator response.
pub fn parse_analysis(json: &str) -> Result<MealAnalysis, AnalysisError> {
    let analysis: MealAnalysis = serde_json::from_str(json)?;
    analysis.validate()?;
    Ok(analysis)
}

/// Boundary rule: any collaborator failure or malformed payload is replaced
/// by the fixed mock result. One-shot, no retry.
pub fn analysis_or_mock(result: Result<String, AnalysisError>) -> MealAnalysis {
    let outcome = result.and_then(|json| parse_analysis(&json));
    match outcome {
        Ok(analysis) => analysis,
        Err(err) => {
            tracing::warn!(error = %err, "analysis failed, substituting mock payload");
            mock_analysis()
        }
    }
}

/// Fixed fallback payload used when analysis fails.
pub fn mock_analysis() -> MealAnalysis {
    MealAnalysis {
        food_items: vec![
            FoodItem {
                name: "Grilled Chicken Breast".to_string(),
                confidence: 0.9,
                calories: 165.0,
                protein: 31.0,
                carbs: 0.0,
                fat: 3.6,
                weight_grams: 100.0,
            },
            FoodItem {
                name: "Brown Rice".to_string(),
                confidence: 0.85,
                calories: 216.0,
                protein: 5.0,
                carbs: 45.0,
                fat: 1.8,
                weight_grams: 100.0,
            },
            FoodItem {
                name: "Mixed Vegetables".to_string(),
                confidence: 0.8,
                calories: 50.0,
                protein: 2.0,
                carbs: 10.0,
                fat: 0.5,
                weight_grams: 100.0,
            },
        ],
        total_calories: 431.0,
        total_protein: 38.0,
        total_carbs: 55.0,
        total_fat: 5.9,
        confidence_score: 0.85,
    }
}

/// Derive a display name for a meal from its items.
pub fn meal_name(items: &[FoodItem]) -> String {
    match items {
        [] => "Analyzed Meal".to_string(),
        [only] => only.name.clone(),
        [first, second] => format!("{} with {}", first.name, second.name),
        [first, rest @ ..] => format!("{} with {} items", first.name, rest.len()),
    }
}
