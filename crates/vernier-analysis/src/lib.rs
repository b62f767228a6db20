// File: crates/vernier-analysis/src/lib.rs
// Summary: Library entry point for the external-collaborator boundary.

pub mod analysis;
pub mod store;

pub use analysis::{
    analysis_or_mock, meal_name, mock_analysis, parse_analysis, AnalysisError, FoodItem,
    MealAnalysis,
};
pub use store::{MealRecord, MemoryStore, RecordStore};
