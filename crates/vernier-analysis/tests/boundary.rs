// File: crates/vernier-analysis/tests/boundary.rs
// Purpose: Validate payload parsing, the mock fallback, and meal naming.

use vernier_analysis::{analysis_or_mock, meal_name, mock_analysis, parse_analysis, AnalysisError};

const VALID_PAYLOAD: &str = r#"{
  "food_items": [
    {
      "name": "Oatmeal",
      "confidence": 0.92,
      "calories": 150,
      "protein": 5,
      "carbs": 27,
      "fat": 3,
      "weight_grams": 40
    }
  ],
  "total_calories": 150,
  "total_protein": 5,
  "total_carbs": 27,
  "total_fat": 3,
  "confidence_score": 0.92
}"#;

#[test]
fn valid_payload_parses() {
    let analysis = parse_analysis(VALID_PAYLOAD).expect("parse");
    assert_eq!(analysis.food_items.len(), 1);
    assert_eq!(analysis.food_items[0].name, "Oatmeal");
    assert_eq!(analysis.total_calories, 150.0);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        parse_analysis("{ not json"),
        Err(AnalysisError::Malformed(_))
    ));
}

#[test]
fn shape_validation_rejects_bad_fields() {
    let no_items = r#"{
      "food_items": [],
      "total_calories": 0, "total_protein": 0, "total_carbs": 0,
      "total_fat": 0, "confidence_score": 0.5
    }"#;
    assert!(matches!(
        parse_analysis(no_items),
        Err(AnalysisError::Invalid("food_items is empty"))
    ));

    let bad_confidence = VALID_PAYLOAD.replace("\"confidence_score\": 0.92", "\"confidence_score\": 1.5");
    assert!(matches!(
        parse_analysis(&bad_confidence),
        Err(AnalysisError::Invalid(_))
    ));
}

#[test]
fn failures_fall_back_to_the_mock_payload() {
    let from_error = analysis_or_mock(Err(AnalysisError::Collaborator("timeout".to_string())));
    assert_eq!(from_error, mock_analysis());

    let from_malformed = analysis_or_mock(Ok("garbage".to_string()));
    assert_eq!(from_malformed, mock_analysis());

    let from_valid = analysis_or_mock(Ok(VALID_PAYLOAD.to_string()));
    assert_eq!(from_valid.food_items[0].name, "Oatmeal");
}

#[test]
fn mock_payload_is_itself_valid() {
    mock_analysis().validate().expect("mock must pass validation");
    assert_eq!(mock_analysis().total_calories, 431.0);
}

#[test]
fn meal_names_scale_with_item_count() {
    let mock = mock_analysis();
    assert_eq!(meal_name(&[]), "Analyzed Meal");
    assert_eq!(meal_name(&mock.food_items[..1]), "Grilled Chicken Breast");
    assert_eq!(
        meal_name(&mock.food_items[..2]),
        "Grilled Chicken Breast with Brown Rice"
    );
    assert_eq!(
        meal_name(&mock.food_items),
        "Grilled Chicken Breast with 2 items"
    );
}
