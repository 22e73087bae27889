use super::depth_field;
use crate::rating::RatingLabels;
use crate::template::{CardTemplate, FieldSpec};
use crate::types::CardType;

const PRIORITY: RatingLabels =
    RatingLabels::new(["Nice to have", "Low", "Medium", "High", "Must have"]);

const COMPLEXITY: RatingLabels =
    RatingLabels::new(["Trivial", "Simple", "Moderate", "Complex", "Very complex"]);

pub static TEMPLATE: CardTemplate = CardTemplate {
    card_type: CardType::FeatureRequest,
    details_block: "feature_details",
    instruction: &[
        "You are implementing a new feature. Work through these steps in order:",
        "1. Read the description and acceptance criteria; ask before guessing at unclear requirements.",
        "2. Survey the affected areas and follow the conventions already in use there.",
        "3. Plan the change, then implement it in small, reviewable steps.",
        "4. Cover every acceptance criterion with a test when tests are requested.",
        "5. Document the feature at the depth requested below.",
    ],
    fields: &[
        FieldSpec::title("Punchcard title").required(),
        depth_field(),
        FieldSpec::text("feature_description", "Feature description", "Not specified").required(),
        FieldSpec::text("user_story", "User story", "None specified"),
        FieldSpec::text("acceptance_criteria", "Acceptance criteria", "None specified"),
        FieldSpec::text("affected_areas", "Affected areas", "Unknown"),
        FieldSpec::text("related_features", "Related features", "None specified"),
        FieldSpec::rating("priority", "Priority", PRIORITY),
        FieldSpec::rating("complexity", "Expected complexity", COMPLEXITY),
        FieldSpec::toggle("include_tests", "Include tests", "Yes", "No"),
        FieldSpec::toggle("update_docs", "Update existing docs", "Yes", "No"),
        FieldSpec::text("design_reference", "Design reference", "None provided").advanced("ui_ux"),
        FieldSpec::text("accessibility_notes", "Accessibility notes", "None specified").advanced("ui_ux"),
        FieldSpec::text("responsive_behavior", "Responsive behavior", "Not specified").advanced("ui_ux"),
        FieldSpec::text("interaction_details", "Interaction details", "Not specified").advanced("ui_ux"),
        FieldSpec::text("visual_style", "Visual style", "Match existing style").advanced("ui_ux"),
        FieldSpec::text("preferred_libraries", "Preferred libraries", "No preference").advanced("technical"),
        FieldSpec::text("api_changes", "API changes", "None specified").advanced("technical"),
        FieldSpec::text("data_model_changes", "Data model changes", "None specified").advanced("technical"),
        FieldSpec::text("performance_requirements", "Performance requirements", "Not specified").advanced("technical"),
        FieldSpec::text("security_considerations", "Security considerations", "None specified").advanced("technical"),
    ],
};
