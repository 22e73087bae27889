use super::depth_field;
use crate::rating::RatingLabels;
use crate::template::{CardTemplate, FieldSpec};
use crate::types::CardType;

const CHANGE_SCOPE: RatingLabels =
    RatingLabels::new(["Tweak", "Small", "Moderate", "Large", "Overhaul"]);

const RISK_TOLERANCE: RatingLabels =
    RatingLabels::new(["Very cautious", "Cautious", "Balanced", "Bold", "Aggressive"]);

pub static TEMPLATE: CardTemplate = CardTemplate {
    card_type: CardType::FeatureChange,
    details_block: "change_details",
    instruction: &[
        "You are changing an existing feature. Work through these steps in order:",
        "1. Confirm the current behavior in the code before changing it.",
        "2. Identify every caller and component that depends on the current behavior.",
        "3. Make the change while honoring the compatibility constraints below.",
        "4. Update tests that encoded the old behavior and add tests for the new one.",
        "5. Note any migration steps for users and document the change as requested below.",
    ],
    fields: &[
        FieldSpec::title("Punchcard title"),
        depth_field(),
        FieldSpec::text("current_behavior", "Current behavior", "Not specified").required(),
        FieldSpec::text("desired_behavior", "Desired behavior", "Not specified").required(),
        FieldSpec::text("reason_for_change", "Reason for change", "None specified"),
        FieldSpec::text("affected_components", "Affected components", "Unknown"),
        FieldSpec::text("backward_compatibility", "Backward compatibility", "Not specified"),
        FieldSpec::rating("change_scope", "Change scope", CHANGE_SCOPE),
        FieldSpec::rating("risk_tolerance", "Risk tolerance", RISK_TOLERANCE),
        FieldSpec::toggle("preserve_api", "Preserve public API", "Yes", "No"),
        FieldSpec::toggle("migrate_data", "Migrate existing data", "Apply", "Skip"),
        FieldSpec::text("migration_steps", "Migration steps", "None specified").advanced("migration"),
        FieldSpec::text("data_migration", "Data migration", "None required").advanced("migration"),
        FieldSpec::text("feature_flags", "Feature flags", "None").advanced("migration"),
        FieldSpec::text("rollback_plan", "Rollback plan", "Not specified").advanced("migration"),
        FieldSpec::text("deprecation_notice", "Deprecation notice", "None").advanced("migration"),
    ],
};
