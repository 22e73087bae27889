use super::depth_field;
use crate::rating::RatingLabels;
use crate::template::{CardTemplate, FieldSpec};
use crate::types::CardType;

const AGGRESSIVENESS: RatingLabels = RatingLabels::new([
    "Cosmetic only",
    "Conservative",
    "Moderate",
    "Aggressive",
    "Rewrite allowed",
]);

pub static TEMPLATE: CardTemplate = CardTemplate {
    card_type: CardType::Cleanup,
    details_block: "cleanup_details",
    instruction: &[
        "You are cleaning up code. Work through these steps in order:",
        "1. Run the existing tests first so behavior can be verified before and after.",
        "2. Stay inside the cleanup target and never touch the protected areas.",
        "3. Make behavior-preserving changes only, at the requested aggressiveness.",
        "4. Keep each change small and explain anything non-obvious in the summary.",
        "5. Re-run the tests and document the cleanup as requested below.",
    ],
    fields: &[
        FieldSpec::title("Punchcard title"),
        depth_field(),
        FieldSpec::text("cleanup_target", "Cleanup target", "Not specified").required(),
        FieldSpec::text("cleanup_goals", "Cleanup goals", "Not specified"),
        FieldSpec::text("code_smells", "Code smells observed", "None specified"),
        FieldSpec::text("constraints", "Constraints", "None specified"),
        FieldSpec::text("protected_areas", "Protected areas", "None"),
        FieldSpec::rating("aggressiveness", "Aggressiveness", AGGRESSIVENESS),
        FieldSpec::toggle("remove_dead_code", "Dead code", "Remove", "Keep"),
        FieldSpec::toggle("remove_comments", "Stale comments", "Remove", "Keep"),
        FieldSpec::toggle("update_dependencies", "Update dependencies", "Apply", "Skip"),
        FieldSpec::text("naming_conventions", "Naming conventions", "Project default").advanced("conventions"),
        FieldSpec::text("formatting_tool", "Formatting tool", "Project default").advanced("conventions"),
        FieldSpec::text("lint_rules", "Lint rules", "Project default").advanced("conventions"),
        FieldSpec::text("file_organization", "File organization", "Keep current layout").advanced("conventions"),
        FieldSpec::text("import_style", "Import style", "Project default").advanced("conventions"),
    ],
};
