use super::depth_field;
use crate::rating::RatingLabels;
use crate::template::{CardTemplate, FieldSpec};
use crate::types::CardType;

const URGENCY: RatingLabels = RatingLabels::new(["Trivial", "Low", "Normal", "High", "Critical"]);

const FIX_SCOPE: RatingLabels = RatingLabels::new([
    "Minimal patch only",
    "Targeted fix",
    "Fix with light cleanup",
    "Fix and refactor nearby code",
    "Root-cause fix, any scope",
]);

pub static TEMPLATE: CardTemplate = CardTemplate {
    card_type: CardType::BugFix,
    details_block: "bug_details",
    instruction: &[
        "You are fixing a bug. Work through these steps in order:",
        "1. Reproduce the bug using the steps provided before changing any code.",
        "2. Locate the root cause; do not stop at the first symptom.",
        "3. Apply the smallest fix that addresses the root cause within the requested scope.",
        "4. Add or update tests that fail without the fix and pass with it.",
        "5. Verify nothing else regressed, then document the fix as requested below.",
    ],
    fields: &[
        FieldSpec::title("Punchcard title"),
        depth_field(),
        FieldSpec::text("observed_behavior", "What happens", "Not specified").required(),
        FieldSpec::text("expected_behavior", "What should happen", "Not specified").required(),
        FieldSpec::text("steps_to_reproduce", "Steps to reproduce", "Not specified").required(),
        FieldSpec::text("error_messages", "Error messages", "None provided"),
        FieldSpec::text("affected_files", "Affected files", "Unknown"),
        FieldSpec::text("recent_changes", "Recent changes", "None specified"),
        FieldSpec::rating("urgency", "Urgency", URGENCY),
        FieldSpec::rating("fix_scope", "Fix scope", FIX_SCOPE),
        FieldSpec::toggle("add_regression_test", "Add a regression test", "Yes", "No"),
        FieldSpec::toggle("check_related_code", "Check related code paths", "Check", "Skip"),
        FieldSpec::text("os_platform", "OS / platform", "Not specified").advanced("environment"),
        FieldSpec::text("runtime_version", "Runtime version", "Not specified").advanced("environment"),
        FieldSpec::text("browser", "Browser", "Not specified").advanced("environment"),
        FieldSpec::text("deployment_target", "Deployment target", "Not specified").advanced("environment"),
        FieldSpec::text("dependencies", "Relevant dependencies", "Not specified").advanced("environment"),
        FieldSpec::text("log_excerpt", "Log excerpt", "None provided").advanced("diagnostics"),
        FieldSpec::text("stack_trace", "Stack trace", "None provided").advanced("diagnostics"),
        FieldSpec::text("frequency", "How often it happens", "Unknown").advanced("diagnostics"),
        FieldSpec::text("first_seen", "First seen", "Unknown").advanced("diagnostics"),
        FieldSpec::text("workaround", "Known workaround", "None known").advanced("diagnostics"),
    ],
};
