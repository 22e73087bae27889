use super::depth_field;
use crate::rating::RatingLabels;
use crate::template::{CardTemplate, FieldSpec};
use crate::types::CardType;

const COVERAGE_LEVEL: RatingLabels =
    RatingLabels::new(["Smoke", "Basic", "Standard", "Thorough", "Exhaustive"]);

const MOCKING: RatingLabels = RatingLabels::new([
    "No mocks",
    "Minimal mocks",
    "Balanced",
    "Heavy mocks",
    "Mock everything external",
]);

pub static TEMPLATE: CardTemplate = CardTemplate {
    card_type: CardType::Testing,
    details_block: "testing_details",
    instruction: &[
        "You are writing tests. Work through these steps in order:",
        "1. Read the code under test and list its observable behaviors.",
        "2. Use the project's existing test framework and conventions.",
        "3. Cover the happy path first, then edge cases and failure modes.",
        "4. Keep tests deterministic; no sleeps, network, or shared global state.",
        "5. Run the suite, report coverage, and document the work as requested below.",
    ],
    fields: &[
        FieldSpec::title("Punchcard title"),
        depth_field(),
        FieldSpec::text("test_target", "Code under test", "Not specified").required(),
        FieldSpec::text("test_type", "Test type", "Unit tests"),
        FieldSpec::text("testing_framework", "Testing framework", "Project default"),
        FieldSpec::text("coverage_goals", "Coverage goals", "Not specified"),
        FieldSpec::text("known_edge_cases", "Known edge cases", "None specified"),
        FieldSpec::rating("coverage_level", "Coverage level", COVERAGE_LEVEL),
        FieldSpec::rating("mocking_preference", "Mocking preference", MOCKING),
        FieldSpec::toggle("include_negative_tests", "Include negative tests", "Yes", "No"),
        FieldSpec::toggle("fix_failing_tests", "Fix failing tests found", "Apply", "Skip"),
        FieldSpec::text("fixtures", "Fixtures", "None specified").advanced("test_environment"),
        FieldSpec::text("test_data", "Test data", "Generate as needed").advanced("test_environment"),
        FieldSpec::text("environment_setup", "Environment setup", "Not specified").advanced("test_environment"),
        FieldSpec::text("ci_integration", "CI integration", "Not specified").advanced("test_environment"),
        FieldSpec::text("parallelization", "Parallelization", "Project default").advanced("test_environment"),
    ],
};
