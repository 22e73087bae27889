//! The seven card descriptors. Data only: the renderer in `crate::render`
//! is shared by all of them.

pub mod bug_fix;
pub mod cleanup;
pub mod documentation;
pub mod feature_change;
pub mod feature_request;
pub mod security_audit;
pub mod testing;

use crate::rating::RatingLabels;
use crate::template::{Block, FieldSpec, DEPTH_FIELD};

/// Labels for the documentation depth rating, shared by every card.
pub const DEPTH_LABELS: RatingLabels = RatingLabels::new([
    "Minimal - one paragraph summary",
    "Brief - key changes and decisions",
    "Standard - changes, rationale, and usage notes",
    "Detailed - full walkthrough with examples",
    "Deep - comprehensive documentation",
]);

/// Static legend printed in every documentation block regardless of depth.
pub const FORMAT_LEGEND: [&str; 5] = [
    "1 = Minimal: a single paragraph describing what changed",
    "2 = Brief: bullet list of changes plus any decisions made",
    "3 = Standard: summary, rationale, affected files, and usage notes",
    "4 = Detailed: standard sections plus examples and edge cases",
    "5 = Deep: detailed sections plus architecture notes, diagrams, and follow-ups",
];

/// Directory the documentation output path points into.
pub const DOCS_DIR: &str = "punchcards";

pub(crate) const fn depth_field() -> FieldSpec {
    FieldSpec::rating(DEPTH_FIELD, "Documentation depth", DEPTH_LABELS).in_block(Block::Documentation)
}
