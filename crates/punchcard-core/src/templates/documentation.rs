use super::depth_field;
use crate::rating::RatingLabels;
use crate::template::{CardTemplate, FieldSpec};
use crate::types::CardType;

const TECHNICAL_DEPTH: RatingLabels =
    RatingLabels::new(["Overview", "Introductory", "Intermediate", "Advanced", "Expert"]);

const TONE: RatingLabels =
    RatingLabels::new(["Very casual", "Casual", "Neutral", "Formal", "Very formal"]);

pub static TEMPLATE: CardTemplate = CardTemplate {
    card_type: CardType::Documentation,
    details_block: "documentation_details",
    instruction: &[
        "You are writing documentation. Work through these steps in order:",
        "1. Read the code being documented; never describe behavior you have not verified.",
        "2. Check existing docs and extend them instead of duplicating content.",
        "3. Write for the stated audience at the requested technical depth and tone.",
        "4. Include runnable examples where requested and keep them in sync with the code.",
        "5. Save the result at the output path given below.",
    ],
    fields: &[
        FieldSpec::title("Punchcard title"),
        depth_field(),
        FieldSpec::text("doc_subject", "What to document", "Not specified").required(),
        FieldSpec::text("target_audience", "Target audience", "General developers"),
        FieldSpec::text("doc_type", "Documentation type", "Not specified"),
        FieldSpec::text("existing_docs", "Existing docs", "None"),
        FieldSpec::text("key_topics", "Key topics", "None specified"),
        FieldSpec::rating("technical_depth", "Technical depth", TECHNICAL_DEPTH),
        FieldSpec::rating("tone", "Tone", TONE),
        FieldSpec::toggle("include_examples", "Include code examples", "Yes", "No"),
        FieldSpec::toggle("include_diagrams", "Include diagrams", "Yes", "No"),
        FieldSpec::text("section_outline", "Section outline", "Writer's choice").advanced("structure"),
        FieldSpec::text("cross_references", "Cross references", "None specified").advanced("structure"),
        FieldSpec::text("glossary_terms", "Glossary terms", "None specified").advanced("structure"),
        FieldSpec::text("code_languages", "Code example languages", "Project default").advanced("structure"),
        FieldSpec::text("doc_format", "Output format", "Markdown").advanced("structure"),
    ],
};
