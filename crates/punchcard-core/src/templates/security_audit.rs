use super::depth_field;
use crate::rating::RatingLabels;
use crate::template::{CardTemplate, FieldSpec};
use crate::types::CardType;

const AUDIT_DEPTH: RatingLabels = RatingLabels::new([
    "Quick scan",
    "Light review",
    "Standard audit",
    "Deep audit",
    "Exhaustive audit",
]);

const SEVERITY_THRESHOLD: RatingLabels = RatingLabels::new([
    "Report everything",
    "Low and above",
    "Medium and above",
    "High and above",
    "Critical only",
]);

pub static TEMPLATE: CardTemplate = CardTemplate {
    card_type: CardType::SecurityAudit,
    details_block: "audit_details",
    instruction: &[
        "You are performing a security audit. Work through these steps in order:",
        "1. Map the audit scope: entry points, trust boundaries, and sensitive data flows.",
        "2. Review each focus area below and record findings with file and line references.",
        "3. Rate every finding by severity and report those at or above the threshold.",
        "4. Propose a concrete remediation for each reported finding.",
        "5. Apply fixes only when requested, then document the audit as requested below.",
    ],
    fields: &[
        FieldSpec::title("Punchcard title"),
        depth_field(),
        FieldSpec::text("audit_scope", "Audit scope", "Not specified").required(),
        FieldSpec::text("threat_model", "Threat model", "Not specified"),
        FieldSpec::text("sensitive_data", "Sensitive data handled", "Unknown"),
        FieldSpec::text("compliance_requirements", "Compliance requirements", "None specified"),
        FieldSpec::text("known_concerns", "Known concerns", "None specified"),
        FieldSpec::rating("audit_depth", "Audit depth", AUDIT_DEPTH),
        FieldSpec::rating("severity_threshold", "Severity threshold", SEVERITY_THRESHOLD),
        FieldSpec::toggle("check_dependencies", "Audit dependencies", "Check", "Skip"),
        FieldSpec::toggle("apply_fixes", "Apply fixes", "Apply", "Skip"),
        FieldSpec::text("authentication", "Authentication", "Review standard practices").advanced("focus_areas"),
        FieldSpec::text("authorization", "Authorization", "Review standard practices").advanced("focus_areas"),
        FieldSpec::text("input_validation", "Input validation", "Review standard practices").advanced("focus_areas"),
        FieldSpec::text("cryptography", "Cryptography", "Review standard practices").advanced("focus_areas"),
        FieldSpec::text("secrets_management", "Secrets management", "Review standard practices").advanced("focus_areas"),
        FieldSpec::text("report_format", "Report format", "Markdown findings table").advanced("reporting"),
        FieldSpec::text("remediation_timeline", "Remediation timeline", "Not specified").advanced("reporting"),
        FieldSpec::text("stakeholders", "Stakeholders", "None specified").advanced("reporting"),
        FieldSpec::text("disclosure_policy", "Disclosure policy", "Internal only").advanced("reporting"),
        FieldSpec::text("follow_up", "Follow-up", "None specified").advanced("reporting"),
    ],
};
