use thiserror::Error;

#[derive(Debug, Error)]
pub enum PunchcardError {
    #[error("unknown card type: {0}")]
    UnknownCardType(String),

    #[error("card '{card}' has no field named '{field}'")]
    UnknownField { card: String, field: String },

    #[error("field '{field}' expects a {expected} value, got {found}")]
    FieldTypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("rating for '{field}' must be between 1 and 5, got {value}")]
    RatingOutOfRange { field: String, value: i64 },

    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("no clipboard tool found (tried pbcopy, wl-copy, xclip, xsel, clip.exe)")]
    ClipboardUnavailable,

    #[error("clipboard copy failed: {0}")]
    ClipboardFailed(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PunchcardError>;
