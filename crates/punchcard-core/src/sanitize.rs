use regex::Regex;
use std::sync::OnceLock;

/// Maximum length of a sanitized filename fragment, in characters.
pub const MAX_LEN: usize = 50;

/// Returned when nothing survives sanitizing.
pub const UNTITLED: &str = "untitled";

static DISALLOWED_RE: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
static DASHES_RE: OnceLock<Regex> = OnceLock::new();

fn disallowed_re() -> &'static Regex {
    DISALLOWED_RE.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").unwrap())
}

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn dashes_re() -> &'static Regex {
    DASHES_RE.get_or_init(|| Regex::new(r"-+").unwrap())
}

/// Turn a free-text title into a filename fragment.
///
/// Lowercases, drops everything outside `[a-z0-9\s-]`, folds whitespace runs
/// and dash runs to a single `_` each, and keeps the first 50 characters.
/// An empty result becomes `untitled`. Dash runs fold to `_` rather than
/// disappearing, so `"---"` yields `"_"`.
pub fn sanitize(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept = disallowed_re().replace_all(&lowered, "");
    let spaced = whitespace_re().replace_all(&kept, "_");
    let dashed = dashes_re().replace_all(&spaced, "_");
    let truncated: String = dashed.chars().take(MAX_LEN).collect();
    if truncated.is_empty() {
        UNTITLED.to_string()
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_untitled() {
        assert_eq!(sanitize(""), "untitled");
    }

    #[test]
    fn punctuation_is_dropped_and_spaces_folded() {
        assert_eq!(sanitize("Fix Login!!"), "fix_login");
        assert_eq!(sanitize("Add User Dashboard"), "add_user_dashboard");
    }

    #[test]
    fn long_titles_are_truncated_to_fifty() {
        let out = sanitize(&"a".repeat(100));
        assert_eq!(out.len(), 50);
        assert!(out.chars().all(|c| c == 'a'));
    }

    #[test]
    fn dash_runs_fold_to_a_single_underscore() {
        assert_eq!(sanitize("---"), "_");
        assert_eq!(sanitize("api--v2"), "api_v2");
    }

    #[test]
    fn whitespace_runs_fold_to_a_single_underscore() {
        assert_eq!(sanitize("a  \t\n b"), "a_b");
    }

    #[test]
    fn spaces_around_dashes_each_fold_separately() {
        assert_eq!(sanitize("login - crash"), "login___crash");
    }

    #[test]
    fn only_disallowed_characters_is_untitled() {
        assert_eq!(sanitize("!!!???"), "untitled");
        assert_eq!(sanitize("日本語"), "untitled");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(sanitize("Bug #1234"), "bug_1234");
    }

    #[test]
    fn sanitize_is_total_and_deterministic() {
        for input in ["", " ", "X", "  leading", "trailing  ", "Ünïcödé Tïtle"] {
            assert_eq!(sanitize(input), sanitize(input));
            assert!(!sanitize(input).is_empty());
        }
    }
}
