//! Pure per-field validation.

use regex::Regex;
use std::sync::OnceLock;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";

// Deliberately permissive; this is the given business rule, not a full
// RFC 5322 check.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Plain,
    Email,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldCheck {
    pub is_valid: bool,
    pub message: &'static str,
}

impl FieldCheck {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: "",
        }
    }

    pub fn invalid(message: &'static str) -> Self {
        Self {
            is_valid: false,
            message,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Map a field's value, kind, and required flag to a verdict plus message.
///
/// Required-and-empty dominates; the email check only applies to non-empty
/// values, so an optional empty email field is valid.
pub fn validate(value: &str, kind: FieldKind, required: bool) -> FieldCheck {
    let trimmed = value.trim();
    if required && trimmed.is_empty() {
        return FieldCheck::invalid(REQUIRED_MESSAGE);
    }
    if kind == FieldKind::Email && !trimmed.is_empty() && !email_pattern().is_match(trimmed) {
        return FieldCheck::invalid(EMAIL_MESSAGE);
    }
    FieldCheck::valid()
}
