//! Contact form orchestration: whole-form validation and the outbound
//! mailto URI. Navigation, timers, and per-field decoration are wired by the
//! web frontend.

use crate::validate::{validate, FieldCheck, FieldKind};

pub const CONTACT_ADDRESS: &str = "hello@robgilks.dev";

#[derive(Clone, Debug)]
pub struct FieldInput {
    pub id: &'static str,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Clone, Debug)]
pub struct FormVerdict {
    pub all_valid: bool,
    /// One check per input, in input order.
    pub checks: Vec<FieldCheck>,
}

/// Validate every field, never short-circuiting, so each invalid field gets
/// its own feedback in a single pass.
pub fn validate_form(fields: &[FieldInput]) -> FormVerdict {
    let checks: Vec<FieldCheck> = fields
        .iter()
        .map(|f| validate(&f.value, f.kind, f.required))
        .collect();
    let all_valid = checks.iter().all(|c| c.is_valid);
    FormVerdict { all_valid, checks }
}

/// Build the outbound `mailto:` URI with URL-encoded subject and body.
pub fn mailto_uri(name: &str, email: &str, message: &str) -> String {
    let subject = format!("Portfolio Contact from {name}");
    let body = format!("Name: {name}\nEmail: {email}\n\n{message}");
    format!(
        "mailto:{}?subject={}&body={}",
        CONTACT_ADDRESS,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}
