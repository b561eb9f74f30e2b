// Host-side tests for the pure field validator.

use folio_core::{validate, FieldKind, EMAIL_MESSAGE, REQUIRED_MESSAGE};

#[test]
fn required_and_empty_is_invalid_regardless_of_kind() {
    for kind in [FieldKind::Plain, FieldKind::Email] {
        let check = validate("", kind, true);
        assert!(!check.is_valid);
        assert_eq!(check.message, REQUIRED_MESSAGE);
    }
}

#[test]
fn whitespace_only_counts_as_empty() {
    let check = validate("   \t", FieldKind::Plain, true);
    assert!(!check.is_valid);
    assert_eq!(check.message, REQUIRED_MESSAGE);
}

#[test]
fn optional_empty_field_is_valid() {
    let check = validate("", FieldKind::Email, false);
    assert!(check.is_valid);
    assert_eq!(check.message, "");
}

#[test]
fn simple_address_passes_the_pattern() {
    assert!(validate("a@b.co", FieldKind::Email, true).is_valid);
}

#[test]
fn address_without_a_dot_after_the_at_fails() {
    let check = validate("a@b", FieldKind::Email, true);
    assert!(!check.is_valid);
    assert_eq!(check.message, EMAIL_MESSAGE);
}

#[test]
fn email_check_dominates_once_non_empty() {
    let check = validate("not-an-email", FieldKind::Email, true);
    assert!(!check.is_valid);
    assert_eq!(check.message, EMAIL_MESSAGE);
}

#[test]
fn plain_kind_accepts_arbitrary_non_empty_text() {
    assert!(validate("hello there", FieldKind::Plain, true).is_valid);
}

#[test]
fn validate_is_deterministic() {
    // Pure function: same input, same output.
    let a = validate("someone@example.com", FieldKind::Email, true);
    let b = validate("someone@example.com", FieldKind::Email, true);
    assert_eq!(a, b);
    assert!(a.is_valid);
}

#[test]
fn permissive_pattern_accepts_consecutive_dots() {
    // Given business rule: the pattern is deliberately loose.
    assert!(validate("a@b..co", FieldKind::Email, true).is_valid);
}
