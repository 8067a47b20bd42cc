use super::*;

// =============================================================
// Username validation
// =============================================================

#[test]
fn username_empty_is_undecided() {
    assert_eq!(validate_username(""), None);
}

#[test]
fn username_too_short_is_invalid() {
    assert_eq!(validate_username("ab"), Some(false));
}

#[test]
fn username_with_spaces_or_symbols_is_invalid() {
    assert_eq!(validate_username("a b c"), Some(false));
    assert_eq!(validate_username("name!"), Some(false));
    assert_eq!(validate_username("näme"), Some(false));
}

#[test]
fn username_alphanumeric_and_underscore_is_valid() {
    assert_eq!(validate_username("abc"), Some(true));
    assert_eq!(validate_username("user_42"), Some(true));
    assert_eq!(validate_username("UPPER_lower_9"), Some(true));
}

// =============================================================
// Password strength
// =============================================================

#[test]
fn strength_zero_for_empty_password() {
    assert_eq!(password_strength(""), 0);
}

#[test]
fn strength_rewards_length() {
    assert_eq!(password_strength("aaaaaaaa"), 25);
    assert_eq!(password_strength("aaaaaaaaaaaa"), 50);
}

#[test]
fn strength_rewards_mixed_case_digits_and_symbols() {
    // 8+ chars, mixed case, digit, symbol: 25 + 25 + 15 + 10.
    assert_eq!(password_strength("Abcdef1!"), 75);
    // Add length >= 12 and the score caps at 100.
    assert_eq!(password_strength("Abcdefghij1!"), 100);
}

#[test]
fn strength_caps_at_one_hundred() {
    assert!(password_strength("A very Long passphrase 123!?") <= 100);
}

#[test]
fn strength_band_thresholds() {
    assert_eq!(StrengthBand::from_score(0), StrengthBand::Weak);
    assert_eq!(StrengthBand::from_score(29), StrengthBand::Weak);
    assert_eq!(StrengthBand::from_score(30), StrengthBand::Medium);
    assert_eq!(StrengthBand::from_score(59), StrengthBand::Medium);
    assert_eq!(StrengthBand::from_score(60), StrengthBand::Strong);
    assert_eq!(StrengthBand::from_score(100), StrengthBand::Strong);
}

#[test]
fn strength_band_labels() {
    assert_eq!(StrengthBand::Weak.label(), "Weak");
    assert_eq!(StrengthBand::Medium.label(), "Medium");
    assert_eq!(StrengthBand::Strong.label(), "Strong");
}

// =============================================================
// Submit readiness
// =============================================================

#[test]
fn password_ready_requires_min_length_and_match() {
    assert!(!password_ready("short", "short"));
    assert!(!password_ready("longenough", "different"));
    assert!(password_ready("longenough", "longenough"));
}
