// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Password policy checks evaluated together at review time.

pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MAX_PASSWORD_CHARS: usize = 30;

/// At least one of these is required.
const SPECIAL_CHARACTERS: &str = "!@#%^&*()-_=+\\/><.,`~";

/// Check a password against every policy rule and return all violations.
///
/// Nothing short-circuits: each failing rule contributes its message, in a fixed order.
/// The identity check is case-insensitive and ignores blank identity values.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(check_password("Abcdef1!", "Abcdef1!", "jdoe1", "Jane", "Doe").is_empty());
/// ```
pub fn check_password(
    password: &str,
    confirm: &str,
    user_id: &str,
    first_name: &str,
    last_name: &str,
) -> Vec<String> {
    let mut errors = Vec::new();

    if password != confirm {
        errors.push("Passwords do not match.".to_string());
    }
    let len = password.chars().count();
    if !(MIN_PASSWORD_CHARS..=MAX_PASSWORD_CHARS).contains(&len) {
        errors.push(format!(
            "Password must be between {MIN_PASSWORD_CHARS} and {MAX_PASSWORD_CHARS} characters."
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit.".to_string());
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        errors.push("Password must contain at least one special character.".to_string());
    }
    if password.contains('"') {
        errors.push("Password cannot contain double quotes.".to_string());
    }
    if contains_identity(password, &[user_id, first_name, last_name]) {
        errors.push("Password cannot contain your user ID or name.".to_string());
    }

    errors
}

fn contains_identity(password: &str, identity: &[&str]) -> bool {
    let password = password.to_lowercase();
    identity
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .any(|part| password.contains(&part.to_lowercase()))
}

/// Single alert text for a batch of violations, or `None` when the password passed.
pub fn password_alert(violations: &[String]) -> Option<String> {
    (!violations.is_empty()).then(|| violations.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(password: &str) -> Vec<String> {
        check_password(password, password, "jdoe1", "Jane", "Doe")
    }

    #[test]
    fn compliant_password_passes() {
        assert!(check("Abcdef1!").is_empty());
    }

    #[test]
    fn reports_all_complexity_failures_together() {
        let errors = check("password");
        assert_eq!(
            errors,
            vec![
                "Password must contain at least one uppercase letter.",
                "Password must contain at least one digit.",
                "Password must contain at least one special character.",
            ]
        );
    }

    #[test]
    fn mismatch_and_length_are_reported() {
        let errors = check_password("Ab1!", "Ab1?", "jdoe1", "Jane", "Doe");
        assert_eq!(errors[0], "Passwords do not match.");
        assert_eq!(errors[1], "Password must be between 8 and 30 characters.");
        assert_eq!(errors.len(), 2);

        let long = format!("Aa1!{}", "x".repeat(27));
        assert_eq!(
            check(&long),
            vec!["Password must be between 8 and 30 characters."]
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Eight characters, more than eight bytes.
        assert!(check("Abcdéf1!").is_empty());
    }

    #[test]
    fn double_quote_is_rejected() {
        assert_eq!(
            check("Abcdef1!\""),
            vec!["Password cannot contain double quotes."]
        );
    }

    #[test]
    fn identity_substrings_are_rejected_case_insensitively() {
        let expected = vec!["Password cannot contain your user ID or name."];
        assert_eq!(check("Xx!JDOE1yy"), expected);
        assert_eq!(check("Xx1!jane"), expected);
        assert_eq!(check("Xx1!dOe#"), expected);
    }

    #[test]
    fn blank_identity_values_are_ignored() {
        assert!(check_password("Abcdef1!", "Abcdef1!", "", " ", "").is_empty());
    }

    #[test]
    fn each_special_character_counts() {
        for c in SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdef1{c}");
            assert!(check(&password).is_empty(), "{c} should satisfy the rule");
        }
        assert_eq!(
            check("Abcdef12$"),
            vec!["Password must contain at least one special character."]
        );
    }

    #[test]
    fn alert_joins_violations_with_newlines() {
        assert_eq!(password_alert(&[]), None);
        let alert = password_alert(&check("password")).unwrap();
        assert_eq!(alert.lines().count(), 3);
    }
}
