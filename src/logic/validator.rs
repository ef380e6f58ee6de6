// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field validation: the generic required/pattern check plus per-field hooks.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::logic::calendar::parse_form_date;
use crate::models::field_rule::{
    CONFIRM_PASSWORD, DATE_OF_BIRTH, FieldRule, PASSWORD, RuleTable, USER_ID,
};
use crate::models::form_values::FormValues;

/// Outcome of validating one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    #[allow(dead_code)]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Sibling state needed by cross-field and temporal checks.
#[derive(Clone, Copy, Debug)]
pub struct ValidationContext<'a> {
    pub today: NaiveDate,
    pub password: &'a str,
}

/// Extra check run after the pattern matches; returns an error message on failure.
type FieldHook = fn(&str, &FieldRule, &ValidationContext<'_>) -> Option<String>;

const FIELD_HOOKS: &[(&str, FieldHook)] = &[
    (DATE_OF_BIRTH, dob_not_in_future),
    (CONFIRM_PASSWORD, matches_password),
];

fn hook_for(id: &str) -> Option<FieldHook> {
    FIELD_HOOKS
        .iter()
        .find(|(hook_id, _)| *hook_id == id)
        .map(|(_, hook)| *hook)
}

fn dob_not_in_future(
    value: &str,
    rule: &FieldRule,
    ctx: &ValidationContext<'_>,
) -> Option<String> {
    match parse_form_date(value) {
        None => Some(format!("Invalid {} format.", rule.label)),
        Some(date) if date > ctx.today => Some("Date cannot be in the future.".to_string()),
        Some(_) => None,
    }
}

fn matches_password(
    value: &str,
    _rule: &FieldRule,
    ctx: &ValidationContext<'_>,
) -> Option<String> {
    // Both sides are compared trimmed, like every other field value.
    (value != ctx.password.trim()).then(|| "Passwords do not match.".to_string())
}

/// Validate one value against its rule.
///
/// Checks run in priority order and stop at the first failure:
/// - required and blank: `"<label> is required."`
/// - pattern mismatch: `"Invalid <label> format."`
/// - field hook (date of birth, password confirmation)
///
/// The value is trimmed first. A blank optional field is valid without consulting its pattern.
pub fn validate(value: &str, rule: &FieldRule, ctx: &ValidationContext<'_>) -> ValidationResult {
    let value = value.trim();

    if value.is_empty() {
        return if rule.required {
            ValidationResult::Invalid(format!("{} is required.", rule.label))
        } else {
            ValidationResult::Valid
        };
    }

    if !rule.pattern.is_match(value) {
        return ValidationResult::Invalid(format!("Invalid {} format.", rule.label));
    }

    match hook_for(&rule.id).and_then(|hook| hook(value, rule, ctx)) {
        Some(msg) => ValidationResult::Invalid(msg),
        None => ValidationResult::Valid,
    }
}

/// Validate the field `rule` governs, reading its value and siblings from `values`.
pub fn validate_field(
    rule: &FieldRule,
    values: &FormValues,
    today: NaiveDate,
) -> ValidationResult {
    let ctx = ValidationContext {
        today,
        password: values.get(PASSWORD),
    };
    validate(values.get(&rule.id), rule, &ctx)
}

/// Validate every field in the table. Never short-circuits, so all errors surface together.
pub fn validate_all(values: &FormValues, table: &RuleTable, today: NaiveDate) -> FormErrors {
    let mut errors = FormErrors::default();
    for rule in table.rules() {
        errors.record(&rule.id, validate_field(rule, values, today));
    }
    tracing::debug!(
        fields = table.len(),
        invalid = errors.len(),
        "batch validation finished"
    );
    errors
}

/// Canonicalize a value as it enters the form. The user id is stored lowercase.
pub fn normalize_value(id: &str, value: String) -> String {
    if id == USER_ID {
        value.to_lowercase()
    } else {
        value
    }
}

/// Per-field error text; a field without an entry is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<String, String>,
}

impl FormErrors {
    /// Store or clear the error for `id` according to `result`.
    pub fn record(&mut self, id: &str, result: ValidationResult) {
        match result {
            ValidationResult::Valid => {
                self.errors.remove(id);
            }
            ValidationResult::Invalid(msg) => {
                self.errors.insert(id.to_string(), msg);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    /// Errors in the order the table declares their fields.
    pub fn in_table_order<'a>(
        &'a self,
        table: &'a RuleTable,
    ) -> impl Iterator<Item = (&'a FieldRule, &'a str)> + 'a {
        table
            .rules()
            .iter()
            .filter_map(|rule| self.get(&rule.id).map(|msg| (rule, msg)))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
