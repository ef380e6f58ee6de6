// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring form state, messages, and the validation engine.

use chrono::NaiveDate;

use crate::logic::password::{check_password, password_alert};
use crate::logic::review::compose;
use crate::logic::validator::{FormErrors, normalize_value, validate_all, validate_field};
use crate::models::field_rule::{
    CONFIRM_PASSWORD, FIRST_NAME, LAST_NAME, PASSWORD, RuleTable, USER_ID,
};
use crate::models::form_values::{FormValues, Selections};
use crate::models::review::ReviewModel;

/// Top-level intake form state.
#[derive(Clone, Debug)]
pub struct IntakeModel {
    /// Rules governing each field.
    pub rules: RuleTable,
    /// Reference date for temporal checks.
    pub today: NaiveDate,
    /// Current text values.
    pub values: FormValues,
    /// Radio-group and checkbox state.
    pub selections: Selections,
    /// Error text shown next to each field.
    pub errors: FormErrors,
    /// Blocking alert (password policy violations).
    pub alert: Option<String>,
    /// Latest composed review.
    pub review: Option<ReviewModel>,
    /// Latest status message to display.
    pub status: Option<String>,
}

impl IntakeModel {
    pub fn new(rules: RuleTable, today: NaiveDate) -> Self {
        Self {
            rules,
            today,
            values: FormValues::default(),
            selections: Selections::default(),
            errors: FormErrors::default(),
            alert: None,
            review: None,
            status: None,
        }
    }
}

/// Form events routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A field's content changed.
    FieldEdited { id: String, value: String },
    /// A field lost focus.
    FieldBlurred(String),
    OptionSelected { group: String, value: String },
    /// A checkbox changed; `value` is its submitted value when checked.
    CheckboxToggled { id: String, value: Option<String> },
    /// Run the batch sweep without composing a review.
    ValidateAll,
    ReviewRequested,
    DismissAlert,
}

/// Why a review request did not produce a review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReviewBlocked {
    /// Number of fields with outstanding errors.
    InvalidFields(usize),
    /// Every password policy violation.
    PasswordPolicy(Vec<String>),
}

/// Update the model for one form event.
pub fn update(model: &mut IntakeModel, msg: Msg) {
    match msg {
        Msg::FieldEdited { id, value } => {
            let value = normalize_value(&id, value);
            model.values.set(id.as_str(), value);
            revalidate(model, &id);
            // Confirmation depends on the password; refresh it once it has been typed.
            if id == PASSWORD && !model.values.get(CONFIRM_PASSWORD).is_empty() {
                revalidate(model, CONFIRM_PASSWORD);
            }
        }
        Msg::FieldBlurred(id) => revalidate(model, &id),
        Msg::OptionSelected { group, value } => model.selections.select(group, value),
        Msg::CheckboxToggled { id, value } => model.selections.set_checked(id, value),
        Msg::ValidateAll => {
            model.errors = validate_all(&model.values, &model.rules, model.today);
            let status = if model.errors.is_empty() {
                "All fields are valid.".to_string()
            } else {
                format!("{} field(s) need attention.", model.errors.len())
            };
            surface_event(model, status, false);
        }
        Msg::ReviewRequested => {
            model.review = None;
            match prepare_review(model) {
                Ok(review) => {
                    model.review = Some(review);
                    surface_event(model, "Review ready.".to_string(), false);
                }
                Err(ReviewBlocked::InvalidFields(count)) => {
                    surface_event(model, format!("{count} field(s) need attention."), false);
                }
                Err(ReviewBlocked::PasswordPolicy(violations)) => {
                    if let Some(alert) = password_alert(&violations) {
                        surface_event(model, alert, true);
                    }
                }
            }
        }
        Msg::DismissAlert => model.alert = None,
    }
}

/// Replace the stored error state of one field with a fresh check.
fn revalidate(model: &mut IntakeModel, id: &str) {
    if let Some(rule) = model.rules.get(id) {
        let result = validate_field(rule, &model.values, model.today);
        model.errors.record(id, result);
    }
}

/// Update status/alert fields consistently for user feedback.
fn surface_event(model: &mut IntakeModel, message: String, is_error: bool) {
    if is_error {
        model.alert = Some(message.clone());
    }
    model.status = Some(message);
}

/// Sweep every field, then the password policy, and compose the review only if both pass.
fn prepare_review(model: &mut IntakeModel) -> Result<ReviewModel, ReviewBlocked> {
    model.errors = validate_all(&model.values, &model.rules, model.today);
    if !model.errors.is_empty() {
        tracing::debug!(invalid = model.errors.len(), "review blocked by field errors");
        return Err(ReviewBlocked::InvalidFields(model.errors.len()));
    }

    // Tables without a password field have no policy to enforce.
    if model.rules.get(PASSWORD).is_none() {
        return Ok(compose(&model.values, &model.selections));
    }

    let violations = check_password(
        model.values.get(PASSWORD),
        model.values.get(CONFIRM_PASSWORD),
        model.values.get(USER_ID),
        model.values.get(FIRST_NAME),
        model.values.get(LAST_NAME),
    );
    if !violations.is_empty() {
        tracing::debug!(violations = violations.len(), "review blocked by password policy");
        return Err(ReviewBlocked::PasswordPolicy(violations));
    }

    Ok(compose(&model.values, &model.selections))
}
