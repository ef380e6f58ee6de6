// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Compose the read-back review from accepted form values.

use crate::models::field_rule::{
    ADDRESS_LINE_1, ADDRESS_LINE_2, CITY, DATE_OF_BIRTH, EMAIL, FIRST_NAME, LAST_NAME,
    MIDDLE_INITIAL, PAIN_SCALE, PASSWORD, PHONE, REASON_FOR_VISIT, SSN, STATE, USER_ID, ZIP_CODE,
};
use crate::models::form_values::{FormValues, Selections};
use crate::models::review::ReviewModel;
use crate::utils::capitalize_first;

/// Text fields shown in the review, in display order.
const REVIEW_FIELDS: &[(&str, &str)] = &[
    (FIRST_NAME, "First Name"),
    (MIDDLE_INITIAL, "Middle Initial"),
    (LAST_NAME, "Last Name"),
    (DATE_OF_BIRTH, "Date of Birth"),
    (SSN, "SSN"),
    (ADDRESS_LINE_1, "Address Line 1"),
    (ADDRESS_LINE_2, "Address Line 2"),
    (CITY, "City"),
    (STATE, "State"),
    (ZIP_CODE, "Zip Code"),
    (EMAIL, "Email"),
    (PHONE, "Phone"),
    (REASON_FOR_VISIT, "Reason for Visit"),
    (PAIN_SCALE, "Pain Scale"),
    (USER_ID, "User ID"),
    (PASSWORD, "Password"),
];

pub const GENDER_GROUP: &str = "Gender";

/// Yes/no question groups; the review label is the capitalized group id.
pub const QUESTION_GROUPS: [&str; 3] = ["vaccinated", "insurance", "fluinfo"];

/// Medical history checkboxes, in display order.
pub const MEDICAL_HISTORY: [&str; 6] = [
    "Mumps",
    "Asthma",
    "WhoopingCough",
    "Diabetes",
    "Shingles",
    "HBP",
];

const MEDICAL_HISTORY_LABEL: &str = "Medical History";
const NO_MEDICAL_HISTORY: &str = "None";

/// Base five-digit code of a ZIP or ZIP+4 value.
pub fn truncate_zip(value: &str) -> &str {
    value.split_once('-').map_or(value, |(base, _)| base)
}

/// Build the review lines for the current values and selections.
///
/// Callers must only compose after the whole form validated and the password passed.
pub fn compose(values: &FormValues, selections: &Selections) -> ReviewModel {
    let mut review = ReviewModel::default();

    for (id, label) in REVIEW_FIELDS {
        let value = values.get(id).trim();
        if value.is_empty() {
            continue;
        }
        let value = if *id == ZIP_CODE {
            truncate_zip(value)
        } else {
            value
        };
        review.push(*label, value);
    }

    if let Some(gender) = selections.selected(GENDER_GROUP) {
        review.push(GENDER_GROUP, gender);
    }

    for group in QUESTION_GROUPS {
        if let Some(answer) = selections.selected(group) {
            review.push(capitalize_first(group), answer);
        }
    }

    let conditions: Vec<&str> = MEDICAL_HISTORY
        .iter()
        .filter_map(|id| selections.checked_value(id))
        .collect();
    let history = if conditions.is_empty() {
        NO_MEDICAL_HISTORY.to_string()
    } else {
        conditions.join(", ")
    };
    review.push(MEDICAL_HISTORY_LABEL, history);

    tracing::debug!(lines = review.len(), "review composed");
    review
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        let mut values = FormValues::default();
        for (id, value) in pairs {
            values.set(*id, *value);
        }
        values
    }

    #[test]
    fn zip_plus_four_is_truncated() {
        let review = compose(
            &values(&[(ZIP_CODE, "12345-6789")]),
            &Selections::default(),
        );
        assert_eq!(review.get("Zip Code"), Some("12345"));

        let review = compose(&values(&[(ZIP_CODE, "12345")]), &Selections::default());
        assert_eq!(review.get("Zip Code"), Some("12345"));
    }

    #[test]
    fn empty_fields_are_omitted_in_declared_order() {
        let review = compose(
            &values(&[
                (USER_ID, "jdoe1"),
                (FIRST_NAME, "Jane"),
                (MIDDLE_INITIAL, ""),
                (ADDRESS_LINE_2, "   "),
                (LAST_NAME, "Doe"),
            ]),
            &Selections::default(),
        );
        let labels: Vec<&str> = review.lines().iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["First Name", "Last Name", "User ID", "Medical History"]
        );
    }

    #[test]
    fn medical_history_defaults_to_none() {
        let review = compose(&FormValues::default(), &Selections::default());
        assert_eq!(review.len(), 1);
        assert_eq!(review.get("Medical History"), Some("None"));
    }

    #[test]
    fn medical_history_joins_in_checkbox_order() {
        let mut sel = Selections::default();
        sel.set_checked("HBP", Some("High Blood Pressure".into()));
        sel.set_checked("Asthma", Some("Asthma".into()));
        sel.set_checked("NotAField", Some("Ignored".into()));

        let review = compose(&FormValues::default(), &sel);
        assert_eq!(
            review.get("Medical History"),
            Some("Asthma, High Blood Pressure")
        );
    }

    #[test]
    fn selected_groups_emit_capitalized_lines() {
        let mut sel = Selections::default();
        sel.select(GENDER_GROUP, "Female");
        sel.select("vaccinated", "Yes");
        sel.select("fluinfo", "No");

        let review = compose(&FormValues::default(), &sel);
        let rendered: Vec<String> = review
            .lines()
            .iter()
            .map(|l| format!("{}: {}", l.label, l.value))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "Gender: Female",
                "Vaccinated: Yes",
                "Fluinfo: No",
                "Medical History: None",
            ]
        );
        assert_eq!(review.get("Insurance"), None);
    }
}
