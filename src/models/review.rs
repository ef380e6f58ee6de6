// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-back summary of accepted values.

use std::fmt;

use serde::Serialize;

/// One `label: value` line of the review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReviewLine {
    pub label: String,
    pub value: String,
}

/// Ordered display lines composed at review time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReviewModel {
    lines: Vec<ReviewLine>,
}

impl ReviewModel {
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.lines.push(ReviewLine {
            label: label.into(),
            value: value.into(),
        });
    }

    #[allow(dead_code)]
    pub fn lines(&self) -> &[ReviewLine] {
        &self.lines
    }

    /// Display value of the first line with `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for ReviewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lines_in_order() {
        let mut review = ReviewModel::default();
        review.push("First Name", "Jane");
        review.push("Medical History", "None");

        assert_eq!(review.to_string(), "First Name: Jane\nMedical History: None\n");
        assert_eq!(review.get("Medical History"), Some("None"));
        assert_eq!(review.get("Gender"), None);
    }

    #[test]
    fn serializes_as_array_of_pairs() {
        let mut review = ReviewModel::default();
        review.push("Zip Code", "12345");

        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"label": "Zip Code", "value": "12345"}])
        );
    }
}
