// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field values and grouped selections supplied by the surrounding form.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Current string content of each text-like field, keyed by field id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    /// Value of a field; absent fields read as empty.
    pub fn get(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Radio-group and checkbox state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Selections {
    /// Group id to the value of its selected option.
    #[serde(default)]
    groups: BTreeMap<String, String>,
    /// Checkbox id to its submitted value; unchecked boxes are absent.
    #[serde(default)]
    checked: BTreeMap<String, String>,
}

impl Selections {
    pub fn selected(&self, group: &str) -> Option<&str> {
        self.groups.get(group).map(String::as_str)
    }

    pub fn select(&mut self, group: impl Into<String>, value: impl Into<String>) {
        self.groups.insert(group.into(), value.into());
    }

    /// Submitted value of a checkbox, if it is checked.
    pub fn checked_value(&self, id: &str) -> Option<&str> {
        self.checked.get(id).map(String::as_str)
    }

    /// Check the box with `value`, or uncheck it when `value` is `None`.
    pub fn set_checked(&mut self, id: impl Into<String>, value: Option<String>) {
        let id = id.into();
        match value {
            Some(value) => {
                self.checked.insert(id, value);
            }
            None => {
                self.checked.remove(&id);
            }
        }
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn checked(&self) -> impl Iterator<Item = (&str, &str)> {
        self.checked.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Captured state of the whole form, as read from a JSON snapshot.
///
/// ```json
/// {"values": {"fname": "Jane"}, "groups": {"Gender": "Female"}, "checked": {"Asthma": "Asthma"}}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub values: FormValues,
    #[serde(flatten)]
    pub selections: Selections,
}

/// Parse a form snapshot from JSON.
pub fn parse_snapshot(json: &str) -> Result<FormSnapshot> {
    serde_json::from_str(json).context("Failed to parse form snapshot JSON")
}

/// Read and parse a form snapshot file.
pub fn load_snapshot(path: &Path) -> Result<FormSnapshot> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form snapshot: {}", path.display()))?;
    parse_snapshot(&json).with_context(|| format!("Invalid form snapshot: {}", path.display()))
}
