// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Declarative field rules and the built-in intake rule table.
//! Rules are plain data so new fields can be added without touching validation logic.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;

pub const FIRST_NAME: &str = "fname";
pub const MIDDLE_INITIAL: &str = "minitial";
pub const LAST_NAME: &str = "lname";
pub const DATE_OF_BIRTH: &str = "DOB";
pub const SSN: &str = "ssn";
pub const ADDRESS_LINE_1: &str = "AddressLine1";
pub const ADDRESS_LINE_2: &str = "AddressLine2";
pub const CITY: &str = "City";
pub const STATE: &str = "State";
pub const ZIP_CODE: &str = "ZipCode";
pub const EMAIL: &str = "EmailAddress";
pub const PHONE: &str = "phone";
pub const REASON_FOR_VISIT: &str = "textbox";
pub const PAIN_SCALE: &str = "PainScale";
pub const USER_ID: &str = "userID";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

/// (id, label, pattern, required) for every field of the intake form, in display order.
const INTAKE_RULES: &[(&str, &str, &str, bool)] = &[
    (FIRST_NAME, "First Name", r"^[A-Za-z'-]{1,30}$", true),
    (MIDDLE_INITIAL, "Middle Initial", r"^[A-Za-z]?$", false),
    (LAST_NAME, "Last Name", r"^[A-Za-z'2-5-]{1,30}$", true),
    (DATE_OF_BIRTH, "Date of Birth", r"^\d{4}-\d{2}-\d{2}$", true),
    (SSN, "SSN", r"^\d{3}-\d{2}-\d{4}$", true),
    (ADDRESS_LINE_1, "Address Line 1", r"^.{2,30}$", true),
    (ADDRESS_LINE_2, "Address Line 2", r"^.{2,30}$", false),
    (CITY, "City", r"^.{2,30}$", true),
    (STATE, "State", r"^.{2,}$", true),
    (ZIP_CODE, "Zip Code", r"^\d{5}(-\d{4})?$", true),
    (EMAIL, "Email", r"^[^@\s]+@[^@\s]+\.[^@\s]+$", true),
    (PHONE, "Phone", r"^\d{3}-\d{3}-\d{4}$", true),
    (REASON_FOR_VISIT, "Reason for Visit", r"^.{0,500}$", false),
    // Anchors wrap the whole alternation so only 1 through 10 match.
    (PAIN_SCALE, "Pain Scale", r"^(?:[1-9]|10)$", false),
    (USER_ID, "User ID", r"^[A-Za-z][A-Za-z0-9_-]{4,29}$", true),
    (PASSWORD, "Password", r"^.{8,30}$", true),
    (CONFIRM_PASSWORD, "Re-enter Password", r"^.{8,30}$", true),
];

static INTAKE_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    let rules = INTAKE_RULES
        .iter()
        .map(|(id, label, pattern, required)| FieldRule::new(id, label, pattern, *required))
        .collect::<Result<Vec<_>>>()
        .expect("built-in intake patterns compile");
    RuleTable::new(rules).expect("built-in intake ids are unique")
});

/// Static validation rule for one form field.
#[derive(Clone, Debug)]
pub struct FieldRule {
    pub id: String,
    pub label: String,
    pub pattern: Regex,
    pub required: bool,
}

impl FieldRule {
    /// Build a rule, compiling its pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is blank or `pattern` is not a valid regular expression.
    pub fn new(id: &str, label: &str, pattern: &str, required: bool) -> Result<Self> {
        if id.trim().is_empty() {
            bail!("Field rule '{label}' has an empty id");
        }
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid pattern for field '{id}': {pattern}"))?;
        Ok(Self {
            id: id.to_string(),
            label: label.to_string(),
            pattern,
            required,
        })
    }
}

/// Ordered list of field rules; batch validation walks it front to back.
#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<FieldRule>,
}

impl RuleTable {
    /// Wrap a rule list, rejecting duplicate field ids.
    pub fn new(rules: Vec<FieldRule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id.as_str()) {
                bail!("Duplicate field rule id '{}'", rule.id);
            }
        }
        Ok(Self { rules })
    }

    /// The patient intake form's rule table.
    pub fn intake() -> Self {
        INTAKE_TABLE.clone()
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct FieldRuleRaw {
    id: String,
    label: String,
    pattern: String,
    #[serde(default)]
    required: bool,
}

/// Parse a rule table from a JSON array of `{id, label, pattern, required}` objects.
///
/// `required` defaults to `false` when omitted.
///
/// # Examples
///
/// ```rust,ignore
/// let table = parse_rule_table(r#"[{"id":"nick","label":"Nickname","pattern":"^\\w+$"}]"#)?;
/// assert_eq!(table.len(), 1);
/// ```
pub fn parse_rule_table(json: &str) -> Result<RuleTable> {
    let raw: Vec<FieldRuleRaw> =
        serde_json::from_str(json).context("Failed to parse field rule JSON")?;
    let rules = raw
        .iter()
        .map(|r| FieldRule::new(r.id.trim(), r.label.trim(), &r.pattern, r.required))
        .collect::<Result<Vec<_>>>()?;
    RuleTable::new(rules)
}

/// Read and parse a rule table file.
pub fn load_rule_table(path: &Path) -> Result<RuleTable> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule file: {}", path.display()))?;
    parse_rule_table(&json).with_context(|| format!("Invalid rule file: {}", path.display()))
}
