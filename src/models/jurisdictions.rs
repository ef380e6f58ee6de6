// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Jurisdiction codes offered by the State control.

/// US states plus DC and Puerto Rico, in the order the form lists them.
pub const JURISDICTIONS: [&str; 52] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", //
    "GA", "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", //
    "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", //
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", //
    "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", //
    "WY", "PR",
];

#[cfg(test)]
mod tests {
    use super::JURISDICTIONS;

    #[test]
    fn codes_are_unique_two_letter_uppercase() {
        let mut seen = std::collections::HashSet::new();
        for code in JURISDICTIONS {
            assert_eq!(code.len(), 2);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
            assert!(seen.insert(code), "duplicate {code}");
        }
    }
}
