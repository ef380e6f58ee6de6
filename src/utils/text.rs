// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Small string helpers for display labels.

/// Uppercase the first character and keep the rest unchanged ("fluinfo" → "Fluinfo").
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize_first;

    #[test]
    fn capitalizes_only_the_first_character() {
        assert_eq!(capitalize_first("vaccinated"), "Vaccinated");
        assert_eq!(capitalize_first("whoopingCough"), "WhoopingCough");
        assert_eq!(capitalize_first("x"), "X");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(capitalize_first(""), "");
    }
}
