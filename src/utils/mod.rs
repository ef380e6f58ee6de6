// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by the review and the command line.

pub mod text;

/// Uppercase the first character of a label.
pub use text::capitalize_first;
