// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared by the validation engine and the command line.

pub mod field_rule;
pub mod form_values;
pub mod jurisdictions;
pub mod review;
