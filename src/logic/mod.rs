// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validation engine: field rules, password policy, and review composition.

pub mod calendar;
pub mod password;
pub mod review;
pub mod validator;
