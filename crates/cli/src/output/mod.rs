// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for evaluation and report results.

pub mod json;
pub mod text;
