// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown summary of tag violations.
//!
//! Format:
//! ```text
//! ❌ **Found <n> tag violation(s)**
//!
//! - **<resource>**
//!   - 📁 `<file>:<start>[-<end>]`
//!   - ❌ <message>
//! ```

use super::ViolationRecord;
use crate::error::ExitCode;

/// First line of the summary when nothing failed.
pub const SUCCESS_BANNER: &str = "✅ **All resources have required tags**";

/// Summary text plus the flags a CI step exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub violations_count: usize,
    pub passed: bool,
}

impl Summary {
    /// Violations fail the step unless soft-fail is on.
    pub fn exit_code(&self, soft_fail: bool) -> ExitCode {
        if self.passed || soft_fail {
            ExitCode::Success
        } else {
            ExitCode::CheckFailed
        }
    }
}

/// Build the summary for `violations`, in the order given.
pub fn summarize(violations: &[ViolationRecord]) -> Summary {
    let violations_count = violations.len();
    let passed = violations_count == 0;

    let mut lines = Vec::with_capacity(1 + violations_count * 3);
    if passed {
        lines.push(SUCCESS_BANNER.to_string());
    } else {
        lines.push(format!("❌ **Found {} tag violation(s)**\n", violations_count));
        for v in violations {
            lines.push(format!("- **{}**", v.resource));
            lines.push(format!("  - 📁 `{}`", v.location()));
            lines.push(format!("  - ❌ {}", v.message));
        }
    }

    Summary {
        text: lines.join("\n"),
        violations_count,
        passed,
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
