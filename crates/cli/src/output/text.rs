// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter for `tagwarden evaluate`.
//!
//! Format:
//! ```text
//! <address>: FAIL
//!   <detail>
//! ```
//! Passing and skipped resources are silent; the closing summary line
//! counts them.

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::evaluate::{Failure, ResourceVerdict, Verdict};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    passed: usize,
    failed: usize,
    skipped: usize,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    /// Write a single resource result (streaming).
    pub fn write_resource(&mut self, result: &ResourceVerdict) -> std::io::Result<()> {
        let failure = match &result.verdict {
            Verdict::Passed => {
                self.passed += 1;
                return Ok(());
            }
            Verdict::Unknown => {
                self.skipped += 1;
                return Ok(());
            }
            Verdict::Failed(failure) => failure,
        };
        self.failed += 1;

        self.out.set_color(&scheme::address())?;
        write!(self.out, "{}", result.address)?;
        self.out.reset()?;

        write!(self.out, ": ")?;
        self.out.set_color(&scheme::fail())?;
        write!(self.out, "FAIL")?;
        self.out.reset()?;
        writeln!(self.out)?;

        let detail = match failure {
            Failure::Missing(_) => failure.detail().unwrap_or_default(),
            Failure::Malformed => "tags are not a key/value mapping".to_string(),
        };
        self.out.set_color(&scheme::detail())?;
        writeln!(self.out, "  {}", detail)?;
        self.out.reset()
    }

    /// Write the summary line.
    pub fn write_summary(&mut self) -> std::io::Result<()> {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        let total = self.passed + self.failed;

        if self.failed == 0 {
            self.out.set_color(&scheme::pass())?;
        } else {
            self.out.set_color(&scheme::fail())?;
        }
        write!(
            self.out,
            "{} resource{} checked",
            total,
            plural(total)
        )?;
        self.out.reset()?;
        write!(self.out, ": {} passed, {} failed", self.passed, self.failed)?;

        if self.skipped > 0 {
            write!(self.out, ", ")?;
            self.out.set_color(&scheme::skip())?;
            write!(self.out, "{} skipped", self.skipped)?;
            self.out.reset()?;
        }
        writeln!(self.out)
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
