// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whitespace normalization of translation files.
//!
//! ```text
//! "\n  a=1\r\n\r\n\rb=2 \n\n"
//!   trim            "a=1\r\n\r\n\rb=2"
//!   one regex pass  "a=1\nb=2"          (?:\r\n?|\n)+ --> \n
//!   terminate       "a=1\nb=2\n"
//! ""  or only whitespace  --> None (file is not staged)
//! ```

use crate::error::Result;
use anyhow::Context;
use regex::Regex;

/// Compiled line-break pattern shared by every entry of an archive.
#[derive(Debug, Clone)]
pub struct Normalizer {
    line_breaks: Regex,
}

impl Normalizer {
    /// # Errors
    ///
    /// Returns an error if the line-break pattern fails to compile.
    pub fn new() -> Result<Self> {
        let line_breaks =
            Regex::new(r"(?:\r\n?|\n)+").with_context(|| "failed to compile line-break regex")?;
        Ok(Self { line_breaks })
    }

    /// Normalized text with exactly one trailing newline, or `None` when
    /// nothing but whitespace remains.
    #[must_use]
    pub fn normalize(&self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut normalized = self.line_breaks.replace_all(trimmed, "\n").into_owned();
        normalized.push('\n');
        Some(normalized)
    }
}
