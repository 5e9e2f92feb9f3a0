// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding of archive entries.
//!
//! ```text
//! bytes --(BOM sniff)--> UTF-8 / UTF-16LE / UTF-16BE --(decode)--> String
//!        no BOM -------> UTF-8 (lossy)
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use std::borrow::Cow;

/// Encoding detected from the leading bytes of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// No BOM, read as UTF-8
    #[default]
    Utf8,
    /// UTF-8 with a byte order mark
    Utf8Bom,
    /// UTF-16 Little Endian with BOM
    Utf16Le,
    /// UTF-16 Big Endian with BOM
    Utf16Be,
}

/// Detect the encoding announced by a byte order mark.
#[must_use]
pub fn detect(bytes: &[u8]) -> TextEncoding {
    match encoding_rs::Encoding::for_bom(bytes) {
        Some((encoding, _)) if encoding == encoding_rs::UTF_16LE => TextEncoding::Utf16Le,
        Some((encoding, _)) if encoding == encoding_rs::UTF_16BE => TextEncoding::Utf16Be,
        Some(_) => TextEncoding::Utf8Bom,
        None => TextEncoding::Utf8,
    }
}

/// Decode entry bytes to text, honouring and stripping a BOM.
///
/// # Example
/// ```
/// use obs_translation_updater::utility::encoding::decode_text;
///
/// assert_eq!(decode_text(b"\xEF\xBB\xBFcaf\xC3\xA9"), "café");
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match encoding_rs::Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => {
            let (text, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            text
        }
        None => String::from_utf8_lossy(bytes),
    }
}
