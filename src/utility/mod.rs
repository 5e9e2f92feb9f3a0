// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_text()  BOM-aware UTF-8 / UTF-16 --> String
//! fs
//!   copy:    copy_dir_contents_async(), move_dir_async()
//!   remove:  remove_path_if_exists(), clear_dir_except()
//! ```

pub mod encoding;
pub mod fs;
