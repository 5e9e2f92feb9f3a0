// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async filesystem helpers.
//!
//! ```text
//! copy:    copy_dir_contents_async()  recursive overlay copy
//!          move_dir_async()           rename, copy+delete fallback
//! remove:  remove_path_if_exists()    file or tree, missing is fine
//!          clear_dir_except()         empty a directory but one file
//! ```

pub mod copy;
pub mod remove;

#[cfg(test)]
mod tests;
