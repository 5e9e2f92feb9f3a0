// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          sync / authors / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+--------+--------+------'
//!                 |        |        |
//!                 v        v        v
//!              crowdin   sync     locale
//!             API, poll  git     archive, layout
//!                 |       flow      |
//!                 v        |        v
//!              authors     |     desktop
//!                          v
//!                         git
//!                    CLI runner / gix
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, net,      |
//!   |               utility (encoding, fs)    |
//!   +-----------------------------------------+
//! ```

pub mod authors;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod crowdin;
pub mod desktop;
pub mod error;
pub mod git;
pub mod locale;
pub mod logging;
pub mod net;
pub mod sync;
pub mod utility;
