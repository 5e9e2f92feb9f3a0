// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_debug_levels_only_affect_this_crate() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(
        filters,
        [
            "off",
            "error",
            "warn",
            "info",
            "info,obs_translation_updater=debug",
            "info,obs_translation_updater=trace",
            "trace",
        ]
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let ok: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(ok, LogLevel::DEBUG);
    assert!(serde_json::from_str::<LogLevel>("12").is_err());
}
