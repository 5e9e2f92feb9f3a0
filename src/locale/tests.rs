// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::StagingArea;
use super::archive::{ArchiveEntry, StageSummary, extract_to_staging, read_entries};
use super::layout::{
    TranslationDir, apply_staging, arrange_staging, clear_previous_translations, translation_dirs,
};
use super::normalize::Normalizer;
use crate::config::Config;
use crate::error::{ArchiveError, SyncError};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn zip_bytes(dirs: &[&str], files: &[(&str, &[u8])]) -> Vec<u8> {
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for dir in dirs {
        writer.add_directory(*dir, options).unwrap();
    }
    for (name, content) in files {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn config_for(root: &Path) -> Config {
    let mut config = Config::default();
    config.repo.root = root.to_path_buf();
    config
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

// =============================================================================
// Normalizer
// =============================================================================

/// Straightforward rendition of the repeated replace loop.
fn normalize_by_loop(text: &str) -> Option<String> {
    let mut content = text.trim().to_string();
    while content.contains("\r\n") {
        content = content.replace("\r\n", "\n");
    }
    content = content.replace('\r', "\n");
    while content.contains("\n\n") {
        content = content.replace("\n\n", "\n");
    }
    (!content.is_empty()).then(|| content + "\n")
}

#[test]
fn test_normalize_collapses_blank_lines() {
    let normalizer = Normalizer::new().unwrap();
    assert_eq!(
        normalizer.normalize("\n\nA=\"a\"\n\n\nB=\"b\"\n\n").as_deref(),
        Some("A=\"a\"\nB=\"b\"\n")
    );
}

#[test]
fn test_normalize_mixed_line_endings() {
    let normalizer = Normalizer::new().unwrap();
    let input = "  A=1\r\n\r\nB=2\rC=3\n\r\n\rD=4 \r\n";
    assert_eq!(normalizer.normalize(input).as_deref(), Some("A=1\nB=2\nC=3\nD=4\n"));
}

#[test]
fn test_normalize_matches_loop_on_samples() {
    let normalizer = Normalizer::new().unwrap();
    let samples = [
        "",
        " \t\r\n ",
        "x",
        "x\n",
        "a\r\n\r\n\r\nb",
        "a\n\r\nb\r\rc",
        "\r\na=\"1\"\r\n\nb=\"2\"\r",
        "k = \"v\"\n  \nz",
    ];
    for sample in samples {
        assert_eq!(
            normalizer.normalize(sample),
            normalize_by_loop(sample),
            "sample {sample:?}"
        );
    }
}

#[test]
fn test_normalize_output_shape() {
    let normalizer = Normalizer::new().unwrap();
    let input = "\n\na\n\n\n\nb\r\n\r\nc\n\n";
    let output = normalizer.normalize(input).unwrap();
    assert!(!output.contains("\n\n"));
    assert!(!output.starts_with('\n'));
    assert!(output.ends_with('\n') && !output.ends_with("\n\n"));
}

#[test]
fn test_normalize_empty_discarded() {
    let normalizer = Normalizer::new().unwrap();
    assert_eq!(normalizer.normalize(""), None);
    assert_eq!(normalizer.normalize("\r\n \n\t"), None);
}

#[test]
fn test_normalize_keeps_whitespace_only_lines() {
    // Only empty lines collapse; a line holding spaces or tabs is content,
    // matching the upstream updater's output.
    let normalizer = Normalizer::new().unwrap();
    assert_eq!(
        normalizer.normalize("a\n  \n\t\nb").as_deref(),
        Some("a\n  \n\t\nb\n")
    );
}

// =============================================================================
// Archive
// =============================================================================

#[test]
fn test_read_entries_directories_and_text() {
    let bytes = zip_bytes(
        &["UI/", "UI/data/"],
        &[
            ("UI/data/fr-FR.ini", b"\xEF\xBB\xBFOK=\"D'accord\"\r\n"),
            ("Website/de-DE.ini", b"X=\"y\""),
        ],
    );

    let entries = read_entries(&bytes).unwrap();

    assert_eq!(
        entries,
        [
            ArchiveEntry::Directory(PathBuf::from("UI")),
            ArchiveEntry::Directory(PathBuf::from("UI/data")),
            ArchiveEntry::File {
                path: PathBuf::from("UI/data/fr-FR.ini"),
                text: "OK=\"D'accord\"\r\n".to_string(),
            },
            ArchiveEntry::File {
                path: PathBuf::from("Website/de-DE.ini"),
                text: "X=\"y\"".to_string(),
            },
        ]
    );
}

#[test]
fn test_read_entries_rejects_escaping_path() {
    let bytes = zip_bytes(&[], &[("../escape.ini", b"A=1")]);
    match read_entries(&bytes) {
        Err(SyncError::Archive(boxed)) => {
            assert!(matches!(*boxed, ArchiveError::UnsafePath(ref name) if name == "../escape.ini"));
        }
        other => panic!("expected unsafe path error, got {other:?}"),
    }
}

#[test]
fn test_read_entries_invalid_archive() {
    assert!(matches!(
        read_entries(b"not a zip file"),
        Err(SyncError::Archive(_))
    ));
}

#[tokio::test]
async fn test_extract_discards_empty_files() {
    let temp = temp_dir();
    let bytes = zip_bytes(
        &["desktop-entry/"],
        &[
            ("UI/data/locale/fr-FR.ini", b"A=\"a\"\n\n\nB=\"b\""),
            ("UI/data/locale/xx-XX.ini", b"  \r\n\r\n "),
        ],
    );

    let summary = extract_to_staging(&bytes, temp.path(), &Normalizer::new().unwrap())
        .await
        .unwrap();

    assert_eq!(
        summary,
        StageSummary {
            directories: 1,
            files: 1,
            discarded: 1,
        }
    );
    assert!(temp.path().join("desktop-entry").is_dir());
    assert_eq!(
        fs::read_to_string(temp.path().join("UI/data/locale/fr-FR.ini")).unwrap(),
        "A=\"a\"\nB=\"b\"\n"
    );
    assert!(!temp.path().join("UI/data/locale/xx-XX.ini").exists());
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_translation_dirs_order() {
    let config = config_for(Path::new("/obs"));
    let listing = vec!["obs-vst".to_string(), "aja".to_string()];

    let dirs = translation_dirs(&config, &listing);

    assert_eq!(
        dirs,
        [
            TranslationDir {
                path: PathBuf::from("/obs/UI/data/locale"),
                required: true,
            },
            TranslationDir {
                path: PathBuf::from("/obs/plugins/enc-amf/resources/locale"),
                required: false,
            },
            TranslationDir {
                path: PathBuf::from("/obs/plugins/aja/data/locale"),
                required: false,
            },
            TranslationDir {
                path: PathBuf::from("/obs/plugins/obs-vst/data/locale"),
                required: false,
            },
        ]
    );
}

#[tokio::test]
async fn test_clear_previous_translations_keeps_base_file() {
    let temp = temp_dir();
    let root = temp.path();
    write(&root.join("UI/data/locale/en-US.ini"), "base");
    write(&root.join("UI/data/locale/fr-FR.ini"), "fr");
    write(&root.join("plugins/enc-amf/resources/locale/en-US.ini"), "base");
    write(&root.join("plugins/enc-amf/resources/locale/de-DE.ini"), "de");
    write(&root.join("plugins/obs-vst/data/locale/en-US.ini"), "base");
    write(&root.join("plugins/obs-vst/data/locale/ja-JP.ini"), "ja");
    write(&root.join("plugins/obs-vst/src/main.cpp"), "int main() {}");
    fs::create_dir_all(root.join("plugins/no-locale")).unwrap();

    let removed = clear_previous_translations(&config_for(root)).await.unwrap();

    assert_eq!(removed, 3);
    assert_eq!(sorted_names(&root.join("UI/data/locale")), ["en-US.ini"]);
    assert_eq!(
        sorted_names(&root.join("plugins/enc-amf/resources/locale")),
        ["en-US.ini"]
    );
    assert_eq!(
        sorted_names(&root.join("plugins/obs-vst/data/locale")),
        ["en-US.ini"]
    );
    assert!(root.join("plugins/obs-vst/src/main.cpp").is_file());
}

#[tokio::test]
async fn test_clear_previous_translations_requires_ui_locale() {
    let temp = temp_dir();
    fs::create_dir_all(temp.path().join("plugins")).unwrap();
    assert!(
        clear_previous_translations(&config_for(temp.path()))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_arrange_and_apply_staging() {
    let staging = temp_dir();
    let project = temp_dir();
    let s = staging.path();
    write(&s.join("Website/fr-FR.ini"), "site");
    write(&s.join("UI/data/locale/fr-FR.ini"), "ui\n");
    write(&s.join("obs-browser/data/locale/fr-FR.ini"), "browser\n");
    write(&s.join("enc-amf/resources/locale/fr-FR.ini"), "amf\n");
    write(&s.join("plugins/obs-filters/data/locale/fr-FR.ini"), "filters\n");
    write(&s.join("desktop-entry/fr-FR.ini"), "Comment=\"x\"\n");
    write(&project.path().join("UI/data/locale/en-US.ini"), "base\n");

    let config = config_for(project.path());
    arrange_staging(s, &config).await.unwrap();

    assert!(!s.join("Website").exists());
    assert!(!s.join("obs-browser").exists());
    assert!(s.join("plugins/obs-browser/data/locale/fr-FR.ini").is_file());
    assert!(s.join("plugins/enc-amf/resources/locale/fr-FR.ini").is_file());

    let copied = apply_staging(s, &config).await.unwrap();

    assert_eq!(copied, 4);
    let p = project.path();
    assert_eq!(sorted_names(&p.join("UI/data/locale")), ["en-US.ini", "fr-FR.ini"]);
    assert_eq!(
        fs::read_to_string(p.join("plugins/obs-browser/data/locale/fr-FR.ini")).unwrap(),
        "browser\n"
    );
    assert!(p.join("plugins/obs-filters/data/locale/fr-FR.ini").is_file());
    assert!(!p.join("desktop-entry").exists());
    assert!(!p.join("Website").exists());
}

#[test]
fn test_staging_area_close_removes_dir() {
    let staging = StagingArea::new().unwrap();
    let path = staging.path().to_path_buf();
    assert!(path.is_dir());
    assert_eq!(staging.desktop_entry_dir(), path.join("desktop-entry"));

    staging.close().unwrap();
    assert!(!path.exists());
}
