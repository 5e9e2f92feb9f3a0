// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::copy::{copy_dir_contents_async, move_dir_async};
use super::remove::{clear_dir_except, remove_path_if_exists};
use std::fs;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[tokio::test]
async fn test_copy_overlays_and_keeps_siblings() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let dst = temp.path().join("dst");
    fs::create_dir_all(src.join("data/locale")).unwrap();
    fs::create_dir_all(dst.join("data/locale")).unwrap();
    fs::write(src.join("data/locale/fr-FR.ini"), "new\n").unwrap();
    fs::write(dst.join("data/locale/fr-FR.ini"), "old\n").unwrap();
    fs::write(dst.join("data/locale/en-US.ini"), "base\n").unwrap();

    let copied = copy_dir_contents_async(&src, &dst).await.unwrap();

    assert_eq!(copied, 1);
    assert_eq!(
        fs::read_to_string(dst.join("data/locale/fr-FR.ini")).unwrap(),
        "new\n"
    );
    assert_eq!(
        fs::read_to_string(dst.join("data/locale/en-US.ini")).unwrap(),
        "base\n"
    );
}

#[tokio::test]
async fn test_move_dir_creates_parent() {
    let temp = temp_dir();
    let src = temp.path().join("obs-vst");
    fs::create_dir_all(src.join("data/locale")).unwrap();
    fs::write(src.join("data/locale/de-DE.ini"), "x\n").unwrap();
    let dst = temp.path().join("plugins/obs-vst");

    move_dir_async(&src, &dst).await.unwrap();

    assert!(!src.exists());
    assert!(dst.join("data/locale/de-DE.ini").is_file());
}

#[tokio::test]
async fn test_move_dir_refuses_existing_destination() {
    let temp = temp_dir();
    let src = temp.path().join("a");
    let dst = temp.path().join("b");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dst).unwrap();

    assert!(move_dir_async(&src, &dst).await.is_err());
    assert!(src.exists());
}

#[tokio::test]
async fn test_remove_path_if_exists() {
    let temp = temp_dir();
    let dir = temp.path().join("Website");
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(dir.join("nested/index.ini"), "x").unwrap();

    assert!(remove_path_if_exists(&dir).await.unwrap());
    assert!(!dir.exists());
    assert!(!remove_path_if_exists(&dir).await.unwrap());
}

#[tokio::test]
async fn test_clear_dir_except_keeps_base_file() {
    let temp = temp_dir();
    let dir = temp.path();
    fs::write(dir.join("en-US.ini"), "base").unwrap();
    fs::write(dir.join("fr-FR.ini"), "fr").unwrap();
    fs::create_dir(dir.join("stale")).unwrap();

    let removed = clear_dir_except(dir, "en-US.ini").await.unwrap();

    assert_eq!(removed, 2);
    let names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, ["en-US.ini"]);
}
