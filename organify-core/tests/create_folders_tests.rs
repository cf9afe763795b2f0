mod common;

use common::{snapshot, Harness};
use organify_core::{create_folders_from_list, CreateFoldersOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn creates_one_folder_per_non_empty_line() {
    let tmp = TempDir::new().unwrap();
    let list = "Dresses\n\n  Skirts  \nCoats\n";

    let harness = Harness::new();
    let count = create_folders_from_list(
        tmp.path(),
        list,
        &CreateFoldersOptions::default(),
        &harness.ctx(false),
    )
    .unwrap();

    assert_eq!(count, 3);
    assert!(tmp.path().join("Dresses").is_dir());
    assert!(tmp.path().join("Skirts").is_dir());
    assert!(tmp.path().join("Coats").is_dir());
}

#[test]
fn nested_specs_build_hierarchies_with_the_leaf_decorated() {
    let tmp = TempDir::new().unwrap();
    let list = "Proj/Assets\nProj/Docs";
    let options = CreateFoldersOptions {
        prefix: "P_".to_string(),
        numbering: true,
        ..CreateFoldersOptions::default()
    };

    let harness = Harness::new();
    let count =
        create_folders_from_list(tmp.path(), list, &options, &harness.ctx(false)).unwrap();

    assert_eq!(count, 2);
    assert!(tmp.path().join("Proj").join("P_01_Assets").is_dir());
    assert!(tmp.path().join("Proj").join("P_02_Docs").is_dir());
}

#[test]
fn numbering_respects_start_and_padding() {
    let tmp = TempDir::new().unwrap();
    let options = CreateFoldersOptions {
        numbering: true,
        start: 9,
        padding: 3,
        ..CreateFoldersOptions::default()
    };

    let harness = Harness::new();
    let count = create_folders_from_list(tmp.path(), "a\nb", &options, &harness.ctx(false))
        .unwrap();

    assert_eq!(count, 2);
    assert!(tmp.path().join("009_a").is_dir());
    assert!(tmp.path().join("010_b").is_dir());
}

#[test]
fn numbering_survives_a_start_near_the_limit() {
    let tmp = TempDir::new().unwrap();
    let options = CreateFoldersOptions {
        numbering: true,
        start: u32::MAX,
        padding: 1,
        ..CreateFoldersOptions::default()
    };

    let harness = Harness::new();
    let count = create_folders_from_list(tmp.path(), "a\nb", &options, &harness.ctx(false))
        .unwrap();

    assert_eq!(count, 2);
    assert!(tmp.path().join("4294967295_a").is_dir());
    assert!(tmp.path().join("4294967296_b").is_dir());
}

#[test]
fn suffix_is_appended_after_the_name() {
    let tmp = TempDir::new().unwrap();
    let options = CreateFoldersOptions {
        suffix: "_raw".to_string(),
        ..CreateFoldersOptions::default()
    };

    let harness = Harness::new();
    let count =
        create_folders_from_list(tmp.path(), "shoot", &options, &harness.ctx(false)).unwrap();

    assert_eq!(count, 1);
    assert!(tmp.path().join("shoot_raw").is_dir());
}

#[test]
fn illegal_characters_are_stripped_from_each_segment() {
    let tmp = TempDir::new().unwrap();

    let harness = Harness::new();
    let count = create_folders_from_list(
        tmp.path(),
        "Sales: 2024?/Q<1>",
        &CreateFoldersOptions::default(),
        &harness.ctx(false),
    )
    .unwrap();

    assert_eq!(count, 1);
    assert!(tmp.path().join("Sales 2024").join("Q1").is_dir());
}

#[test]
fn fully_illegal_names_are_skipped_with_a_warning() {
    let tmp = TempDir::new().unwrap();

    let harness = Harness::new();
    let count = create_folders_from_list(
        tmp.path(),
        "???\nok",
        &CreateFoldersOptions::default(),
        &harness.ctx(false),
    )
    .unwrap();

    assert_eq!(count, 1);
    assert!(tmp.path().join("ok").is_dir());
    assert!(harness
        .messages()
        .iter()
        .any(|message| message.contains("empty after sanitizing")));
}

#[test]
fn existing_folders_are_counted_without_error() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("already")).unwrap();

    let harness = Harness::new();
    let count = create_folders_from_list(
        tmp.path(),
        "already",
        &CreateFoldersOptions::default(),
        &harness.ctx(false),
    )
    .unwrap();

    // create_dir_all is idempotent.
    assert_eq!(count, 1);
}

#[test]
fn empty_list_is_a_usage_warning() {
    let tmp = TempDir::new().unwrap();

    let harness = Harness::new();
    let count = create_folders_from_list(
        tmp.path(),
        "  \n\n ",
        &CreateFoldersOptions::default(),
        &harness.ctx(false),
    )
    .unwrap();

    assert_eq!(count, 0);
    assert!(harness
        .messages()
        .iter()
        .any(|message| message.contains("folder list is empty")));
}

#[test]
fn dry_run_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    let before = snapshot(tmp.path());

    let harness = Harness::new();
    let count = create_folders_from_list(
        tmp.path(),
        "a\nb",
        &CreateFoldersOptions::default(),
        &harness.ctx(true),
    )
    .unwrap();

    assert_eq!(count, 2);
    assert_eq!(snapshot(tmp.path()), before);
}

#[test]
fn cancellation_keeps_folders_created_so_far() {
    let tmp = TempDir::new().unwrap();

    let harness = Harness::new();
    harness.cancel.cancel();
    let count = create_folders_from_list(
        tmp.path(),
        "a\nb",
        &CreateFoldersOptions::default(),
        &harness.ctx(false),
    )
    .unwrap();

    assert_eq!(count, 0);
    assert!(!tmp.path().join("a").exists());
}
