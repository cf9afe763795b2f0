mod common;

use common::{snapshot, Harness};
use organify_core::{remove_phrase_from_names, CoreError, RemovePhraseOptions};
use std::fs;
use tempfile::TempDir;

fn options(phrase: &str) -> RemovePhraseOptions {
    RemovePhraseOptions {
        phrase: phrase.to_string(),
        case_sensitive: true,
        use_regex: false,
    }
}

#[test]
fn removes_a_literal_phrase_from_file_names() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Photo_v2_FINAL.jpg"), "photo").unwrap();

    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &options("_FINAL"), &harness.ctx(false)).unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        fs::read_to_string(tmp.path().join("Photo_v2.jpg")).unwrap(),
        "photo"
    );
}

#[test]
fn case_sensitivity_is_a_toggle() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("draft_FINAL.txt"), "x").unwrap();

    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &options("_final"), &harness.ctx(false)).unwrap();
    assert_eq!(count, 0);
    assert!(tmp.path().join("draft_FINAL.txt").exists());

    let insensitive = RemovePhraseOptions {
        case_sensitive: false,
        ..options("_final")
    };
    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &insensitive, &harness.ctx(false)).unwrap();
    assert_eq!(count, 1);
    assert!(tmp.path().join("draft.txt").exists());
}

#[test]
fn regex_mode_removes_every_match() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("img_001_copy_002.png"), "x").unwrap();

    let harness = Harness::new();
    let regex_options = RemovePhraseOptions {
        phrase: r"_\d+".to_string(),
        case_sensitive: true,
        use_regex: true,
    };
    let count =
        remove_phrase_from_names(tmp.path(), &regex_options, &harness.ctx(false)).unwrap();

    assert_eq!(count, 1);
    assert!(tmp.path().join("img_copy.png").exists());
}

#[test]
fn invalid_regex_aborts_before_touching_the_tree() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("victim_(.txt"), "x").unwrap();
    let before = snapshot(tmp.path());

    let harness = Harness::new();
    let bad = RemovePhraseOptions {
        phrase: "(".to_string(),
        case_sensitive: true,
        use_regex: true,
    };
    let result = remove_phrase_from_names(tmp.path(), &bad, &harness.ctx(false));

    assert!(matches!(result, Err(CoreError::Pattern(_))));
    assert_eq!(snapshot(tmp.path()), before);
}

#[test]
fn empty_phrase_is_a_usage_warning_with_zero_count() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("file.txt"), "x").unwrap();

    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &options(""), &harness.ctx(false)).unwrap();

    assert_eq!(count, 0);
    assert!(harness
        .messages()
        .iter()
        .any(|message| message.contains("empty")));
}

#[test]
fn emptied_file_name_falls_back_to_renamed_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("DELETE.jpg"), "x").unwrap();

    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &options("DELETE"), &harness.ctx(false)).unwrap();

    assert_eq!(count, 1);
    assert!(tmp.path().join("renamed_file.jpg").exists());
}

#[test]
fn emptied_folder_name_falls_back_to_renamed_folder() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("JUNK")).unwrap();

    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &options("JUNK"), &harness.ctx(false)).unwrap();

    assert_eq!(count, 1);
    assert!(tmp.path().join("renamed_folder").is_dir());
}

#[test]
fn emptied_name_without_extension_is_skipped() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("GONE"), "x").unwrap();

    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &options("GONE"), &harness.ctx(false)).unwrap();

    assert_eq!(count, 0);
    assert!(tmp.path().join("GONE").exists());
}

#[test]
fn existing_destination_is_never_overwritten() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("report_old.txt"), "from source").unwrap();
    fs::write(tmp.path().join("report.txt"), "pre-existing").unwrap();

    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &options("_old"), &harness.ctx(false)).unwrap();

    assert_eq!(count, 0);
    assert_eq!(
        fs::read_to_string(tmp.path().join("report_old.txt")).unwrap(),
        "from source"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("report.txt")).unwrap(),
        "pre-existing"
    );
    assert!(harness
        .messages()
        .iter()
        .any(|message| message.contains("Conflict")));
}

#[test]
fn children_are_renamed_before_their_parents() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("album_TMP");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("cover_TMP.jpg"), "cover").unwrap();

    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &options("_TMP"), &harness.ctx(false)).unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        fs::read_to_string(tmp.path().join("album").join("cover.jpg")).unwrap(),
        "cover"
    );
}

#[test]
fn unchanged_names_are_silent_no_ops() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("clean.txt"), "x").unwrap();

    let harness = Harness::new();
    let count =
        remove_phrase_from_names(tmp.path(), &options("zzz"), &harness.ctx(false)).unwrap();

    assert_eq!(count, 0);
    assert!(harness
        .messages()
        .iter()
        .any(|message| message.contains("not found in any")));
}

#[test]
fn result_is_trimmed() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("name trailing.txt"), "x").unwrap();

    let harness = Harness::new();
    let count = remove_phrase_from_names(
        tmp.path(),
        &options("trailing.txt"),
        &harness.ctx(false),
    )
    .unwrap();

    // "name " is trimmed to "name".
    assert_eq!(count, 1);
    assert!(tmp.path().join("name").exists());
}
