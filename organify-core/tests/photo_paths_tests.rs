mod common;

use common::Harness;
use organify_core::{generate_photo_paths, ResultSink};
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

/// Captures every publication so tests can assert both content and count.
#[derive(Default)]
struct Capture {
    published: Mutex<Vec<(String, String)>>,
}

impl ResultSink for Capture {
    fn publish(&self, success: &str, errors: &str) {
        self.published
            .lock()
            .unwrap()
            .push((success.to_string(), errors.to_string()));
    }
}

impl Capture {
    fn single(&self) -> (String, String) {
        let published = self.published.lock().unwrap();
        assert_eq!(published.len(), 1, "results must be published exactly once");
        published[0].clone()
    }
}

#[test]
fn builds_one_templated_line_per_model_in_natural_order() {
    let tmp = TempDir::new().unwrap();
    let model = tmp.path().join("alpha");
    fs::create_dir(&model).unwrap();
    fs::write(model.join("img10.jpg"), "x").unwrap();
    fs::write(model.join("img2.jpg"), "x").unwrap();
    fs::write(model.join("notes.txt"), "not an image").unwrap();

    let harness = Harness::new();
    let capture = Capture::default();
    let count =
        generate_photo_paths(tmp.path(), "alpha", &harness.ctx(false), Some(&capture)).unwrap();

    assert_eq!(count, 1);
    let (success, errors) = capture.single();
    assert!(errors.is_empty());
    let expected = format!(
        "\"[+\n+{}|{}]\"",
        model.join("img2.jpg").display(),
        model.join("img10.jpg").display()
    );
    assert_eq!(success, expected);
}

#[test]
fn missing_folders_land_in_the_error_block() {
    let tmp = TempDir::new().unwrap();
    let model = tmp.path().join("real");
    fs::create_dir(&model).unwrap();
    fs::write(model.join("1.jpg"), "x").unwrap();

    let harness = Harness::new();
    let capture = Capture::default();
    let count = generate_photo_paths(
        tmp.path(),
        "real\nghost",
        &harness.ctx(false),
        Some(&capture),
    )
    .unwrap();

    assert_eq!(count, 1);
    let (success, errors) = capture.single();
    assert!(success.contains("1.jpg"));
    assert_eq!(errors, "ghost -> ERROR: folder not found!");
}

#[test]
fn folder_without_images_is_an_error_line() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("empty")).unwrap();

    let harness = Harness::new();
    let capture = Capture::default();
    let count =
        generate_photo_paths(tmp.path(), "empty", &harness.ctx(false), Some(&capture)).unwrap();

    assert_eq!(count, 0);
    let (success, errors) = capture.single();
    assert!(success.is_empty());
    assert_eq!(errors, "empty -> ERROR: no images found in folder.");
}

#[test]
fn only_top_level_images_are_collected() {
    let tmp = TempDir::new().unwrap();
    let model = tmp.path().join("m");
    fs::create_dir_all(model.join("extras")).unwrap();
    fs::write(model.join("1.jpg"), "x").unwrap();
    fs::write(model.join("extras").join("2.jpg"), "x").unwrap();

    let harness = Harness::new();
    let capture = Capture::default();
    generate_photo_paths(tmp.path(), "m", &harness.ctx(false), Some(&capture)).unwrap();

    let (success, _) = capture.single();
    assert!(success.contains("1.jpg"));
    assert!(!success.contains("extras"));
}

#[test]
fn never_touches_the_tree() {
    let tmp = TempDir::new().unwrap();
    let model = tmp.path().join("m");
    fs::create_dir(&model).unwrap();
    fs::write(model.join("1.jpg"), "x").unwrap();
    let before = common::snapshot(tmp.path());

    let harness = Harness::new();
    generate_photo_paths(tmp.path(), "m", &harness.ctx(false), None).unwrap();

    assert_eq!(common::snapshot(tmp.path()), before);
}

#[test]
fn empty_model_list_publishes_empty_blocks() {
    let tmp = TempDir::new().unwrap();

    let harness = Harness::new();
    let capture = Capture::default();
    let count =
        generate_photo_paths(tmp.path(), " \n ", &harness.ctx(false), Some(&capture)).unwrap();

    assert_eq!(count, 0);
    assert_eq!(capture.single(), (String::new(), String::new()));
    assert!(harness
        .messages()
        .iter()
        .any(|message| message.contains("model list is empty")));
}

#[test]
fn cancellation_still_publishes_partial_results() {
    let tmp = TempDir::new().unwrap();
    let model = tmp.path().join("m");
    fs::create_dir(&model).unwrap();
    fs::write(model.join("1.jpg"), "x").unwrap();

    let harness = Harness::new();
    harness.cancel.cancel();
    let capture = Capture::default();
    let count =
        generate_photo_paths(tmp.path(), "m", &harness.ctx(false), Some(&capture)).unwrap();

    assert_eq!(count, 0);
    let (success, _) = capture.single();
    assert!(success.is_empty());
}

#[test]
fn closures_can_serve_as_result_sinks() {
    let tmp = TempDir::new().unwrap();
    let model = tmp.path().join("m");
    fs::create_dir(&model).unwrap();
    fs::write(model.join("1.jpg"), "x").unwrap();

    let seen = Mutex::new(String::new());
    let sink = |success: &str, _errors: &str| {
        *seen.lock().unwrap() = success.to_string();
    };

    let harness = Harness::new();
    generate_photo_paths(tmp.path(), "m", &harness.ctx(false), Some(&sink)).unwrap();

    assert!(seen.lock().unwrap().contains("1.jpg"));
}
