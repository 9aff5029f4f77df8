use std::path::Path;
use std::process::{Command, Output};

use image::RgbImage;
use tempfile::TempDir;

const USAGE: &str = "Error: The path given is not valid.\n";

fn imgdim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgdim"))
        .args(args)
        .env_remove("IMGDIM_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> String {
    let path = dir.join(name);
    RgbImage::new(width, height).save(&path).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_png_640x480() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "img.png", 640, 480);

    let output = imgdim(&[path.as_str()]);
    assert_eq!(stdout(&output), "640,480\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_no_arguments() {
    let output = imgdim(&[]);
    assert_eq!(stdout(&output), USAGE);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_two_arguments() {
    let output = imgdim(&["a.png", "b.png"]);
    assert_eq!(stdout(&output), USAGE);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_three_arguments() {
    let output = imgdim(&["a", "b", "c"]);
    assert_eq!(stdout(&output), USAGE);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_double_dash_alone_is_opened_as_a_path() {
    let output = imgdim(&["--"]);
    assert!(stdout(&output).starts_with("Erreur: "), "got {:?}", stdout(&output));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_double_dash_with_path_is_two_arguments() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "img.png", 640, 480);

    for args in [["--", path.as_str()], [path.as_str(), "--"]] {
        let output = imgdim(&args);
        assert_eq!(stdout(&output), USAGE);
        assert_eq!(output.status.code(), Some(1));
    }
}

#[test]
fn test_hyphen_arguments_are_paths() {
    for arg in ["-x", "--help", ""] {
        let output = imgdim(&[arg]);
        assert!(stdout(&output).starts_with("Erreur: "), "{arg:?}: got {:?}", stdout(&output));
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.png");

    let output = imgdim(&[path.to_str().unwrap()]);
    let out = stdout(&output);
    assert!(out.starts_with("Erreur: "), "got {out:?}");
    assert!(out.contains("missing.png"), "got {out:?}");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_text_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "layer names: background, logo, watermark\n").unwrap();

    let output = imgdim(&[path.to_str().unwrap()]);
    assert!(stdout(&output).starts_with("Erreur: "));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_repeated_runs_match() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "same.png", 17, 250);

    let first = imgdim(&[path.as_str()]);
    let second = imgdim(&[path.as_str()]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout(&first), "17,250\n");
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "logged.png", 3, 2);

    let output = Command::new(env!("CARGO_BIN_EXE_imgdim"))
        .arg(&path)
        .env("IMGDIM_LOG", "debug")
        .output()
        .unwrap();

    assert_eq!(stdout(&output), "3,2\n");
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("read dimensions"), "got {stderr:?}");
}
