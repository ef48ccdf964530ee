#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn chatroll() -> Command {
    cargo_bin_cmd!("chatroll")
}

/// Create a unique empty output directory inside the system temp dir
pub fn setup_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chatroll_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create out dir");
    path.to_string_lossy().to_string()
}

/// Write a transcript file inside tempdir and return its path
pub fn write_transcript(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chatroll_transcript.txt", name));
    fs::write(&path, content).expect("write transcript");
    path.to_string_lossy().to_string()
}

/// The single CSV file produced into `dir`, if any
pub fn exported_csv(dir: &str) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().is_some_and(|ext| ext == "csv"))
}
