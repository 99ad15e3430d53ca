use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use predicates::function::FnPredicate;
use predicates::prelude::predicate;
use tempfile::TempDir;

pub fn print(message: &str) -> FnPredicate<fn(&str) -> bool, str> {
    println!("{}:", message);
    predicate::function(|content| {
        println!("{}", content);
        true
    })
}

pub fn build_temp_file(temp_dir: &TempDir, base: &str, extension: &str) -> (PathBuf, OsString) {
    let mut path_buf = temp_dir.path().to_path_buf();
    path_buf.push(format!("{}.{}", base, extension));

    let absolute_path = path_buf.clone().into_os_string();
    println!("{} file: {}",
             base.replace('_', " "),
             absolute_path.to_string_lossy()
    );

    (path_buf, absolute_path)
}

/// Writes `content` to a new file in `temp_dir`.
pub fn write_temp_file(temp_dir: &TempDir, base: &str, extension: &str, content: &str) -> std::io::Result<(PathBuf, OsString)> {
    let (path_buf, absolute_path) = build_temp_file(temp_dir, base, extension);
    fs::write(&path_buf, content)?;

    Ok((path_buf, absolute_path))
}
