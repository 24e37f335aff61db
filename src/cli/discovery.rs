use std::io;
use std::path::{Path, PathBuf};

/// Data file extensions the driver offers for selection.
pub const DATA_EXTENSIONS: &[&str] = &["csv", "json"];

/// Lists the regular files in `dir` whose extension is one of `extensions`,
/// compared case-insensitively, sorted by path.
///
/// A missing directory yields an empty list.
pub fn enumerate_files(dir: &Path, extensions: &[&str]) -> io::Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|wanted| ext.eq_ignore_ascii_case(wanted)));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
