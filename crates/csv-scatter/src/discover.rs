// File: crates/csv-scatter/src/discover.rs
// Summary: Find the `.csv` files directly inside a directory.

use std::path::{Path, PathBuf};

use crate::PlotError;

/// Literal, case-sensitive suffix a directory entry needs to be plotted.
pub const CSV_SUFFIX: &str = ".csv";

pub fn is_candidate(file_name: &str) -> bool {
    file_name.ends_with(CSV_SUFFIX)
}

/// Paths of every `.csv` entry in `dir`, sorted by file name.
///
/// Does not recurse. A subdirectory whose name ends in `.csv` is still listed
/// and fails later when it is read as a table.
pub fn candidate_files(dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
    let read_dir_err = |source| PlotError::ReadDir { path: dir.to_path_buf(), source };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        let name = entry.file_name();

        if !is_candidate(&name.to_string_lossy()) {
            log::debug!("skipping {}: not a {CSV_SUFFIX} file", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Series label for a data file: its name without the `.csv` suffix.
pub fn stem(path: &Path) -> String {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    match name.strip_suffix(CSV_SUFFIX) {
        // a file called just ".csv" keeps its name, like a hidden file
        Some("") | None => name,
        Some(stem) => stem.to_string(),
    }
}
