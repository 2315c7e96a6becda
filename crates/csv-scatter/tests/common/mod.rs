// File: crates/csv-scatter/tests/common/mod.rs
// Purpose: Shared fixture helpers for the driver tests.

#![allow(dead_code)]

use std::path::Path;

pub fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write fixture");
}

/// The two-file directory from the worked example: `a.csv` and `b.csv` with columns `t,v`.
pub fn example_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "a.csv", "t,v\n0,1\n1,2\n");
    write(dir.path(), "b.csv", "t,v\n0,5\n1,3\n");
    dir
}
