//! Layout checks for the test suite
//!
//! `tests/unit/` mirrors `src/` file for file and is compiled through the
//! `tests/unit.rs` harness root. Module files (`lib.rs`, `main.rs`, `mod.rs`)
//! only wire modules together and need no counterpart. Every other `.rs` file
//! under `tests/` must define at least one `#[test]`.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";
    const WIRING_FILES: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

    /// Directories and `.rs` files below `root`, relative to it
    fn tree(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(io::Error::other)?
                    .to_path_buf();

                if path.is_dir() {
                    pending.push(path);
                    found.insert(relative);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn is_wiring_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| WIRING_FILES.contains(&name))
    }

    fn listing(paths: &[&PathBuf], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source file has a unit test file at the mirrored path
    // Verified by deleting a unit test file
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = tree(Path::new(SRC_DIR)).unwrap();
        let unit = tree(Path::new(UNIT_DIR)).unwrap_or_default();

        let missing: Vec<_> = src
            .iter()
            .filter(|path| !is_wiring_file(path) && !unit.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            listing(&missing, SRC_DIR)
        );
    }

    // Tests every unit test file mirrors an existing source file
    // Verified by adding a unit test file for a missing module
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = tree(Path::new(SRC_DIR)).unwrap();
        let unit = tree(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<_> = unit
            .iter()
            .filter(|path| !is_wiring_file(path) && !src.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            listing(&orphaned, UNIT_DIR)
        );
    }

    // Tests no test file is left without test functions
    // Verified by emptying a unit test module
    #[test]
    fn test_all_test_files_contain_tests() {
        let root = Path::new(TESTS_DIR);
        let files = tree(root).unwrap();

        let mut empty = Vec::new();
        for relative in &files {
            let path = root.join(relative);
            // Harness roots such as tests/unit.rs only declare their sibling directory
            let is_harness_root =
                relative.components().count() == 1 && path.with_extension("").is_dir();
            if path.is_dir() || is_harness_root || is_wiring_file(relative) {
                continue;
            }

            let content = fs::read_to_string(&path).unwrap();
            if !content.contains("#[test]") {
                empty.push(relative);
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(&empty, TESTS_DIR)
        );
    }
}
