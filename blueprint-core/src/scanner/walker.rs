//! Recursive discovery of migration source files.
//!
//! Migration file names are conventionally timestamp-prefixed, so
//! ascending lexical path order doubles as chronological replay order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::ExtractError;

/// Recursively list every regular file under `root` whose extension
/// matches, sorted by full path.
///
/// No file content is read at this stage. Fails with
/// [`ExtractError::NotFound`] when `root` is missing or not a
/// directory, and [`ExtractError::Io`] when traversal itself fails.
pub fn discover_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, ExtractError> {
    if !root.is_dir() {
        return Err(ExtractError::NotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            ExtractError::Io {
                path,
                source: e.into(),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_is_not_found() {
        let err = discover_files(Path::new("/no/such/dir"), "php").unwrap_err();
        assert!(matches!(err, ExtractError::NotFound(_)));
    }

    #[test]
    fn test_discovery_is_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("tenant")).unwrap();
        fs::write(dir.path().join("2024_02_01_b.php"), "").unwrap();
        fs::write(dir.path().join("2024_01_01_a.php"), "").unwrap();
        fs::write(dir.path().join("tenant/2023_12_01_c.php"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = discover_files(dir.path(), "php").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "2024_01_01_a.php",
                "2024_02_01_b.php",
                "tenant/2023_12_01_c.php",
            ]
        );
    }
}
