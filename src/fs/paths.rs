//! Output directory management.

use std::path::Path;

use crate::error::Result;

/// Ensure a directory exists, creating it and its parents if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("dest").join("books");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent on an existing directory.
        ensure_dir(&nested).unwrap();
    }
}
