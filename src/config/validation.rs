//! Configuration validation logic.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Validate the requested page range against the discovered last page of
/// the collection.
///
/// Invariant: `1 <= start_page <= end_page <= last_page`. Runs before any
/// listing page is fetched.
pub fn validate_page_range(start_page: u32, end_page: u32, last_page: u32) -> Result<()> {
    if start_page == 0 {
        return Err(Error::ConfigValidation {
            field: "start_page".to_string(),
            message: "page numbers start at 1".to_string(),
        });
    }

    if start_page > end_page {
        return Err(Error::ConfigValidation {
            field: "start_page".to_string(),
            message: "start page may not be greater than end page".to_string(),
        });
    }

    if start_page > last_page || end_page > last_page {
        return Err(Error::ConfigValidation {
            field: "end_page".to_string(),
            message: format!(
                "page argument can not be greater than the last page of the collection: {}",
                last_page
            ),
        });
    }

    Ok(())
}

/// Validate that an output directory exists.
///
/// Writability is not probed here; creating files inside it fails with an
/// IO error at the point of use.
pub fn validate_dest_dir(path: &Path, field: &str) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("{} is not a valid directory", path.display()),
        });
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_within_bounds() {
        assert!(validate_page_range(1, 12, 12).is_ok());
        assert!(validate_page_range(3, 3, 12).is_ok());
        assert!(validate_page_range(1, 1, 1).is_ok());
    }

    #[test]
    fn rejects_start_after_end() {
        assert!(validate_page_range(5, 3, 12).is_err());
    }

    #[test]
    fn rejects_bounds_past_last_page() {
        assert!(validate_page_range(1, 13, 12).is_err());
        assert!(validate_page_range(13, 14, 12).is_err());
    }

    #[test]
    fn rejects_page_zero() {
        assert!(validate_page_range(0, 3, 12).is_err());
    }

    #[test]
    fn dest_dir_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            validate_dest_dir(dir.path(), "dest_folder").unwrap(),
            dir.path()
        );
        assert!(validate_dest_dir(Path::new("/no/such/dir"), "dest_folder").is_err());
    }
}
