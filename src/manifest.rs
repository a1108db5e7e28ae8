//! The books.json output manifest.

use std::path::{Path, PathBuf};

use crate::catalog::Book;
use crate::error::Result;

/// Manifest filename written into the json output directory.
pub const MANIFEST_NAME: &str = "books.json";

/// Serialize the collected records as a UTF-8 JSON array into
/// `<dir>/books.json`. Non-ASCII text (titles, comments) is written
/// verbatim, not escaped.
pub fn write_manifest(books: &[Book], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_NAME);
    let json = serde_json::to_string(books)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            title: "Пески Марса".into(),
            author: "Кларк Артур".into(),
            genres: vec!["Научная фантастика".into()],
            comments: vec![],
            image_src: Some("images/547_1700000000.jpg".into()),
            book_path: Some("books/Пески Марса_1700000000.txt".into()),
        }
    }

    #[test]
    fn writes_a_json_array_round_trippable_to_records() {
        let dir = tempfile::tempdir().unwrap();
        let books = vec![sample_book()];
        let path = write_manifest(&books, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), MANIFEST_NAME);

        let raw = std::fs::read_to_string(&path).unwrap();
        // UTF-8, not ASCII-escaped.
        assert!(raw.contains("Пески Марса"));
        let parsed: Vec<Book> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, books);
    }

    #[test]
    fn empty_run_still_writes_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&[], dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }
}
