//! Filename derivation and sanitization.

use url::Url;

use crate::error::{Error, Result};

/// Sanitize a single filename for filesystem safety.
///
/// Path separators, reserved punctuation, and control characters are
/// replaced with underscores, so a book title can never escape its target
/// folder. Names that sanitize to nothing (or to a bare dot component) are
/// rejected.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name.escape_debug()
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = sanitized.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(Error::InvalidFilename(format!(
            "Filename reduces to nothing: '{}'",
            name
        )));
    }

    Ok(sanitized)
}

/// Filename for a downloaded text: the sanitized book title plus a
/// unix-timestamp suffix.
pub fn txt_filename(title: &str, timestamp: i64) -> Result<String> {
    sanitize_filename(&format!("{}_{}.txt", title, timestamp))
}

/// Filename for a downloaded cover: the URL's final path segment with the
/// timestamp spliced in before the extension.
pub fn image_filename(url: &Url, timestamp: i64) -> Result<String> {
    let segment = url
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Download(format!("cover URL has no filename: {}", url)))?;

    let name = match segment.rsplit_once('.') {
        Some((stem, ext)) => format!("{}_{}.{}", stem, timestamp, ext),
        None => format!("{}_{}", segment, timestamp),
    };
    sanitize_filename(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_reserved_characters() {
        assert_eq!(sanitize_filename("normal.txt").unwrap(), "normal.txt");
        assert_eq!(
            sanitize_filename("Что делать?.txt").unwrap(),
            "Что делать_.txt"
        );
        assert_eq!(
            sanitize_filename("path/to\\file.txt").unwrap(),
            "path_to_file.txt"
        );
    }

    #[test]
    fn titles_with_ellipses_survive() {
        assert_eq!(
            sanitize_filename("И грянул гром..._123.txt").unwrap(),
            "И грянул гром..._123.txt"
        );
    }

    #[test]
    fn sanitize_rejects_degenerate_names() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
        assert!(sanitize_filename("..").is_err());
    }

    #[test]
    fn sanitize_rejects_null_bytes() {
        assert!(sanitize_filename("file\0name.txt").is_err());
    }

    #[test]
    fn txt_filename_carries_title_and_timestamp() {
        assert_eq!(
            txt_filename("Пески Марса", 1700000000).unwrap(),
            "Пески Марса_1700000000.txt"
        );
    }

    #[test]
    fn image_filename_splices_timestamp_before_extension() {
        let url = Url::parse("http://tululu.org/images/nopic.gif").unwrap();
        assert_eq!(
            image_filename(&url, 1700000000).unwrap(),
            "nopic_1700000000.gif"
        );
    }

    #[test]
    fn image_filename_without_extension() {
        let url = Url::parse("http://tululu.org/shots/cover547").unwrap();
        assert_eq!(
            image_filename(&url, 1700000000).unwrap(),
            "cover547_1700000000"
        );
    }

    #[test]
    fn image_url_without_path_segment_is_an_error() {
        let url = Url::parse("http://tululu.org/").unwrap();
        assert!(image_filename(&url, 1700000000).is_err());
    }
}
