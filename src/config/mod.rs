//! Runtime configuration.
//!
//! The collection URL and folder names the original kept as module globals
//! are process-scoped values here, resolved once and passed explicitly into
//! every component.

pub mod validation;

pub use validation::{validate_dest_dir, validate_page_range};

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::cli::Args;
use crate::error::Result;

/// Collection root URL.
pub const TULULU_URL: &str = "http://tululu.org";

/// Science-fiction genre path under the root.
pub const COLLECTION_PATH: &str = "l55/";

/// Subdirectory for downloaded text files.
pub const BOOKS_FOLDER: &str = "books";

/// Subdirectory for downloaded cover images.
pub const IMAGES_FOLDER: &str = "images";

/// Attempt ceiling per book: one initial attempt plus three retries.
const MAX_ATTEMPTS: u32 = 4;

/// Delay between retry attempts.
const RETRY_DELAY: Duration = Duration::from_secs(10);

/// Resolved runtime configuration for one crawl.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site root, used to resolve relative hrefs and detect
    /// redirect-to-root removals.
    pub root_url: Url,
    /// Genre collection the listing pages belong to.
    pub collection_url: Url,
    pub start_page: u32,
    pub end_page: u32,
    pub skip_txt: bool,
    pub skip_img: bool,
    /// Base directory for the books/ and images/ subdirectories.
    pub dest_folder: PathBuf,
    /// Directory the books.json manifest is written to.
    pub json_path: PathBuf,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Config {
    /// Resolve CLI arguments against the discovered size of the collection.
    ///
    /// Fails before any listing page is fetched if the page range is out of
    /// bounds or an output directory does not exist.
    pub fn resolve(args: &Args, root_url: Url, collection_url: Url, last_page: u32) -> Result<Self> {
        let end_page = args.end_page.unwrap_or(last_page);
        validate_page_range(args.start_page, end_page, last_page)?;

        let dest_folder = match &args.dest_folder {
            Some(dir) => validate_dest_dir(dir, "dest_folder")?,
            None => std::env::current_dir()?,
        };
        let json_path = match &args.json_path {
            Some(dir) => validate_dest_dir(dir, "json_path")?,
            None => std::env::current_dir()?,
        };

        Ok(Self {
            root_url,
            collection_url,
            start_page: args.start_page,
            end_page,
            skip_txt: args.skip_txt,
            skip_img: args.skip_img,
            dest_folder,
            json_path,
            max_attempts: MAX_ATTEMPTS,
            retry_delay: RETRY_DELAY,
        })
    }

    /// Directory downloaded text files go to.
    pub fn books_dir(&self) -> PathBuf {
        self.dest_folder.join(BOOKS_FOLDER)
    }

    /// Directory downloaded cover images go to.
    pub fn images_dir(&self) -> PathBuf {
        self.dest_folder.join(IMAGES_FOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn urls() -> (Url, Url) {
        let root = Url::parse(TULULU_URL).unwrap();
        let collection = root.join(COLLECTION_PATH).unwrap();
        (root, collection)
    }

    #[test]
    fn end_page_defaults_to_last_page() {
        let args = Args::parse_from(["tululu-downloader"]);
        let (root, collection) = urls();
        let config = Config::resolve(&args, root, collection, 12).unwrap();
        assert_eq!(config.start_page, 1);
        assert_eq!(config.end_page, 12);
    }

    #[test]
    fn out_of_range_arguments_are_rejected() {
        let args = Args::parse_from(["tululu-downloader", "--start_page", "5", "--end_page", "3"]);
        let (root, collection) = urls();
        assert!(Config::resolve(&args, root, collection, 12).is_err());
    }

    #[test]
    fn missing_dest_folder_is_rejected() {
        let args = Args::parse_from(["tululu-downloader", "--dest_folder", "/no/such/dir"]);
        let (root, collection) = urls();
        assert!(Config::resolve(&args, root, collection, 12).is_err());
    }

    #[test]
    fn asset_dirs_hang_off_dest_folder() {
        let args = Args::parse_from(["tululu-downloader"]);
        let (root, collection) = urls();
        let mut config = Config::resolve(&args, root, collection, 12).unwrap();
        config.dest_folder = PathBuf::from("/tmp/mirror");
        assert_eq!(config.books_dir(), PathBuf::from("/tmp/mirror/books"));
        assert_eq!(config.images_dir(), PathBuf::from("/tmp/mirror/images"));
    }
}
