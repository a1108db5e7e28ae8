//! Tululu Collection Downloader
//!
//! Crawls a genre collection of the Tululu online library, extracts
//! per-book metadata (title, author, genres, comments), downloads the
//! text files and cover images, and records the results in a books.json
//! manifest.
//!
//! The crawl is strictly sequential: one HTTP request in flight at a time,
//! with a bounded retry loop around each book.
//!
//! # Example
//!
//! ```no_run
//! use tululu_downloader::catalog::{discover_last_page, CatalogClient};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let root = Url::parse("http://tululu.org")?;
//!     let collection = root.join("l55/")?;
//!     let client = CatalogClient::new(root)?;
//!     let last_page = discover_last_page(&client, &collection).await?;
//!     println!("the collection spans {} pages", last_page);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod download;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod output;

// Re-exports for convenience
pub use catalog::{Book, BookPage, CatalogClient};
pub use config::Config;
pub use crawl::{crawl_books, CrawlOutcome};
pub use error::{Error, Result};
