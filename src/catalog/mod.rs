//! Access to the catalog site: HTTP clients, pagination, and the
//! detail-page parser.

pub mod book;
pub mod client;
pub mod pagination;

pub use book::{fetch_book, parse_book_page, Book, BookPage};
pub use client::{ensure_ok, CatalogClient};
pub use pagination::{
    discover_last_page, extract_book_links, fetch_book_urls, listing_page_url, parse_last_page,
};

use scraper::Selector;

use crate::error::{Error, Result};

/// Compile a CSS selector, mapping compile failures into parse errors.
pub(crate) fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("bad selector '{}': {}", css, e)))
}
