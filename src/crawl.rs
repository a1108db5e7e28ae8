//! The per-book fetch → parse → download loop with bounded retry.

use tokio::time::sleep;
use url::Url;

use crate::catalog::{fetch_book, Book, BookPage, CatalogClient};
use crate::config::Config;
use crate::download::{download_image, download_txt};
use crate::error::{Error, Result};
use crate::output::print_warning;

/// What one crawl produced: the accumulated records plus the count of
/// books the catalog had nothing for.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub books: Vec<Book>,
    pub skipped: u64,
}

/// Crawl every detail page in `book_urls` in order, downloading texts and
/// covers as configured.
///
/// Each book gets up to `config.max_attempts` tries; a retryable fault
/// sleeps `config.retry_delay` and tries the same URL again. Exhausting the
/// ceiling aborts the whole run, discarding unfinished progress. A book the
/// site reports as absent is logged and skipped without retry.
pub async fn crawl_books(
    client: &CatalogClient,
    config: &Config,
    book_urls: &[Url],
) -> Result<CrawlOutcome> {
    let mut books = Vec::new();
    let mut skipped = 0u64;

    for book_url in book_urls {
        match process_book(client, config, book_url).await? {
            Some(book) => books.push(book),
            None => skipped += 1,
        }
    }

    Ok(CrawlOutcome { books, skipped })
}

/// Drive one book through fetch, parse, and download with bounded retry.
///
/// `Ok(None)` means the catalog has nothing for this URL (removed book or
/// no text file). Permanent faults propagate immediately: retrying a page
/// whose markup does not match the expected shape cannot succeed.
async fn process_book(
    client: &CatalogClient,
    config: &Config,
    book_url: &Url,
) -> Result<Option<Book>> {
    let mut attempt = 1u32;
    loop {
        match try_book(client, config, book_url).await {
            Ok(Some(book)) => {
                tracing::info!(
                    "The book \"{}\" with URL {} has been downloaded",
                    book.title,
                    book_url
                );
                return Ok(Some(book));
            }
            Ok(None) => {
                print_warning(&format!(
                    "The book with URL {} can not be downloaded",
                    book_url
                ));
                return Ok(None);
            }
            Err(e) if e.is_retryable() && attempt < config.max_attempts => {
                tracing::warn!(
                    "attempt {} of {} for {} failed: {}",
                    attempt,
                    config.max_attempts,
                    book_url,
                    e
                );
                sleep(config.retry_delay).await;
                attempt += 1;
            }
            Err(e) if e.is_retryable() => {
                tracing::error!("{} failed on final attempt: {}", book_url, e);
                return Err(Error::RetriesExhausted {
                    url: book_url.to_string(),
                    attempts: attempt,
                });
            }
            Err(e) => return Err(e),
        }
    }
}

/// One attempt: fetch+parse the detail page, then download the configured
/// assets, substituting local file paths into the record.
async fn try_book(
    client: &CatalogClient,
    config: &Config,
    book_url: &Url,
) -> Result<Option<Book>> {
    let mut book = match fetch_book(client, book_url).await? {
        BookPage::Book(book) => *book,
        BookPage::Unavailable => {
            tracing::warn!("{}: book page unavailable", book_url);
            return Ok(None);
        }
        BookPage::NoText => {
            tracing::warn!("{}: no downloadable text", book_url);
            return Ok(None);
        }
    };

    if config.skip_img {
        book.image_src = None;
    } else if let Some(image_url) = book.image_src.take() {
        let image_url = Url::parse(&image_url)?;
        book.image_src = download_image(client, &image_url, &config.images_dir())
            .await?
            .map(|path| path.display().to_string());
    }

    if config.skip_txt {
        book.book_path = None;
    } else if let Some(text_url) = book.book_path.take() {
        let text_url = Url::parse(&text_url)?;
        book.book_path = download_txt(client, &text_url, &book.title, &config.books_dir())
            .await?
            .map(|path| path.display().to_string());
    }

    Ok(Some(book))
}
