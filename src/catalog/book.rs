//! Book detail pages: the record model and its parser.

use reqwest::StatusCode;
use scraper::Html;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::client::CatalogClient;
use crate::catalog::selector;
use crate::error::{Error, Result};

/// Path fragment identifying the plain-text download endpoint.
const TXT_ENDPOINT: &str = "txt.php";

/// Metadata of one book, as recorded in the output manifest.
///
/// The parser fills `image_src` and `book_path` with absolute URLs; the
/// crawl loop replaces them with local file paths after download, or clears
/// them when downloading is skipped. Cleared fields are omitted from the
/// manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genres: Vec<String>,
    pub comments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_path: Option<String>,
}

/// Outcome of fetching a detail page.
///
/// Absence of a book is an expected state of the catalog, not a fault:
/// removed books redirect to the site root, and some books are listed
/// without a downloadable text. Neither case is retried.
#[derive(Debug)]
pub enum BookPage {
    /// Metadata parsed; download URLs resolved to absolute form.
    Book(Box<Book>),
    /// The page redirected to the collection root or answered non-200.
    Unavailable,
    /// The book exists but has no text file behind it.
    NoText,
}

/// Fetch and parse one detail page, following redirects.
pub async fn fetch_book(client: &CatalogClient, book_url: &Url) -> Result<BookPage> {
    let response = client.get(book_url).await?;
    if client.is_root_url(response.url()) || response.status() != StatusCode::OK {
        return Ok(BookPage::Unavailable);
    }
    let body = response.text().await?;
    parse_book_page(&body, client.root())
}

/// Parse a detail page's markup into a [`BookPage`].
///
/// The text link sits third from the end of the book info table; a heading
/// of the shape `title\u{a0}<separator>\u{a0}author` supplies title and
/// author. A heading that does not match is a permanent parse fault, not a
/// retryable one.
pub fn parse_book_page(html: &str, root: &Url) -> Result<BookPage> {
    let document = Html::parse_document(html);

    let info_anchor = selector(".d_book tr a")?;
    let anchors: Vec<_> = document.select(&info_anchor).collect();
    if anchors.len() < 3 {
        return Err(Error::Parse(
            "book info table has fewer than three links".into(),
        ));
    }
    let text_href = anchors[anchors.len() - 3]
        .value()
        .attr("href")
        .ok_or_else(|| Error::Parse("text link has no href".into()))?;
    if !text_href.contains(TXT_ENDPOINT) {
        return Ok(BookPage::NoText);
    }
    let book_path = root.join(text_href)?;

    let heading_sel = selector("h1")?;
    let heading = document
        .select(&heading_sel)
        .next()
        .map(|h1| h1.text().collect::<String>())
        .ok_or_else(|| Error::Parse("detail page has no heading".into()))?;
    let segments: Vec<&str> = heading.split('\u{a0}').collect();
    if segments.len() < 3 {
        return Err(Error::Parse(format!(
            "unexpected heading shape: {:?}",
            heading
        )));
    }
    let title = segments[0].trim().to_string();
    let author = segments[2].trim().to_string();

    let cover = selector(".bookimage img")?;
    let image_src = document
        .select(&cover)
        .next()
        .and_then(|img| img.value().attr("src"))
        .ok_or_else(|| Error::Parse("detail page has no cover image".into()))?;
    let image_src = root.join(image_src)?;

    let genre_link = selector("span.d_book a")?;
    let genres = document
        .select(&genre_link)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .collect();

    let comment_block = selector(".texts")?;
    let comment_text = selector(".black")?;
    let comments = document
        .select(&comment_block)
        .filter_map(|block| block.select(&comment_text).next())
        .map(|span| span.text().collect::<String>().trim().to_string())
        .collect();

    Ok(BookPage::Book(Box::new(Book {
        title,
        author,
        genres,
        comments,
        image_src: Some(image_src.to_string()),
        book_path: Some(book_path.to_string()),
    })))
}
