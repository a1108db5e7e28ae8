//! Collection pagination: last-page discovery and listing-page traversal.

use scraper::Html;
use url::Url;

use crate::catalog::client::{ensure_ok, CatalogClient};
use crate::catalog::selector;
use crate::error::{Error, Result};

/// Fetch the collection root and read the highest page number out of the
/// pagination control.
pub async fn discover_last_page(client: &CatalogClient, collection_url: &Url) -> Result<u32> {
    let response = client.get_no_redirect(collection_url).await?;
    let response = ensure_ok(response, "discover_last_page")?;
    let body = response.text().await?;
    parse_last_page(&body)
}

/// Parse the last `.npage` element's text as the collection's page count.
pub fn parse_last_page(html: &str) -> Result<u32> {
    let document = Html::parse_document(html);
    let npage = selector(".npage")?;
    let last = document
        .select(&npage)
        .last()
        .ok_or_else(|| Error::Parse("collection page has no pagination control".into()))?;
    let text = last.text().collect::<String>();
    text.trim()
        .parse()
        .map_err(|_| Error::Parse(format!("pagination label is not a number: {:?}", text)))
}

/// URL of one listing page within the collection.
pub fn listing_page_url(collection_url: &Url, page: u32) -> Result<Url> {
    Ok(collection_url.join(&page.to_string())?)
}

/// Collect detail-page URLs for every listing page in `[start_page,
/// end_page]`, one request per page in ascending order, preserving in-page
/// anchor order.
pub async fn fetch_book_urls(
    client: &CatalogClient,
    collection_url: &Url,
    start_page: u32,
    end_page: u32,
) -> Result<Vec<Url>> {
    let mut book_urls = Vec::new();
    for page in start_page..=end_page {
        let page_url = listing_page_url(collection_url, page)?;
        let response = client.get_no_redirect(&page_url).await?;
        let response = ensure_ok(response, "fetch_book_urls")?;
        let body = response.text().await?;
        let links = extract_book_links(&body, client.root())?;
        tracing::debug!("page {}: {} books", page, links.len());
        book_urls.extend(links);
    }
    Ok(book_urls)
}

/// Pull the detail-page link out of every book table on one listing page.
pub fn extract_book_links(html: &str, root: &Url) -> Result<Vec<Url>> {
    let document = Html::parse_document(html);
    let table = selector("table.d_book")?;
    let anchor = selector("a")?;

    let mut links = Vec::new();
    for book_table in document.select(&table) {
        if let Some(href) = book_table
            .select(&anchor)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            links.push(root.join(href)?);
        }
    }
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION_PAGE: &str = r#"
        <html><body>
        <center>
            <b class="npage_select">1</b>
            <a class="npage" href="/l55/2/">2</a>
            <a class="npage" href="/l55/3/">3</a>
            <a class="npage" href="/l55/12/">12</a>
        </center>
        </body></html>
    "#;

    const LISTING_PAGE: &str = r#"
        <html><body>
        <table class="d_book">
            <tr><td><a href="/b239/"><img src="/images/nopic.gif"></a></td></tr>
            <tr><td>Административный восторг</td></tr>
        </table>
        <table class="d_book">
            <tr><td><a href="/b550/"><img src="/shots/550.jpg"></a></td></tr>
        </table>
        <table class="other">
            <tr><td><a href="/b999/">unrelated</a></td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn last_page_is_the_final_npage_label() {
        assert_eq!(parse_last_page(COLLECTION_PAGE).unwrap(), 12);
    }

    #[test]
    fn missing_pagination_is_a_parse_fault() {
        let err = parse_last_page("<html><body></body></html>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn listing_urls_join_the_collection_path() {
        let collection = Url::parse("http://tululu.org/l55/").unwrap();
        assert_eq!(
            listing_page_url(&collection, 3).unwrap().as_str(),
            "http://tululu.org/l55/3"
        );
    }

    #[test]
    fn book_links_come_from_first_anchor_of_each_book_table() {
        let root = Url::parse("http://tululu.org").unwrap();
        let links = extract_book_links(LISTING_PAGE, &root).unwrap();
        let links: Vec<&str> = links.iter().map(Url::as_str).collect();
        assert_eq!(
            links,
            ["http://tululu.org/b239/", "http://tululu.org/b550/"]
        );
    }

    #[test]
    fn page_without_book_tables_yields_no_links() {
        let root = Url::parse("http://tululu.org").unwrap();
        let links = extract_book_links("<html><body></body></html>", &root).unwrap();
        assert!(links.is_empty());
    }
}
