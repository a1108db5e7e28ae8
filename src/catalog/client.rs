//! HTTP access to the catalog site.

use reqwest::{header, redirect, Client, Response, StatusCode};
use url::Url;

use crate::error::{Error, Result};

/// HTTP client pair bound to one catalog site.
///
/// Listing pages and file downloads are fetched with redirects disabled,
/// because the site answers requests for removed resources with a redirect
/// back to its root. Detail pages are fetched following redirects, and the
/// final URL is inspected instead.
pub struct CatalogClient {
    client: Client,
    no_redirect: Client,
    root: Url,
}

impl CatalogClient {
    /// Build a client pair for the given site root.
    pub fn new(root: Url) -> Result<Self> {
        let client = Client::builder().build()?;
        let no_redirect = Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            no_redirect,
            root,
        })
    }

    /// The site root this client is bound to.
    pub fn root(&self) -> &Url {
        &self.root
    }

    /// GET following redirects (detail pages).
    pub async fn get(&self, url: &Url) -> Result<Response> {
        tracing::debug!("GET {}", url);
        Ok(self.client.get(url.clone()).send().await?)
    }

    /// GET with redirects disabled (listing pages, file downloads).
    pub async fn get_no_redirect(&self, url: &Url) -> Result<Response> {
        tracing::debug!("GET {} (redirects off)", url);
        Ok(self.no_redirect.get(url.clone()).send().await?)
    }

    /// Whether a redirect response points back at the collection root,
    /// the site's way of saying the resource no longer exists.
    pub fn redirected_to_root(&self, response: &Response) -> bool {
        if !response.status().is_redirection() {
            return false;
        }
        let Some(location) = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
        else {
            return false;
        };
        match response.url().join(location) {
            Ok(target) => is_root(&target, &self.root),
            Err(_) => false,
        }
    }

    /// Whether a final (post-redirect) URL is the collection root.
    pub fn is_root_url(&self, url: &Url) -> bool {
        is_root(url, &self.root)
    }
}

/// Fail unless the response carries HTTP 200, tagging the error with the
/// calling operation's name.
pub fn ensure_ok(response: Response, operation: &'static str) -> Result<Response> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::Status { operation, status });
    }
    Ok(response)
}

fn is_root(url: &Url, root: &Url) -> bool {
    url.origin() == root.origin() && matches!(url.path(), "" | "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_detection_ignores_trailing_slash() {
        let root = Url::parse("http://tululu.org").unwrap();
        assert!(is_root(&Url::parse("http://tululu.org/").unwrap(), &root));
        assert!(is_root(&Url::parse("http://tululu.org").unwrap(), &root));
    }

    #[test]
    fn non_root_paths_are_not_root() {
        let root = Url::parse("http://tululu.org").unwrap();
        assert!(!is_root(&Url::parse("http://tululu.org/b123/").unwrap(), &root));
        assert!(!is_root(&Url::parse("http://tululu.org/l55/2").unwrap(), &root));
    }

    #[test]
    fn other_origins_are_not_root() {
        let root = Url::parse("http://tululu.org").unwrap();
        assert!(!is_root(&Url::parse("http://example.org/").unwrap(), &root));
    }
}
