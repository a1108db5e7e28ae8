//! Downloading book texts and cover images to local files.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::{Response, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::catalog::CatalogClient;
use crate::error::{Error, Result};
use crate::fs::{image_filename, txt_filename};
use crate::output::create_download_bar;

/// Minimum content length to show a progress bar (1 MB).
const PROGRESS_THRESHOLD: u64 = 1024 * 1024;

/// Download a book's text file into `folder`.
///
/// The filename is the sanitized title plus a unix-timestamp suffix.
/// Returns `Ok(None)` when the site redirects the request back to the
/// collection root, meaning no text file exists for this book.
pub async fn download_txt(
    client: &CatalogClient,
    url: &Url,
    title: &str,
    folder: &Path,
) -> Result<Option<PathBuf>> {
    let Some(response) = fetch_file(client, url, "download_txt").await? else {
        return Ok(None);
    };
    let filename = txt_filename(title, chrono::Utc::now().timestamp())?;
    let path = folder.join(filename);
    write_body(response, &path).await?;
    Ok(Some(path))
}

/// Download a cover image into `folder`, deriving the filename from the
/// URL's final path segment. Same absence convention as [`download_txt`].
pub async fn download_image(
    client: &CatalogClient,
    url: &Url,
    folder: &Path,
) -> Result<Option<PathBuf>> {
    let Some(response) = fetch_file(client, url, "download_image").await? else {
        return Ok(None);
    };
    let filename = image_filename(url, chrono::Utc::now().timestamp())?;
    let path = folder.join(filename);
    write_body(response, &path).await?;
    Ok(Some(path))
}

/// Fetch a resource with redirects disabled. Redirect-to-root means the
/// resource is absent; any other non-200 answer is a retryable fault.
async fn fetch_file(
    client: &CatalogClient,
    url: &Url,
    operation: &'static str,
) -> Result<Option<Response>> {
    let response = client.get_no_redirect(url).await?;
    if client.redirected_to_root(&response) {
        return Ok(None);
    }
    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::Status { operation, status });
    }
    Ok(Some(response))
}

/// Stream a response body to a file, with a progress bar for large bodies.
async fn write_body(response: Response, path: &Path) -> Result<()> {
    let progress = response
        .content_length()
        .filter(|len| *len > PROGRESS_THRESHOLD)
        .map(create_download_bar);

    let mut file = File::create(path).await?;
    let mut stream = response.bytes_stream();
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;

        if let Some(ref bar) = progress {
            bar.set_position(written);
        }
    }

    file.flush().await?;

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    Ok(())
}
