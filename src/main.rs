//! Tululu Collection Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use tululu_downloader::{
    catalog::{discover_last_page, fetch_book_urls, CatalogClient},
    cli::Args,
    config::{self, Config},
    crawl::crawl_books,
    error::{exit_codes, Error, Result},
    fs::ensure_dir,
    manifest::write_manifest,
    output::{print_banner, print_config_summary, print_error, print_info, print_run_summary},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Status { .. } | Error::Http(_) | Error::Parse(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::HTTP_ERROR as u8)
                }
                Error::Download(_) | Error::RetriesExhausted { .. } | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    if !args.quiet {
        print_banner();
    }

    let root_url = Url::parse(config::TULULU_URL)?;
    let collection_url = root_url.join(config::COLLECTION_PATH)?;
    let client = CatalogClient::new(root_url.clone())?;

    // The page range can only be validated once the collection size is known.
    let last_page = discover_last_page(&client, &collection_url).await?;
    tracing::debug!("collection spans {} pages", last_page);

    let config = Config::resolve(&args, root_url, collection_url, last_page)?;
    if !args.quiet {
        print_config_summary(&config);
    }

    if !config.skip_img {
        ensure_dir(&config.images_dir())?;
    }
    if !config.skip_txt {
        ensure_dir(&config.books_dir())?;
    }

    let book_urls = fetch_book_urls(
        &client,
        &config.collection_url,
        config.start_page,
        config.end_page,
    )
    .await?;
    print_info(&format!(
        "Found {} books on pages {}..={}",
        book_urls.len(),
        config.start_page,
        config.end_page
    ));

    let outcome = crawl_books(&client, &config, &book_urls).await?;

    let manifest_path = write_manifest(&outcome.books, &config.json_path)?;
    print_info(&format!(
        "The JSON file has been created at {}",
        manifest_path.display()
    ));

    if !args.quiet {
        print_run_summary(&outcome.books, outcome.skipped);
    }

    Ok(())
}
