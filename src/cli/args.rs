//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Tululu collection downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "tululu-downloader",
    version,
    about = "Mirror a genre collection from the Tululu online library",
    long_about = "Parses a genre collection of books from the Tululu online library.\n\n\
                  Downloads book texts and cover images, and generates a books.json \
                  manifest with the title, author, genres, comments, and local file \
                  paths of every downloaded book.\n\n\
                  The collection spans a number of listing pages; choose the range to \
                  crawl with --start_page and --end_page."
)]
pub struct Args {
    /// First collection page to parse.
    #[arg(long = "start_page", default_value_t = 1)]
    pub start_page: u32,

    /// Last collection page to parse.
    /// Defaults to the last page of the collection.
    #[arg(long = "end_page")]
    pub end_page: Option<u32>,

    /// Do not download book .txt files.
    #[arg(long = "skip_txt")]
    pub skip_txt: bool,

    /// Do not download book cover images.
    #[arg(long = "skip_img")]
    pub skip_img: bool,

    /// Directory under which books/ and images/ are created.
    /// Defaults to the current working directory.
    #[arg(long = "dest_folder")]
    pub dest_folder: Option<PathBuf>,

    /// Directory the books.json manifest is written to.
    /// Defaults to the current working directory.
    #[arg(long = "json_path")]
    pub json_path: Option<PathBuf>,

    /// Hide the banner and configuration summary.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}
