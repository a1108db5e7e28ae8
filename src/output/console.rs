//! Console output utilities.

use console::style;

use crate::config::Config;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════╗
║     Tululu Collection Downloader                 ║
║     Mirror a genre collection from tululu.org    ║
╚══════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the resolved configuration summary.
pub fn print_config_summary(config: &Config) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Collection: {}", config.collection_url);
    println!("  Pages:      {}..={}", config.start_page, config.end_page);
    println!("  Texts:      {}", enabled(!config.skip_txt));
    println!("  Covers:     {}", enabled(!config.skip_img));
    println!("  Downloads:  {}", config.dest_folder.display());
    println!("  Manifest:   {}", config.json_path.display());
    println!();
}

fn enabled(on: bool) -> &'static str {
    if on {
        "download"
    } else {
        "skip"
    }
}
