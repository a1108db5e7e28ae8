//! Run statistics reporting.

use console::style;

use crate::catalog::Book;

/// Print the end-of-run summary.
pub fn print_run_summary(books: &[Book], skipped: u64) {
    let texts = books.iter().filter(|b| b.book_path.is_some()).count();
    let covers = books.iter().filter(|b| b.image_src.is_some()).count();

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run summary:").bold());
    println!("  Books recorded: {}", books.len());
    println!("  Texts:   {}", texts);
    println!("  Covers:  {}", covers);
    if skipped > 0 {
        println!(
            "  Skipped: {} (unavailable or no text)",
            style(skipped).yellow()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
