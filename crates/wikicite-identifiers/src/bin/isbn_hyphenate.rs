//! isbn-hyphenate: print the hyphenated form of one ISBN.
//!
//! Everything except digits and `X` is stripped from the argument first, so
//! pasted values like `ISBN: 0 85131 277 9` work as is.

use clap::Parser;
use wikicite_identifiers::hyphenate;

#[derive(Parser, Debug)]
#[command(name = "isbn-hyphenate")]
#[command(about = "Hyphenate an ISBN-10 or ISBN-13 by registration range")]
#[command(version)]
struct Args {
    /// ISBN, in any notation
    isbn: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let digits: String = args
        .isbn
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .collect();

    println!("{}", hyphenate(&digits)?);
    Ok(())
}
