//! wikicite - normalize identifiers in a Wikipedia article
//!
//! Fetches the article markup, rewrites bare and linked identifiers into
//! citation templates, and prints the result with a change count.

mod error;
mod fetch;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikicite_identifiers::{RewriteOptions, Rewriter};

use crate::error::Result;
use crate::fetch::{WikiClient, DEFAULT_API};

const USER_AGENT: &str = concat!("wikicite/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(name = "wikicite", about = "Normalize identifiers in a Wikipedia article")]
struct Args {
    /// Article title
    title: String,

    /// Only print lines that changed
    #[arg(short = 'c', long = "changes")]
    changes: bool,

    /// Leave list markers alone
    #[arg(short = 'B', long = "nobullet")]
    nobullet: bool,

    /// Print the fetched markup unmodified and exit
    #[arg(short = 'r', long = "raw")]
    raw: bool,

    /// Emit ISBNT templates for use inside tables
    #[arg(short = 't', long = "table")]
    table: bool,

    /// MediaWiki API endpoint
    #[arg(long, default_value = DEFAULT_API)]
    api: String,
}

impl Args {
    fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            bullet_fix: !self.nobullet,
            table_context: self.table,
            changes_only: self.changes,
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let client = WikiClient::new(&args.api, USER_AGENT)?;
    let markup = client.fetch_markup(&args.title).await?;

    if args.raw {
        println!("{}", markup);
        return Ok(());
    }

    let rewriter = Rewriter::new(args.rewrite_options());
    let report = rewriter.rewrite_document(&markup)?;
    println!("{}", report);
    Ok(())
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(args).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_options() {
        let args = Args::parse_from(["wikicite", "-c", "-B", "-t", "Albert Einstein"]);
        assert_eq!(args.title, "Albert Einstein");
        assert_eq!(
            args.rewrite_options(),
            RewriteOptions {
                bullet_fix: false,
                table_context: true,
                changes_only: true,
            }
        );
        assert_eq!(args.api, DEFAULT_API);
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["wikicite", "--api", "https://de.wikipedia.org/w/api.php", "X"]);
        assert_eq!(args.rewrite_options(), RewriteOptions::default());
        assert!(!args.raw);
        assert_eq!(args.api, "https://de.wikipedia.org/w/api.php");
    }
}
