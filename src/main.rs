use std::io;

use clap::Parser;
use text_extractor::{CategoryFilter, Extractor};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SAMPLE_TEXT: &str = r#"
    Contact us at support@company.com or sales@subdomain.example.org
    Visit our website: https://www.example.com or https://subdomain.example.org/page
    Call us at (123) 456-7890 or 123-456-7890 or 123.456.7890
    Payment options: 1234 5678 9012 3456 or 1234-5678-9012-3456
    Meeting times: 14:30 today or 2:30 PM tomorrow
    HTML content: <div class="container"><p>Hello World</p></div>
    Follow us: #TechTips #WebDevelopment #CodingLife
    Prices start at $19.99 and go up to $1,234.56
"#;

/// Show what the extractor finds in a built-in sample text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Show only specific categories (comma-separated)
    #[arg(short, long)]
    categories: Option<String>,

    /// Exclude specific categories (comma-separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Print byte offsets next to every match
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let filter = CategoryFilter::new(args.categories.as_deref(), args.exclude.as_deref())?;
    debug!(?filter, "category selection");

    println!("=== Text Extractor ===\n");
    println!("Sample text:");
    println!("{}", SAMPLE_TEXT);
    println!("\n{}\n", "=".repeat(50));

    let extractor = Extractor::new();
    if args.verbose {
        print_with_offsets(&extractor, &filter);
    } else {
        print_matches(&extractor, &filter);
    }

    Ok(())
}

fn print_matches(extractor: &Extractor, filter: &CategoryFilter) {
    let mut results = extractor.extract_all(SAMPLE_TEXT);
    filter.apply(&mut results);

    for (category, matches) in &results {
        println!("{}:", category.plural().to_uppercase());
        if matches.is_empty() {
            println!("  - No matches found");
        } else {
            for m in matches {
                println!("  - {}", m);
            }
        }
        println!();
    }
}

fn print_with_offsets(extractor: &Extractor, filter: &CategoryFilter) {
    let found = extractor.find_all(SAMPLE_TEXT);

    for category in filter.selected() {
        println!("{}:", category.plural().to_uppercase());
        match found.get(&category) {
            Some(matches) if !matches.is_empty() => {
                for m in matches {
                    println!("  - [{}..{}] {}", m.start, m.end, m.text);
                }
            }
            _ => println!("  - No matches found"),
        }
        println!();
    }
}
