//! rexpand CLI binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rexpand::{ResourceSetResolver, SearchPath};

/// Resolve Ant-style resource expressions into concrete locators.
#[derive(Parser)]
#[command(name = "rexpand")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Resource expressions, e.g. `classpath:/js/**/*.js` or `~file:target/**`
    #[arg(required = true)]
    expressions: Vec<String>,

    /// Search path entry for classpath lookups (directory or archive); may
    /// be repeated
    #[arg(long = "search-path", value_name = "PATH")]
    search_path: Vec<PathBuf>,

    /// Print the result as a JSON array instead of one locator per line
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let resolver = ResourceSetResolver::new(SearchPath::new(cli.search_path));

    match resolver.expand(&cli.expressions) {
        Ok(resources) => {
            if cli.json {
                match serde_json::to_string_pretty(&resources) {
                    Ok(json) => println!("{json}"),
                    Err(cause) => {
                        eprintln!("error: {cause}");
                        return ExitCode::from(10);
                    }
                }
            } else {
                for resource in &resources {
                    println!("{resource}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(cause) => {
            eprintln!("error: {cause}");
            ExitCode::from(cause.error_code().code())
        }
    }
}
