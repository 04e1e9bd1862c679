//! Command-line interface for grammar-tokens
//! Extracts the token names of a tree-sitter style grammar.js and prints them.
//!
//! Usage:
//!   grammar-tokens `[path]` [--format `<format>`] [--output `<file>`]   - Extract tokens (stdin when no path)
//!   grammar-tokens --list-formats                                   - List available output formats
//!
//! Set `RUST_LOG=grammar_tokens=debug` to trace the scan.

use clap::{Arg, ArgAction, ArgMatches, Command};
use grammar_tokens::extraction::{EventRecorder, LogObserver};
use grammar_tokens::formats::FormatRegistry;
use grammar_tokens::source::{FileSource, GrammarSource, ReaderSource};
use grammar_tokens::{ExtractorConfig, TokenExtractor};
use std::error::Error;
use std::fs;

fn main() {
    env_logger::init();

    let matches = Command::new("grammar-tokens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract lexical token names from a tree-sitter grammar.js")
        .arg(
            Arg::new("path")
                .help("Path to the grammar file ('-' or omitted reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'lines', 'json', 'rust-enum')")
                .default_value("lines"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("YAML or JSON file overriding the scan markers"),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .help("Line prefix that opens the rule table"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write to this file instead of stdout"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail when the rule table marker is never found")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = handle_extract_command(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle the default extract command
fn handle_extract_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ExtractorConfig::load(path)?,
        None => ExtractorConfig::default(),
    };
    if let Some(marker) = matches.get_one::<String>("marker") {
        config = config.with_block_marker(marker.as_str());
    }

    let mut source: Box<dyn GrammarSource> = match matches.get_one::<String>("path") {
        Some(path) if path != "-" => Box::new(FileSource::new(path)),
        _ => Box::new(ReaderSource::stdin()),
    };
    let text = source.get()?;

    let extractor = TokenExtractor::try_with_config(config)?;
    let mut recorder = EventRecorder::new();
    let tokens = extractor.extract_observed(&text, &mut (LogObserver, &mut recorder));

    if matches.get_flag("strict") && !recorder.block_opened() {
        return Err(format!(
            "marker '{}' not found in {}",
            extractor.config().block_marker,
            source.describe()
        )
        .into());
    }

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("lines");
    let output = FormatRegistry::with_defaults().render(&tokens, format)?;

    match matches.get_one::<String>("output") {
        Some(path) => fs::write(path, output)?,
        None => print!("{}", output),
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");

    for (name, description) in FormatRegistry::with_defaults().describe() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
