//! Command-line interface for sqlpprint
//!
//! Usage:
//!   sqlpprint format `<path>` [--indent `<unit>`] [--case upper|lower]  - Pretty-print a SQL file
//!   sqlpprint tokens `<path>`                                       - Dump the classified token stream as JSON
//!   sqlpprint list-filters                                        - List available token filters

use clap::{Arg, Command};
use sqlpprint::sql::filters::{
    FilterRegistry, KeywordCaseFilter, PrettyPrintFilter, ReformatOptions,
};
use sqlpprint::sql::lexer;
use sqlpprint::sql::pipeline::Pipeline;
use std::io::Read;

fn main() {
    let matches = Command::new("sqlpprint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pretty format SQL queries for easier reading")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("format")
                .about("Pretty-print a SQL file (use '-' for stdin)")
                .arg(
                    Arg::new("path")
                        .help("Path to the SQL file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .help("Indent unit inserted per nesting level")
                        .default_value("    "),
                )
                .arg(
                    Arg::new("case")
                        .long("case")
                        .help("Rewrite keywords to 'upper' or 'lower' before formatting"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the classified token stream as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the SQL file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-filters").about("List available token filters"))
        .get_matches();

    match matches.subcommand() {
        Some(("format", format_matches)) => {
            let path = format_matches.get_one::<String>("path").unwrap();
            let indent = format_matches.get_one::<String>("indent").unwrap();
            let case = format_matches.get_one::<String>("case");
            handle_format_command(path, indent, case.map(String::as_str));
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            handle_tokens_command(path);
        }
        Some(("list-filters", _)) => {
            handle_list_filters_command();
        }
        _ => unreachable!(),
    }
}

/// Read the source file, with `-` standing for stdin.
fn read_source(path: &str) -> String {
    let result = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map(|_| buffer)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}

/// Handle the format command
fn handle_format_command(path: &str, indent: &str, case: Option<&str>) {
    let source = read_source(path);

    let mut pipeline = Pipeline::new();
    match case {
        Some("upper") => pipeline = pipeline.add_filter(KeywordCaseFilter::upper()),
        Some("lower") => pipeline = pipeline.add_filter(KeywordCaseFilter::lower()),
        Some(other) => {
            eprintln!("Unknown case '{}': expected 'upper' or 'lower'", other);
            std::process::exit(1);
        }
        None => {}
    }
    let pipeline = pipeline.add_filter(PrettyPrintFilter::new(ReformatOptions {
        indent_unit: indent.to_string(),
    }));

    // The formatted output already ends with a newline.
    print!("{}", pipeline.format(&source));
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    let tokens = lexer::tokenize(&source);
    let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("Error serializing tokens: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

/// Handle the list-filters command
fn handle_list_filters_command() {
    let registry = FilterRegistry::with_defaults();
    for filter in registry.list_all() {
        println!("{:<16} {}", filter.name(), filter.description());
    }
}
