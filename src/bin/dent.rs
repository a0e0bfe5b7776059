//! Command-line interface for dent
//! This binary inspects how the denter rewrites a raw token stream.
//!
//! Usage:
//!   dent tokens `<path>` [--format `<format>`] [--raw]  - Print the token stream for a file

use clap::{Arg, ArgAction, Command};

use dent::dent::lexer;

fn main() {
    let matches = Command::new("dent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect NEWLINE/INDENT/DEDENT synthesis for indentation-structured sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print the dented token stream for a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                )
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .help("Print the raw lexer stream instead of the dented one")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            let raw = tokens_matches.get_flag("raw");
            handle_tokens_command(path, format, raw);
        }
        _ => unreachable!(),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str, raw: bool) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let tokens = if raw {
        lexer::tokenize(&source)
    } else {
        dent::dent::dent(&source).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
    };

    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "text" => {
            for token in &tokens {
                println!("{}", token);
            }
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}
