//! Command-line interface for replscan
//! This binary classifies console session transcripts into token streams.
//!
//! Usage:
//!   replscan tokens `<path>` --lang `<alias>` [--format `<format>`]  - Classify a transcript file
//!   replscan list-profiles                                       - List supported console dialects

use clap::{Arg, Command};

use replscan::{classify, DelegateRegistry, LanguageProfile};

fn main() {
    let matches = Command::new("replscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for tokenizing REPL console session transcripts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Classify a transcript file into tokens")
                .arg(
                    Arg::new("path")
                        .help("Path to the transcript file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("lang")
                        .long("lang")
                        .short('l')
                        .help("Console dialect alias (e.g. 'gosh', 'jscon', 'pry')")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("list-profiles").about("List supported console dialects and aliases"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let lang = tokens_matches.get_one::<String>("lang").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, lang, format);
        }
        Some(("list-profiles", _)) => {
            handle_list_profiles_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, lang: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let registry = DelegateRegistry::with_defaults();
    let profile = LanguageProfile::for_alias(lang, &registry).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let tokens = classify(&source, &profile);

    match format {
        "text" => {
            for token in &tokens {
                println!("{}", token);
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Error: unknown output format '{}'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the list-profiles command
fn handle_list_profiles_command() {
    println!("Supported console dialects:\n");
    for def in replscan::profiles::all() {
        println!("  {}", def.name);
        println!("    aliases: {}", def.aliases.join(", "));
        if !def.filenames.is_empty() {
            println!("    filenames: {}", def.filenames.join(", "));
        }
        println!("    mimetypes: {}", def.mimetypes.join(", "));
    }
}
