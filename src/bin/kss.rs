//! Command-line interface for kss
//! This binary extracts KSS styleguide documentation from stylesheet comments.
//!
//! Usage:
//!   kss parse `<input>`... [--format `<format>`]   - Parse inputs and print every section
//!   kss section `<reference>` `<input>`...         - Look up one section by reference

use clap::{Arg, Command};
use kss::{Input, Parser};

fn main() {
    let matches = Command::new("kss")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts KSS styleguide documentation from stylesheet comments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse inputs and print every documented section")
                .arg(
                    Arg::new("input")
                        .help("A stylesheet file or directory, or literal KSS text")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'summary')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("section")
                .about("Look up a single section by styleguide reference")
                .arg(
                    Arg::new("reference")
                        .help("Styleguide reference, e.g. '2.1.1' or 'Buttons.Big'")
                        .required(true),
                )
                .arg(
                    Arg::new("input")
                        .help("A stylesheet file or directory, or literal KSS text")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let inputs = collect_inputs(parse_matches);
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(inputs, format);
        }
        Some(("section", section_matches)) => {
            let reference = section_matches.get_one::<String>("reference").unwrap();
            let inputs = collect_inputs(section_matches);
            handle_section_command(reference, inputs);
        }
        _ => unreachable!(),
    }
}

fn collect_inputs(matches: &clap::ArgMatches) -> Vec<Input> {
    matches
        .get_many::<String>("input")
        .unwrap()
        .map(|value| Input::detect(value))
        .collect()
}

fn build_parser(inputs: Vec<Input>) -> Parser {
    match Parser::new(inputs) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the parse command
fn handle_parse_command(inputs: Vec<Input>, format: &str) {
    let parser = build_parser(inputs);
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(parser.sections())
                .expect("sections serialize to JSON");
            println!("{}", json);
        }
        "summary" => {
            let mut references: Vec<&String> = parser.sections().keys().collect();
            references.sort();
            for reference in references {
                let section = parser.section(reference);
                let first_line = section.description().lines().next().unwrap_or("");
                println!("{}\t{}\t{}", reference, section.file_name(), first_line);
            }
        }
        other => {
            eprintln!("Error: unknown format '{}'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the section command
fn handle_section_command(reference: &str, inputs: Vec<Input>) {
    let parser = build_parser(inputs);
    let section = parser.section(reference);
    let json = serde_json::to_string_pretty(section).expect("section serializes to JSON");
    println!("{}", json);
}
