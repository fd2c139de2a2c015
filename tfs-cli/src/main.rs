//! Command-line interface for TFS
//! This binary runs the highlighting pipeline over a TFS file and prints the
//! resulting decoration spans, or the raw color literals, as text or JSON.
//!
//! Usage:
//!   tfs `<path>` [--format `<text|json>`] [--config `<file>`]  - Print decoration spans
//!   tfs `<path>` --colors                                      - Print raw color literals

use clap::{Arg, ArgAction, Command};
use tfs_analysis::colors::document_colors;
use tfs_analysis::highlight::{compute_decorations, DecorationSet};

fn main() {
    let matches = Command::new("tfs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect TFS files: decoration spans, palette tokens, color literals")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the TFS file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: text or json")
                .default_value("text"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("colors")
                .long("colors")
                .help("List raw color literals instead of decoration spans")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let format = matches.get_one::<String>("format").expect("has default");

    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {path}: {e}");
        std::process::exit(1);
    });

    let mut loader = tfs_config::Loader::new();
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    });

    if matches.get_flag("colors") {
        print_colors(&text, format);
        return;
    }

    let set = compute_decorations(&text, &config.highlight.to_options());
    match format.as_str() {
        "json" => print_json(&set),
        "text" => print!("{}", render_text(&text, &set)),
        other => {
            eprintln!("Unknown format: {other} (expected text or json)");
            std::process::exit(1);
        }
    }
}

fn print_colors(text: &str, format: &str) {
    let found = document_colors(text);
    if format == "json" {
        match serde_json::to_string_pretty(&found) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Serialization error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }
    for m in &found {
        println!(
            "{}..{}\t{}\t{}",
            m.range.start,
            m.range.end,
            &text[m.range.clone()],
            m.color.to_canonical_hex()
        );
    }
}

fn print_json(set: &DecorationSet) {
    match serde_json::to_string_pretty(set) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        }
    }
}

fn render_text(text: &str, set: &DecorationSet) -> String {
    let mut out = String::new();
    for span in &set.inline {
        render_line(&mut out, "inline", text, &span.range, span.render_color.as_deref());
    }
    for span in &set.swatch {
        render_line(&mut out, "swatch", text, &span.range, span.render_color.as_deref());
    }
    for span in &set.states {
        render_line(&mut out, "state", text, &span.range, Some(span.color));
    }
    out
}

fn render_line(
    out: &mut String,
    category: &str,
    text: &str,
    range: &std::ops::Range<usize>,
    color: Option<&str>,
) {
    use std::fmt::Write;
    let _ = writeln!(
        out,
        "{category}\t{}..{}\t{}\t{}",
        range.start,
        range.end,
        &text[range.clone()],
        color.unwrap_or("-")
    );
}
