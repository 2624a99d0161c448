use std::fs;
use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use lipi::{SchemeKind, Transliterator};

const GLYPHS_PER_ROW: usize = 10;

/// The process-wide engine, over `schemes_file` when one is given.
pub fn load_engine(schemes_file: Option<&str>) -> &'static Transliterator {
    if let Some(file) = schemes_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(lipi::init_custom(content), "Error: {}");
    }
    lipi::global()
}

#[derive(Debug, Serialize)]
struct SchemeSummary<'a> {
    name: &'a str,
    kind: SchemeKind,
    groups: usize,
    alternates: usize,
}

pub fn list_cmd(engine: &Transliterator, json: bool) {
    let registry = engine.registry();
    let rows: Vec<SchemeSummary> = registry
        .names()
        .into_iter()
        .filter_map(|name| {
            registry.get(name).map(|entry| SchemeSummary {
                name,
                kind: entry.kind,
                groups: entry.scheme.len(),
                alternates: registry.alternates(name).map_or(0, |t| t.len()),
            })
        })
        .collect();

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&rows), "Error: {}")
        );
        return;
    }
    for row in &rows {
        println!(
            "{:<18} {:<8} {:>2} groups {:>3} alternates",
            row.name, row.kind, row.groups, row.alternates
        );
    }
}

pub fn show_cmd(engine: &Transliterator, name: &str) {
    let Some(entry) = engine.registry().get(name) else {
        eprintln!("Error: unknown scheme: {name}");
        process::exit(1);
    };

    println!("{name} ({})", entry.kind);
    if let Some(preprocessor) = entry.preprocessor {
        println!("  preprocessor: {preprocessor:?}");
    }
    for (group, glyphs) in entry.scheme.groups() {
        println!("  {group}:");
        let width = column_width(glyphs);
        for row in glyphs.chunks(GLYPHS_PER_ROW) {
            println!("    {}", format_row(row, width));
        }
    }
}

pub fn export_cmd() {
    print!("{}", lipi::scheme::default_toml());
}

pub fn validate_cmd(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let registry = die!(lipi::scheme::parse_schemes_toml(&content), "Error: {}");
    let names = registry.names();
    let roman = names
        .iter()
        .filter(|name| registry.is_roman_scheme(name))
        .count();
    println!(
        "OK: {} schemes ({} brahmic, {} roman)",
        names.len(),
        names.len() - roman,
        roman
    );
}

/// Display width of the widest glyph; empty glyphs render as `-`.
fn column_width(glyphs: &[String]) -> usize {
    glyphs
        .iter()
        .map(|g| UnicodeWidthStr::width(g.as_str()))
        .max()
        .unwrap_or(0)
        .max(1)
}

fn format_row(glyphs: &[String], width: usize) -> String {
    glyphs
        .iter()
        .map(|g| {
            let cell = if g.is_empty() { "-" } else { g.as_str() };
            let pad = width.saturating_sub(UnicodeWidthStr::width(cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}
