use std::io::{self, BufRead, BufWriter, Write};

use lipi::{detect_scheme, Options, Transliterator};

/// Convert `text`, or stdin line by line when `text` is `None`. Without
/// `from`, each input is run through scheme detection first.
pub fn convert_cmd(
    engine: &Transliterator,
    text: Option<&str>,
    from: Option<&str>,
    to: &str,
    options: Options,
) {
    if let Some(text) = text {
        println!("{}", convert_line(engine, text, from, to, options));
        return;
    }

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        let converted = convert_line(engine, &line, from, to, options);
        die!(writeln!(out, "{converted}"), "Error writing output: {}");
    }
    die!(out.flush(), "Error writing output: {}");
}

pub fn detect_cmd(text: &str) {
    println!("{}", detect_scheme(text));
}

fn convert_line(
    engine: &Transliterator,
    text: &str,
    from: Option<&str>,
    to: &str,
    options: Options,
) -> String {
    let from = from.unwrap_or_else(|| detect_scheme(text));
    die!(engine.transliterate(text, from, to, options), "Error: {}")
}
