use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Source-text rewrite applied before scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preprocessor {
    Itrans,
}

impl Preprocessor {
    pub fn apply(self, text: &str) -> String {
        match self {
            Preprocessor::Itrans => itrans(text),
        }
    }
}

/// ITRANS markup: `{\m+}` becomes `.h.N`, `.h` is dropped, and a backslash
/// escape (other than an accent) becomes a one-character `##` region.
fn itrans(text: &str) -> String {
    let text = text.replace("{\\m+}", ".h.N").replace(".h", "");
    escaped_char().replace_all(&text, "##${1}##").into_owned()
}

fn escaped_char() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\([^'`_]|$)").expect("escape pattern is valid"))
}
