//! Transliteration between Indic scripts and their romanizations.
//!
//! - `global()` returns the process-wide engine over the default scheme table
//! - `init_custom(toml_content)` swaps in a custom table before first use
//! - `t()` is shorthand for `global().transliterate(..)`

pub mod trace_init;

use std::borrow::Cow;
use std::sync::OnceLock;

pub use lipi_core::converter::{self, MapCache, Preprocessor, TranslationMap};
pub use lipi_core::detect::{self, detect_scheme};
pub use lipi_core::options::{self, Options};
pub use lipi_core::scheme::{self, Group, Scheme, SchemeConfigError, SchemeKind, SchemeRegistry};
pub use lipi_core::{TransliterateError, Transliterator};

use lipi_core::scheme::{parse_schemes_toml, DEFAULT_TOML};

static TABLE: OnceLock<Cow<'static, str>> = OnceLock::new();
static INSTANCE: OnceLock<Transliterator> = OnceLock::new();

/// Set a custom scheme table before the first `global()` call.
pub fn init_custom(toml_content: String) -> Result<(), SchemeConfigError> {
    parse_schemes_toml(&toml_content)?;
    TABLE
        .set(Cow::Owned(toml_content))
        .map_err(|_| SchemeConfigError::AlreadyInitialized)
}

/// The table `global()` builds from. The first caller fixes the choice, so a
/// later `init_custom` fails instead of being ignored.
fn scheme_table() -> &'static str {
    TABLE.get_or_init(|| Cow::Borrowed(DEFAULT_TOML))
}

/// Get or initialize the process-wide engine.
pub fn global() -> &'static Transliterator {
    INSTANCE.get_or_init(|| {
        let registry = parse_schemes_toml(scheme_table()).expect("scheme TOML must be valid");
        Transliterator::new(registry)
    })
}

/// Transliterate with the process-wide engine.
pub fn t(text: &str, from: &str, to: &str, options: Options) -> Result<String, TransliterateError> {
    global().transliterate(text, from, to, options)
}

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
