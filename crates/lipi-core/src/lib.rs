pub mod converter;
pub mod detect;
pub mod options;
pub mod scheme;

pub use converter::{TransliterateError, Transliterator};
pub use options::Options;
