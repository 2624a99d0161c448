/// The embedded default scheme table (TOML).
pub const DEFAULT_TOML: &str = include_str!("default_schemes.toml");

/// Returns the default TOML content, for export or as a starting point for
/// custom tables.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
