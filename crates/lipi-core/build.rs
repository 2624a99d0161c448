fn main() {
    // Validate the embedded scheme table at compile time.
    validate_toml(
        "src/scheme/default_schemes.toml",
        include_str!("src/scheme/default_schemes.toml"),
    );
    println!("cargo:rerun-if-changed=src/scheme/default_schemes.toml");
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Table>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
