use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lipi::Options;
use lipi_cli::commands::{convert_ops, scheme_ops};

#[derive(Parser)]
#[command(name = "lipitool", about = "Indic script transliteration tool")]
struct Cli {
    /// Write JSON-lines traces to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (or stdin, line by line)
    Convert {
        /// Destination scheme
        #[arg(long)]
        to: String,
        /// Source scheme (detected when omitted)
        #[arg(long)]
        from: Option<String>,
        /// Copy <...> tags through unchanged
        #[arg(long)]
        skip_sgml: bool,
        /// Drop the word-final virama
        #[arg(long)]
        syncope: bool,
        /// Scheme table TOML to use instead of the built-in one
        #[arg(long)]
        schemes: Option<String>,
        /// Text to convert
        text: Option<String>,
    },
    /// Print the scheme the text appears to be written in
    Detect {
        /// Text to inspect
        text: String,
    },
    /// List registered schemes
    Schemes {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Scheme table TOML to use instead of the built-in one
        #[arg(long)]
        schemes: Option<String>,
    },
    /// Print the glyph groups of one scheme
    Show {
        /// Scheme name
        scheme: String,
        /// Scheme table TOML to use instead of the built-in one
        #[arg(long)]
        schemes: Option<String>,
    },
    /// Print the built-in scheme table TOML
    Export,
    /// Validate a scheme table TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Some(dir) = &cli.trace_dir {
        lipi::trace_init::init_tracing(dir);
    }

    match cli.command {
        Command::Convert {
            to,
            from,
            skip_sgml,
            syncope,
            schemes,
            text,
        } => {
            let engine = scheme_ops::load_engine(schemes.as_deref());
            let options = Options::new()
                .with_skip_sgml(skip_sgml)
                .with_syncope(syncope);
            convert_ops::convert_cmd(engine, text.as_deref(), from.as_deref(), &to, options);
        }
        Command::Detect { text } => convert_ops::detect_cmd(&text),
        Command::Schemes { json, schemes } => {
            scheme_ops::list_cmd(scheme_ops::load_engine(schemes.as_deref()), json)
        }
        Command::Show { scheme, schemes } => {
            scheme_ops::show_cmd(scheme_ops::load_engine(schemes.as_deref()), &scheme)
        }
        Command::Export => scheme_ops::export_cmd(),
        Command::Validate { file } => scheme_ops::validate_cmd(&file),
    }
}
