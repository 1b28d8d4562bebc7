use clap::Parser;
use std::path::PathBuf;

/// A grep for JSON log streams: match lines by a field's value
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Match rule in FIELD=VALUE form; FIELD is a dotted path into each
    /// JSON line, VALUE a substring (or regex with -e). Escape a literal
    /// '=' or '\' in either half with a backslash.
    pub pattern: String,

    /// Input files, processed in order; reads standard input when omitted
    pub paths: Vec<PathBuf>,

    /// Emit lines that do NOT match the pattern
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Treat VALUE as a regular expression
    #[arg(short = 'e', long = "regexp")]
    pub regexp: bool,

    /// Decompress each input source as gzip before scanning
    #[arg(short = 'g', long)]
    pub gzip: bool,

    /// Print debug diagnostics to stderr
    #[arg(
        long,
        env = "DEBUG",
        value_parser = clap::builder::FalseyValueParser::new(),
        hide_env_values = true
    )]
    pub debug: bool,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
