pub mod cli;
pub mod debug;
pub mod extract;
pub mod filter;
pub mod scan;

pub use cli::{Cli, cli_parse};
pub use debug::DebugLog;
pub use extract::{extract_field, render_value};
pub use filter::{Matcher, Pattern, PatternError};
pub use scan::{decompress, scan_and_grep};

use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, IsTerminal, Write};

/// Scan one input source through the matcher into `out`
fn grep_source(
    reader: Box<dyn io::Read>,
    matcher: &Matcher,
    invert: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    scan_and_grep(BufReader::new(reader), matcher, invert, out)
}

pub fn run() -> Result<()> {
    let cli = cli_parse();
    let debug = DebugLog::new(cli.debug);
    debug.emit(format_args!(
        "pattern: '{}', paths: {:?}, invert: {}, regexp: {}, gzip: {}",
        cli.pattern, cli.paths, cli.invert_match, cli.regexp, cli.gzip
    ));

    let matcher = Matcher::new(cli.regexp, &cli.pattern)?;

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);

    if cli.paths.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            // Nothing to scan: no paths and no piped input
            Cli::command().write_help(&mut io::stderr())?;
            bail!("no PATH arguments and standard input is not a pipe");
        }

        grep_source(
            decompress(cli.gzip, stdin.lock()),
            &matcher,
            cli.invert_match,
            &mut out,
        )
        .context("failed to read standard input")?;
    } else {
        for path in &cli.paths {
            let metadata = fs::metadata(path)
                .with_context(|| format!("failed to stat '{}'", path.display()))?;
            if metadata.len() == 0 {
                debug.emit(format_args!("skipping empty file '{}'", path.display()));
                continue;
            }

            let file =
                File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
            grep_source(
                decompress(cli.gzip, file),
                &matcher,
                cli.invert_match,
                &mut out,
            )
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        }
    }

    out.flush()?;
    Ok(())
}
