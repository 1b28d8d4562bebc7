use crate::filter::Matcher;
use flate2::read::GzDecoder;
use std::io::{self, BufRead, Read, Write};

/// Scan a line stream and write through every line the rule selects.
///
/// Lines are tested and emitted strictly in arrival order. With `invert`
/// set the decision is flipped before emission. Lines that are not valid
/// UTF-8 are tested against a lossy conversion, never failing the scan,
/// and pass through byte-for-byte when selected. Read errors (including a
/// gzip stream that turns out not to be gzip) surface as fatal.
pub fn scan_and_grep<R: BufRead, W: Write>(
    mut reader: R,
    matcher: &Matcher,
    invert: bool,
    out: &mut W,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let mut line: &[u8] = &buf;
        if line.last() == Some(&b'\n') {
            line = &line[..line.len() - 1];
        }
        if line.last() == Some(&b'\r') {
            line = &line[..line.len() - 1];
        }

        if matcher.matches(&String::from_utf8_lossy(line)) != invert {
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
    }
}

/// Wrap a raw byte stream in gzip decompression when requested
pub fn decompress<R: Read + 'static>(use_gzip: bool, reader: R) -> Box<dyn Read> {
    if use_gzip {
        Box::new(GzDecoder::new(reader))
    } else {
        Box::new(reader)
    }
}
