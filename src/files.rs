//! Reading URL lists and writing subdomain lists.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::{IoResultExt, Result, SubstractError};

/// Read URLs from a file, one per line.
///
/// Lines are trimmed; blank lines are dropped. A missing file is reported as
/// `InputNotFound`, any other failure as `Io`.
pub fn read_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SubstractError::input_not_found(&shown),
        _ => SubstractError::io(&shown, "reading", e),
    })?;

    let urls = parse_url_lines(BufReader::new(file)).with_path(&shown, "reading")?;
    debug!(path = %shown, count = urls.len(), "read URLs from file");
    Ok(urls)
}

/// Collect trimmed, non-empty lines from a reader.
pub fn parse_url_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}

/// Write subdomains to an output file, one per line.
pub fn write_subdomains<P, I, S>(path: P, subdomains: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let shown = path.display().to_string();

    let file = File::create(path).with_path(&shown, "writing to")?;
    let mut writer = BufWriter::new(file);
    let mut count = 0usize;
    for subdomain in subdomains {
        writeln!(writer, "{}", subdomain.as_ref()).with_path(&shown, "writing to")?;
        count += 1;
    }
    writer.flush().with_path(&shown, "writing to")?;

    info!(path = %shown, count, "wrote subdomains");
    Ok(())
}
