//! High-level application orchestration layer.
//!
//! `App` is the CLI-facing façade. A run is linear:
//!   1. Load URLs (input file or positional arguments)
//!   2. Extract subdomains
//!   3. Print the report (styled or plain)
//!   4. Write the output file when anything was found
//!
//! Per-URL failures are logged by the extractor and never abort the run.
//! Input and output I/O failures are returned to the caller as fatal.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::cli::{Cli, InputSource};
use crate::config::Config;
use crate::errors::{Result, SubstractError};
use crate::extract::{Extraction, extract_subdomains_with};
use crate::files::{read_urls, write_subdomains};
use crate::styled_output::StyledFormatter;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of URLs examined
    pub urls_processed: usize,
    /// Number of unique subdomains found
    pub subdomains_found: usize,
    /// Number of URLs skipped as malformed
    pub failures: usize,
    /// Output file, if one was written
    pub written_to: Option<PathBuf>,
}

/// CLI-facing façade.
pub struct App {
    cli: Cli,
    config: Config,
    formatter: StyledFormatter,
}

impl App {
    pub fn new(cli: Cli, config: Config) -> Self {
        let formatter = if cli.no_color {
            StyledFormatter::without_colors()
        } else {
            StyledFormatter::new()
        };
        Self {
            cli,
            config,
            formatter,
        }
    }

    /// Resolve the input source from the CLI.
    pub fn input_source(&self) -> Result<InputSource> {
        if self.cli.ignores_positional_urls() {
            warn!(
                ignored = self.cli.urls.len(),
                "--file given, ignoring URLs passed as arguments"
            );
        }
        self.cli.input_source().ok_or(SubstractError::NoInput)
    }

    /// Run one extraction end to end.
    pub fn run(&self) -> Result<RunSummary> {
        let urls = match self.input_source()? {
            InputSource::File(path) => read_urls(&path)?,
            InputSource::Urls(urls) => urls,
        };
        info!(count = urls.len(), "processing URLs");

        let extraction = extract_subdomains_with(&urls, &self.config.extract_options());
        self.report(&extraction)?;

        let written_to = if extraction.is_empty() {
            None
        } else {
            let path = self.config.output_path.clone();
            write_subdomains(&path, &extraction.subdomains)?;
            self.formatter
                .print_written(&path)
                .map_err(|e| SubstractError::internal_with("failed to print summary", e))?;
            Some(path)
        };

        Ok(RunSummary {
            urls_processed: urls.len(),
            subdomains_found: extraction.len(),
            failures: extraction.failures.len(),
            written_to,
        })
    }

    fn report(&self, extraction: &Extraction) -> Result<()> {
        if self.cli.quiet {
            return Ok(());
        }
        self.formatter
            .print_extraction(extraction)
            .map_err(|e| SubstractError::internal_with("failed to print results", e))
    }
}
