//! Styled terminal output for extraction results using anstyle.
//!
//! Colors are only emitted when stdout is a terminal and `NO_COLOR` is unset;
//! otherwise the output is plain text suitable for piping.

use anstyle::{AnsiColor, Color, Style};
use std::fmt::Write;
use std::io::{self, Write as IoWrite};
use std::path::Path;

use crate::extract::Extraction;

/// Style definitions for different UI elements
pub struct Styles {
    pub header: Style,
    pub success: Style,
    pub warning: Style,
    pub muted: Style,
    pub subdomain: Style,
    pub path: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Blue))),
            success: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
            warning: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
            muted: Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
            subdomain: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
            path: Style::new().underline(),
        }
    }
}

/// Styled output formatter for extracted subdomains
pub struct StyledFormatter {
    styles: Styles,
    use_colors: bool,
}

impl StyledFormatter {
    /// Create a new styled formatter
    pub fn new() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: Self::should_use_colors(),
        }
    }

    /// Create a formatter without colors (for non-interactive use)
    pub fn without_colors() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: false,
        }
    }

    /// Determine if colors should be used based on environment
    fn should_use_colors() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Apply style to text if colors are enabled
    fn styled(&self, text: &str, style: &Style) -> String {
        if self.use_colors {
            format!("{}{}{}", style.render(), text, style.render_reset())
        } else {
            text.to_string()
        }
    }

    /// Render the list of extracted subdomains.
    pub fn format_extraction(&self, extraction: &Extraction) -> Result<String, std::fmt::Error> {
        let mut output = String::new();

        if extraction.is_empty() {
            writeln!(
                output,
                "{}",
                self.styled("No subdomains found.", &self.styles.warning)
            )?;
            return Ok(output);
        }

        writeln!(output)?;
        writeln!(
            output,
            "{}",
            self.styled("Extracted Subdomains:", &self.styles.header)
        )?;
        for subdomain in &extraction.subdomains {
            writeln!(output, "{}", self.styled(subdomain, &self.styles.subdomain))?;
        }

        if !extraction.failures.is_empty() {
            let note = format!(
                "({} URL{} skipped, see errors above)",
                extraction.failures.len(),
                if extraction.failures.len() == 1 { "" } else { "s" }
            );
            writeln!(output, "{}", self.styled(&note, &self.styles.muted))?;
        }

        Ok(output)
    }

    /// Render the confirmation line after the output file is written.
    pub fn format_written(&self, path: &Path) -> String {
        format!(
            "{} {}",
            self.styled("Subdomains written to", &self.styles.success),
            self.styled(&path.display().to_string(), &self.styles.path)
        )
    }

    /// Print the extraction report to stdout
    pub fn print_extraction(&self, extraction: &Extraction) -> io::Result<()> {
        let formatted = self
            .format_extraction(extraction)
            .map_err(|e| io::Error::other(format!("{}", e)))?;
        print!("{}", formatted);
        io::stdout().flush()?;
        Ok(())
    }

    /// Print the confirmation line to stdout
    pub fn print_written(&self, path: &Path) -> io::Result<()> {
        println!("{}", self.format_written(path));
        io::stdout().flush()
    }
}

impl Default for StyledFormatter {
    fn default() -> Self {
        Self::new()
    }
}
