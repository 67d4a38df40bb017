//! substract library
//!
//! Extracts unique subdomains from a list of URLs. Hostnames are split with
//! the Public Suffix List, so multi-label suffixes such as `co.uk` or
//! `github.io` are handled correctly.
//!
//! - Normalize URLs that lack a scheme
//! - Split hosts into subdomain / domain / suffix
//! - Collect a sorted, deduplicated set of subdomains
//! - Read URL lists from files and write subdomain lists back out
//!
//! # Example
//!
//! ```rust
//! use substract::extract_subdomains;
//!
//! let extraction = extract_subdomains(["https://api.example.com/v1", "example.com", "www.example.co.uk"]);
//! assert_eq!(extraction.to_vec(), vec!["api.example.com", "www.example.co.uk"]);
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain_utils;
pub mod errors;
pub mod extract;
pub mod files;
pub mod logging;
pub mod styled_output;

// Re-export commonly used types and functions for convenience
pub use app::{App, RunSummary};
pub use domain_utils::DomainParts;
pub use errors::{ErrorCategory, Result, SubstractError};
pub use extract::{ExtractOptions, Extraction, extract_subdomains, extract_subdomains_with};
pub use files::{read_urls, write_subdomains};
pub use styled_output::StyledFormatter;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
