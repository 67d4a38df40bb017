//! Subdomain extraction from raw URL strings.
//!
//! Every input goes through the same steps:
//!   1. Prepend the default scheme when the URL has no `http://`/`https://`
//!   2. Validate it with the WHATWG parser and take the host as written
//!   3. Split the host with the Public Suffix List
//!   4. Emit `<subdomain>.<domain>.<suffix>` when a subdomain exists
//!
//! Malformed URLs are logged and recorded, never fatal.

use std::collections::BTreeSet;

use tracing::{debug, error, trace};
use url::{Host, Url};

use crate::domain_utils::DomainParts;
use crate::errors::{Result, SubstractError};

/// Scheme prepended to inputs that do not carry one.
pub const DEFAULT_SCHEME: &str = "http";

/// Tunables for a single extraction pass.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Scheme used for URLs given without one (`http` or `https`)
    pub default_scheme: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// A URL that could not be processed.
#[derive(Debug)]
pub struct UrlFailure {
    /// The URL after scheme normalization
    pub url: String,
    pub error: SubstractError,
}

/// Outcome of one extraction pass.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Unique subdomains, sorted
    pub subdomains: BTreeSet<String>,
    /// Inputs that were skipped, in input order
    pub failures: Vec<UrlFailure>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.subdomains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.subdomains.len()
    }

    /// Sorted subdomains as owned strings.
    pub fn to_vec(&self) -> Vec<String> {
        self.subdomains.iter().cloned().collect()
    }
}

/// Extract unique subdomains from a list of URLs with default options.
pub fn extract_subdomains<I, S>(urls: I) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_subdomains_with(urls, &ExtractOptions::default())
}

/// Extract unique subdomains from a list of URLs.
pub fn extract_subdomains_with<I, S>(urls: I, options: &ExtractOptions) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extraction = Extraction::default();

    for raw in urls {
        let url = normalize_url(raw.as_ref(), &options.default_scheme);
        match subdomains_of(&url) {
            Ok(found) => {
                trace!(url = %url, found = found.len(), "processed URL");
                extraction.subdomains.extend(found);
            }
            Err(e) => {
                error!("Error processing URL {}: {}", url, e);
                extraction.failures.push(UrlFailure { url, error: e });
            }
        }
    }

    debug!(
        subdomains = extraction.subdomains.len(),
        failures = extraction.failures.len(),
        "extraction finished"
    );
    extraction
}

/// Prepend `<scheme>://` unless the URL already starts with an http(s) scheme.
pub fn normalize_url(url: &str, default_scheme: &str) -> String {
    if has_http_scheme(url) {
        url.to_string()
    } else {
        format!("{default_scheme}://{url}")
    }
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Subdomain entries contributed by a single (already normalized) URL.
///
/// Returns zero, one or two entries: the general `<subdomain>.<domain>.<suffix>`
/// form plus a second `www.<domain>.<suffix>` entry when the subdomain is `www`.
/// The two coincide; the set absorbs the repeat.
pub fn subdomains_of(url: &str) -> Result<Vec<String>> {
    let parsed = Url::parse(url).map_err(|e| SubstractError::invalid_url(url, e.to_string()))?;

    match parsed.host() {
        Some(Host::Domain(_)) => {}
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => return Ok(Vec::new()),
        None => return Err(SubstractError::missing_host(url)),
    }
    // The parsed host is lowercased and punycoded; output keeps the input's labels.
    let host = raw_host(url).ok_or_else(|| SubstractError::missing_host(url))?;

    let parts =
        DomainParts::parse(host).map_err(|e| SubstractError::invalid_url(url, e.to_string()))?;

    let mut found = Vec::with_capacity(2);
    if let Some(full) = parts.full_subdomain() {
        found.push(full);
    }
    if parts.is_www()
        && let Some(registrable) = parts.registrable_domain()
    {
        found.push(format!("www.{registrable}"));
    }

    Ok(found)
}

/// Host text exactly as written in the authority, without userinfo or port.
fn raw_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest.split(['/', '?', '#', '\\']).next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = host_port.rsplit_once(':').map_or(host_port, |(h, _)| h);
    (!host.is_empty()).then_some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com", "http"), "http://example.com");
        assert_eq!(
            normalize_url("https://example.com", "http"),
            "https://example.com"
        );
        assert_eq!(
            normalize_url("HTTP://Example.com", "http"),
            "HTTP://Example.com"
        );
        assert_eq!(normalize_url("a.example.com", "https"), "https://a.example.com");
    }

    #[test]
    fn test_subdomain_extracted() {
        let extraction = extract_subdomains(["https://sub.example.com/path?q=1"]);
        assert_eq!(extraction.to_vec(), vec!["sub.example.com"]);
        assert!(extraction.failures.is_empty());
    }

    #[test]
    fn test_scheme_less_input() {
        let extraction = extract_subdomains(["api.example.com:8443/v1"]);
        assert_eq!(extraction.to_vec(), vec!["api.example.com"]);
    }

    #[test]
    fn test_www_is_emitted_once() {
        assert_eq!(
            subdomains_of("http://www.example.com").unwrap(),
            vec!["www.example.com", "www.example.com"]
        );
        let extraction = extract_subdomains(["www.example.com", "http://www.example.com/"]);
        assert_eq!(extraction.to_vec(), vec!["www.example.com"]);
    }

    #[test]
    fn test_no_subdomain_contributes_nothing() {
        let extraction = extract_subdomains(["example.com", "https://example.co.uk/x"]);
        assert!(extraction.is_empty());
        assert!(extraction.failures.is_empty());
    }

    #[test]
    fn test_ip_hosts_contribute_nothing() {
        let extraction = extract_subdomains(["http://192.168.0.1/admin", "http://[::1]:8080/"]);
        assert!(extraction.is_empty());
        assert!(extraction.failures.is_empty());
    }

    #[test]
    fn test_raw_host() {
        assert_eq!(raw_host("http://Sub.Example.com/x"), Some("Sub.Example.com"));
        assert_eq!(
            raw_host("https://user:pw@Dev.Example.org:8080/a?b#c"),
            Some("Dev.Example.org")
        );
        assert_eq!(raw_host("http://a.example.com?q=1"), Some("a.example.com"));
        assert_eq!(raw_host("http://"), None);
    }

    #[test]
    fn test_case_is_preserved() {
        let extraction = extract_subdomains(["API.Example.com", "api.example.com"]);
        assert_eq!(extraction.to_vec(), vec!["API.Example.com", "api.example.com"]);
    }

    #[test]
    fn test_unicode_host_kept_as_written() {
        let extraction = extract_subdomains(["https://bücher.example.com/katalog"]);
        assert_eq!(extraction.to_vec(), vec!["bücher.example.com"]);
    }

    #[test]
    fn test_userinfo_and_port_stripped() {
        let extraction = extract_subdomains(["http://user:pw@Dev.Example.org:8080/x"]);
        assert_eq!(extraction.to_vec(), vec!["Dev.Example.org"]);
    }

    #[test]
    fn test_multi_label_suffix() {
        let extraction = extract_subdomains(["a.b.example.co.uk"]);
        assert_eq!(extraction.to_vec(), vec!["a.b.example.co.uk"]);
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let extraction = extract_subdomains([
            "https://mail.example.com",
            "http://api.example.com/v2",
            "mail.example.com/inbox",
            "https://blog.other.org",
        ]);
        assert_eq!(
            extraction.to_vec(),
            vec!["api.example.com", "blog.other.org", "mail.example.com"]
        );
    }

    #[test]
    fn test_malformed_url_does_not_stop_batch() {
        let extraction = extract_subdomains([
            "http://[::1",
            "https://ok.example.com",
            "http://bad host.example.com",
            "dev.example.org",
        ]);
        assert_eq!(
            extraction.to_vec(),
            vec!["dev.example.org", "ok.example.com"]
        );
        assert_eq!(extraction.failures.len(), 2);
        assert_eq!(extraction.failures[0].url, "http://[::1");
        assert!(extraction.failures.iter().all(|f| f.error.is_recoverable()));
    }

    #[test]
    fn test_custom_default_scheme() {
        let options = ExtractOptions {
            default_scheme: "https".to_string(),
        };
        let extraction = extract_subdomains_with(["cdn.example.net"], &options);
        assert_eq!(extraction.to_vec(), vec!["cdn.example.net"]);
    }
}
