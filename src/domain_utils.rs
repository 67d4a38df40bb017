//! Hostname splitting with Public Suffix List integration.
//!
//! A hostname is split into three parts using the Public Suffix List (PSL):
//! - `a.b.example.co.uk` -> subdomain `a.b`, domain `example`, suffix `co.uk`
//! - `www.example.com` -> subdomain `www`, domain `example`, suffix `com`
//! - `mysite.github.io` -> domain `mysite`, suffix `github.io` (no subdomain)
//!
//! Unknown TLDs fall under the PSL default rule `*`, so the last label is
//! always treated as a suffix.

use anyhow::{Result, anyhow};
use psl::{domain_str, suffix_str};

/// The PSL split of a single hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    /// Label(s) in front of the registrable domain, if any
    pub subdomain: Option<String>,
    /// The registrable label directly in front of the suffix
    pub domain: Option<String>,
    /// The public suffix (TLD or effective TLD)
    pub suffix: Option<String>,
}

impl DomainParts {
    /// Split a hostname into subdomain, domain and suffix.
    pub fn parse(host: &str) -> Result<Self> {
        let host = clean_host_input(host)?;
        Ok(Self::parse_with_psl(host))
    }

    /// PSL rules are matched on an ASCII-lowercased copy; the returned
    /// parts keep the labels exactly as written.
    fn parse_with_psl(host: &str) -> Self {
        let lower = host.to_ascii_lowercase();
        let suffix = suffix_str(&lower)
            .filter(|s| !s.is_empty())
            .map(|s| tail(host, s.len()));
        let registrable = domain_str(&lower).map(|d| tail(host, d.len()));

        let domain = match (registrable, suffix) {
            (Some(reg), Some(suf)) => label_before(reg, suf),
            _ => None,
        };
        let subdomain = registrable.and_then(|reg| subdomain_for(host, reg));

        DomainParts {
            subdomain,
            domain,
            suffix: suffix.map(str::to_string),
        }
    }

    /// `<domain>.<suffix>`, when both parts exist.
    pub fn registrable_domain(&self) -> Option<String> {
        match (&self.domain, &self.suffix) {
            (Some(domain), Some(suffix)) => Some(format!("{domain}.{suffix}")),
            _ => None,
        }
    }

    /// `<subdomain>.<domain>.<suffix>`, when a subdomain exists.
    pub fn full_subdomain(&self) -> Option<String> {
        let subdomain = self.subdomain.as_deref()?;
        let registrable = self.registrable_domain()?;
        Some(format!("{subdomain}.{registrable}"))
    }

    /// Whether the subdomain is exactly `www`.
    pub fn is_www(&self) -> bool {
        self.subdomain.as_deref() == Some("www")
    }
}

/// Strip whitespace and the root dot from a hostname.
fn clean_host_input(host: &str) -> Result<&str> {
    let clean = host.trim().trim_end_matches('.');

    if clean.is_empty() {
        return Err(anyhow!("Empty host"));
    }
    if clean.split('.').any(str::is_empty) {
        return Err(anyhow!("Invalid host format: {}", host));
    }

    Ok(clean)
}

/// Last `len` bytes of `host`. ASCII lowercasing keeps byte offsets intact.
fn tail(host: &str, len: usize) -> &str {
    &host[host.len() - len..]
}

fn label_before(registrable: &str, suffix: &str) -> Option<String> {
    let label = registrable.strip_suffix(suffix)?.strip_suffix('.')?;
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}

fn subdomain_for(full_domain: &str, registrable: &str) -> Option<String> {
    if full_domain.len() <= registrable.len() {
        return None;
    }
    let prefix = full_domain.strip_suffix(registrable)?.strip_suffix('.')?;
    if prefix.is_empty() {
        None
    } else {
        Some(prefix.to_string())
    }
}
