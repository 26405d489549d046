//! Email address syntax rules.
//!
//! The checks follow the conventions used by common email validators:
//! a local part made of dot-separated atoms or quoted strings, an `@`,
//! and either a hostname with a plausible top-level label or a bracketed
//! IP literal. No DNS lookups are performed.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

/// Maximum length of the part before the `@`.
const MAX_LOCAL_PART_LEN: usize = 64;

/// Maximum length of a hostname.
const MAX_DOMAIN_LEN: usize = 253;

/// A single atom or quoted string of the local part.
///
/// Unquoted atoms may not contain whitespace, control characters or any of
/// `( ) < > @ , ; : \ " . [ ]`, except as a backslash escape. The apostrophe
/// is allowed.
const LOCAL_WORD: &str = r#"(?:(?:\\.|[^\s\p{Cc}()<>@,;:'\\".\[\]]|')+|"(?:\\"|[^"])*")"#;

static LOCAL_PART_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{word}(?:\.{word})*$", word = LOCAL_WORD))
        .expect("local part pattern is a valid regex")
});

static DOMAIN_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
        .expect("domain label pattern is a valid regex")
});

/// Plausible top-level label: letters only, or a punycode `xn--` label.
///
/// There is no registry lookup, so unknown TLDs such as `notatld` are accepted.
static TOP_LEVEL_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z]{2,63}|[Xx][Nn]--[A-Za-z0-9-]{1,59})$")
        .expect("top-level label pattern is a valid regex")
});

/// Check whether `address` is a syntactically valid email address.
///
/// The input is taken as-is; surrounding whitespace makes it invalid.
pub fn is_valid_address(address: &str) -> bool {
    if address.is_empty() || address.ends_with('.') {
        return false;
    }

    // Quoted local parts may contain '@', so split on the last one.
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

/// Validate the part before the `@`.
pub fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.chars().count() <= MAX_LOCAL_PART_LEN
        && LOCAL_PART_REGEX.is_match(local)
}

/// Validate the part after the `@`: a bracketed IP literal or a hostname.
pub fn is_valid_domain(domain: &str) -> bool {
    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return literal.parse::<IpAddr>().is_ok();
    }

    is_valid_hostname(domain)
}

fn is_valid_hostname(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    if !labels.iter().all(|label| DOMAIN_LABEL_REGEX.is_match(label)) {
        return false;
    }

    labels
        .last()
        .is_some_and(|tld| TOP_LEVEL_LABEL_REGEX.is_match(tld))
}
