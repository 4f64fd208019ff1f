//! Structural URL validation. No network access.
//!
//! Checks run in a fixed order and the first failure wins:
//! raw text, parse, scheme membership, path as written and parsed, then
//! stray components (query, fragment, credentials).

use ::url::{ParseError, Url};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use crate::types::ValidationError;

/// Validate the shape of `raw` against a scheme allow-set and a required path.
///
/// Scheme membership ignores ASCII case, since URL schemes are
/// case-insensitive and the parser lowercases them.
pub fn validate_url<S>(
    raw: &str,
    allowed_schemes: &HashSet<S>,
    required_path: &str,
) -> Result<(), ValidationError>
where
    S: Borrow<str> + Hash + Eq,
{
    // The parser silently strips these; reject them instead.
    if raw.chars().any(|c| c.is_ascii_control()) || raw.trim() != raw {
        tracing::debug!("url rejected: control character or surrounding whitespace");
        return Err(ValidationError::InvalidBaseUrl);
    }

    let url = match Url::parse(raw) {
        Ok(url) => url,
        // No scheme at all: the empty scheme is never allowed.
        Err(ParseError::RelativeUrlWithoutBase) => {
            tracing::debug!("url rejected: no scheme");
            return Err(ValidationError::UnsupportedProtocol);
        }
        Err(e) => {
            tracing::debug!("url rejected: parse failed: {}", e);
            return Err(ValidationError::InvalidBaseUrl);
        }
    };

    if !url.host_str().is_some_and(|host| !host.is_empty()) {
        tracing::debug!("url rejected: no host");
        return Err(ValidationError::InvalidBaseUrl);
    }

    let scheme = url.scheme();
    let scheme_allowed = allowed_schemes.contains(scheme)
        || allowed_schemes
            .iter()
            .any(|allowed| allowed.borrow().eq_ignore_ascii_case(scheme));
    if !scheme_allowed {
        tracing::debug!("url rejected: scheme {} not allowed", scheme);
        return Err(ValidationError::UnsupportedProtocol);
    }

    if has_rewritten_path(raw) {
        tracing::debug!("url rejected: path relies on dot segments or backslashes");
        return Err(ValidationError::InvalidPathInUrl);
    }

    if url.path() != required_path {
        tracing::debug!(
            "url rejected: path {} does not equal {}",
            url.path(),
            required_path
        );
        return Err(ValidationError::InvalidPathInUrl);
    }

    if url.query().is_some()
        || url.fragment().is_some()
        || !url.username().is_empty()
        || url.password().is_some()
    {
        tracing::debug!("url rejected: carries query, fragment or credentials");
        return Err(ValidationError::UnexpectedInputs);
    }

    Ok(())
}

/// True when the path as written would be rewritten by the parser: dot
/// segments (plain or `%2e`-encoded) or backslash separators.
fn has_rewritten_path(raw: &str) -> bool {
    let end = raw.find(|c: char| c == '?' || c == '#').unwrap_or(raw.len());
    let Some(after_scheme) = raw[..end].split_once(':').map(|(_, rest)| rest) else {
        return false;
    };
    let path = match after_scheme.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find(|c: char| c == '/' || c == '\\')
            .map_or("", |slash| &authority_and_path[slash..]),
        None => after_scheme,
    };

    path.contains('\\')
        || path.split('/').any(|segment| {
            let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
            decoded == "." || decoded == ".."
        })
}

/// Configured scheme allow-set and required path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlPolicy {
    pub allowed_schemes: HashSet<String>,
    pub required_path: String,
}

impl UrlPolicy {
    pub fn new<I, S>(allowed_schemes: I, required_path: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_schemes: allowed_schemes.into_iter().map(Into::into).collect(),
            required_path: required_path.into(),
        }
    }

    /// Validate `raw` against this policy.
    pub fn validate(&self, raw: &str) -> Result<(), ValidationError> {
        validate_url(raw, &self.allowed_schemes, &self.required_path)
    }
}

impl Default for UrlPolicy {
    fn default() -> Self {
        Self::new(["http", "https"], "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web() -> HashSet<&'static str> {
        HashSet::from(["http", "https"])
    }

    #[test]
    fn test_good_urls() {
        for base in [
            "https://google.com",
            "http://good.url.with.port:5566",
            "https://good.url.https.with.port:5566",
        ] {
            let url = format!("{base}/tds/");
            assert_eq!(validate_url(&url, &web(), "/tds/"), Ok(()), "{url}");
        }
    }

    #[test]
    fn test_missing_scheme_is_unsupported_protocol() {
        assert_eq!(
            validate_url("bad.url.without.protocol/tds/", &web(), "/tds/"),
            Err(ValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(
            validate_url("scheme://bad.url.with.wrong.protocol/tds/", &web(), "/tds/"),
            Err(ValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_wrong_path() {
        assert_eq!(
            validate_url("https://bad.url.with.path/tds/path/path/", &web(), "/tds/"),
            Err(ValidationError::InvalidPathInUrl)
        );
    }

    #[test]
    fn test_query_is_unexpected() {
        assert_eq!(
            validate_url("https://bad.url.with.query/tds/?query=haha", &web(), "/tds/"),
            Err(ValidationError::UnexpectedInputs)
        );
    }

    #[test]
    fn test_fragment_and_credentials_are_unexpected() {
        for url in [
            "https://host/tds/#frag",
            "https://user@host/tds/",
            "https://user:pw@host/tds/",
            "https://host/tds/?",
        ] {
            assert_eq!(
                validate_url(url, &web(), "/tds/"),
                Err(ValidationError::UnexpectedInputs),
                "{url}"
            );
        }
    }

    #[test]
    fn test_scheme_checked_before_path() {
        assert_eq!(
            validate_url("ftp://host/wrong/", &web(), "/tds/"),
            Err(ValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_path_checked_before_query() {
        assert_eq!(
            validate_url("https://host/wrong/?q=1", &web(), "/tds/"),
            Err(ValidationError::InvalidPathInUrl)
        );
    }

    #[test]
    fn test_unparseable_base() {
        assert_eq!(
            validate_url("https://host:99999/tds/", &web(), "/tds/"),
            Err(ValidationError::InvalidBaseUrl)
        );
        assert_eq!(
            validate_url("https://", &web(), "/tds/"),
            Err(ValidationError::InvalidBaseUrl)
        );
        assert_eq!(
            validate_url("mailto:someone", &HashSet::from(["mailto"]), "/"),
            Err(ValidationError::InvalidBaseUrl)
        );
    }

    #[test]
    fn test_control_characters_and_padding_rejected() {
        for url in [
            "https://ho\nst/tds/",
            "https://host/t\tds/",
            " https://host/tds/\r\n",
            "https://host/tds/ ",
            "https://host/\u{0}tds/",
        ] {
            assert_eq!(
                validate_url(url, &web(), "/tds/"),
                Err(ValidationError::InvalidBaseUrl),
                "{url:?}"
            );
        }
    }

    #[test]
    fn test_dot_segments_are_not_normalised_away() {
        for url in [
            "https://host/evil/../tds/",
            "https://host/tds/%2e%2e/tds/",
            "https://host/tds/%2E/",
            "https://host/./tds/",
            "https://host/x/.%2e/tds/",
        ] {
            assert_eq!(
                validate_url(url, &web(), "/tds/"),
                Err(ValidationError::InvalidPathInUrl),
                "{url}"
            );
        }
    }

    #[test]
    fn test_backslash_separators_rejected() {
        assert_eq!(
            validate_url("https://host\\tds\\", &web(), "/tds/"),
            Err(ValidationError::InvalidPathInUrl)
        );
    }

    #[test]
    fn test_dots_inside_names_are_fine() {
        assert_eq!(
            validate_url("https://good.url.https.with.port:5566/v1.2/", &web(), "/v1.2/"),
            Ok(())
        );
        assert_eq!(
            validate_url("https://host/tds/?q=../x", &web(), "/tds/"),
            Err(ValidationError::UnexpectedInputs)
        );
    }

    #[test]
    fn test_empty_host_rejected() {
        assert_eq!(
            validate_url("file:///tds/", &HashSet::from(["file"]), "/tds/"),
            Err(ValidationError::InvalidBaseUrl)
        );
    }

    #[test]
    fn test_scheme_case_is_normalised() {
        assert_eq!(validate_url("HTTPS://host/tds/", &web(), "/tds/"), Ok(()));
        assert_eq!(
            validate_url("https://host/tds/", &HashSet::from(["HTTPS"]), "/tds/"),
            Ok(())
        );
    }

    #[test]
    fn test_scheme_is_not_prefix_matched() {
        assert_eq!(
            validate_url("httpsx://host/tds/", &web(), "/tds/"),
            Err(ValidationError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_url("http://host/tds/", &HashSet::from(["https"]), "/tds/"),
            Err(ValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_root_path_default() {
        let policy = UrlPolicy::default();
        assert_eq!(policy.validate("https://google.com"), Ok(()));
        assert_eq!(
            policy.validate("https://google.com/x"),
            Err(ValidationError::InvalidPathInUrl)
        );
    }

    #[test]
    fn test_policy_with_owned_schemes() {
        let policy = UrlPolicy::new(vec!["https".to_string()], "/tds/");
        assert_eq!(policy.validate("https://host/tds/"), Ok(()));
        assert_eq!(
            policy.validate("http://host/tds/"),
            Err(ValidationError::UnsupportedProtocol)
        );
    }
}
