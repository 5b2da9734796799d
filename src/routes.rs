// Route path constants - single source of truth for all API paths

use anyhow::{bail, Result};
use std::fmt;

pub const TEST: &str = "/api/public/v1/test";

/// Path prefix prepended to every route of a server instance
///
/// Either empty or a path like `/app`: leading slash, no trailing slash,
/// no empty segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePrefix(String);

impl RoutePrefix {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(RoutePrefix::default());
        }
        if !raw.starts_with('/') {
            bail!("route prefix must start with '/', got '{}'", raw);
        }
        if raw.ends_with('/') {
            bail!("route prefix must not end with '/', got '{}'", raw);
        }
        if raw[1..].split('/').any(str::is_empty) {
            bail!("route prefix must not contain empty segments, got '{}'", raw);
        }
        Ok(RoutePrefix(raw.to_string()))
    }

    /// Prefix a route constant, e.g. `/app` + `/api/public/v1/test`
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl fmt::Display for RoutePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prefix() {
        let prefix = RoutePrefix::parse("").unwrap();
        assert_eq!(prefix, RoutePrefix::default());
        assert_eq!(prefix.join(TEST), "/api/public/v1/test");
    }

    #[test]
    fn test_app_prefix() {
        let prefix = RoutePrefix::parse("/app").unwrap();
        assert_eq!(prefix.join(TEST), "/app/api/public/v1/test");
    }

    #[test]
    fn test_nested_prefix() {
        let prefix = RoutePrefix::parse("/mock/app").unwrap();
        assert_eq!(prefix.join(TEST), "/mock/app/api/public/v1/test");
    }

    #[test]
    fn test_invalid_prefixes() {
        for raw in ["app", "/app/", "/", "//app", "/a//b"] {
            let result = RoutePrefix::parse(raw);
            assert!(result.is_err(), "expected '{}' to be rejected", raw);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RoutePrefix::default().to_string(), "(none)");
        assert_eq!(RoutePrefix::parse("/app").unwrap().to_string(), "/app");
    }
}
