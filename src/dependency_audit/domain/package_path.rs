use std::borrow::Borrow;
use std::fmt;

/// Import path of a Go package, as it appears in the snapshot.
///
/// Paths are opaque: nothing is validated, since the loader is the authority
/// on what a valid import path looks like. Ordering is plain byte order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackagePath(String);

impl PackagePath {
    /// Wraps a path verbatim.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Wraps a path after stripping any vendor directory prefix, so that
    /// `example.com/app/vendor/golang.org/x/sys/unix` and
    /// `golang.org/x/sys/unix` name the same dependency.
    pub fn canonical(path: &str) -> Self {
        Self(vendorless(path).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn vendorless(path: &str) -> &str {
    const VENDOR_SEGMENT: &str = "/vendor/";
    if let Some(i) = path.rfind(VENDOR_SEGMENT) {
        return &path[i + VENDOR_SEGMENT.len()..];
    }
    path.strip_prefix("vendor/").unwrap_or(path)
}

impl fmt::Display for PackagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PackagePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PackagePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_strips_nested_vendor() {
        let path = PackagePath::canonical("example.com/app/vendor/golang.org/x/sys/unix");
        assert_eq!(path.as_str(), "golang.org/x/sys/unix");
    }

    #[test]
    fn test_canonical_strips_leading_vendor() {
        let path = PackagePath::canonical("vendor/golang.org/x/net/dns/dnsmessage");
        assert_eq!(path.as_str(), "golang.org/x/net/dns/dnsmessage");
    }

    #[test]
    fn test_canonical_uses_last_vendor_segment() {
        let path = PackagePath::canonical("a.com/vendor/b.com/vendor/c.com/d");
        assert_eq!(path.as_str(), "c.com/d");
    }

    #[test]
    fn test_canonical_keeps_plain_path() {
        assert_eq!(PackagePath::canonical("encoding/json").as_str(), "encoding/json");
        assert_eq!(PackagePath::canonical("vendorless/pkg").as_str(), "vendorless/pkg");
    }

    #[test]
    fn test_ordering_is_bytewise() {
        let mut paths = vec![
            PackagePath::from("encoding/json"),
            PackagePath::from("encoding"),
            PackagePath::from("Zebra"),
        ];
        paths.sort();
        let sorted: Vec<&str> = paths.iter().map(PackagePath::as_str).collect();
        assert_eq!(sorted, vec!["Zebra", "encoding", "encoding/json"]);
    }
}
