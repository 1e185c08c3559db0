use super::PackagePath;
use std::collections::HashMap;

const ATTRIBUTION_KEYWORD: &str = "from";

/// Attributions recorded in a previous snapshot, used to keep the same
/// explanation for a dependency across runs
///
/// Given the lines
///
/// ```text
///          encoding                 from encoding/json
///          encoding/binary          from encoding/base64+
/// ```
///
/// the hints are `encoding -> encoding/json` and `encoding/binary -> encoding/base64`.
/// When a new, lexicographically smaller importer appears, the recorded one
/// is still preferred, which keeps unrelated lines out of the diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferredWhy {
    by_dependency: HashMap<PackagePath, PackagePath>,
}

impl PreferredWhy {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scans snapshot text for attribution hints.
    ///
    /// Best effort only: lines that don't look like dependency lines are skipped,
    /// and invalid UTF-8 is replaced rather than rejected.
    pub fn parse(snapshot: &[u8]) -> Self {
        let text = String::from_utf8_lossy(snapshot);
        let mut by_dependency = HashMap::new();

        for line in text.lines() {
            let words: Vec<&str> = line.split_whitespace().collect();
            let Some(i) = words.iter().position(|w| *w == ATTRIBUTION_KEYWORD) else {
                continue;
            };
            if i < 1 || i + 1 >= words.len() {
                continue;
            }
            let dependency = words[i - 1];
            let source = words[i + 1].trim_end_matches('+');
            by_dependency.insert(PackagePath::new(dependency), PackagePath::new(source));
        }

        Self { by_dependency }
    }

    pub fn get(&self, dependency: &PackagePath) -> Option<&PackagePath> {
        self.by_dependency
            .get(dependency)
            .filter(|source| !source.as_str().is_empty())
    }

    pub fn len(&self) -> usize {
        self.by_dependency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_dependency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(why: &PreferredWhy, dep: &str) -> Option<String> {
        why.get(&PackagePath::from(dep)).map(ToString::to_string)
    }

    #[test]
    fn test_parse_snapshot_lines() {
        let snapshot = b"example.com/cmd/app dependencies: (generated by github.com/tailscale/depaware)\n\
\n\
         encoding                 from encoding/json\n\
         encoding/binary          from encoding/base64+\n";
        let why = PreferredWhy::parse(snapshot);

        assert_eq!(why.len(), 2);
        assert_eq!(hint(&why, "encoding").as_deref(), Some("encoding/json"));
        assert_eq!(hint(&why, "encoding/binary").as_deref(), Some("encoding/base64"));
    }

    #[test]
    fn test_parse_with_markers_and_flags() {
        let snapshot = b"  LD  C github.com/mattn/go-sqlite3     from example.com/store+\n";
        let why = PreferredWhy::parse(snapshot);

        assert_eq!(
            hint(&why, "github.com/mattn/go-sqlite3").as_deref(),
            Some("example.com/store")
        );
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let snapshot = b"from\nfrom nowhere\ntrailing from\n\n   \nno keyword here\n";
        let why = PreferredWhy::parse(snapshot);
        assert!(why.is_empty());
    }

    #[test]
    fn test_parse_ignores_lines_without_attribution() {
        let snapshot = b"         bufio                                                        \n";
        assert!(PreferredWhy::parse(snapshot).is_empty());
    }

    #[test]
    fn test_parse_tolerates_invalid_utf8() {
        let mut snapshot = b"  fmt from os\n".to_vec();
        snapshot.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let why = PreferredWhy::parse(&snapshot);
        assert_eq!(hint(&why, "fmt").as_deref(), Some("os"));
    }

    #[test]
    fn test_plus_only_source_is_not_a_hint() {
        let why = PreferredWhy::parse(b"  fmt from +\n");
        assert_eq!(hint(&why, "fmt"), None);
    }
}
