use crate::dependency_audit::domain::PackagePath;
use std::fmt;

/// The chosen "introduced by" explanation for one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub chosen: PackagePath,
    /// More than one importer could have been named
    pub has_more: bool,
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {}", self.chosen)?;
        if self.has_more {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// AttributionResolver service picking a single importer to explain a dependency
///
/// Pure logic: the caller supplies the candidate importers (already restricted to
/// the root's own graph) and the hint from the previous snapshot.
pub struct AttributionResolver;

impl AttributionResolver {
    /// Picks the previous snapshot's choice if it is still a candidate, else the
    /// lexicographically smallest candidate. No candidates means no attribution.
    pub fn attribute(
        candidates: &[&PackagePath],
        previous_hint: Option<&PackagePath>,
    ) -> Option<Attribution> {
        let preferred = previous_hint
            .filter(|hint| !hint.as_str().is_empty())
            .and_then(|hint| candidates.iter().find(|c| **c == hint));

        let chosen = preferred.or_else(|| candidates.iter().min())?;

        Some(Attribution {
            chosen: (*chosen).clone(),
            has_more: candidates.len() > 1,
        })
    }
}
