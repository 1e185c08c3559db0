use crate::dependency_audit::domain::PackagePath;

/// PackageClassification policy for telling standard, extended-standard,
/// internal, and third-party packages apart
///
/// Rules:
/// 1. A path whose text has no `.` belongs to the standard library.
/// 2. `golang.org/x` packages are treated as standard too, for risk markers.
/// 3. Internal packages are implementation details of the Go distribution and
///    are hidden from the snapshot unless explicitly requested.
pub struct PackageClassification;

/// Importing this package means the importer touches raw memory
pub const UNSAFE_PACKAGE: &str = "unsafe";

/// Importing this package means the importer crosses into C through cgo
pub const CGO_PACKAGE: &str = "runtime/cgo";

const EXTENDED_STANDARD_MARKER: &str = "golang.org/x";

/// Sorting uses the slash-terminated form of the extended standard prefix
const EXTENDED_STANDARD_PREFIX: &str = "golang.org/x/";

const ALWAYS_INTERNAL: [&str; 3] = ["runtime", CGO_PACKAGE, UNSAFE_PACKAGE];

impl PackageClassification {
    /// Whether the path names something outside the standard library tree,
    /// i.e. its text contains a domain-style `.`
    pub fn has_namespace_separator(pkg: &PackagePath) -> bool {
        pkg.as_str().contains('.')
    }

    /// Standard library or `golang.org/x`; risk markers are never shown for these
    pub fn is_standard(pkg: &PackagePath) -> bool {
        !Self::has_namespace_separator(pkg) || pkg.as_str().contains(EXTENDED_STANDARD_MARKER)
    }

    /// Extended standard packages sort ahead of other third-party packages
    pub fn is_extended_standard(pkg: &PackagePath) -> bool {
        pkg.as_str().contains(EXTENDED_STANDARD_PREFIX)
    }

    pub fn is_internal(pkg: &PackagePath) -> bool {
        let path = pkg.as_str();
        path.starts_with("internal/")
            || path.starts_with("runtime/internal/")
            || ALWAYS_INTERNAL.contains(&path)
            || (path.contains("/internal/") && Self::is_standard(pkg))
    }

    pub fn is_unsafe_marker(pkg: &PackagePath) -> bool {
        pkg.as_str() == UNSAFE_PACKAGE
    }

    pub fn is_cgo_marker(pkg: &PackagePath) -> bool {
        pkg.as_str() == CGO_PACKAGE
    }
}
