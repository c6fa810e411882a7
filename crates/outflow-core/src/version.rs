//! Version string decomposition.

/// The first three segments of a version string.
///
/// Segments are raw strings, not validated or coerced to numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTriple {
    /// First segment.
    pub major: String,

    /// Second segment, empty if absent.
    pub minor: String,

    /// Third segment, empty if absent.
    pub patch: String,
}

impl VersionTriple {
    /// Splits a version string on `.`, `-` and whitespace, keeping the
    /// first three segments.
    ///
    /// `"3.4.5-rc.1"` yields `("3", "4", "5")`; anything past the third
    /// segment is dropped.
    #[must_use]
    pub fn parse(version: &str) -> Self {
        let mut segments =
            version.split(|c: char| c == '.' || c == '-' || c.is_whitespace());

        Self {
            major: segments.next().unwrap_or_default().to_string(),
            minor: segments.next().unwrap_or_default().to_string(),
            patch: segments.next().unwrap_or_default().to_string(),
        }
    }
}
