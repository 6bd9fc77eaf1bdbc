// crates/marker_region/src/region.rs

use std::fmt;
use std::ops::Range;

use crate::error::{MarkerError, MarkerKind};

/// A slice of a buffer bounded by a start marker (inclusive) and an end
/// marker (exclusive). Offsets are byte offsets into the original buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    buffer: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Region<'a> {
    /// The region's text. Always begins with the start marker.
    pub fn as_str(&self) -> &'a str {
        &self.buffer[self.start..self.end]
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Text before the region.
    pub fn prefix(&self) -> &'a str {
        &self.buffer[..self.start]
    }

    /// Text after the region, starting with the end marker.
    pub fn suffix(&self) -> &'a str {
        &self.buffer[self.end..]
    }

    /// Rebuilds the buffer with the region swapped for `replacement`.
    pub fn splice(&self, replacement: &str) -> String {
        let prefix = self.prefix();
        let suffix = self.suffix();
        let mut out = String::with_capacity(prefix.len() + replacement.len() + suffix.len());
        out.push_str(prefix);
        out.push_str(replacement);
        out.push_str(suffix);
        out
    }
}

impl fmt::Display for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finds the region of `buffer` that starts at the first occurrence of
/// `start_marker` and runs up to (not including) the first occurrence of
/// `end_marker` found at or after that point.
///
/// An end marker that only occurs before the start marker does not count.
pub fn extract_region<'a>(
    buffer: &'a str,
    start_marker: &str,
    end_marker: &str,
) -> Result<Region<'a>, MarkerError> {
    if start_marker.is_empty() {
        return Err(MarkerError::EmptyMarker(MarkerKind::Start));
    }
    if end_marker.is_empty() {
        return Err(MarkerError::EmptyMarker(MarkerKind::End));
    }

    let start = buffer
        .find(start_marker)
        .ok_or_else(|| MarkerError::StartMarkerNotFound(start_marker.to_string()))?;
    let end = buffer[start..]
        .find(end_marker)
        .map(|offset| start + offset)
        .ok_or_else(|| MarkerError::EndMarkerNotFound(end_marker.to_string()))?;

    Ok(Region { buffer, start, end })
}

/// Returns `prefix + replacement + suffix` for a region of `buffer`.
///
/// # Panics
///
/// Panics if `region` was not extracted from `buffer` (its offsets fall
/// outside the buffer or off a char boundary).
pub fn splice_region(buffer: &str, region: &Region<'_>, replacement: &str) -> String {
    let mut out = String::with_capacity(buffer.len() - region.len() + replacement.len());
    out.push_str(&buffer[..region.start]);
    out.push_str(replacement);
    out.push_str(&buffer[region.end..]);
    out
}

/// Extracts the region bounded by the two markers and swaps it for
/// `replacement`. The replacement is inserted verbatim.
pub fn replace_region(
    buffer: &str,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<String, MarkerError> {
    let region = extract_region(buffer, start_marker, end_marker)?;
    Ok(region.splice(replacement))
}
