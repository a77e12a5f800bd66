use std::ops::Range;

use memchr::memmem;

/// The start/end delimiter pair bounding a region of a document.
///
/// Both markers are part of the region: a region spans from the first byte of
/// `start` to the last byte of `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl Markers<'static> {
    /// The container a page delegates to the shared navigation sidebar.
    pub const SIDEBAR: Markers<'static> = Markers {
        start: "<aside class=\"sidebar\">",
        end: "</aside>",
    };
}

impl<'a> Markers<'a> {
    pub const fn new(start: &'a str, end: &'a str) -> Self {
        Markers { start, end }
    }

    /// Finds the first region in `text`.
    ///
    /// The end marker is searched for only after the first start marker, and
    /// the nearest one wins. Later regions, including any nested inside the
    /// first, are never considered. Returns `None` if either marker is absent.
    ///
    /// ```
    /// use sidenav::region::Markers;
    ///
    /// let markers = Markers::new("<x>", "</x>");
    /// assert_eq!(markers.find("a <x>b</x> <x>c</x>"), Some(2..10));
    /// assert_eq!(markers.find("a </x> <x>b"), None);
    /// ```
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        let start = memmem::find(text.as_bytes(), self.start.as_bytes())?;
        let body = start + self.start.len();
        let end = memmem::find(&text.as_bytes()[body..], self.end.as_bytes())?;
        Some(start..(body + end + self.end.len()))
    }

    /// Replaces the first region in `text` with `replacement`, exactly once.
    ///
    /// Returns `None`, leaving `text` alone, if `text` has no region.
    pub fn splice(&self, text: &str, replacement: &str) -> Option<String> {
        let region = self.find(text)?;
        let mut output = text.to_string();
        output.replace_range(region, replacement);
        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::Markers;

    const PAGE: &str = "<body>\n  <aside class=\"sidebar\">\n    OLD\n  </aside>\n  <main></main>\n</body>";

    #[test]
    fn finds_the_sidebar_across_lines() {
        let region = Markers::SIDEBAR.find(PAGE).unwrap();
        assert_eq!(&PAGE[region], "<aside class=\"sidebar\">\n    OLD\n  </aside>");
    }

    #[test]
    fn splice_replaces_only_the_region() {
        let spliced = Markers::SIDEBAR.splice(PAGE, "NEW").unwrap();
        assert_eq!(spliced, "<body>\n  NEW\n  <main></main>\n</body>");
    }

    #[test]
    fn missing_markers() {
        let markers = Markers::new("<x>", "</x>");
        assert_eq!(markers.find(""), None);
        assert_eq!(markers.find("no markers here"), None);
        assert_eq!(markers.find("<x> never closed"), None);
        assert_eq!(markers.find("</x> closed before <x>"), None);
        assert_eq!(markers.splice("<x> never closed", "NEW"), None);
    }

    #[test]
    fn end_marker_must_follow_the_start_marker() {
        let markers = Markers::new("<x>", "</x>");
        assert_eq!(markers.find("</x><x>a</x>"), Some(4..12));
    }

    #[test]
    fn only_the_first_region_is_replaced() {
        let markers = Markers::new("<x>", "</x>");
        let text = "<x>1</x> <x>2</x>";
        assert_eq!(markers.splice(text, "[]").unwrap(), "[] <x>2</x>");

        // Nested start markers are swallowed by the first, nearest match.
        let nested = "<x>a<x>b</x>c</x>";
        assert_eq!(markers.find(nested), Some(0..12));
        assert_eq!(markers.splice(nested, "[]").unwrap(), "[]c</x>");
    }

    #[test]
    fn markers_are_not_shared_with_the_end() {
        // The end marker may not overlap the start marker.
        let markers = Markers::new("<a></a>", "</a>");
        assert_eq!(markers.find("<a></a>"), None);
        assert_eq!(markers.find("<a></a></a>"), Some(0..11));
    }
}
