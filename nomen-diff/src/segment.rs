//! Segments of a plural form and the run builder that produces them.

use core::ops::Range;

/// A contiguous piece of the plural form, tagged changed or unchanged.
///
/// The text borrows from the plural that was aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    text: &'a str,
    changed: bool,
}

impl<'a> Segment<'a> {
    /// A piece shared with the singular form.
    pub const fn unchanged(text: &'a str) -> Self {
        Self {
            text,
            changed: false,
        }
    }

    /// A piece that differs from the singular form.
    pub const fn changed(text: &'a str) -> Self {
        Self {
            text,
            changed: true,
        }
    }

    /// The covered substring of the plural.
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Whether this piece differs from the singular.
    pub const fn is_changed(&self) -> bool {
        self.changed
    }
}

/// Collects byte ranges of a source string into merged runs.
///
/// Ranges are pushed in order and must be contiguous. Empty ranges are
/// dropped and a range with the same flag as the previous run extends it,
/// so no two neighbouring runs ever share a flag.
pub(crate) struct Runs<'a> {
    source: &'a str,
    runs: Vec<(Range<usize>, bool)>,
}

impl<'a> Runs<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            runs: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, range: Range<usize>, changed: bool) {
        if range.is_empty() {
            return;
        }
        if let Some((last, last_changed)) = self.runs.last_mut()
            && *last_changed == changed
        {
            debug_assert_eq!(last.end, range.start);
            last.end = range.end;
            return;
        }
        self.runs.push((range, changed));
    }

    pub(crate) fn finish(self) -> Vec<Segment<'a>> {
        let source = self.source;
        self.runs
            .into_iter()
            .map(|(range, changed)| Segment {
                text: &source[range],
                changed,
            })
            .collect()
    }
}
