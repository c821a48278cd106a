//! The greedy resynchronizing walk.

use crate::segment::{Runs, Segment};
use crate::tracing_macros::trace;

/// A singular and a plural noun body, articles already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPair<'s, 'p> {
    /// The singular body, e.g. `Apfel`.
    pub singular: &'s str,
    /// The plural body, e.g. `Äpfel`.
    pub plural: &'p str,
}

impl<'s, 'p> WordPair<'s, 'p> {
    /// Pair up two noun bodies.
    pub const fn new(singular: &'s str, plural: &'p str) -> Self {
        Self { singular, plural }
    }

    /// Segment the plural against the singular. See [`align`].
    pub fn align(&self) -> Vec<Segment<'p>> {
        align(self.singular, self.plural)
    }
}

/// Segment `plural` into changed and unchanged pieces relative to `singular`.
///
/// The segments concatenate back to `plural`, none of them is empty, and no
/// two neighbours share the same flag. An empty plural gives no segments;
/// identical words give a single unchanged segment.
///
/// The sentinel `-` ("form does not exist") gets no special treatment here.
pub fn align<'a>(singular: &str, plural: &'a str) -> Vec<Segment<'a>> {
    if plural.is_empty() {
        return Vec::new();
    }
    if singular == plural {
        return vec![Segment::unchanged(plural)];
    }

    let sg: Vec<char> = singular.chars().collect();
    let pl: Vec<(usize, char)> = plural.char_indices().collect();
    // byte offset of the j-th scalar, or the end of the string
    let offset = |j: usize| pl.get(j).map_or(plural.len(), |&(o, _)| o);

    let mut runs = Runs::new(plural);
    let (mut i, mut j) = (0, 0);

    while j < pl.len() {
        if sg.get(i) == Some(&pl[j].1) {
            runs.push(offset(j)..offset(j + 1), false);
            i += 1;
            j += 1;
            continue;
        }

        match resync(&sg[i..], &pl[j..]) {
            Some((di, dj)) => {
                trace!(
                    singular_at = i + di,
                    plural_at = j + dj,
                    "resynchronized on {:?}",
                    pl[j + dj].1
                );
                runs.push(offset(j)..offset(j + dj), true);
                i += di;
                j += dj;
            }
            None => {
                trace!(plural_at = j, "no common character left");
                runs.push(offset(j)..plural.len(), true);
                break;
            }
        }
    }

    let segments = runs.finish();
    trace!(singular, plural, count = segments.len(), "aligned");
    segments
}

/// Nearest pair of equal characters, as `(singular offset, plural offset)`.
///
/// Minimizes the plural offset first, then the singular offset.
fn resync(singular: &[char], plural: &[(usize, char)]) -> Option<(usize, usize)> {
    plural.iter().enumerate().find_map(|(dj, &(_, c))| {
        singular
            .iter()
            .position(|&s| s == c)
            .map(|di| (di, dj))
    })
}

/// Just the changed pieces of `plural`, in order.
///
/// ```
/// assert_eq!(nomen_diff::changed_parts("Mann", "Männer"), ["ä", "er"]);
/// assert!(nomen_diff::changed_parts("Onkel", "Onkel").is_empty());
/// ```
pub fn changed_parts<'a>(singular: &str, plural: &'a str) -> Vec<&'a str> {
    align(singular, plural)
        .into_iter()
        .filter(Segment::is_changed)
        .map(|s| s.as_str())
        .collect()
}
