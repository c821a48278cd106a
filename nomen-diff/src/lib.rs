//! Character alignment between the singular and plural form of a noun.
//!
//! The plural is cut into [`Segment`]s that are either shared with the
//! singular or changed relative to it, so that only the changed letters
//! need highlighting:
//!
//! ```
//! use nomen_diff::{Segment, align};
//!
//! assert_eq!(
//!     align("Bruder", "Brüder"),
//!     [
//!         Segment::unchanged("Br"),
//!         Segment::changed("ü"),
//!         Segment::unchanged("der"),
//!     ]
//! );
//! ```
//!
//! # Algorithm
//!
//! Both words are walked left to right, one Unicode scalar value at a time.
//! Equal characters are kept. On a mismatch the walk looks for the nearest
//! resynchronization point: the earliest plural position whose character
//! also occurs at or after the current singular position (earliest such
//! singular position on ties). Everything skipped in the plural is marked
//! changed. If no such point exists the rest of the plural is changed.
//!
//! The walk is total: it never fails and handles length mismatches in both
//! directions. Letters dropped from the singular leave no trace in the
//! plural segmentation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod tracing_macros;

mod align;
mod segment;

pub use align::{WordPair, align, changed_parts};
pub use segment::Segment;
