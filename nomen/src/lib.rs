//! Flashcard markup for German nouns.
//!
//! Each noun entry renders its singular and plural form as HTML. Singular
//! bodies are colored by grammatical gender; in the plural only the letters
//! that changed relative to the singular are highlighted:
//!
//! ```
//! use nomen::Decorator;
//!
//! let (singular, plural) = Decorator::default().decorate("der Apfel", "die Äpfel")?;
//! assert_eq!(singular.text_content(), "sg der Apfel");
//! assert!(plural.to_html().ends_with(
//!     r#"die <span style="color: rgb(255, 140, 0);">Ä</span>pfel</span>"#
//! ));
//! # Ok::<(), nomen::NomenError>(())
//! ```
//!
//! Whole deck lines (`noun;plural;translation;sentence;tag`) go through
//! [`Record`] and [`Card`], or [`Decorator::render_deck`] for many at once.
//!
//! Output is not HTML-escaped; see [`nomen_markup`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod tracing_macros;

mod card;
mod decorate;
mod error;
mod form;
mod palette;

pub use card::{Card, Record, non_blank_lines};
pub use decorate::{Decorator, Number};
pub use error::{NomenError, NomenErrorKind, Result};
pub use form::{Article, Form, ParseArticleError, SENTINEL};
pub use palette::{Palette, Tone, style_for};

// Re-export for convenience
pub use nomen_diff::{Segment, WordPair, align, changed_parts};
pub use nomen_markup::{Element, Node, render};
