//! Error types for decoding and decorating noun entries.

use core::fmt;

/// Result type defaulting to [`NomenError`].
pub type Result<T, E = NomenError> = core::result::Result<T, E>;

/// Error raised while turning an entry into markup.
///
/// These are validation failures on the input text; retrying won't help.
/// The offending text is carried along for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NomenError {
    kind: NomenErrorKind,
}

impl NomenError {
    /// Create a new error with the given kind.
    pub const fn new(kind: NomenErrorKind) -> Self {
        Self { kind }
    }

    /// Get the error kind.
    pub const fn kind(&self) -> &NomenErrorKind {
        &self.kind
    }

    pub(crate) fn malformed_form(text: &str) -> Self {
        Self::new(NomenErrorKind::MalformedForm {
            text: text.to_owned(),
        })
    }

    pub(crate) fn unknown_article(article: &str, text: &str) -> Self {
        Self::new(NomenErrorKind::UnknownArticle {
            article: article.to_owned(),
            text: text.to_owned(),
        })
    }

    pub(crate) fn invalid_plural_article(article: &str, text: &str) -> Self {
        Self::new(NomenErrorKind::InvalidPluralArticle {
            article: article.to_owned(),
            text: text.to_owned(),
        })
    }
}

impl fmt::Display for NomenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NomenErrorKind::MalformedForm { text } => {
                write!(f, "malformed form {text:?}: expected an article and a noun")
            }
            NomenErrorKind::UnknownArticle { article, text } => {
                write!(f, "unknown article {article:?} in {text:?}")
            }
            NomenErrorKind::InvalidPluralArticle { article, text } => {
                write!(f, "plural article must be \"die\", found {article:?} in {text:?}")
            }
            NomenErrorKind::TooFewFields {
                expected,
                got,
                line,
            } => {
                write!(f, "too few fields: expected {expected}, got {got} in {line:?}")
            }
        }
    }
}

impl core::error::Error for NomenError {}

impl From<NomenErrorKind> for NomenError {
    fn from(kind: NomenErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Specific kinds of entry errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NomenErrorKind {
    /// The text is neither the sentinel `-` nor an article followed by a noun.
    MalformedForm {
        /// The trimmed form text.
        text: String,
    },
    /// The singular article is not one of `der`, `die`, `das`.
    UnknownArticle {
        /// The article that was found.
        article: String,
        /// The trimmed form text.
        text: String,
    },
    /// The plural article is not `die`.
    InvalidPluralArticle {
        /// The article that was found.
        article: String,
        /// The trimmed form text.
        text: String,
    },
    /// A record line has fewer fields than an entry needs.
    TooFewFields {
        /// Number of fields an entry needs.
        expected: usize,
        /// Number of fields in the line.
        got: usize,
        /// The offending line.
        line: String,
    },
}
