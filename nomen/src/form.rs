//! Article-tagged noun forms such as `der Apfel` or `-`.

use core::fmt;
use core::str::FromStr;

use crate::error::{NomenError, Result};
use crate::palette::Tone;

/// Marker for a grammatical form that does not exist.
pub const SENTINEL: &str = "-";

/// A German definite article in the nominative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Article {
    /// `der`
    Der,
    /// `die`
    Die,
    /// `das`
    Das,
}

impl Article {
    /// The article as written.
    pub const fn as_str(self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }

    /// Gender tone of a singular noun carrying this article.
    pub const fn tone(self) -> Tone {
        match self {
            Article::Der => Tone::Masculine,
            Article::Die => Tone::Feminine,
            Article::Das => Tone::Neuter,
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised article word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseArticleError;

impl fmt::Display for ParseArticleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `der`, `die`, `das`")
    }
}

impl core::error::Error for ParseArticleError {}

impl FromStr for Article {
    type Err = ParseArticleError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "der" => Ok(Article::Der),
            "die" => Ok(Article::Die),
            "das" => Ok(Article::Das),
            _ => Err(ParseArticleError),
        }
    }
}

/// One form of a noun, split into article and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form<'a> {
    /// The sentinel `-`.
    Missing,
    /// An article followed by the noun body.
    Present {
        /// Everything before the first whitespace run.
        article: &'a str,
        /// Everything after it.
        body: &'a str,
    },
}

impl<'a> Form<'a> {
    /// Split `text` on its first whitespace run.
    ///
    /// Surrounding whitespace is ignored. Text that is not `-` and has no
    /// second token is a [`MalformedForm`](crate::NomenErrorKind::MalformedForm).
    /// The article is not checked here.
    pub fn parse(text: &'a str) -> Result<Self> {
        let text = text.trim();
        if text == SENTINEL {
            return Ok(Form::Missing);
        }
        // `text` ends in non-whitespace, so a split always leaves a body
        let (article, body) = text
            .split_once(char::is_whitespace)
            .ok_or_else(|| NomenError::malformed_form(text))?;
        Ok(Form::Present {
            article,
            body: body.trim_start(),
        })
    }

    /// The noun body, or `-` for a missing form.
    pub fn body(&self) -> &'a str {
        match *self {
            Form::Missing => SENTINEL,
            Form::Present { body, .. } => body,
        }
    }

    /// Whether this is the sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, Form::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NomenErrorKind;

    #[test]
    fn parse_article_and_body() {
        assert_eq!(
            Form::parse("der Apfel").unwrap(),
            Form::Present {
                article: "der",
                body: "Apfel"
            }
        );
        assert_eq!(
            Form::parse("  die \t Äpfel \n").unwrap(),
            Form::Present {
                article: "die",
                body: "Äpfel"
            }
        );
    }

    #[test]
    fn body_keeps_inner_spaces() {
        assert_eq!(Form::parse("das kleine Haus").unwrap().body(), "kleine Haus");
    }

    #[test]
    fn sentinel() {
        assert_eq!(Form::parse(" - ").unwrap(), Form::Missing);
        assert_eq!(Form::Missing.body(), "-");
        assert!(Form::Missing.is_missing());
    }

    #[test]
    fn single_token_is_malformed() {
        for text in ["Apfel", "", "   ", "--"] {
            let err = Form::parse(text).unwrap_err();
            assert_eq!(
                err.kind(),
                &NomenErrorKind::MalformedForm {
                    text: text.trim().to_owned()
                }
            );
        }
    }

    #[test]
    fn articles() {
        assert_eq!("der".parse(), Ok(Article::Der));
        assert_eq!("die".parse(), Ok(Article::Die));
        assert_eq!("das".parse(), Ok(Article::Das));
        assert_eq!("Der".parse::<Article>(), Err(ParseArticleError));
        assert_eq!("dem".parse::<Article>(), Err(ParseArticleError));
        assert_eq!(Article::Das.tone(), Tone::Neuter);
        assert_eq!(Article::Der.to_string(), "der");
    }
}
