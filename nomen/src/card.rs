//! Semicolon-delimited vocabulary records and the cards rendered from them.

use nomen_markup::Node;

use crate::decorate::Decorator;
use crate::error::{NomenErrorKind, Result};
use crate::tracing_macros::debug;

/// The five fields of a vocabulary line:
/// `noun;plural;translation;sentence;tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Singular form, e.g. `der Apfel` or `-`.
    pub noun: &'a str,
    /// Plural form, e.g. `die Äpfel` or `-`.
    pub plural: &'a str,
    /// Translation, trimmed.
    pub translation: &'a str,
    /// Example sentence, trimmed.
    pub sentence: &'a str,
    /// Tag, trimmed.
    pub tag: &'a str,
}

impl<'a> Record<'a> {
    /// Number of fields a line must have.
    pub const FIELDS: usize = 5;

    /// Split a line on `;`.
    ///
    /// Fields past the fifth are ignored. The two noun forms are left as they
    /// are; form parsing trims them.
    pub fn parse(line: &'a str) -> Result<Self> {
        let fields: Vec<&str> = line.split(';').collect();
        let &[noun, plural, translation, sentence, tag, ..] = fields.as_slice() else {
            return Err(NomenErrorKind::TooFewFields {
                expected: Self::FIELDS,
                got: fields.len(),
                line: line.to_owned(),
            }
            .into());
        };
        Ok(Self {
            noun,
            plural,
            translation: translation.trim(),
            sentence: sentence.trim(),
            tag: tag.trim(),
        })
    }
}

/// Markup for every field of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Decorated singular form.
    pub singular: Node,
    /// Decorated plural form.
    pub plural: Node,
    /// Translation as plain text.
    pub translation: Node,
    /// Example sentence as plain text.
    pub sentence: Node,
    /// Tag as plain text.
    pub tag: Node,
}

impl Card {
    /// Each field serialized to HTML, in record order.
    pub fn fields_html(&self) -> [String; 5] {
        [
            self.singular.to_html(),
            self.plural.to_html(),
            self.translation.to_html(),
            self.sentence.to_html(),
            self.tag.to_html(),
        ]
    }

    /// The card as one deck line, fields joined by `;`.
    pub fn to_line(&self) -> String {
        self.fields_html().join(";")
    }
}

/// Lines of a deck text that contain more than whitespace.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

impl Decorator {
    /// Render every field of a record.
    pub fn card(&self, record: &Record<'_>) -> Result<Card> {
        let (singular, plural) = self.decorate(record.noun, record.plural)?;
        Ok(Card {
            singular,
            plural,
            translation: Node::text(record.translation),
            sentence: Node::text(record.sentence),
            tag: Node::text(record.tag),
        })
    }

    /// Parse and render one deck line.
    pub fn render_line(&self, line: &str) -> Result<String> {
        let record = Record::parse(line)?;
        let card = self.card(&record)?;
        debug!(noun = record.noun.trim(), "rendered card");
        Ok(card.to_line())
    }

    /// Render each non-blank line of a deck.
    ///
    /// Errors are yielded per line; whether to skip the entry or stop is up
    /// to the caller.
    pub fn render_deck<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Result<String>> + 'a {
        non_blank_lines(text).map(move |line| {
            let rendered = self.render_line(line);
            if let Err(_err) = &rendered {
                debug!(error = %_err, line, "rejected line");
            }
            rendered
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record() {
        let r = Record::parse("der Apfel;die Äpfel; apple ; Der Apfel ist rot. ;A1.1").unwrap();
        assert_eq!(r.noun, "der Apfel");
        assert_eq!(r.plural, "die Äpfel");
        assert_eq!(r.translation, "apple");
        assert_eq!(r.sentence, "Der Apfel ist rot.");
        assert_eq!(r.tag, "A1.1");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let r = Record::parse("das Bad;die Bäder;bath;Ich bin im Bad.;A1;extra").unwrap();
        assert_eq!(r.tag, "A1");
    }

    #[test]
    fn too_few_fields() {
        let err = Record::parse("der Apfel;die Äpfel;apple").unwrap_err();
        assert_eq!(
            err.kind(),
            &NomenErrorKind::TooFewFields {
                expected: 5,
                got: 3,
                line: "der Apfel;die Äpfel;apple".into()
            }
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lines: Vec<_> = non_blank_lines("a\n\n  \r\nb\n\t\n").collect();
        assert_eq!(lines, ["a", "b"]);
    }

    #[test]
    fn plain_fields_are_text() {
        let record = Record::parse("der Herd;die Herde;stove;Der Herd ist heiß.;A1").unwrap();
        let card = Decorator::default().card(&record).unwrap();
        assert_eq!(card.translation, Node::text("stove"));
        assert_eq!(card.sentence, Node::text("Der Herd ist heiß."));
        assert_eq!(card.tag, Node::text("A1"));
        assert_eq!(card.fields_html()[2..], ["stove", "Der Herd ist heiß.", "A1"]);
    }
}
