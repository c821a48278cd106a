//! Turning article-tagged forms into colored markup.

use nomen_diff::align;
use nomen_markup::{Element, Node};

use crate::error::{NomenError, Result};
use crate::form::{Article, Form, SENTINEL};
use crate::palette::{Palette, Tone, style_for};
use crate::tracing_macros::trace;

/// Grammatical number of a rendered form, selecting its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// Labelled `sg`.
    Singular,
    /// Labelled `pl`.
    Plural,
}

impl Number {
    /// The subscript label text.
    pub const fn label(self) -> &'static str {
        match self {
            Number::Singular => "sg",
            Number::Plural => "pl",
        }
    }
}

/// Builds markup for noun forms using a [`Palette`].
///
/// Every rendered form is an attribute-less `<span>` holding the muted
/// label, a space, the article with a trailing space, and the colored body:
///
/// ```
/// use nomen::Decorator;
///
/// let plural = Decorator::default().plural("die Äpfel", "der Apfel")?;
/// assert_eq!(
///     plural.to_html(),
///     concat!(
///         r#"<span><small><span style="color: rgb(181, 181, 181);">pl</span></small> "#,
///         r#"die <span style="color: rgb(255, 140, 0);">Ä</span>pfel</span>"#,
///     )
/// );
/// # Ok::<(), nomen::NomenError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decorator {
    palette: Palette,
}

impl Decorator {
    /// Create a decorator with the given colors.
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// A `<span>` colored for `tone`.
    pub fn colored(&self, tone: Tone, children: impl IntoIterator<Item = Node>) -> Node {
        Element::new("span")
            .with_attr("style", style_for(self.palette.color_for(tone)))
            .with_children(children)
            .into()
    }

    /// The muted `<small>` label for a form.
    pub fn label(&self, number: Number) -> Node {
        Element::new("small")
            .with_child(self.colored(Tone::Muted, [Node::text(number.label())]))
            .into()
    }

    /// Decorate both forms of a noun.
    ///
    /// Fails on the first invalid form, singular first.
    pub fn decorate(&self, singular: &str, plural: &str) -> Result<(Node, Node)> {
        Ok((self.singular(singular)?, self.plural(plural, singular)?))
    }

    /// Decorate a singular form such as `der Tisch`.
    ///
    /// The body is colored by gender. `-` renders uncolored.
    pub fn singular(&self, text: &str) -> Result<Node> {
        let body = match Form::parse(text)? {
            Form::Missing => None,
            Form::Present { article, body } => {
                let gender: Article = article
                    .parse()
                    .map_err(|_| NomenError::unknown_article(article, text.trim()))?;
                Some((gender.as_str(), vec![self.colored(gender.tone(), [Node::text(body)])]))
            }
        };
        Ok(self.form(Number::Singular, body))
    }

    /// Decorate a plural form such as `die Tische`, given its singular.
    ///
    /// Only letters that differ from the singular body are colored. A
    /// plural without a singular is colored feminine throughout. `-`
    /// renders uncolored and the singular is then not looked at.
    pub fn plural(&self, text: &str, singular: &str) -> Result<Node> {
        let body = match Form::parse(text)? {
            Form::Missing => None,
            Form::Present { article, body } => {
                if article != Article::Die.as_str() {
                    return Err(NomenError::invalid_plural_article(article, text.trim()));
                }
                let singular = Form::parse(singular)?;
                let nodes = if singular.is_missing() {
                    vec![self.colored(Tone::Feminine, [Node::text(body)])]
                } else {
                    self.plural_body(singular.body(), body)
                };
                Some((article, nodes))
            }
        };
        Ok(self.form(Number::Plural, body))
    }

    /// Nodes for a plural body with its changed letters highlighted.
    ///
    /// Unchanged pieces stay plain text.
    pub fn plural_body(&self, singular_body: &str, plural_body: &str) -> Vec<Node> {
        let segments = align(singular_body, plural_body);
        trace!(
            singular_body,
            plural_body,
            segments = segments.len(),
            "highlighting plural"
        );
        segments
            .into_iter()
            .map(|segment| {
                if segment.is_changed() {
                    self.colored(Tone::Changed, [Node::text(segment.as_str())])
                } else {
                    Node::text(segment.as_str())
                }
            })
            .collect()
    }

    fn form(&self, number: Number, body: Option<(&str, Vec<Node>)>) -> Node {
        let wrapper = Element::new("span")
            .with_child(self.label(number))
            .with_text(" ");
        let wrapper = match body {
            None => wrapper.with_text(SENTINEL),
            Some((article, nodes)) => wrapper.with_text(format!("{article} ")).with_children(nodes),
        };
        wrapper.into()
    }
}
