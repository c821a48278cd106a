//! Presentation colors.

use owo_colors::Rgb;

/// What a colored span stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Noun body of a `der` word.
    Masculine,
    /// Noun body of a `die` word, and plurals without a singular.
    Feminine,
    /// Noun body of a `das` word.
    Neuter,
    /// Letters of a plural that differ from the singular.
    Changed,
    /// The `sg`/`pl` labels.
    Muted,
}

/// Color for every [`Tone`].
///
/// Decks generated earlier depend on the exact values of
/// [`Palette::CLASSIC`], which is also the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Color for masculine nouns (default: blue)
    pub masculine: Rgb,

    /// Color for feminine nouns (default: red)
    pub feminine: Rgb,

    /// Color for neuter nouns (default: green)
    pub neuter: Rgb,

    /// Color for changed plural letters (default: orange)
    pub changed: Rgb,

    /// Color for labels (default: gray)
    pub muted: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl Palette {
    /// The deck colors.
    pub const CLASSIC: Self = Self {
        masculine: Rgb(138, 207, 255),
        feminine: Rgb(255, 138, 138),
        neuter: Rgb(138, 255, 138),
        changed: Rgb(255, 140, 0),
        muted: Rgb(181, 181, 181),
    };

    /// Get the color for a tone.
    pub fn color_for(&self, tone: Tone) -> Rgb {
        match tone {
            Tone::Masculine => self.masculine,
            Tone::Feminine => self.feminine,
            Tone::Neuter => self.neuter,
            Tone::Changed => self.changed,
            Tone::Muted => self.muted,
        }
    }
}

/// Inline CSS for a text color, e.g. `color: rgb(255, 140, 0);`.
pub fn style_for(color: Rgb) -> String {
    let Rgb(r, g, b) = color;
    format!("color: rgb({r}, {g}, {b});")
}
