//! ANSI styling for diagnostic output.
//!
//! Colours and modifiers are an enumerated type consumed by a single `paint`
//! function. Free-form style names ("bold underline red") can be parsed with
//! [`Style::from_name`]; unrecognized names produce a plain style, so the
//! text passes through unmodified.

const END_FORMATTING: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const UNDERLINE: &str = "\x1b[4m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[93m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";

/// A base colour for diagnostic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Green,
    Yellow,
    Cyan,
    Dim,
}

impl Colour {
    fn code(self) -> &'static str {
        match self {
            Colour::Red => RED,
            Colour::Green => GREEN,
            Colour::Yellow => YELLOW,
            Colour::Cyan => CYAN,
            Colour::Dim => DIM,
        }
    }
}

/// A colour plus optional bold/underline modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub colour: Option<Colour>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    /// Style with a base colour and no modifiers.
    pub fn coloured(colour: Colour) -> Self {
        Self {
            colour: Some(colour),
            ..Self::default()
        }
    }

    /// Parse a free-form style name such as "red", "bold underline", or
    /// "bold_cyan". Unrecognized names yield a plain style.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        let colour = if name.contains("red") {
            Some(Colour::Red)
        } else if name.contains("green") {
            Some(Colour::Green)
        } else if name.contains("yellow") {
            Some(Colour::Yellow)
        } else if name.contains("cyan") {
            Some(Colour::Cyan)
        } else if name.contains("dim") {
            Some(Colour::Dim)
        } else {
            None
        };
        Self {
            colour,
            bold: name.contains("bold"),
            underline: name.contains("underline"),
        }
    }

    fn is_plain(&self) -> bool {
        self.colour.is_none() && !self.bold && !self.underline
    }
}

/// Wrap `text` in the escape sequences for `style`.
///
/// A plain style returns the text unchanged, with no reset suffix.
pub fn paint(text: &str, style: Style) -> String {
    if style.is_plain() {
        return text.to_string();
    }
    let mut out = String::new();
    if let Some(colour) = style.colour {
        out.push_str(colour.code());
    }
    if style.bold {
        out.push_str(BOLD);
    }
    if style.underline {
        out.push_str(UNDERLINE);
    }
    out.push_str(text);
    out.push_str(END_FORMATTING);
    out
}

pub fn red(text: &str) -> String {
    paint(text, Style::coloured(Colour::Red))
}

pub fn green(text: &str) -> String {
    paint(text, Style::coloured(Colour::Green))
}

pub fn yellow(text: &str) -> String {
    paint(text, Style::coloured(Colour::Yellow))
}

pub fn cyan(text: &str) -> String {
    paint(text, Style::coloured(Colour::Cyan))
}

pub fn bold_underline(text: &str) -> String {
    paint(
        text,
        Style {
            colour: None,
            bold: true,
            underline: true,
        },
    )
}
