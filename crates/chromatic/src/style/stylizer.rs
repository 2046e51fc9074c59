//! Style functions over heterogeneous argument lists.
//!
//! A [`Stylizer`] decorates a list of [`Arg`]s. Text arguments are wrapped in
//! the template's escapes; every other value passes through untouched, keeping
//! its identity and its position.
//!
//! # Escape placement
//!
//! Every text argument opens the escape. The closer is written once, after the
//! last text of each run of consecutive text arguments:
//!
//! ```rust
//! use chromatic::{Arg, StyleTable};
//!
//! let red = StyleTable::new().stylizer("red").unwrap();
//! let out = red.apply(&[Arg::from("hello"), Arg::from("world")]);
//!
//! assert_eq!(
//!     out.as_text(),
//!     Some("\x1b[38;2;255;0;0mhello\x1b[38;2;255;0;0mworld\x1b[0m")
//! );
//! ```
//!
//! When every resulting piece is text the output is one joined string,
//! otherwise it is the sequence of pieces with consecutive texts merged.

use std::fmt;

use super::template::StyleTemplate;
use crate::util::{group_strings_of_array, is_array_of_strings};

/// One argument handed to a stylizer.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    /// Text to style.
    Text(&'a str),
    /// Any other value, passed through as is.
    Value(&'a dyn fmt::Debug),
}

impl<'a> Arg<'a> {
    /// Wraps a non-text value.
    pub fn value(value: &'a dyn fmt::Debug) -> Self {
        Arg::Value(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(text: &'a str) -> Self {
        Arg::Text(text)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(text: &'a String) -> Self {
        Arg::Text(text)
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Arg::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// One element of a stylizer's output.
#[derive(Clone)]
pub enum Piece<'a> {
    /// Styled (or plain) text.
    Text(String),
    /// A passed-through value, the same reference that was handed in.
    Value(&'a dyn fmt::Debug),
}

impl<'a> Piece<'a> {
    /// Creates a text piece.
    pub fn text(text: impl Into<String>) -> Self {
        Piece::Text(text.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Piece::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Piece::Text(text) => Some(text),
            Piece::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&'a dyn fmt::Debug> {
        match self {
            Piece::Text(_) => None,
            Piece::Value(value) => Some(*value),
        }
    }
}

impl fmt::Debug for Piece<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Piece::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl fmt::Display for Piece<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Text(text) => f.write_str(text),
            Piece::Value(value) => write!(f, "{:?}", value),
        }
    }
}

/// Result of applying a stylizer.
#[derive(Debug, Clone)]
pub enum Output<'a> {
    /// Every argument was text: the joined, styled string.
    Text(String),
    /// Text runs and passed-through values, in argument order.
    Mixed(Vec<Piece<'a>>),
}

impl<'a> Output<'a> {
    /// Returns the joined string when every argument was text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Mixed(_) => None,
        }
    }

    /// Returns the output as a sequence of pieces.
    pub fn into_pieces(self) -> Vec<Piece<'a>> {
        match self {
            Output::Text(text) => vec![Piece::Text(text)],
            Output::Mixed(pieces) => pieces,
        }
    }
}

/// Renders the output the way a console line shows it: pieces separated by
/// one space, values in their `Debug` form.
impl fmt::Display for Output<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Mixed(pieces) => {
                for (index, piece) in pieces.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", piece)?;
                }
                Ok(())
            }
        }
    }
}

/// A compiled style function.
///
/// Holds no state beyond its template; applying it is a pure function of the
/// arguments. A plain stylizer has no template and passes text through
/// without escapes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylizer {
    template: Option<StyleTemplate>,
}

impl Stylizer {
    /// Compiles a template into a stylizer.
    pub fn new(template: StyleTemplate) -> Self {
        Self {
            template: Some(template),
        }
    }

    /// Returns a stylizer writing text without escapes.
    pub fn plain() -> Self {
        Self { template: None }
    }

    /// Returns the compiled template, `None` for a plain stylizer.
    pub fn template(&self) -> Option<&StyleTemplate> {
        self.template.as_ref()
    }

    /// Applies the style to a list of arguments.
    ///
    /// Each text is prefixed with the opening escape, consecutive texts are
    /// merged into one run, and each run gets a single closer. No arguments
    /// give an empty string.
    pub fn apply<'a>(&self, args: &[Arg<'a>]) -> Output<'a> {
        let (open, close) = self
            .template
            .as_ref()
            .map_or(("", ""), |template| (template.open(), template.close()));

        let opened = args
            .iter()
            .map(|arg| match *arg {
                Arg::Text(text) => Piece::Text(format!("{}{}", open, text)),
                Arg::Value(value) => Piece::Value(value),
            })
            .collect();

        let mut pieces = group_strings_of_array(opened);
        for piece in &mut pieces {
            if let Piece::Text(run) = piece {
                run.push_str(close);
            }
        }

        if is_array_of_strings(&pieces) {
            Output::Text(pieces.iter().filter_map(Piece::as_text).collect())
        } else {
            Output::Mixed(pieces)
        }
    }

    /// Styles a single piece of text.
    pub fn paint(&self, text: &str) -> String {
        match self.apply(&[Arg::Text(text)]) {
            Output::Text(styled) => styled,
            mixed => mixed.to_string(),
        }
    }
}

impl From<StyleTemplate> for Stylizer {
    fn from(template: StyleTemplate) -> Self {
        Self::new(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::color::Rgb;

    fn red() -> Stylizer {
        Stylizer::new(StyleTemplate::foreground(Rgb(255, 0, 0)))
    }

    fn bright() -> Stylizer {
        Stylizer::new(StyleTemplate::modifier(1))
    }

    #[derive(Debug)]
    struct Obj {
        #[allow(dead_code)]
        obj: bool,
    }

    #[test]
    fn test_single_string() {
        assert_eq!(
            red().apply(&["simple".into()]).as_text(),
            Some("\u{1b}[38;2;255;0;0msimple\u{1b}[0m")
        );
    }

    #[test]
    fn test_consecutive_strings_close_once() {
        let out = red().apply(&["hello".into(), "world".into()]);
        assert_eq!(
            out.as_text(),
            Some("\u{1b}[38;2;255;0;0mhello\u{1b}[38;2;255;0;0mworld\u{1b}[0m")
        );
    }

    #[test]
    fn test_nested_application() {
        let double = red()
            .apply(&["hello".into(), "world".into()])
            .to_string();
        let multi = bright().apply(&[Arg::from(&double), "onlyBright".into()]);

        assert_eq!(
            multi.as_text(),
            Some(
                "\u{1b}[1m\u{1b}[38;2;255;0;0mhello\u{1b}[38;2;255;0;0mworld\u{1b}[0m\u{1b}[1monlyBright\u{1b}[0m"
            )
        );
    }

    #[test]
    fn test_mixed_arguments_keep_values() {
        let obj = Obj { obj: true };
        let out = red().apply(&["a".into(), Arg::value(&obj), "b".into()]);

        let Output::Mixed(pieces) = out else {
            panic!("expected mixed output");
        };
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].as_text(), Some("\x1b[38;2;255;0;0ma\x1b[0m"));
        assert_eq!(pieces[2].as_text(), Some("\x1b[38;2;255;0;0mb\x1b[0m"));

        let passed = pieces[1].as_value().unwrap();
        assert!(std::ptr::eq(
            passed as *const dyn fmt::Debug as *const u8,
            &obj as *const Obj as *const u8
        ));
    }

    #[test]
    fn test_mixed_arguments_group_text_runs() {
        let number = 42;
        let out = red().apply(&[
            "a".into(),
            "b".into(),
            Arg::value(&number),
            "c".into(),
        ]);

        let pieces = out.into_pieces();
        assert_eq!(pieces.len(), 3);
        assert_eq!(
            pieces[0].as_text(),
            Some("\x1b[38;2;255;0;0ma\x1b[38;2;255;0;0mb\x1b[0m")
        );
        assert!(!pieces[1].is_text());
        assert_eq!(pieces[2].as_text(), Some("\x1b[38;2;255;0;0mc\x1b[0m"));
    }

    #[test]
    fn test_only_values() {
        let value = vec![1, 2];
        let out = red().apply(&[Arg::value(&value)]);
        let pieces = out.into_pieces();
        assert_eq!(pieces.len(), 1);
        assert!(!pieces[0].is_text());
    }

    #[test]
    fn test_no_arguments_is_empty_string() {
        assert_eq!(red().apply(&[]).as_text(), Some(""));
    }

    #[test]
    fn test_plain_stylizer() {
        let number = 7;
        let plain = Stylizer::plain();
        assert_eq!(plain.paint("as is"), "as is");
        assert_eq!(
            plain
                .apply(&["a".into(), "b".into(), Arg::value(&number)])
                .to_string(),
            "ab 7"
        );
    }

    #[test]
    fn test_output_display_uses_debug_for_values() {
        let obj = Obj { obj: true };
        let out = Stylizer::plain().apply(&["x".into(), Arg::value(&obj)]);
        assert_eq!(out.to_string(), "x Obj { obj: true }");
    }
}
