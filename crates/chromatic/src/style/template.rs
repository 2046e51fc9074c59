//! ANSI style templates and their composition.
//!
//! A [`StyleTemplate`] is the textual form `ESC[<params>m%sESC[0m`: one opening
//! escape, the content placeholder, and the reset closer. Templates built by
//! the table are always well formed; templates coming from outside go through
//! [`StyleTemplate::parse`].
//!
//! [`pipe`] nests several templates into one, the first template outermost:
//!
//! ```rust
//! use chromatic::{pipe, StyleTable};
//!
//! let table = StyleTable::new();
//! let bright = table.modifiers()["bright"].as_str();
//! let yellow = table.foregrounds()["yellow"].as_str();
//!
//! let warn = pipe(&[bright, yellow]).unwrap();
//! assert_eq!(
//!     warn.paint("careful"),
//!     "\x1b[1m\x1b[38;2;255;255;0mcareful\x1b[0m\x1b[0m"
//! );
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::color::Rgb;
use super::palette::{BACKGROUND, CLOSER, FOREGROUND, PLACEHOLDER, TAG};
use super::stylizer::Stylizer;
use crate::error::{Error, Result};

/// Shape of a single, uncomposed template.
static VALID_TEMPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\x1b\[(([0-9]{2};[0-9];[0-9]{1,3};[0-9]{1,3};[0-9]{1,3})|([0-9]))m%s\x1b\[0m$")
        .expect("template pattern is valid")
});

/// An ANSI escape template with a single content placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleTemplate {
    raw: String,
}

impl StyleTemplate {
    /// Builds the template of a text modifier, e.g. `\x1b[1m%s\x1b[0m` for code 1.
    pub fn modifier(code: u8) -> Self {
        Self::from_parameters(&code.to_string())
    }

    /// Builds a 24-bit foreground template.
    pub fn foreground(rgb: Rgb) -> Self {
        Self::from_parameters(&format!("{};{}", FOREGROUND, rgb.parameters()))
    }

    /// Builds a 24-bit background template.
    pub fn background(rgb: Rgb) -> Self {
        Self::from_parameters(&format!("{};{}", BACKGROUND, rgb.parameters()))
    }

    /// Accepts a raw template after checking it has the single-escape shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransformer`] naming `raw` when it is not a
    /// modifier or 24-bit color template.
    pub fn parse(raw: &str) -> Result<Self> {
        if VALID_TEMPLATE.is_match(raw) {
            Ok(Self {
                raw: raw.to_string(),
            })
        } else {
            Err(Error::InvalidTransformer {
                value: raw.to_string(),
            })
        }
    }

    fn from_parameters(parameters: &str) -> Self {
        Self {
            raw: format!("{}{}m{}{}", TAG, parameters, PLACEHOLDER, CLOSER),
        }
    }

    /// Returns the foreground template's background twin.
    ///
    /// Non-foreground templates are returned unchanged.
    pub fn to_background(&self) -> Self {
        let foreground = format!("{}{};", TAG, FOREGROUND);
        let background = format!("{}{};", TAG, BACKGROUND);
        Self {
            raw: self.raw.replacen(&foreground, &background, 1),
        }
    }

    /// Places `inner` at this template's placeholder.
    pub fn nest(&self, inner: &StyleTemplate) -> Self {
        Self {
            raw: self.raw.replacen(PLACEHOLDER, &inner.raw, 1),
        }
    }

    /// Returns the text written before the content.
    pub fn open(&self) -> &str {
        self.split().0
    }

    /// Returns the text written after the content.
    pub fn close(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        self.raw.split_once(PLACEHOLDER).unwrap_or((&self.raw, ""))
    }

    /// Returns the raw template.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

}

impl fmt::Display for StyleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for StyleTemplate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// Checks every template in the list, failing on the first malformed one.
///
/// # Errors
///
/// [`Error::EmptyTransformerList`] for an empty list,
/// [`Error::InvalidTransformer`] naming the first malformed template.
pub fn validate_templates<S: AsRef<str>>(templates: &[S]) -> Result<Vec<StyleTemplate>> {
    if templates.is_empty() {
        return Err(Error::EmptyTransformerList);
    }

    templates
        .iter()
        .map(|template| StyleTemplate::parse(template.as_ref()))
        .collect()
}

/// Composes templates into one stylizer, the first template outermost.
///
/// # Errors
///
/// See [`validate_templates`].
pub fn pipe<S: AsRef<str>>(templates: &[S]) -> Result<Stylizer> {
    let templates = validate_templates(templates)?;
    let (first, rest) = templates
        .split_first()
        .ok_or(Error::EmptyTransformerList)?;

    let composed = rest
        .iter()
        .fold(first.clone(), |outer, inner| outer.nest(inner));

    tracing::trace!(template = ?composed.as_str(), "composed style template");
    Ok(Stylizer::new(composed))
}
