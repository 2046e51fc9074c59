//! Color entries.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A 24-bit color as its red, green and blue components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Reads a color from a configuration value, validating it with [`is_rgb_array`].
    ///
    /// `name` is only used to label the error.
    pub fn from_value(name: &str, value: &Value) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            name: name.to_string(),
            value: value.to_string(),
        };

        if !is_rgb_array(value) {
            return Err(invalid());
        }

        let components: Vec<u8> = value
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(Value::as_u64)
            .filter_map(|component| u8::try_from(component).ok())
            .collect();

        match components.as_slice() {
            &[red, green, blue] => Ok(Rgb(red, green, blue)),
            _ => Err(invalid()),
        }
    }

    /// Returns the `r;g;b` parameter list used inside an escape sequence.
    pub fn parameters(&self) -> String {
        format!("{};{};{}", self.0, self.1, self.2)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Rgb(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.0, rgb.1, rgb.2]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Rgb(red, green, blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0, self.1, self.2)
    }
}

/// Returns `true` when `value` is an array of exactly 3 integers between 0 and 255.
///
/// Floats are rejected even when they hold an integral value.
pub fn is_rgb_array(value: &Value) -> bool {
    match value.as_array() {
        Some(items) => {
            items.len() == 3
                && items
                    .iter()
                    .all(|item| item.as_u64().is_some_and(|component| component <= 255))
        }
        None => false,
    }
}
