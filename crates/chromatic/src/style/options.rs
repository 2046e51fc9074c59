//! Options controlling which styles a table holds.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use super::color::Rgb;
use crate::error::{Error, Result};
use crate::util::{copy_object, is_plain_object, merge_object, order_object};

static DEFAULT_OPTIONS: Lazy<Map<String, Value>> = Lazy::new(|| {
    let defaults = json!({
        "flat": true,
        "complete": false,
        "include": false,
        "adds": null,
    });
    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
});

/// Options for building a [`StyleTable`](super::StyleTable).
///
/// # Example
///
/// ```rust
/// use chromatic::{Rgb, StyleOptions};
///
/// let options = StyleOptions::default()
///     .include(["purple", "orange"])
///     .add("brand", Rgb(12, 34, 56));
///
/// assert!(options.flat);
/// assert!(!options.complete);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    /// Expose styles as one flat mapping (backgrounds prefixed with `bg`)
    /// rather than grouped as modifiers, foregrounds and backgrounds.
    pub flat: bool,
    /// Include every known color instead of the base set.
    pub complete: bool,
    /// Extra known colors to include on top of the base set.
    pub include: Vec<String>,
    /// Extra named colors, registered after the known ones.
    pub adds: BTreeMap<String, Rgb>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            flat: true,
            complete: false,
            include: Vec::new(),
            adds: BTreeMap::new(),
        }
    }
}

impl StyleOptions {
    /// Reads options from a configuration value.
    ///
    /// Recognized keys are `flat`, `complete`, `include` (`false` or a list of
    /// color names) and `adds` (a mapping of names to `[r, g, b]`). Unknown
    /// keys are ignored.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigShape`] when `value` or `adds` is not a plain object,
    /// - [`Error::InvalidOption`] when a flag is not a boolean or `include` is
    ///   neither `false` nor a list of strings,
    /// - [`Error::InvalidColor`] when an added color is not a valid RGB triple.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(assignable) = value else {
            return Err(Error::config_shape("options"));
        };

        if let Some(adds) = assignable.get("adds") {
            if !is_plain_object(adds) {
                return Err(Error::config_shape("options.adds"));
            }
        }

        let mut merged = copy_object(&DEFAULT_OPTIONS);
        merge_object(&mut merged, assignable);

        let flat = read_flag(&merged, "flat")?;
        let complete = read_flag(&merged, "complete")?;
        let include = read_include(merged.get("include"))?;

        let adds = match merged.get("adds") {
            Some(Value::Object(adds)) => order_object(adds)
                .iter()
                .map(|(name, rgb)| -> Result<(String, Rgb)> {
                    Ok((name.clone(), Rgb::from_value(name, rgb)?))
                })
                .collect::<Result<BTreeMap<_, _>>>()?,
            _ => BTreeMap::new(),
        };

        Ok(Self {
            flat,
            complete,
            include,
            adds,
        })
    }

    /// Sets whether the exposed set is flat.
    pub fn flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    /// Sets whether every known color is included.
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }

    /// Adds known colors to include on top of the base set.
    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(names.into_iter().map(Into::into));
        self
    }

    /// Registers an extra named color.
    pub fn add(mut self, name: impl Into<String>, rgb: impl Into<Rgb>) -> Self {
        self.adds.insert(name.into(), rgb.into());
        self
    }
}

fn read_flag(options: &Map<String, Value>, key: &str) -> Result<bool> {
    match options.get(key) {
        Some(Value::Bool(flag)) => Ok(*flag),
        _ => Err(Error::invalid_option(format!("options.{}", key), "a boolean")),
    }
}

fn read_include(value: Option<&Value>) -> Result<Vec<String>> {
    let invalid = || Error::invalid_option("options.include", "false or a list of color names");

    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(Vec::new()),
        Some(Value::Array(names)) => names
            .iter()
            .map(|name| name.as_str().map(str::to_string).ok_or_else(invalid))
            .collect(),
        Some(_) => Err(invalid()),
    }
}
