//! One style table and one console, built together from one configuration.

use serde_json::Value;

use crate::binding::{Console, ConsoleOptions, LevelMethod};
use crate::error::{Error, Result};
use crate::style::{StyleOptions, StyleSet, StyleTable, Stylizer};

/// Options for a [`Chromatic`] instance.
///
/// As a document, the shape is `{ "styles": {...}, "console": {...} }`, both
/// keys optional.
///
/// # Example
///
/// ```rust
/// use chromatic::ChromaticOptions;
///
/// let options = ChromaticOptions::from_yaml_str(
///     "styles:\n  include: [purple]\nconsole:\n  levels:\n    success: green\n",
/// )
/// .unwrap();
///
/// assert_eq!(options.styles.include, vec!["purple".to_string()]);
/// assert_eq!(options.console.levels.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChromaticOptions {
    pub styles: StyleOptions,
    pub console: ConsoleOptions,
}

impl ChromaticOptions {
    /// Reads both option groups from a configuration value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigShape`] when `value`, `styles` or `console` is
    /// not a plain object, and whatever [`StyleOptions::from_value`] or
    /// [`ConsoleOptions::from_value`] reject.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(document) = value else {
            return Err(Error::config_shape("options"));
        };

        let styles = match document.get("styles") {
            None | Some(Value::Null) => StyleOptions::default(),
            Some(styles @ Value::Object(_)) => StyleOptions::from_value(styles)?,
            Some(_) => return Err(Error::config_shape("styles")),
        };

        let console = match document.get("console") {
            None | Some(Value::Null) => ConsoleOptions::default(),
            Some(console @ Value::Object(_)) => ConsoleOptions::from_value(console)?,
            Some(_) => return Err(Error::config_shape("console")),
        };

        Ok(Self { styles, console })
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|err| Error::Parse {
            format: "JSON",
            message: err.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(source).map_err(|err| Error::Parse {
            format: "YAML",
            message: err.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Sets the style options.
    pub fn styles(mut self, styles: StyleOptions) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the console options.
    pub fn console(mut self, console: ConsoleOptions) -> Self {
        self.console = console;
        self
    }
}

/// A style table and a console bound against it.
///
/// # Example
///
/// ```rust
/// use chromatic::{Arg, Chromatic, ChromaticOptions, ConsoleOptions, MemorySink};
///
/// let out = MemorySink::new();
/// let options = ChromaticOptions::default()
///     .console(ConsoleOptions::default().stdout(out.clone()));
/// let chromatic = Chromatic::with_options(options).unwrap();
///
/// let green = chromatic.style("green").unwrap();
/// chromatic.console().info(&[Arg::from(green.paint("ok").as_str())]).unwrap();
///
/// assert_eq!(
///     out.lines(),
///     vec!["\x1b[1m\x1b[38;2;0;128;0mok\x1b[0m\x1b[0m".to_string()]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Chromatic {
    flat: bool,
    table: StyleTable,
    console: Console,
}

impl Chromatic {
    /// Builds an instance with default options, writing to the process streams.
    ///
    /// # Errors
    ///
    /// See [`Chromatic::with_options`].
    pub fn new() -> Result<Self> {
        Self::with_options(ChromaticOptions::default())
    }

    /// Builds the style table, then the console against it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStyleTag`] for a level naming a missing style.
    pub fn with_options(options: ChromaticOptions) -> Result<Self> {
        let table = StyleTable::build(&options.styles)?;
        let console = Console::new(&table, options.console)?;

        Ok(Self {
            flat: options.styles.flat,
            table,
            console,
        })
    }

    /// Returns the stylizer for a name in this instance's set layout.
    ///
    /// Flat instances take flat names (`"bgred"`), grouped ones take
    /// `"<group>.<name>"` (`"backgrounds.red"`).
    pub fn style(&self, name: &str) -> Option<Stylizer> {
        if self.flat {
            self.table.stylizer(name)
        } else {
            self.stylizer_set().get(name).cloned().map(Stylizer::new)
        }
    }

    /// Returns the style set in this instance's layout.
    pub fn stylizer_set(&self) -> StyleSet {
        self.table.create_set(self.flat)
    }

    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Returns one out-stream log method per flat style name.
    pub fn log_methods(&self) -> Vec<LevelMethod> {
        self.console.style_methods(&self.table)
    }
}
