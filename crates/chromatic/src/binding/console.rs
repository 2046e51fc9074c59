//! Level-keyed styled console.

use std::fmt;
use std::io;
use std::sync::{Arc, PoisonError, RwLock};

use console::Term;
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use super::level::{LevelMethod, LevelOption, StreamSelector};
use super::sink::{stream_from_value, Sink};
use crate::error::{Error, Result};
use crate::style::{Arg, StyleTable, Stylizer};
use crate::util::{copy_object, is_plain_object, merge_object};

static DEFAULT_OPTIONS: Lazy<Map<String, Value>> = Lazy::new(|| {
    let defaults = json!({
        "replace": false,
        "stdout": null,
        "stderr": null,
        "levels": null,
    });
    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
});

/// The levels a console binds when none are configured.
///
/// `error` goes red to the err stream, `warn` bright yellow and `info` bright
/// to the out stream; `log` and `debug` are plain.
pub fn default_levels() -> Vec<(String, LevelOption)> {
    vec![
        (
            "error".to_string(),
            LevelOption::on(StreamSelector::Err, "red"),
        ),
        (
            "warn".to_string(),
            LevelOption::on(StreamSelector::Out, "bright.yellow"),
        ),
        (
            "info".to_string(),
            LevelOption::on(StreamSelector::Out, "bright"),
        ),
        ("log".to_string(), LevelOption::Plain),
        ("debug".to_string(), LevelOption::Plain),
    ]
}

/// Options for building a [`Console`].
#[derive(Clone)]
pub struct ConsoleOptions {
    /// Install the built console as the process-wide console.
    pub replace: bool,
    /// Out stream; the process standard output when `None`.
    pub stdout: Option<Arc<dyn Sink>>,
    /// Err stream; the process standard error when `None`.
    pub stderr: Option<Arc<dyn Sink>>,
    /// Levels to bind, in order.
    pub levels: Vec<(String, LevelOption)>,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            replace: false,
            stdout: None,
            stderr: None,
            levels: default_levels(),
        }
    }
}

impl ConsoleOptions {
    /// Reads options from a configuration value.
    ///
    /// Recognized keys are `replace`, `stdout`, `stderr` (`null`, `"stdout"` or
    /// `"stderr"`) and `levels`. A `levels` mapping replaces the default levels
    /// as a whole.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigShape`] when `value` or `levels` is not a plain object,
    /// - [`Error::InvalidOption`] when `replace` is not a boolean,
    /// - [`Error::InvalidStream`] for a bad stream handle,
    /// - [`Error::InvalidLevel`] naming the first malformed level.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(assignable) = value else {
            return Err(Error::config_shape("options"));
        };

        if let Some(levels) = assignable.get("levels") {
            if !is_plain_object(levels) {
                return Err(Error::config_shape("options.levels"));
            }
        }

        let mut merged = copy_object(&DEFAULT_OPTIONS);
        merge_object(&mut merged, assignable);

        let replace = match merged.get("replace") {
            Some(Value::Bool(replace)) => *replace,
            _ => return Err(Error::invalid_option("options.replace", "a boolean")),
        };

        let stdout = stream_from_value("options.stdout", merged.get("stdout").unwrap_or(&Value::Null))?;
        let stderr = stream_from_value("options.stderr", merged.get("stderr").unwrap_or(&Value::Null))?;

        let levels = match merged.get("levels") {
            Some(Value::Object(levels)) => levels
                .iter()
                .map(|(level, option)| -> Result<(String, LevelOption)> {
                    Ok((level.clone(), LevelOption::from_value(level, option)?))
                })
                .collect::<Result<Vec<_>>>()?,
            _ => default_levels(),
        };

        Ok(Self {
            replace,
            stdout,
            stderr,
            levels,
        })
    }

    /// Sets whether the console installs itself process-wide.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Sets the out stream.
    pub fn stdout(mut self, sink: impl Sink + 'static) -> Self {
        self.stdout = Some(Arc::new(sink));
        self
    }

    /// Sets the err stream.
    pub fn stderr(mut self, sink: impl Sink + 'static) -> Self {
        self.stderr = Some(Arc::new(sink));
        self
    }

    /// Binds one level, replacing an existing level of the same name in place.
    pub fn level(mut self, name: impl Into<String>, option: LevelOption) -> Self {
        let name = name.into();
        match self.levels.iter_mut().find(|(level, _)| *level == name) {
            Some((_, existing)) => *existing = option,
            None => self.levels.push((name, option)),
        }
        self
    }

    /// Replaces every level.
    pub fn levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = (S, LevelOption)>,
        S: Into<String>,
    {
        self.levels = levels
            .into_iter()
            .map(|(name, option)| (name.into(), option))
            .collect();
        self
    }
}

impl fmt::Debug for ConsoleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleOptions")
            .field("replace", &self.replace)
            .field("stdout", &self.stdout.is_some())
            .field("stderr", &self.stderr.is_some())
            .field("levels", &self.levels)
            .finish()
    }
}

static INSTALLED: Lazy<RwLock<Option<Console>>> = Lazy::new(|| RwLock::new(None));

/// A console whose log levels write styled lines.
///
/// Each configured level becomes a [`LevelMethod`] reachable by name through
/// [`Console::method`] and [`Console::emit`]; the usual levels also have
/// shorthands.
///
/// # Example
///
/// ```rust
/// use chromatic::{Arg, Console, ConsoleOptions, MemorySink, StyleTable};
///
/// let out = MemorySink::new();
/// let err = MemorySink::new();
/// let options = ConsoleOptions::default().stdout(out.clone()).stderr(err.clone());
/// let console = Console::new(&StyleTable::new(), options).unwrap();
///
/// console.error(&[Arg::from("boom")]).unwrap();
/// console.log(&[Arg::from("plain"), Arg::value(&42)]).unwrap();
///
/// assert_eq!(err.lines(), vec!["\x1b[38;2;255;0;0mboom\x1b[0m".to_string()]);
/// assert_eq!(out.lines(), vec!["plain 42".to_string()]);
/// ```
#[derive(Clone)]
pub struct Console {
    stdout: Arc<dyn Sink>,
    stderr: Arc<dyn Sink>,
    methods: Vec<LevelMethod>,
}

impl Console {
    /// Binds every configured level against the style table.
    ///
    /// With `replace` set, the console is also installed process-wide.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStyleTag`] when a level's style chain names a
    /// tag missing from `table`. Nothing is installed on error.
    pub fn new(table: &StyleTable, options: ConsoleOptions) -> Result<Self> {
        let stdout = options
            .stdout
            .unwrap_or_else(|| Arc::new(Term::stdout()) as Arc<dyn Sink>);
        let stderr = options
            .stderr
            .unwrap_or_else(|| Arc::new(Term::stderr()) as Arc<dyn Sink>);

        let methods = options
            .levels
            .iter()
            .map(|(level, option)| -> Result<LevelMethod> {
                let stylizer = match option {
                    LevelOption::Plain => Stylizer::plain(),
                    LevelOption::Styled { style, .. } => table.resolve(style)?,
                };
                let stream = option.stream();
                let sink = match stream {
                    StreamSelector::Out => Arc::clone(&stdout),
                    StreamSelector::Err => Arc::clone(&stderr),
                };

                tracing::debug!(level = %level, stream = %stream, "bound console level");
                Ok(LevelMethod::new(level.as_str(), stream, stylizer, sink))
            })
            .collect::<Result<Vec<_>>>()?;

        let console = Self {
            stdout,
            stderr,
            methods,
        };

        if options.replace {
            console.install();
        }

        Ok(console)
    }

    /// Builds a console with the default options.
    ///
    /// # Errors
    ///
    /// See [`Console::new`].
    pub fn with_defaults(table: &StyleTable) -> Result<Self> {
        Self::new(table, ConsoleOptions::default())
    }

    /// Returns the method bound to `level`.
    pub fn method(&self, level: &str) -> Option<&LevelMethod> {
        self.methods.iter().find(|method| method.name() == level)
    }

    /// Returns every bound method, in configuration order.
    pub fn methods(&self) -> &[LevelMethod] {
        &self.methods
    }

    pub fn stdout(&self) -> &Arc<dyn Sink> {
        &self.stdout
    }

    pub fn stderr(&self) -> &Arc<dyn Sink> {
        &self.stderr
    }

    /// Writes through the method bound to `level`.
    ///
    /// An unbound level writes the arguments unstyled: `error`, `warn` and
    /// `trace` to the err stream, anything else to the out stream.
    pub fn emit(&self, level: &str, args: &[Arg<'_>]) -> io::Result<()> {
        match self.method(level) {
            Some(method) => method.call(args),
            None => {
                let sink = match unbound_stream(level) {
                    StreamSelector::Out => &self.stdout,
                    StreamSelector::Err => &self.stderr,
                };
                sink.write_line(&Stylizer::plain().apply(args).to_string())
            }
        }
    }

    pub fn error(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.emit("error", args)
    }

    pub fn warn(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.emit("warn", args)
    }

    pub fn info(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.emit("info", args)
    }

    pub fn log(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.emit("log", args)
    }

    pub fn debug(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.emit("debug", args)
    }

    /// Writes the pretty `Debug` form of a value to the out stream.
    pub fn log_object(&self, value: &dyn fmt::Debug) -> io::Result<()> {
        self.stdout.write_line(&format!("{:#?}", value))
    }

    /// Builds one out-stream log method per flat style name of `table`.
    pub fn style_methods(&self, table: &StyleTable) -> Vec<LevelMethod> {
        table
            .create_set(true)
            .stylizers()
            .into_iter()
            .map(|(name, stylizer)| {
                LevelMethod::new(name, StreamSelector::Out, stylizer, Arc::clone(&self.stdout))
            })
            .collect()
    }

    /// Installs this console as the process-wide console.
    ///
    /// A later install replaces it; there is no uninstall.
    pub fn install(&self) {
        let mut installed = INSTALLED.write().unwrap_or_else(PoisonError::into_inner);
        *installed = Some(self.clone());
        tracing::debug!(levels = self.methods.len(), "installed process-wide console");
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

fn unbound_stream(level: &str) -> StreamSelector {
    match level {
        "error" | "warn" | "trace" => StreamSelector::Err,
        _ => StreamSelector::Out,
    }
}

/// Returns the process-wide console, if one was installed.
pub fn installed() -> Option<Console> {
    INSTALLED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::MemorySink;
    use serial_test::serial;

    fn capture(options: ConsoleOptions) -> (Console, MemorySink, MemorySink) {
        let out = MemorySink::new();
        let err = MemorySink::new();
        let console = Console::new(
            &StyleTable::new(),
            options.stdout(out.clone()).stderr(err.clone()),
        )
        .unwrap();
        (console, out, err)
    }

    #[test]
    fn test_options_must_be_object() {
        for value in [Value::Null, json!(true), json!(["a"])] {
            assert_eq!(
                ConsoleOptions::from_value(&value).unwrap_err(),
                Error::config_shape("options")
            );
        }
    }

    #[test]
    fn test_options_replace_must_be_boolean() {
        for replace in [Value::Null, json!("str")] {
            let err = ConsoleOptions::from_value(&json!({ "replace": replace })).unwrap_err();
            assert_eq!(err, Error::invalid_option("options.replace", "a boolean"));
        }
        assert!(ConsoleOptions::from_value(&json!({ "replace": true })).is_ok());
    }

    #[test]
    fn test_options_streams() {
        let err = ConsoleOptions::from_value(&json!({ "stdout": false })).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidStream {
                key: "options.stdout".to_string()
            }
        );

        let err = ConsoleOptions::from_value(&json!({ "stderr": "promise" })).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidStream {
                key: "options.stderr".to_string()
            }
        );

        let options =
            ConsoleOptions::from_value(&json!({ "stdout": null, "stderr": "stderr" })).unwrap();
        assert!(options.stdout.is_none());
        assert!(options.stderr.is_some());
    }

    #[test]
    fn test_options_levels_shape() {
        for levels in [Value::Null, json!(false), json!(["a", "b"])] {
            let err = ConsoleOptions::from_value(&json!({ "levels": levels })).unwrap_err();
            assert_eq!(err, Error::config_shape("options.levels"));
        }

        let err = ConsoleOptions::from_value(&json!({ "levels": { "log": ["ers", "str"] } }))
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLevel {
                level: "log".to_string()
            }
        );
    }

    #[test]
    fn test_options_levels_replace_defaults() {
        let options = ConsoleOptions::from_value(&json!({
            "levels": { "log": ["err", "str"], "success": "green" }
        }))
        .unwrap();

        assert_eq!(
            options.levels,
            vec![
                (
                    "log".to_string(),
                    LevelOption::on(StreamSelector::Err, "str")
                ),
                ("success".to_string(), LevelOption::styled("green")),
            ]
        );
    }

    #[test]
    fn test_options_default_levels() {
        let options = ConsoleOptions::from_value(&json!({})).unwrap();
        assert_eq!(options.levels, default_levels());
        assert!(!options.replace);
    }

    #[test]
    fn test_level_builder_replaces_in_place() {
        let options = ConsoleOptions::default().level("log", LevelOption::styled("green"));
        assert_eq!(options.levels.len(), default_levels().len());
        assert_eq!(options.levels[3].1, LevelOption::styled("green"));

        let options = options.level("success", LevelOption::styled("green"));
        assert_eq!(options.levels.len(), default_levels().len() + 1);
    }

    #[test]
    fn test_every_level_is_bound() {
        let (console, _, _) = capture(ConsoleOptions::default());
        let names: Vec<&str> = console.methods().iter().map(LevelMethod::name).collect();
        assert_eq!(names, ["error", "warn", "info", "log", "debug"]);
    }

    #[test]
    fn test_default_levels_output() {
        let (console, out, err) = capture(ConsoleOptions::default());

        console.error(&["TEST-LOG".into()]).unwrap();
        console.warn(&["careful".into()]).unwrap();
        console.info(&["note".into()]).unwrap();
        console.log(&["plain".into()]).unwrap();

        assert_eq!(
            err.lines(),
            vec!["\x1b[38;2;255;0;0mTEST-LOG\x1b[0m".to_string()]
        );
        assert_eq!(
            out.lines(),
            vec![
                "\x1b[1m\x1b[38;2;255;255;0mcareful\x1b[0m\x1b[0m".to_string(),
                "\x1b[1mnote\x1b[0m".to_string(),
                "plain".to_string(),
            ]
        );
    }

    #[test]
    fn test_non_string_arguments_pass_through() {
        let (console, _, err) = capture(ConsoleOptions::default());
        let payload = vec![1, 2, 3];

        console
            .error(&["got".into(), Arg::value(&payload), "items".into()])
            .unwrap();

        assert_eq!(
            err.lines(),
            vec!["\x1b[38;2;255;0;0mgot\x1b[0m [1, 2, 3] \x1b[38;2;255;0;0mitems\x1b[0m".to_string()]
        );
    }

    #[test]
    fn test_unbound_level_writes_plain() {
        let (console, out, err) =
            capture(ConsoleOptions::default().levels(Vec::<(String, LevelOption)>::new()));

        console.log(&["raw".into()]).unwrap();
        console.emit("notice", &["other".into()]).unwrap();
        assert_eq!(out.lines(), vec!["raw".to_string(), "other".to_string()]);

        console.error(&["boom".into()]).unwrap();
        console.warn(&["careful".into()]).unwrap();
        console.emit("trace", &["deep".into()]).unwrap();
        assert_eq!(
            err.lines(),
            vec!["boom".to_string(), "careful".to_string(), "deep".to_string()]
        );
    }

    #[test]
    fn test_with_defaults_binds_default_levels() {
        let console = Console::with_defaults(&StyleTable::new()).unwrap();
        let bound: Vec<(&str, StreamSelector)> = console
            .methods()
            .iter()
            .map(|method| (method.name(), method.stream()))
            .collect();
        let levels = default_levels();
        let expected: Vec<(&str, StreamSelector)> = levels
            .iter()
            .map(|(name, option)| (name.as_str(), option.stream()))
            .collect();
        assert_eq!(bound, expected);
    }

    #[test]
    fn test_unknown_tag_fails_build() {
        let options = ConsoleOptions::default()
            .stdout(MemorySink::new())
            .level("warn", LevelOption::styled("bright.rainbowColor"));

        let err = Console::new(&StyleTable::new(), options).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownStyleTag {
                tag: "rainbowColor".to_string()
            }
        );
    }

    #[test]
    fn test_log_object() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Deep {
            done: bool,
        }

        let (console, out, _) = capture(ConsoleOptions::default());
        console.log_object(&Deep { done: true }).unwrap();
        assert_eq!(out.contents(), "Deep {\n    done: true,\n}\n");
    }

    #[test]
    fn test_style_methods() {
        let table = StyleTable::new();
        let (console, out, _) = capture(ConsoleOptions::default());
        let methods = console.style_methods(&table);

        assert_eq!(methods.len(), table.create_set(true).len());
        assert_eq!(methods[0].name(), "blink");

        let bgred = methods
            .iter()
            .find(|method| method.name() == "bgred")
            .unwrap();
        bgred.call(&["x".into()]).unwrap();
        assert_eq!(out.lines(), vec!["\x1b[48;2;255;0;0mx\x1b[0m".to_string()]);
    }

    #[test]
    #[serial]
    fn test_replace_installs_console() {
        let (console, out, _) = capture(ConsoleOptions::default().replace(true));

        let global = installed().unwrap();
        assert_eq!(global.methods().len(), console.methods().len());

        global.log(&["through global".into()]).unwrap();
        assert_eq!(out.lines(), vec!["through global".to_string()]);
    }

    #[test]
    #[serial]
    fn test_failed_build_does_not_install() {
        let (first, _, _) = capture(ConsoleOptions::default().levels([("only", LevelOption::Plain)]));
        first.install();

        let options = ConsoleOptions::default()
            .replace(true)
            .level("warn", LevelOption::styled("missing"));
        assert!(Console::new(&StyleTable::new(), options).is_err());

        let global = installed().unwrap();
        assert!(global.method("only").is_some());
    }
}
