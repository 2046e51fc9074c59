//! Log levels and the methods bound to them.

use std::fmt;
use std::io;
use std::sync::Arc;

use serde_json::Value;

use super::sink::Sink;
use crate::error::{Error, Result};
use crate::style::{Arg, Output, Stylizer};

/// Which of the two console streams a level writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreamSelector {
    /// The standard output class of stream.
    #[default]
    Out,
    /// The standard error class of stream.
    Err,
}

impl StreamSelector {
    /// Parses `"out"` or `"err"`.
    pub fn parse(selector: &str) -> Option<Self> {
        match selector {
            "out" => Some(StreamSelector::Out),
            "err" => Some(StreamSelector::Err),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamSelector::Out => "out",
            StreamSelector::Err => "err",
        }
    }
}

impl fmt::Display for StreamSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one log level is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelOption {
    /// Unstyled passthrough to the out stream.
    Plain,
    /// A dotted style chain such as `"bright.yellow"`, written to `stream`.
    Styled {
        stream: StreamSelector,
        style: String,
    },
}

impl LevelOption {
    /// A styled level writing to the out stream.
    pub fn styled(style: impl Into<String>) -> Self {
        Self::on(StreamSelector::Out, style)
    }

    /// A styled level writing to the given stream.
    pub fn on(stream: StreamSelector, style: impl Into<String>) -> Self {
        LevelOption::Styled {
            stream,
            style: style.into(),
        }
    }

    /// Reads a level option: `null`, a style string, or `[stream, style]`
    /// with `stream` one of `"out"` and `"err"`.
    ///
    /// An empty style string is a plain level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLevel`] naming `level` for any other shape.
    pub fn from_value(level: &str, value: &Value) -> Result<Self> {
        let parsed = match value {
            Value::Null => Some(LevelOption::Plain),
            Value::String(style) => Some(Self::styled(style.as_str())),
            Value::Array(pair) => match pair.as_slice() {
                [Value::String(stream), Value::String(style)] => {
                    StreamSelector::parse(stream).map(|stream| Self::on(stream, style.as_str()))
                }
                _ => None,
            },
            _ => None,
        };

        match parsed {
            Some(LevelOption::Styled { style, .. }) if style.is_empty() => Ok(LevelOption::Plain),
            Some(option) => Ok(option),
            None => Err(Error::InvalidLevel {
                level: level.to_string(),
            }),
        }
    }

    /// Returns the stream this level writes to.
    pub fn stream(&self) -> StreamSelector {
        match self {
            LevelOption::Plain => StreamSelector::Out,
            LevelOption::Styled { stream, .. } => *stream,
        }
    }
}

/// Returns `true` when `value` has the shape of a level option.
pub fn is_valid_level_option(value: &Value) -> bool {
    LevelOption::from_value("", value).is_ok()
}

/// A log method: a stylizer bound to a sink.
///
/// Calling it never fails for style reasons; only the sink's I/O errors are
/// returned.
#[derive(Clone)]
pub struct LevelMethod {
    name: String,
    stream: StreamSelector,
    stylizer: Stylizer,
    sink: Arc<dyn Sink>,
}

impl LevelMethod {
    pub(crate) fn new(
        name: impl Into<String>,
        stream: StreamSelector,
        stylizer: Stylizer,
        sink: Arc<dyn Sink>,
    ) -> Self {
        Self {
            name: name.into(),
            stream,
            stylizer,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stream(&self) -> StreamSelector {
        self.stream
    }

    pub fn stylizer(&self) -> &Stylizer {
        &self.stylizer
    }

    /// Styles the arguments without writing them.
    pub fn render<'a>(&self, args: &[Arg<'a>]) -> Output<'a> {
        self.stylizer.apply(args)
    }

    /// Styles the arguments and writes them as one line.
    pub fn call(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.sink.write_line(&self.render(args).to_string())
    }
}

impl fmt::Debug for LevelMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelMethod")
            .field("name", &self.name)
            .field("stream", &self.stream)
            .field("stylizer", &self.stylizer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::MemorySink;
    use crate::style::StyleTable;
    use serde_json::json;

    #[test]
    fn test_valid_level_options() {
        assert!(is_valid_level_option(&json!("str")));
        assert!(is_valid_level_option(&Value::Null));
        assert!(is_valid_level_option(&json!(["err", "str"])));
        assert!(is_valid_level_option(&json!(["out", "str"])));
    }

    #[test]
    fn test_invalid_level_options() {
        assert!(!is_valid_level_option(&json!(["anotherKey", "str"])));
        assert!(!is_valid_level_option(&json!(["str"])));
        assert!(!is_valid_level_option(&json!(["err", "str", "extra"])));
        assert!(!is_valid_level_option(&json!(["err", 1])));
        assert!(!is_valid_level_option(&json!(true)));
        assert!(!is_valid_level_option(&json!({})));
    }

    #[test]
    fn test_from_value_shapes() {
        assert_eq!(
            LevelOption::from_value("log", &Value::Null).unwrap(),
            LevelOption::Plain
        );
        assert_eq!(
            LevelOption::from_value("log", &json!("green")).unwrap(),
            LevelOption::styled("green")
        );
        assert_eq!(
            LevelOption::from_value("log", &json!(["err", "green"])).unwrap(),
            LevelOption::on(StreamSelector::Err, "green")
        );
        assert_eq!(
            LevelOption::from_value("log", &json!("")).unwrap(),
            LevelOption::Plain
        );
    }

    #[test]
    fn test_from_value_error_names_level() {
        let err = LevelOption::from_value("warn", &json!(["ers", "str"])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLevel {
                level: "warn".to_string()
            }
        );
    }

    #[test]
    fn test_stream_of_option() {
        assert_eq!(LevelOption::Plain.stream(), StreamSelector::Out);
        assert_eq!(LevelOption::styled("red").stream(), StreamSelector::Out);
        assert_eq!(
            LevelOption::on(StreamSelector::Err, "red").stream(),
            StreamSelector::Err
        );
    }

    #[test]
    fn test_level_method_writes_styled_line() {
        let sink = MemorySink::new();
        let red = StyleTable::new().stylizer("red").unwrap();
        let method = LevelMethod::new("error", StreamSelector::Err, red, Arc::new(sink.clone()));

        method.call(&["TEST-LOG".into()]).unwrap();
        assert_eq!(
            sink.lines(),
            vec!["\x1b[38;2;255;0;0mTEST-LOG\x1b[0m".to_string()]
        );
        assert_eq!(method.name(), "error");
        assert_eq!(method.stream(), StreamSelector::Err);
    }
}
