//! Errors raised while building style tables, stylizers and consoles.
//!
//! Every variant is produced at configuration or build time. Once a
//! [`Console`](crate::Console) is built, emitting through it only ever
//! surfaces the I/O errors of the underlying sink.

/// Error returned when a configuration, a color or a style reference is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A configuration argument is not a plain mapping where one is required.
    #[error("the \"{key}\" argument must be a plain object")]
    ConfigShape { key: String },

    /// A recognized option holds a value of the wrong type.
    #[error("the \"{key}\" argument must be {expected}")]
    InvalidOption { key: String, expected: &'static str },

    /// An RGB value is not exactly 3 integers between 0 and 255.
    #[error("the \"{name}\" color must be 3 integers between 0 and 255, received {value}")]
    InvalidColor { name: String, value: String },

    /// A color name is already registered and no redefinition was requested.
    #[error("the \"{name}\" color is already defined")]
    DuplicateColor { name: String },

    /// A dotted style reference names a tag missing from the style table.
    #[error("the \"{tag}\" tag is not found in styles")]
    UnknownStyleTag { tag: String },

    /// A template handed to the composer is not a single well-formed ANSI template.
    #[error("invalid transformer, use add_color to provide new colors, received {value:?}")]
    InvalidTransformer { value: String },

    /// The composer was handed no template at all.
    #[error("at least 1 transformer is required")]
    EmptyTransformerList,

    /// A stream handle is neither null nor a known process stream.
    #[error("the \"{key}\" stream must be null, \"stdout\" or \"stderr\"")]
    InvalidStream { key: String },

    /// A level option is neither null, a style string nor an `["out"|"err", style]` pair.
    #[error(
        "the \"{level}\" level must be null, a style string or a pair with \"err\" or \"out\" as first item"
    )]
    InvalidLevel { level: String },

    /// A configuration document could not be parsed.
    #[error("failed to parse {format} configuration: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}

impl Error {
    pub(crate) fn config_shape(key: impl Into<String>) -> Self {
        Error::ConfigShape { key: key.into() }
    }

    pub(crate) fn invalid_option(key: impl Into<String>, expected: &'static str) -> Self {
        Error::InvalidOption {
            key: key.into(),
            expected,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
