//! # Chromatic - true-color ANSI stylizers and styled console levels
//!
//! Chromatic compiles named styles into ANSI escape templates, composes them,
//! and binds them to log levels of a console.
//!
//! ## Core Concepts
//!
//! - [`StyleTable`]: modifiers (`bright`, `underline`, ...), foreground colors
//!   and `bg`-prefixed background colors, each an ANSI template
//! - [`Stylizer`]: a compiled style function over a list of [`Arg`]s; text is
//!   wrapped in escapes, other values pass through untouched
//! - [`pipe`]: composes several templates into one stylizer, first outermost
//! - [`Console`]: log levels (`error`, `warn`, `info`, ...) bound to dotted
//!   style chains and to the out or err stream
//! - [`Chromatic`]: a table and a console built from one configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use chromatic::{pipe, Arg, StyleTable};
//!
//! let table = StyleTable::new();
//!
//! let red = table.stylizer("red").unwrap();
//! assert_eq!(red.paint("simple"), "\x1b[38;2;255;0;0msimple\x1b[0m");
//!
//! let warn = table.resolve("bright.yellow").unwrap();
//! assert_eq!(warn.paint("w"), "\x1b[1m\x1b[38;2;255;255;0mw\x1b[0m\x1b[0m");
//!
//! let emphasis = pipe(&["\x1b[1m%s\x1b[0m", "\x1b[4m%s\x1b[0m"]).unwrap();
//! assert_eq!(emphasis.paint("x"), "\x1b[1m\x1b[4mx\x1b[0m\x1b[0m");
//!
//! let count = 3;
//! let line = red.apply(&[Arg::from("found"), Arg::value(&count)]).to_string();
//! assert_eq!(line, "\x1b[38;2;255;0;0mfound\x1b[0m 3");
//! ```
//!
//! ## Consoles
//!
//! ```rust
//! use chromatic::{Arg, Console, ConsoleOptions, LevelOption, MemorySink, StyleTable};
//!
//! let out = MemorySink::new();
//! let options = ConsoleOptions::default()
//!     .stdout(out.clone())
//!     .level("success", LevelOption::styled("green"));
//! let console = Console::new(&StyleTable::new(), options).unwrap();
//!
//! console.emit("success", &[Arg::from("done")]).unwrap();
//! assert_eq!(out.lines(), vec!["\x1b[38;2;0;128;0mdone\x1b[0m".to_string()]);
//! ```
//!
//! Configuration can also be read from JSON or YAML through
//! [`ChromaticOptions`]; every shape error surfaces as an [`Error`] at build
//! time, never while writing.

pub mod style;
pub mod util;

mod binding;
mod chromatic;
mod error;

pub use binding::{
    default_levels, installed, is_valid_level_option, stream_from_value, Console, ConsoleOptions,
    LevelMethod, LevelOption, MemorySink, Sink, StreamSelector,
};
pub use chromatic::{Chromatic, ChromaticOptions};
pub use error::{Error, Result};
pub use style::{
    is_rgb_array, pipe, validate_templates, Arg, Output, Piece, Rgb, StyleOptions, StyleSet,
    StyleTable, StyleTemplate, Stylizer,
};
