//! Console binding: log levels that write styled lines to output sinks.
//!
//! A [`Console`] is built from a [`StyleTable`](crate::StyleTable) and
//! [`ConsoleOptions`]. Each level maps to a [`LevelOption`]: plain, or a dotted
//! style chain on the out or err stream. Output goes through the [`Sink`]
//! trait, implemented for [`Term`](::console::Term) and for the in-memory
//! [`MemorySink`].

mod console;
mod level;
mod sink;

pub use self::console::{default_levels, installed, Console, ConsoleOptions};
pub use level::{is_valid_level_option, LevelMethod, LevelOption, StreamSelector};
pub use sink::{stream_from_value, MemorySink, Sink};
