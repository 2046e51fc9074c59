//! Style system: tables of named ANSI templates and the stylizers built from them.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleTable`]: modifiers, foreground colors and background colors by name
//! - [`StyleTemplate`]: a single ANSI template, and [`pipe`] to compose several
//! - [`Stylizer`]: a compiled style function over mixed [`Arg`] lists
//! - [`StyleOptions`]: what a table includes
//!
//! Tables feed stylizers; dotted chains such as `"bright.yellow"` resolve
//! through [`StyleTable::resolve`] into one composed stylizer.

mod color;
pub mod palette;
mod options;
mod stylizer;
mod table;
mod template;

pub use color::{is_rgb_array, Rgb};
pub use options::StyleOptions;
pub use stylizer::{Arg, Output, Piece, Stylizer};
pub use table::{StyleSet, StyleTable, BACKGROUND_PREFIX, GROUPS};
pub use template::{pipe, validate_templates, StyleTemplate};
