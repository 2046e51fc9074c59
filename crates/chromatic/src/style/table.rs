//! The style table: modifiers, foreground colors and background colors.

use std::collections::BTreeMap;

use super::color::Rgb;
use super::options::StyleOptions;
use super::palette::{find_color, BASE_COLORS, COLORS, MODIFIERS};
use super::stylizer::Stylizer;
use super::template::{pipe, StyleTemplate};
use crate::error::{Error, Result};

/// Prefix of background names in a flat set.
pub const BACKGROUND_PREFIX: &str = "bg";

/// Named style templates, grouped as modifiers, foregrounds and backgrounds.
///
/// Every group is keyed by lower-cased name and ordered alphabetically. A color
/// name always has both a foreground and a background entry, or neither.
///
/// # Example
///
/// ```rust
/// use chromatic::{Rgb, StyleOptions, StyleTable};
///
/// let mut table = StyleTable::build(&StyleOptions::default().include(["purple"])).unwrap();
/// assert!(table.foregrounds().contains_key("purple"));
///
/// table.add_color("brand", Rgb(42, 42, 42), false).unwrap();
/// assert_eq!(table.stylizer("bgbrand").unwrap().paint("x"), "\x1b[48;2;42;42;42mx\x1b[0m");
///
/// assert!(table.remove_color("brand"));
/// assert!(table.stylizer("brand").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    modifiers: BTreeMap<String, StyleTemplate>,
    foregrounds: BTreeMap<String, StyleTemplate>,
    backgrounds: BTreeMap<String, StyleTemplate>,
}

impl StyleTable {
    /// Builds the table with default options: all modifiers and the base colors.
    pub fn new() -> Self {
        let mut table = Self::empty();
        table.load_modifiers();
        table.load_colors(&StyleOptions::default());
        table
    }

    /// Builds the table for the given options.
    ///
    /// Unknown names in `include` are dropped silently. Added colors are
    /// registered last and replace a known color of the same name.
    pub fn build(options: &StyleOptions) -> Result<Self> {
        let mut table = Self::empty();
        table.load_modifiers();
        table.load_colors(options);

        for (name, rgb) in &options.adds {
            table.add_color(name, *rgb, true)?;
        }

        tracing::debug!(
            modifiers = table.modifiers.len(),
            colors = table.foregrounds.len(),
            complete = options.complete,
            "built style table"
        );
        Ok(table)
    }

    fn empty() -> Self {
        Self {
            modifiers: BTreeMap::new(),
            foregrounds: BTreeMap::new(),
            backgrounds: BTreeMap::new(),
        }
    }

    fn load_modifiers(&mut self) {
        for &(name, code) in MODIFIERS {
            self.modifiers
                .insert(name.to_lowercase(), StyleTemplate::modifier(code));
        }
    }

    fn load_colors(&mut self, options: &StyleOptions) {
        let selected: Vec<(&str, Rgb)> = if options.complete {
            COLORS.to_vec()
        } else {
            BASE_COLORS
                .iter()
                .copied()
                .chain(options.include.iter().map(String::as_str))
                .filter_map(find_color)
                .collect()
        };

        for (name, rgb) in selected {
            let foreground = StyleTemplate::foreground(rgb);
            let key = name.to_lowercase();
            self.backgrounds.insert(key.clone(), foreground.to_background());
            self.foregrounds.insert(key, foreground);
        }
    }

    /// Returns the modifier templates.
    pub fn modifiers(&self) -> &BTreeMap<String, StyleTemplate> {
        &self.modifiers
    }

    /// Returns the foreground templates.
    pub fn foregrounds(&self) -> &BTreeMap<String, StyleTemplate> {
        &self.foregrounds
    }

    /// Returns the background templates, keyed by color name without prefix.
    pub fn backgrounds(&self) -> &BTreeMap<String, StyleTemplate> {
        &self.backgrounds
    }

    /// Registers a color in both the foreground and background groups.
    ///
    /// The name is stored lower-cased. With `redefine` an existing color is
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateColor`] when the name is taken and
    /// `redefine` is false.
    pub fn add_color(&mut self, name: &str, rgb: Rgb, redefine: bool) -> Result<()> {
        let key = name.to_lowercase();
        if self.foregrounds.contains_key(&key) && !redefine {
            return Err(Error::DuplicateColor { name: key });
        }

        tracing::trace!(name = %key, rgb = %rgb, redefine, "adding color");
        self.foregrounds
            .insert(key.clone(), StyleTemplate::foreground(rgb));
        self.backgrounds.insert(key, StyleTemplate::background(rgb));
        Ok(())
    }

    /// Removes a color from both groups, returning whether it existed.
    pub fn remove_color(&mut self, name: &str) -> bool {
        let key = name.to_lowercase();
        if self.foregrounds.remove(&key).is_none() {
            return false;
        }

        self.backgrounds.remove(&key);
        tracing::trace!(name = %key, "removed color");
        true
    }

    /// Looks up a template by its flat name: a modifier, a color, or a
    /// `bg`-prefixed background.
    pub fn template(&self, name: &str) -> Option<&StyleTemplate> {
        self.modifiers
            .get(name)
            .or_else(|| self.foregrounds.get(name))
            .or_else(|| {
                name.strip_prefix(BACKGROUND_PREFIX)
                    .and_then(|color| self.backgrounds.get(color))
            })
    }

    /// Returns the stylizer for a flat name.
    pub fn stylizer(&self, name: &str) -> Option<Stylizer> {
        self.template(name).cloned().map(Stylizer::new)
    }

    /// Composes a dotted chain of flat names, e.g. `"bright.yellow"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStyleTag`] naming the first segment missing
    /// from the table.
    pub fn resolve(&self, chain: &str) -> Result<Stylizer> {
        let templates = chain
            .split('.')
            .map(|tag| {
                self.template(tag).ok_or_else(|| Error::UnknownStyleTag {
                    tag: tag.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        pipe(&templates)
    }

    /// Exposes the table as a flat or grouped [`StyleSet`].
    pub fn create_set(&self, flat: bool) -> StyleSet {
        if !flat {
            return StyleSet::Grouped {
                modifiers: self.modifiers.clone(),
                foregrounds: self.foregrounds.clone(),
                backgrounds: self.backgrounds.clone(),
            };
        }

        let backgrounds = self.backgrounds.iter().map(|(name, template)| {
            (format!("{}{}", BACKGROUND_PREFIX, name), template.clone())
        });

        let entries = self
            .modifiers
            .iter()
            .chain(&self.foregrounds)
            .map(|(name, template)| (name.clone(), template.clone()))
            .chain(backgrounds)
            .collect();

        StyleSet::Flat(entries)
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Group names of a grouped [`StyleSet`].
pub const GROUPS: [&str; 3] = ["modifiers", "foregrounds", "backgrounds"];

/// A snapshot of a style table's templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSet {
    /// Modifiers, then foregrounds, then `bg`-prefixed backgrounds.
    Flat(Vec<(String, StyleTemplate)>),
    /// The three groups kept apart.
    Grouped {
        modifiers: BTreeMap<String, StyleTemplate>,
        foregrounds: BTreeMap<String, StyleTemplate>,
        backgrounds: BTreeMap<String, StyleTemplate>,
    },
}

impl StyleSet {
    /// Looks up a template.
    ///
    /// Flat sets take a flat name (`"bgred"`); grouped sets take
    /// `"<group>.<name>"` (`"backgrounds.red"`).
    pub fn get(&self, name: &str) -> Option<&StyleTemplate> {
        match self {
            StyleSet::Flat(entries) => entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, template)| template),
            StyleSet::Grouped { .. } => {
                let (group, key) = name.split_once('.')?;
                self.group(group)?.get(key)
            }
        }
    }

    /// Returns one group of a grouped set.
    pub fn group(&self, group: &str) -> Option<&BTreeMap<String, StyleTemplate>> {
        match self {
            StyleSet::Flat(_) => None,
            StyleSet::Grouped {
                modifiers,
                foregrounds,
                backgrounds,
            } => match group {
                "modifiers" => Some(modifiers),
                "foregrounds" => Some(foregrounds),
                "backgrounds" => Some(backgrounds),
                _ => None,
            },
        }
    }

    /// Returns every lookup name, in set order.
    pub fn names(&self) -> Vec<String> {
        self.templates().map(|(name, _)| name).collect()
    }

    /// Returns every template as a raw `(name, template)` pair.
    pub fn templates(&self) -> impl Iterator<Item = (String, &StyleTemplate)> + '_ {
        let entries: Vec<(String, &StyleTemplate)> = match self {
            StyleSet::Flat(entries) => entries
                .iter()
                .map(|(name, template)| (name.clone(), template))
                .collect(),
            StyleSet::Grouped { .. } => GROUPS
                .iter()
                .filter_map(|group| self.group(group).map(|entries| (group, entries)))
                .flat_map(|(group, entries)| {
                    entries
                        .iter()
                        .map(move |(name, template)| (format!("{}.{}", group, name), template))
                })
                .collect(),
        };
        entries.into_iter()
    }

    /// Returns every template compiled into a stylizer.
    pub fn stylizers(&self) -> Vec<(String, Stylizer)> {
        self.templates()
            .map(|(name, template)| (name, Stylizer::new(template.clone())))
            .collect()
    }

    pub fn len(&self) -> usize {
        match self {
            StyleSet::Flat(entries) => entries.len(),
            StyleSet::Grouped {
                modifiers,
                foregrounds,
                backgrounds,
            } => modifiers.len() + foregrounds.len() + backgrounds.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
