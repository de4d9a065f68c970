use std::collections::HashMap;

use crate::api::{Flag, FlagSpec};
use crate::matcher::FlagIndex;
use crate::parser::{ConfigError, ParseError};

/// A titled cluster of flags, rendered under its own heading in the help message.
/// Used with [`OptionParser::group`](./struct.OptionParser.html#method.group).
///
/// Group flags share the parser's name lookup, so their names must be unique across the whole parser.
///
/// ### Example
/// ```
/// # use optparse_builder as optparse;
/// use optparse::{Action, Flag, FlagGroup, OptionParser};
///
/// let parser = OptionParser::new()
///     .group(
///         FlagGroup::new("Debug Options")
///             .description("Caution: use these at your own risk.")
///             .add(Flag::new(["--trace"]).action(Action::StoreTrue)),
///     )
///     .build();
///
/// let parsed = parser.parse_tokens(&["--trace"]).unwrap();
/// assert!(parsed.values().get_flag("trace"));
/// ```
pub struct FlagGroup<'a> {
    title: String,
    description: Option<String>,
    flags: Vec<Flag<'a>>,
}

impl<'a> FlagGroup<'a> {
    /// Create a group with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            flags: Vec::default(),
        }
    }

    /// Document the group in full sentence/paragraph format.
    /// If repeated, only the final description will apply.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Add a flag to the group.
    pub fn add(mut self, flag: Flag<'a>) -> Self {
        self.flags.push(flag);
        self
    }
}

#[derive(Debug)]
struct Section {
    title: String,
    description: Option<String>,
    members: Vec<usize>,
}

/// The flags of one parser, with their short/long lookup.
///
/// All flags (grouped or not) live in a single arena; groups only hold handles into it.
pub struct FlagRegistry<'a> {
    flags: Vec<FlagSpec<'a>>,
    order: Vec<usize>,
    sections: Vec<Section>,
    index: FlagIndex,
    defaults: HashMap<String, String>,
}

impl<'a> Default for FlagRegistry<'a> {
    fn default() -> Self {
        Self {
            flags: Vec::default(),
            order: Vec::default(),
            sections: Vec::default(),
            index: FlagIndex::default(),
            defaults: HashMap::default(),
        }
    }
}

impl<'a> std::fmt::Debug for FlagRegistry<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagRegistry")
            .field("flags", &self.flags)
            .field("sections", &self.sections)
            .finish_non_exhaustive()
    }
}

impl<'a> FlagRegistry<'a> {
    /// Register a flag, rendered after the flags already registered.
    pub fn register(&mut self, flag: Flag<'a>) -> Result<&FlagSpec<'a>, ConfigError> {
        let id = self.insert(flag)?;
        self.order.push(id);
        Ok(&self.flags[id])
    }

    /// Register a flag, rendered before the flags already registered.
    pub(crate) fn register_front(&mut self, flag: Flag<'a>) -> Result<&FlagSpec<'a>, ConfigError> {
        let id = self.insert(flag)?;
        self.order.insert(0, id);
        Ok(&self.flags[id])
    }

    /// Attach a group: its flags join this registry's lookup, but render under the group's heading.
    /// Either the whole group is attached, or none of it is.
    pub fn attach(&mut self, group: FlagGroup<'a>) -> Result<(), ConfigError> {
        let FlagGroup {
            title,
            description,
            flags,
        } = group;
        let specs = flags
            .into_iter()
            .map(Flag::freeze)
            .collect::<Result<Vec<FlagSpec<'a>>, ConfigError>>()?;
        let mut staged = FlagIndex::default();

        for (offset, spec) in specs.iter().enumerate() {
            self.index.check(spec.shorts(), spec.longs())?;

            for short in spec.shorts() {
                staged.insert_short(*short, offset)?;
            }

            for long in spec.longs() {
                staged.insert_long(long.as_str(), offset)?;
            }
        }

        let mut members = Vec::default();

        for spec in specs {
            members.push(self.push(spec)?);
        }

        self.sections.push(Section {
            title,
            description,
            members,
        });
        Ok(())
    }

    /// Set a default for `destination`, taking precedence over any flag's own default.
    pub fn set_default(&mut self, destination: impl Into<String>, value: impl Into<String>) {
        self.defaults.insert(destination.into(), value.into());
    }

    /// The resolved default of a flag: the registry's default for its destination, else its own.
    /// Empty defaults count as undefined.
    pub fn default_for<'s>(&'s self, flag: &'s FlagSpec<'_>) -> Option<&'s str> {
        self.defaults
            .get(flag.destination())
            .map(String::as_str)
            .or(flag.default())
            .filter(|default| !default.is_empty())
    }

    /// Find a flag by short name.
    pub fn resolve_short(&self, short: char) -> Result<&FlagSpec<'a>, ParseError> {
        let id = self.index.resolve_short(short)?;
        Ok(&self.flags[id])
    }

    /// Find a flag by long name or any unambiguous prefix of one.
    /// An exact match always wins.
    pub fn resolve_long(&self, prefix: &str) -> Result<&FlagSpec<'a>, ParseError> {
        let id = self.index.resolve_long(prefix)?;
        Ok(&self.flags[id])
    }

    /// The ungrouped flags, in rendering order.
    pub fn flags(&self) -> impl Iterator<Item = &FlagSpec<'a>> {
        self.order.iter().map(|id| &self.flags[*id])
    }

    /// The attached groups, in attachment order.
    pub fn groups(&self) -> impl Iterator<Item = GroupRef<'_, 'a>> {
        self.sections.iter().map(|section| GroupRef {
            section,
            registry: self,
        })
    }

    /// Every flag (grouped or not), in registration order.
    pub fn all_flags(&self) -> impl Iterator<Item = &FlagSpec<'a>> {
        self.flags.iter()
    }

    fn insert(&mut self, flag: Flag<'a>) -> Result<usize, ConfigError> {
        self.push(flag.freeze()?)
    }

    fn push(&mut self, spec: FlagSpec<'a>) -> Result<usize, ConfigError> {
        self.index.check(spec.shorts(), spec.longs())?;
        let id = self.flags.len();

        for short in spec.shorts() {
            self.index.insert_short(*short, id)?;
        }

        for long in spec.longs() {
            self.index.insert_long(long.as_str(), id)?;
        }

        self.flags.push(spec);
        Ok(id)
    }
}

/// A view of an attached group.
pub struct GroupRef<'r, 'a> {
    section: &'r Section,
    registry: &'r FlagRegistry<'a>,
}

impl<'r, 'a> GroupRef<'r, 'a> {
    /// The group heading.
    pub fn title(&self) -> &'r str {
        &self.section.title
    }

    /// The group description, if any.
    pub fn description(&self) -> Option<&'r str> {
        self.section.description.as_deref()
    }

    /// The group's flags, in rendering order.
    pub fn flags(&self) -> impl Iterator<Item = &'r FlagSpec<'a>> {
        let section = self.section;
        let registry = self.registry;
        section.members.iter().map(move |id| &registry.flags[*id])
    }
}
