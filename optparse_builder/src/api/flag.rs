use std::collections::BTreeSet;

use crate::api::{FlagRegistry, ValueStore};
use crate::model::{Action, ValueType};
use crate::parser::ConfigError;

/// The behaviour invoked by a [`Action::Callback`] flag.
///
/// Receives the matched flag, the option string as typed (ex: `-v` or `--verb`), the value (empty for arity 0), the registry, and the in-progress values.
pub type Callback<'a> =
    Box<dyn Fn(&FlagSpec<'_>, &str, &str, &FlagRegistry<'_>, &mut ValueStore) + 'a>;

/// A flag for the option parser, under configuration.
/// Used with [`OptionParser::add`](./struct.OptionParser.html#method.add) and [`FlagGroup::add`](./struct.FlagGroup.html#method.add).
///
/// Once added, the flag is frozen into a [`FlagSpec`].
///
/// ### Example
/// ```
/// # use optparse_builder as optparse;
/// use optparse::{Action, Flag, ValueType};
///
/// Flag::new(["-n", "--number"])
///     .value_type(ValueType::Int)
///     .default("3")
///     .help("How many times [default: %default].");
/// Flag::new(["-v"]).action(Action::Count);
/// ```
pub struct Flag<'a> {
    names: Vec<String>,
    action: Action,
    value_type: Option<ValueType>,
    destination: Option<String>,
    default: Option<String>,
    const_value: Option<String>,
    choices: Vec<String>,
    allow_optional_value: bool,
    help: Option<String>,
    metavar: Option<String>,
    callback: Option<Callback<'a>>,
}

impl<'a> Flag<'a> {
    /// Create a flag bound to the names `-x` (short) and/or `--xxx` (long).
    /// The action defaults to [`Action::Store`].
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            action: Action::Store,
            value_type: None,
            destination: None,
            default: None,
            const_value: None,
            choices: Vec::default(),
            allow_optional_value: false,
            help: None,
            metavar: None,
            callback: None,
        }
    }

    /// Set the action triggered when this flag is matched.
    pub fn action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Set the type the value is validated against.
    /// When unset, `Store`/`Append` flags are [`ValueType::String`] and all other actions are [`ValueType::None`].
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type.replace(value_type);
        self
    }

    /// Override the destination key.
    pub fn dest(mut self, destination: impl Into<String>) -> Self {
        self.destination.replace(destination.into());
        self
    }

    /// Set the default, applied when the flag does not appear in the input.
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default.replace(default.into());
        self
    }

    /// Set the constant for `StoreConst`/`AppendConst`.
    pub fn constant(mut self, value: impl Into<String>) -> Self {
        self.const_value.replace(value.into());
        self
    }

    /// Restrict the value to a set of choices.
    /// This also sets the value type to [`ValueType::Choice`].
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self.value_type.replace(ValueType::Choice);
        self
    }

    /// Allow the short form to appear without a value when it is the final token, falling back to the default.
    pub fn optional_value(mut self) -> Self {
        self.allow_optional_value = true;
        self
    }

    /// Document the help message for this flag.
    /// Occurrences of `%default` are substituted by the flag's default.
    /// Use [`SUPPRESS_HELP`](./constant.SUPPRESS_HELP.html) to hide the flag.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Set the value placeholder shown in the help message.
    pub fn metavar(mut self, metavar: impl Into<String>) -> Self {
        self.metavar.replace(metavar.into());
        self
    }

    /// Invoke `callback` when the flag is matched.
    /// This also sets the action to [`Action::Callback`].
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::{Flag, OptionParser, ValueType};
    ///
    /// let parser = OptionParser::new()
    ///     .add(
    ///         Flag::new(["--scale"])
    ///             .value_type(ValueType::Int)
    ///             .callback(|flag, _opt, value, _registry, values| {
    ///                 let doubled = value.parse::<i64>().unwrap() * 2;
    ///                 values.set(flag.destination(), doubled.to_string());
    ///             }),
    ///     )
    ///     .build();
    ///
    /// let parsed = parser.parse_tokens(&["--scale", "21"]).unwrap();
    /// assert_eq!(parsed.values().get("scale"), Some("42"));
    /// ```
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FlagSpec<'_>, &str, &str, &FlagRegistry<'_>, &mut ValueStore) + 'a,
    {
        self.callback.replace(Box::new(callback));
        self.action = Action::Callback;
        self
    }

    pub(crate) fn freeze(self) -> Result<FlagSpec<'a>, ConfigError> {
        let Flag {
            names,
            action,
            value_type,
            destination,
            default,
            const_value,
            choices,
            allow_optional_value,
            help,
            metavar,
            callback,
        } = self;

        if names.is_empty() {
            return Err(ConfigError("Cannot add a flag without names.".to_string()));
        }

        let mut shorts = BTreeSet::default();
        let mut longs = BTreeSet::default();
        let mut first_short = None;
        let mut first_long = None;

        for name in &names {
            if let Some(long) = name
                .strip_prefix("--")
                .filter(|long| !long.is_empty() && !long.contains('='))
            {
                first_long.get_or_insert_with(|| long.replace('-', "_"));
                if !longs.insert(long.to_string()) {
                    return Err(ConfigError(format!("Cannot duplicate the option '{name}'.")));
                }
            } else {
                let mut chars = name.strip_prefix('-').unwrap_or_default().chars();
                match (chars.next(), chars.next()) {
                    (Some(short), None) if short != '-' => {
                        first_short.get_or_insert_with(|| short.to_string());
                        if !shorts.insert(short) {
                            return Err(ConfigError(format!(
                                "Cannot duplicate the short option '{name}'."
                            )));
                        }
                    }
                    _ => {
                        return Err(ConfigError(format!(
                            "Invalid flag name '{name}': use '-x' or '--name'."
                        )));
                    }
                }
            }
        }

        let destination = destination
            .or(first_long)
            .or(first_short)
            .unwrap_or_default();

        if destination.is_empty() {
            return Err(ConfigError(format!(
                "Flag '{}' cannot have an empty destination.",
                names.join("/")
            )));
        }

        let value_type = value_type.unwrap_or(match action {
            Action::Store | Action::Append => ValueType::String,
            _ => ValueType::None,
        });

        if value_type == ValueType::Choice && choices.is_empty() {
            return Err(ConfigError(format!(
                "Flag '{}' must declare its choices.",
                names.join("/")
            )));
        }

        if action == Action::Callback && callback.is_none() {
            return Err(ConfigError(format!(
                "Flag '{}' must declare its callback.",
                names.join("/")
            )));
        }

        Ok(FlagSpec {
            shorts,
            longs,
            action,
            value_type,
            destination,
            default,
            const_value,
            choices,
            allow_optional_value,
            help,
            metavar,
            callback,
        })
    }
}

/// A registered flag.
///
/// Immutable: the registry's lookup indices point at it.
pub struct FlagSpec<'a> {
    shorts: BTreeSet<char>,
    longs: BTreeSet<String>,
    action: Action,
    value_type: ValueType,
    destination: String,
    default: Option<String>,
    const_value: Option<String>,
    choices: Vec<String>,
    allow_optional_value: bool,
    help: Option<String>,
    metavar: Option<String>,
    callback: Option<Callback<'a>>,
}

impl<'a> std::fmt::Debug for FlagSpec<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagSpec")
            .field("shorts", &self.shorts)
            .field("longs", &self.longs)
            .field("action", &self.action)
            .field("value_type", &self.value_type)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

impl<'a> FlagSpec<'a> {
    /// The short names, without the leading dash.
    pub fn shorts(&self) -> &BTreeSet<char> {
        &self.shorts
    }

    /// The long names, without the leading dashes.
    pub fn longs(&self) -> &BTreeSet<String> {
        &self.longs
    }

    /// The action triggered when matched.
    pub fn action(&self) -> Action {
        self.action
    }

    /// The type the value is validated against.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The number of values (0 or 1) consumed when matched.
    pub fn arity(&self) -> u8 {
        self.action.arity(self.value_type)
    }

    /// The key under which the value is stored.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The flag's own default; see [`FlagRegistry::default_for`] for the resolved default.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The payload of `StoreConst`/`AppendConst`.
    pub fn const_value(&self) -> Option<&str> {
        self.const_value.as_deref()
    }

    /// The allowed values of a [`ValueType::Choice`] flag, in declaration order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Whether the value may be omitted in favour of the default.
    pub fn allow_optional_value(&self) -> bool {
        self.allow_optional_value
    }

    /// The raw help message.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The value placeholder; the upper-cased destination unless set explicitly.
    pub fn metavar(&self) -> String {
        match &self.metavar {
            Some(metavar) => metavar.clone(),
            None => self.destination.to_uppercase(),
        }
    }

    pub(crate) fn callback(&self) -> Option<&Callback<'a>> {
        self.callback.as_ref()
    }
}
