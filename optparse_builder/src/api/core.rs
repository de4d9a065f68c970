use crate::api::{Flag, FlagGroup, FlagRegistry};
use crate::constant::*;
use crate::model::Action;
use crate::parser::{
    ConfigError, ConsoleInterface, GeneralParser, Printer, TerminalWidth, UserInterface,
    WidthProvider,
};

/// The option parser, under configuration.
///
/// ### Example
/// ```
/// # use optparse_builder as optparse;
/// use optparse::{Action, Flag, OptionParser};
///
/// let parser = OptionParser::new()
///     .prog("program")
///     .add(Flag::new(["-v", "--verbose"]).action(Action::Count))
///     .build();
///
/// let parsed = parser.parse_tokens(&["-vv", "input"]).unwrap();
/// assert_eq!(parsed.values().get("verbose"), Some("2"));
/// assert_eq!(parsed.args(), &["input"]);
/// ```
pub struct OptionParser<'a> {
    program: Option<String>,
    usage: String,
    version: Option<String>,
    description: Option<String>,
    epilog: Option<String>,
    add_help_option: bool,
    add_version_option: bool,
    interspersed: bool,
    registry: FlagRegistry<'a>,
    width: Box<dyn WidthProvider + 'a>,
    deferred_error: Option<ConfigError>,
}

impl<'a> Default for OptionParser<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> OptionParser<'a> {
    /// Create an option parser.
    ///
    /// By default: the usage is `%prog [options]`, the help flag is added, the version flag is added (once a version is set), and flags may be interspersed with positional arguments.
    pub fn new() -> Self {
        Self {
            program: None,
            usage: DEFAULT_USAGE.to_string(),
            version: None,
            description: None,
            epilog: None,
            add_help_option: true,
            add_version_option: true,
            interspersed: true,
            registry: FlagRegistry::default(),
            width: Box::new(TerminalWidth),
            deferred_error: None,
        }
    }

    /// Set the program name, substituted for `%prog`.
    /// When unset, the base name of `argv[0]` is used.
    pub fn prog(mut self, program: impl Into<String>) -> Self {
        self.program.replace(program.into());
        self
    }

    /// Set the usage template; `%prog` is substituted by the program name.
    /// A leading `usage: ` (in any case) is dropped.
    /// Use [`SUPPRESS_USAGE`](./constant.SUPPRESS_USAGE.html) to hide the usage line.
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::OptionParser;
    ///
    /// let parser = OptionParser::new()
    ///     .prog("copy")
    ///     .usage("Usage: %prog [options] SOURCE DEST")
    ///     .build();
    ///
    /// assert_eq!(parser.format_usage(), Some("Usage: copy [options] SOURCE DEST\n".to_string()));
    /// ```
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        let usage = usage.into();
        self.usage = match usage.get(..USAGE_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(USAGE_PREFIX) => {
                usage[USAGE_PREFIX.len()..].to_string()
            }
            _ => usage,
        };
        self
    }

    /// Set the version message; `%prog` is substituted by the program name.
    /// This also enables the `--version` flag, unless turned off via [`OptionParser::add_version_option`].
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version.replace(version.into());
        self
    }

    /// Document the program in full sentence/paragraph format.
    /// Rendered between the usage line and the flags.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Set the text rendered after the flags.
    pub fn epilog(mut self, epilog: impl Into<String>) -> Self {
        self.epilog.replace(epilog.into());
        self
    }

    /// Whether to add the `-h`/`--help` flag (default: `true`).
    pub fn add_help_option(mut self, yes: bool) -> Self {
        self.add_help_option = yes;
        self
    }

    /// Whether to add the `--version` flag when a version is set (default: `true`).
    pub fn add_version_option(mut self, yes: bool) -> Self {
        self.add_version_option = yes;
        self
    }

    /// Allow flags after positional arguments (the default).
    pub fn enable_interspersed_args(mut self) -> Self {
        self.interspersed = true;
        self
    }

    /// Stop scanning for flags at the first positional argument.
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::{Action, Flag, OptionParser};
    ///
    /// let parser = OptionParser::new()
    ///     .disable_interspersed_args()
    ///     .add(Flag::new(["-v"]).action(Action::StoreTrue))
    ///     .build();
    ///
    /// let parsed = parser.parse_tokens(&["-v", "command", "-v"]).unwrap();
    /// assert_eq!(parsed.args(), &["command", "-v"]);
    /// ```
    pub fn disable_interspersed_args(mut self) -> Self {
        self.interspersed = false;
        self
    }

    /// Set the default for a destination, taking precedence over the flags' own defaults.
    pub fn set_default(mut self, destination: impl Into<String>, value: impl Into<String>) -> Self {
        self.registry.set_default(destination, value);
        self
    }

    /// Add a flag to the option parser.
    /// Flags are rendered in the help message in the order they are added.
    pub fn add(mut self, flag: Flag<'a>) -> Self {
        if self.deferred_error.is_none() {
            if let Err(error) = self.registry.register(flag) {
                self.deferred_error.replace(error);
            }
        }

        self
    }

    /// Add a group of flags, rendered under the group's own heading after the ungrouped flags.
    pub fn group(mut self, group: FlagGroup<'a>) -> Self {
        if self.deferred_error.is_none() {
            if let Err(error) = self.registry.attach(group) {
                self.deferred_error.replace(error);
            }
        }

        self
    }

    /// Set the source of the help message width (default: [`TerminalWidth`](./struct.TerminalWidth.html)).
    pub fn width(mut self, width: impl WidthProvider + 'a) -> Self {
        self.width = Box::new(width);
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        let OptionParser {
            program,
            usage,
            version,
            description,
            epilog,
            add_help_option,
            add_version_option,
            interspersed,
            mut registry,
            width,
            deferred_error,
        } = self;

        if let Some(error) = deferred_error {
            return Err(error);
        }

        if add_help_option {
            registry.register_front(
                Flag::new([format!("-{HELP_SHORT}"), format!("--{HELP_NAME}")])
                    .action(Action::ShowHelp)
                    .help(HELP_MESSAGE),
            )?;
        }

        if add_version_option && version.is_some() {
            registry.register_front(
                Flag::new([format!("--{VERSION_NAME}")])
                    .action(Action::ShowVersion)
                    .help(VERSION_MESSAGE),
            )?;
        }

        Ok(GeneralParser::new(
            program,
            registry,
            Printer::new(usage, version, description, epilog),
            interspersed,
            width,
            user_interface,
        ))
    }

    /// Build the option parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated flag name).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the option parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated flag name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
