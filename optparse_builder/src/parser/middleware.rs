use std::env;
use std::path::Path;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{FlagRegistry, ParsedArgs};
use crate::parser::base::*;
use crate::parser::interface::{UserInterface, WidthProvider};
use crate::parser::printer::Printer;

/// The result of a parse that did not fail.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every token was consumed.
    Complete(ParsedArgs),
    /// A terminating flag (help or version) was matched: the program should print `output` and exit with `status`.
    Exit {
        /// The process exit status.
        status: i32,
        /// The rendered text, destined for standard output.
        output: String,
    },
}

/// The configured option parser.
/// Built via [`OptionParser::build`](./struct.OptionParser.html#method.build).
///
/// The parser is immutable; every parse starts from an empty value store, so it may be used repeatedly.
pub struct GeneralParser<'a> {
    program: Option<String>,
    registry: FlagRegistry<'a>,
    printer: Printer,
    interspersed: bool,
    width: Box<dyn WidthProvider + 'a>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(
        program: Option<String>,
        registry: FlagRegistry<'a>,
        printer: Printer,
        interspersed: bool,
        width: Box<dyn WidthProvider + 'a>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program,
            registry,
            printer,
            interspersed,
            width,
            user_interface,
        }
    }

    /// The program name: as configured, else the base name of the running executable.
    pub fn program(&self) -> String {
        match &self.program {
            Some(program) => program.clone(),
            None => env::args()
                .next()
                .map(|argv0| base_name(&argv0))
                .unwrap_or_default(),
        }
    }

    /// The registered flags.
    pub fn registry(&self) -> &FlagRegistry<'a> {
        &self.registry
    }

    /// Render the help message.
    pub fn format_help(&self) -> String {
        self.format_help_for(&self.program())
    }

    /// Render the usage line (`Usage: ..`), unless it is suppressed.
    pub fn format_usage(&self) -> Option<String> {
        self.printer.format_usage(&self.program())
    }

    /// Render the version message, if a version is configured.
    pub fn format_version(&self) -> Option<String> {
        self.printer.format_version(&self.program())
    }

    fn format_help_for(&self, program: &str) -> String {
        let columns = self.width.columns();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Rendering help for '{program}' at {columns} columns.");
        }

        self.printer.format_help(program, &self.registry, columns)
    }

    /// Parse the input tokens, without printing anything or exiting.
    ///
    /// Help and version requests come back as [`Outcome::Exit`], carrying the rendered text.
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::{Action, Flag, OptionParser, Outcome};
    ///
    /// let parser = OptionParser::new()
    ///     .prog("demo")
    ///     .add(Flag::new(["-q", "--quiet"]).action(Action::StoreTrue))
    ///     .build();
    ///
    /// match parser.try_parse(&["-q", "file.txt"]).unwrap() {
    ///     Outcome::Complete(parsed) => {
    ///         assert!(parsed.values().get_flag("quiet"));
    ///         assert_eq!(parsed.args(), &["file.txt"]);
    ///     }
    ///     Outcome::Exit { .. } => unreachable!(),
    /// }
    ///
    /// let outcome = parser.try_parse(&["--help"]).unwrap();
    /// assert!(matches!(outcome, Outcome::Exit { status: 0, .. }));
    /// ```
    pub fn try_parse(&self, tokens: &[&str]) -> Result<Outcome, ParseError> {
        self.try_parse_as(tokens, &self.program())
    }

    fn try_parse_as(&self, tokens: &[&str], program: &str) -> Result<Outcome, ParseError> {
        let parser = Parser::new(&self.registry, self.interspersed);

        match parser.consume(tokens)? {
            Step::Complete(parsed) => Ok(Outcome::Complete(parsed)),
            Step::PrintHelp => Ok(Outcome::Exit {
                status: 0,
                output: self.format_help_for(program),
            }),
            Step::PrintVersion => Ok(Outcome::Exit {
                status: 0,
                output: self.printer.format_version(program).unwrap_or_default(),
            }),
        }
    }

    fn report(&self, tokens: &[&str], program: &str) -> Result<ParsedArgs, i32> {
        match self.try_parse_as(tokens, program) {
            Ok(Outcome::Complete(parsed)) => Ok(parsed),
            Ok(Outcome::Exit { status, output }) => {
                self.user_interface.print(output);
                Err(status)
            }
            Err(error) => {
                self.user_interface
                    .print_error(self.printer.format_error(program, &error));
                Err(1)
            }
        }
    }

    /// Run the option parser against the input tokens.
    ///
    /// If the help or version flag is encountered, the parser will display its message and return with `Err(0)`.
    /// If parsing fails, the parser will display the usage line and the error, and return with `Err(1)`.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<ParsedArgs, i32> {
        self.report(tokens, &self.program())
    }

    /// Run the option parser against a full argument vector, program name (`argv[0]`) included.
    ///
    /// Unless configured, the program name is taken from the base name of `argv[0]`.
    pub fn parse_argv(&self, argv: &[&str]) -> Result<ParsedArgs, i32> {
        let (program, tokens) = match argv.split_first() {
            Some((argv0, tokens)) => (
                self.program.clone().unwrap_or_else(|| base_name(argv0)),
                tokens,
            ),
            None => (self.program(), argv),
        };
        self.report(tokens, &program)
    }

    /// Run the option parser against the Cli [`env::args`].
    ///
    /// If the help or version flag is encountered, the parser will display its message and exit with status `0` (via `std::process::exit`).
    /// If parsing fails, the parser will display the usage line and the error, and exit with status `1`.
    pub fn parse(&self) -> ParsedArgs {
        let argv: Vec<String> = env::args().collect();

        match self.parse_argv(
            argv.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(parsed) => parsed,
            Err(status) => {
                std::process::exit(status);
            }
        }
    }
}

fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
