use std::cmp::min;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{FlagRegistry, FlagSpec};
use crate::constant::*;
use crate::parser::interface::wrap;
use crate::parser::ParseError;

// The names column takes 30% of the width, up to 36 columns.
const NAMES_RATIO: (usize, usize) = (3, 10);
const NAMES_MAXIMUM: usize = 36;
const MAIN_INDENT: usize = 2;
const GROUP_INDENT: usize = 4;

pub(crate) struct Printer {
    usage: String,
    version: Option<String>,
    description: Option<String>,
    epilog: Option<String>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(DEFAULT_USAGE, None, None, None)
    }

    pub(crate) fn new(
        usage: impl Into<String>,
        version: Option<String>,
        description: Option<String>,
        epilog: Option<String>,
    ) -> Self {
        Self {
            usage: usage.into(),
            version,
            description: description.filter(|text| !text.is_empty()),
            epilog: epilog.filter(|text| !text.is_empty()),
        }
    }

    /// `Usage: ..` with a trailing newline, or nothing when suppressed.
    pub(crate) fn format_usage(&self, program: &str) -> Option<String> {
        if self.usage == SUPPRESS_USAGE {
            None
        } else {
            Some(format!(
                "{USAGE_LABEL}: {}\n",
                self.usage.replace(PROGRAM_PLACEHOLDER, program)
            ))
        }
    }

    pub(crate) fn format_version(&self, program: &str) -> Option<String> {
        self.version
            .as_ref()
            .map(|version| format!("{}\n", version.replace(PROGRAM_PLACEHOLDER, program)))
    }

    pub(crate) fn format_error(&self, program: &str, error: &ParseError) -> String {
        let mut out = String::default();

        if let Some(usage) = self.format_usage(program) {
            out.push_str(&usage);
            out.push('\n');
        }

        out.push_str(&format!("{program}: {ERROR_LABEL}: {error}\n"));
        out
    }

    pub(crate) fn format_help(
        &self,
        program: &str,
        registry: &FlagRegistry<'_>,
        columns: usize,
    ) -> String {
        let mut out = String::default();

        if let Some(usage) = self.format_usage(program) {
            out.push_str(&usage);
            out.push('\n');
        }

        if let Some(description) = &self.description {
            paragraph(&mut out, description, 0, columns);
            out.push('\n');
        }

        out.push_str(&format!("{OPTIONS_LABEL}:\n"));

        for flag in registry.flags() {
            format_flag(&mut out, flag, registry, MAIN_INDENT, columns);
        }

        for group in registry.groups() {
            out.push_str(&format!("\n{:MAIN_INDENT$}{}:\n", "", group.title()));

            if let Some(description) = group.description().filter(|text| !text.is_empty()) {
                paragraph(
                    &mut out,
                    description,
                    GROUP_INDENT,
                    columns.saturating_sub(GROUP_INDENT),
                );
                out.push('\n');
            }

            for flag in group.flags() {
                format_flag(&mut out, flag, registry, GROUP_INDENT, columns);
            }
        }

        if let Some(epilog) = &self.epilog {
            out.push('\n');
            paragraph(&mut out, epilog, 0, columns);
        }

        out
    }
}

fn paragraph(out: &mut String, text: &str, indent: usize, columns: usize) {
    for line in wrap(text, indent, columns) {
        out.push_str(&format!("{:indent$}{line}\n", ""));
    }
}

fn format_names(flag: &FlagSpec<'_>, indent: usize) -> String {
    let (short_metavar, long_metavar) = if flag.arity() == 1 {
        let metavar = flag.metavar();

        if flag.allow_optional_value() {
            (format!(" [{metavar}]"), format!("[={metavar}]"))
        } else {
            (format!(" {metavar}"), format!("={metavar}"))
        }
    } else {
        (String::default(), String::default())
    };
    let names = flag
        .shorts()
        .iter()
        .map(|short| format!("-{short}{short_metavar}"))
        .chain(
            flag.longs()
                .iter()
                .map(|long| format!("--{long}{long_metavar}")),
        )
        .collect::<Vec<String>>();

    format!("{:indent$}{}", "", names.join(", "))
}

fn format_flag(
    out: &mut String,
    flag: &FlagSpec<'_>,
    registry: &FlagRegistry<'_>,
    indent: usize,
    columns: usize,
) {
    if flag.help() == Some(SUPPRESS_HELP) {
        return;
    }

    let names = format_names(flag, indent);
    let names_width = names.chars().count();
    let help_column = min(columns.saturating_mul(NAMES_RATIO.0) / NAMES_RATIO.1, NAMES_MAXIMUM);
    let help = flag.help().filter(|help| !help.is_empty());
    out.push_str(&names);

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Names '{names}' ({names_width}) against help column {help_column}.");
    }

    // Overlong names get the help text on the following lines.
    let indent_first = names_width >= help_column.saturating_sub(1);

    if indent_first {
        out.push('\n');
    } else {
        out.push_str(&format!("{:width$}", "", width = help_column - names_width));

        if help.is_none() {
            out.push('\n');
        }
    }

    if let Some(help) = help {
        let help = match registry.default_for(flag) {
            Some(default) => help.replace(DEFAULT_PLACEHOLDER, default),
            None => help.to_string(),
        };

        for (i, line) in wrap(&help, help_column, columns).into_iter().enumerate() {
            if i > 0 || indent_first {
                out.push_str(&format!("{:help_column$}", ""));
            }

            out.push_str(line);
            out.push('\n');
        }
    }
}
