pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "show this help message and exit";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_MESSAGE: &str = "show program's version number and exit";

/// Help text sentinel which hides a flag from the help message.
pub const SUPPRESS_HELP: &str = "SUPPRESSHELP";
/// Usage sentinel which hides the usage line.
pub const SUPPRESS_USAGE: &str = "SUPPRESSUSAGE";

pub(crate) const DEFAULT_USAGE: &str = "%prog [options]";
pub(crate) const PROGRAM_PLACEHOLDER: &str = "%prog";
pub(crate) const DEFAULT_PLACEHOLDER: &str = "%default";
pub(crate) const USAGE_LABEL: &str = "Usage";
pub(crate) const USAGE_PREFIX: &str = "usage: ";
pub(crate) const OPTIONS_LABEL: &str = "Options";
pub(crate) const ERROR_LABEL: &str = "error";

pub(crate) const DEFAULT_COLUMNS: usize = 80;
pub(crate) const COLUMNS_VARIABLE: &str = "COLUMNS";
