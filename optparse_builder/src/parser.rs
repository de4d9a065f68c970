mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, ParseError};
pub(crate) use base::*;
pub use interface::{FixedWidth, TerminalWidth, WidthProvider};
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use printer::*;
