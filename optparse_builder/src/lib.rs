//! Builder module for `optparse`.
//! See [documentation root](https://docs.rs/optparse/latest/optparse/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use constant::{SUPPRESS_HELP, SUPPRESS_USAGE};
pub use model::*;
pub use parser::{
    ConfigError, FixedWidth, GeneralParser, Outcome, ParseError, TerminalWidth, WidthProvider,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
