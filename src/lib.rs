//! `optparse` is an optparse style command line parser for Rust.
//!
//! Programs declare their flags up front, and the parser takes care of the Cli conventions users already know:
//! * Short flags (`-v`), which may be clustered (`-vvx`) and may carry their value inline (`-ofile`).
//! * Long flags (`--verbose`), which may carry their value after `=` (`--output=file`) and may be abbreviated to any unambiguous prefix (`--verb`).
//! * Positional arguments, which may be interspersed with the flags, and a `--` terminator after which every token is positional.
//! * A generated `-h/--help` message, wrapped to the terminal width, and an optional `--version` message.
//!
//! Every value is kept as a string in a [`ValueStore`], keyed by the flag's destination.
//! Typed flags (ex: [`ValueType::Int`]) are validated during the parse, so that reading them back via [`ValueStore::get_as`] does not fail for user input.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo_copy.rs")]
//! ```
//!
//! ```console
//! $ demo_copy --help
//! Usage: demo_copy [options] SOURCE... DEST
//!
//! Copy SOURCE to DEST, or multiple SOURCE(s) to a directory.
//!
//! Options:
//!   --version             show program's version number and exit
//!   -h, --help            show this help message and exit
//!   -r, --recursive       copy directories recursively
//!   -v, --verbose         explain what is being done (repeat for more detail)
//!   --backup=CONTROL      make a backup of each existing destination file
//!                         [default: existing]
//!   -j JOBS, --jobs=JOBS  copy with N workers
//!
//! $ demo_copy -rvv --back numbered a.txt b.txt out/
//! recursive: true
//! verbosity: 2
//! backup: numbered
//! jobs: 1
//! a.txt, b.txt -> out/
//!
//! $ demo_copy --backup=always a.txt out/
//! Usage: demo_copy [options] SOURCE... DEST
//!
//! demo_copy: error: option --backup: invalid choice: 'always' (choose from 'none', 'numbered', 'existing', 'simple')
//!
//! $ demo_copy --jobs
//! Usage: demo_copy [options] SOURCE... DEST
//!
//! demo_copy: error: --jobs option requires an argument
//! ```
//!
//! # Flags
//! Configure `optparse` by starting with an [`OptionParser`] and `add`ing [`Flag`]s.
//! The first long name (else the first short name) of a flag is its *destination*: the key its value is stored under.
//! For example, `--dry-run` is stored under `dry_run`; use [`Flag::dest`] to choose otherwise.
//!
//! What happens when a flag is matched is decided by its [`Action`]:
//! * `Store`/`Append`: consume a value, replacing/adding to the destination.
//! * `StoreConst`/`AppendConst`/`StoreTrue`/`StoreFalse`: record a fixed value without consuming anything.
//! * `Count`: increment the destination (`-vvv` stores `3`).
//! * `Callback`: hand the value over to the program's own closure (see [`Flag::callback`]).
//! * `ShowHelp`/`ShowVersion`: stop the parse, rendering the help/version message.
//!
//! ### Defaults
//! A flag's default (see [`Flag::default`]) is applied after the parse, to every destination not supplied in the input.
//! The program may override it via [`OptionParser::set_default`].
//! Defaults are not marked as user supplied (see [`ValueStore::is_set_by_user`]).
//!
//! # Groups
//! Related flags may be collected in a [`FlagGroup`], which renders under its own heading after the main options.
//! Grouping only affects the help message; the group's flags are matched like any other.
//! ```no_run
#![doc = include_str!("../demos/demo_groups.rs")]
//! ```
//!
//! ```console
//! $ demo_groups -h
//! Usage: demo_groups [options] FILE...
//!
//! Compress or decompress FILE(s) in place.
//!
//! Options:
//!   -h, --help            show this help message and exit
//!   -d, --decompress      decompress instead of compressing
//!   -l LEVEL, --level=LEVEL
//!                         compression level [default: 6]
//!
//!   Output Options:
//!     These control where the result is written, and whether the input is kept.
//!
//!     -c, --stdout        write on standard output, keep original files unchanged
//!     -k, --keep          keep (don't delete) input files
//!     -S SUFFIX, --suffix=SUFFIX
//!                         use suffix SUFFIX on compressed files
//!
//! Exit status is 0 on success and 1 on a usage error.
//! ```
//!
//! # Testing
//! [`GeneralParser::try_parse`] neither prints nor exits, which makes it the entry point for testing a Cli configuration.
//! Pair it with [`FixedWidth`] for a help message which does not depend on the terminal.
//!
//! # Features
//! * `tracing_debug`: emit debug logs via [`tracing`](https://docs.rs/tracing), tracing the parse token by token.

pub use optparse_builder::*;
