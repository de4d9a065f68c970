use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum IndexError {
    #[error("Cannot duplicate the option '--{0}'.")]
    DuplicateOption(String),

    #[error("Cannot duplicate the short option '-{0}'.")]
    DuplicateShortOption(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Short option '-{0}' does not exist.")]
    InvalidShortOption(char),

    #[error("Option '--{0}' does not exist.")]
    InvalidOption(String),

    #[error("Option '--{prefix}' is ambiguous.")]
    AmbiguousOption {
        prefix: String,
        candidates: Vec<String>,
    },
}

/// The shape of a single raw token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `--`
    Terminator,
    /// `--name` or `--name=value`
    Long {
        name: &'t str,
        value: Option<&'t str>,
    },
    /// `-x..`, holding everything after the dash.
    Short(&'t str),
    /// Anything else, including a lone `-`.
    Positional,
}

pub(crate) fn classify(token: &str) -> Token<'_> {
    if token == "--" {
        Token::Terminator
    } else if let Some(body) = token.strip_prefix("--") {
        match body.split_once('=') {
            Some((name, value)) => Token::Long {
                name,
                value: Some(value),
            },
            None => Token::Long {
                name: body,
                value: None,
            },
        }
    } else if let Some(body) = token.strip_prefix('-').filter(|body| !body.is_empty()) {
        Token::Short(body)
    } else {
        Token::Positional
    }
}

/// Short and long name lookup, pointing into the registry's flag arena.
#[derive(Debug, Default)]
pub(crate) struct FlagIndex {
    short_options: HashMap<char, usize>,
    // Ordered so that prefix candidates are a contiguous (and sorted) range.
    long_options: BTreeMap<String, usize>,
}

impl FlagIndex {
    /// Check that none of the names are already bound.
    pub(crate) fn check<'n>(
        &self,
        shorts: impl IntoIterator<Item = &'n char>,
        longs: impl IntoIterator<Item = &'n String>,
    ) -> Result<(), IndexError> {
        for short in shorts {
            if self.short_options.contains_key(short) {
                return Err(IndexError::DuplicateShortOption(*short));
            }
        }

        for long in longs {
            if self.long_options.contains_key(long) {
                return Err(IndexError::DuplicateOption(long.clone()));
            }
        }

        Ok(())
    }

    pub(crate) fn insert_short(&mut self, short: char, id: usize) -> Result<(), IndexError> {
        if self.short_options.contains_key(&short) {
            return Err(IndexError::DuplicateShortOption(short));
        }

        self.short_options.insert(short, id);
        Ok(())
    }

    pub(crate) fn insert_long(
        &mut self,
        long: impl Into<String>,
        id: usize,
    ) -> Result<(), IndexError> {
        let long = long.into();
        if self.long_options.contains_key(&long) {
            return Err(IndexError::DuplicateOption(long));
        }

        self.long_options.insert(long, id);
        Ok(())
    }

    pub(crate) fn resolve_short(&self, short: char) -> Result<usize, MatchError> {
        self.short_options
            .get(&short)
            .copied()
            .ok_or(MatchError::InvalidShortOption(short))
    }

    /// Resolve a long name, allowing any unambiguous prefix.
    /// An exact match always wins over longer candidates.
    pub(crate) fn resolve_long(&self, prefix: &str) -> Result<usize, MatchError> {
        if let Some(id) = self.long_options.get(prefix) {
            return Ok(*id);
        }

        let mut candidates = self
            .long_options
            .range(prefix.to_string()..)
            .take_while(|(name, _)| name.starts_with(prefix));

        match (candidates.next(), candidates.next()) {
            (Some((_, id)), None) => Ok(*id),
            (None, _) => Err(MatchError::InvalidOption(prefix.to_string())),
            (Some(first), Some(second)) => {
                let candidates = [first, second]
                    .into_iter()
                    .chain(candidates)
                    .map(|(name, _)| name.clone())
                    .collect();
                Err(MatchError::AmbiguousOption {
                    prefix: prefix.to_string(),
                    candidates,
                })
            }
        }
    }
}
