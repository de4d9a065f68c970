use std::collections::VecDeque;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{FlagRegistry, FlagSpec, ParsedArgs, ValueStore};
use crate::matcher::{classify, IndexError, MatchError, Token};
use crate::model::{Action, ValueType};

/// A problem with the parser configuration, raised while it is being built.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

impl From<IndexError> for ConfigError {
    fn from(error: IndexError) -> Self {
        ConfigError(error.to_string())
    }
}

/// A failure to parse the input tokens.
/// Parsing stops at the first one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The short or long name is not registered (ex: `-x` or `--xyz`).
    #[error("no such option: {0}")]
    UnknownOption(String),

    /// The long prefix matches more than one long name.
    #[error("ambiguous option: {option} ({}?)", .candidates.join(", "))]
    AmbiguousOption {
        /// The option as typed.
        option: String,
        /// The matching long names, sorted.
        candidates: Vec<String>,
    },

    /// A flag that takes a value was given none.
    #[error("{0} option requires an argument")]
    MissingArgument(String),

    /// The value does not convert to the flag's type.
    #[error("option {option}: invalid {kind} value: '{value}'")]
    InvalidValue {
        /// The option as typed.
        option: String,
        /// The expected kind of value (ex: `integer`).
        kind: String,
        /// The offending value.
        value: String,
    },

    /// The value is not one of the flag's choices.
    #[error("option {option}: invalid choice: '{value}' (choose from {})", quoted(.choices))]
    InvalidChoice {
        /// The option as typed.
        option: String,
        /// The offending value.
        value: String,
        /// The allowed values, in declaration order.
        choices: Vec<String>,
    },
}

fn quoted(choices: &[String]) -> String {
    choices
        .iter()
        .map(|choice| format!("'{choice}'"))
        .collect::<Vec<String>>()
        .join(", ")
}

impl From<MatchError> for ParseError {
    fn from(error: MatchError) -> Self {
        match error {
            MatchError::InvalidShortOption(short) => ParseError::UnknownOption(format!("-{short}")),
            MatchError::InvalidOption(name) => ParseError::UnknownOption(format!("--{name}")),
            MatchError::AmbiguousOption { prefix, candidates } => ParseError::AmbiguousOption {
                option: format!("--{prefix}"),
                candidates: candidates
                    .into_iter()
                    .map(|candidate| format!("--{candidate}"))
                    .collect(),
            },
        }
    }
}

/// Where a scan ended.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Complete(ParsedArgs),
    PrintHelp,
    PrintVersion,
}

#[derive(Debug, Default)]
struct ParseState {
    remaining: VecDeque<String>,
    parsed: Vec<String>,
    values: ValueStore,
    args: Vec<String>,
}

impl ParseState {
    fn drain(&mut self) {
        self.args.extend(self.remaining.drain(..));
    }
}

/// The scanning engine over one registry.
/// Every call to `consume` starts from an empty value store.
pub(crate) struct Parser<'r, 'a> {
    registry: &'r FlagRegistry<'a>,
    interspersed: bool,
}

impl<'r, 'a> Parser<'r, 'a> {
    pub(crate) fn new(registry: &'r FlagRegistry<'a>, interspersed: bool) -> Self {
        Self {
            registry,
            interspersed,
        }
    }

    pub(crate) fn consume(&self, tokens: &[&str]) -> Result<Step, ParseError> {
        let mut state = ParseState {
            remaining: tokens.iter().map(|token| token.to_string()).collect(),
            ..ParseState::default()
        };

        while let Some(token) = state.remaining.pop_front() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Scanning '{token}', {} remaining.", state.remaining.len());
            }

            let step = match classify(&token) {
                Token::Terminator => {
                    state.drain();
                    None
                }
                Token::Long { name, value } => self.long(name, value, &mut state)?,
                Token::Short(body) => self.short(body, &mut state)?,
                Token::Positional => {
                    state.args.push(token.clone());

                    if !self.interspersed {
                        state.drain();
                    }

                    None
                }
            };

            if let Some(step) = step {
                return Ok(step);
            }
        }

        self.fill_defaults(&mut state.values);
        let ParseState {
            parsed,
            values,
            args,
            ..
        } = state;
        Ok(Step::Complete(ParsedArgs {
            values,
            args,
            parsed,
        }))
    }

    fn long(
        &self,
        name: &str,
        inline: Option<&str>,
        state: &mut ParseState,
    ) -> Result<Option<Step>, ParseError> {
        let option = format!("--{name}");
        let flag = self.registry.resolve_long(name)?;
        state.parsed.push(option.clone());

        if flag.arity() == 0 {
            return self.dispatch(flag, &option, "", state);
        }

        let value = match inline
            .map(str::to_string)
            .or_else(|| state.remaining.pop_front())
        {
            Some(value) if !value.is_empty() => value,
            None if flag.allow_optional_value() => self.fallback(flag),
            _ => return Err(ParseError::MissingArgument(option)),
        };
        state.parsed.push(value.clone());
        self.dispatch(flag, &option, &value, state)
    }

    fn short(&self, body: &str, state: &mut ParseState) -> Result<Option<Step>, ParseError> {
        let mut chars = body.chars();
        let letter = match chars.next() {
            Some(letter) => letter,
            None => return Ok(None),
        };
        let rest = chars.as_str();
        let option = format!("-{letter}");
        let flag = self.registry.resolve_short(letter)?;
        state.parsed.push(option.clone());

        if flag.arity() == 0 {
            if !rest.is_empty() {
                state.remaining.push_front(format!("-{rest}"));
            }

            return self.dispatch(flag, &option, "", state);
        }

        let value = if rest.is_empty() {
            match state.remaining.pop_front() {
                Some(next) => next,
                None if flag.allow_optional_value() => self.fallback(flag),
                None => return Err(ParseError::MissingArgument(option)),
            }
        } else {
            rest.to_string()
        };
        state.parsed.push(value.clone());
        self.dispatch(flag, &option, &value, state)
    }

    fn fallback(&self, flag: &FlagSpec<'_>) -> String {
        self.registry
            .default_for(flag)
            .unwrap_or_default()
            .to_string()
    }

    fn dispatch(
        &self,
        flag: &FlagSpec<'a>,
        option: &str,
        value: &str,
        state: &mut ParseState,
    ) -> Result<Option<Step>, ParseError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Dispatching {option} ({}) with '{value}'.",
                flag.action()
            );
        }

        let destination = flag.destination();
        let values = &mut state.values;

        match flag.action() {
            Action::Store => {
                check_type(flag, option, value)?;
                values.set(destination, value);
            }
            Action::StoreConst => {
                values.set(destination, flag.const_value().unwrap_or_default());
            }
            Action::StoreTrue => {
                values.set(destination, "1");
            }
            Action::StoreFalse => {
                values.set(destination, "0");
            }
            Action::Append => {
                check_type(flag, option, value)?;
                values.set(destination, value);
                values.append(destination, value);
            }
            Action::AppendConst => {
                let payload = flag.const_value().unwrap_or_default();
                values.set(destination, payload);
                values.append(destination, payload);
            }
            Action::Count => {
                values.increment(destination);
            }
            Action::ShowHelp => return Ok(Some(Step::PrintHelp)),
            Action::ShowVersion => return Ok(Some(Step::PrintVersion)),
            Action::Callback => {
                check_type(flag, option, value)?;

                if let Some(callback) = flag.callback() {
                    callback(flag, option, value, self.registry, values);
                }

                return Ok(None);
            }
        }

        values.set_by_user(destination, true);
        Ok(None)
    }

    fn fill_defaults(&self, values: &mut ValueStore) {
        for flag in self.registry.all_flags() {
            if let Some(default) = self.registry.default_for(flag) {
                if !values.is_set(flag.destination()) {
                    values.set(flag.destination(), default);
                }
            }
        }
    }
}

fn check_type(flag: &FlagSpec<'_>, option: &str, value: &str) -> Result<(), ParseError> {
    let valid = match flag.value_type() {
        ValueType::None | ValueType::String => true,
        ValueType::Int => value.parse::<i64>().is_ok(),
        ValueType::Float => value.parse::<f64>().is_ok(),
        ValueType::Complex => parse_complex(value).is_some(),
        ValueType::Choice => {
            if flag.choices().iter().any(|choice| choice == value) {
                return Ok(());
            }

            return Err(ParseError::InvalidChoice {
                option: option.to_string(),
                value: value.to_string(),
                choices: flag.choices().to_vec(),
            });
        }
    };

    if valid {
        Ok(())
    } else {
        Err(ParseError::InvalidValue {
            option: option.to_string(),
            kind: flag.value_type().description().to_string(),
            value: value.to_string(),
        })
    }
}

/// Parse `re`, `imj`, `re+imj`, `(re)` or `(re,im)` into its real and imaginary parts.
fn parse_complex(value: &str) -> Option<(f64, f64)> {
    if let Some(inner) = value.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return match inner.split_once(',') {
            Some((real, imaginary)) => Some((
                real.trim().parse().ok()?,
                imaginary.trim().parse().ok()?,
            )),
            None => Some((inner.trim().parse().ok()?, 0.0)),
        };
    }

    if let Ok(real) = value.parse::<f64>() {
        return Some((real, 0.0));
    }

    let body = value
        .strip_suffix('j')
        .or_else(|| value.strip_suffix('J'))?;
    // The sign between the parts, skipping a leading sign and exponent signs.
    let split = body.char_indices().rev().find(|(i, c)| {
        (*c == '+' || *c == '-') && *i > 0 && !body[..*i].ends_with(|p: char| p == 'e' || p == 'E')
    });

    match split {
        Some((i, _)) => Some((body[..i].parse().ok()?, imaginary_part(&body[i..])?)),
        None => Some((0.0, imaginary_part(body)?)),
    }
}

fn imaginary_part(text: &str) -> Option<f64> {
    match text {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => text.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Flag, FlagGroup};
    use rand::{thread_rng, Rng};
    use rstest::rstest;
    use std::cell::RefCell;

    fn complete(result: Result<Step, ParseError>) -> ParsedArgs {
        match result.unwrap() {
            Step::Complete(parsed) => parsed,
            step => panic!("expected a complete parse, got {step:?}"),
        }
    }

    fn registry() -> FlagRegistry<'static> {
        let mut registry = FlagRegistry::default();
        registry
            .register(Flag::new(["-a", "--all"]).action(Action::StoreTrue))
            .unwrap();
        registry.register(Flag::new(["-b", "--bee"])).unwrap();
        registry
            .register(Flag::new(["-v", "--verbose"]).action(Action::Count))
            .unwrap();
        registry
            .register(Flag::new(["-n", "--number"]).value_type(ValueType::Int))
            .unwrap();
        registry
            .register(Flag::new(["--tag"]).action(Action::Append))
            .unwrap();
        registry
            .register(Flag::new(["-h"]).action(Action::ShowHelp))
            .unwrap();
        registry
            .register(Flag::new(["--version"]).action(Action::ShowVersion))
            .unwrap();
        registry
    }

    #[test]
    fn consume_empty() {
        // Setup
        let registry = registry();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(&[]));

        // Verify
        assert_eq!(parsed, ParsedArgs::default());
    }

    #[rstest]
    #[case(vec!["-ab", "X"], vec!["-a", "-b", "X"])]
    #[case(vec!["-abX"], vec!["-a", "-b", "X"])]
    #[case(vec!["-a", "-bX"], vec!["-a", "-b", "X"])]
    #[case(vec!["--all", "--bee=X"], vec!["--all", "--bee", "X"])]
    #[case(vec!["--al", "--b", "X"], vec!["--al", "--b", "X"])]
    fn consume_cluster(#[case] tokens: Vec<&str>, #[case] expected_parsed: Vec<&str>) {
        // Setup
        let registry = registry();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(tokens.as_slice()));

        // Verify
        assert!(parsed.values().get_flag("all"));
        assert!(parsed.values().is_set_by_user("all"));
        assert_eq!(parsed.values().get("bee"), Some("X"));
        assert!(parsed.args().is_empty());
        assert_eq!(parsed.parsed(), expected_parsed.as_slice());
    }

    #[test]
    fn consume_count() {
        // Setup
        let registry = registry();
        let parser = Parser::new(&registry, true);
        let n: usize = thread_rng().gen_range(1..20);
        let token = format!("-{}", "v".repeat(n));

        // Execute
        let parsed = complete(parser.consume(&[token.as_str(), "--verb"]));

        // Verify
        assert_eq!(parsed.values().get("verbose"), Some((n + 1).to_string().as_str()));
    }

    #[test]
    fn consume_append() {
        // Setup
        let registry = registry();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(&["--tag=x", "--tag", "y"]));

        // Verify
        assert_eq!(parsed.values().all("tag"), &["x".to_string(), "y".to_string()]);
        assert_eq!(parsed.values().get("tag"), Some("y"));
    }

    #[rstest]
    #[case(vec!["--", "--not-a-flag", "plain"], vec!["--not-a-flag", "plain"])]
    #[case(vec!["x", "-a", "y"], vec!["x", "y"])]
    #[case(vec!["-", "-a"], vec!["-"])]
    #[case(vec!["-a", "--", "--", "-b"], vec!["--", "-b"])]
    fn consume_positionals(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let registry = registry();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(tokens.as_slice()));

        // Verify
        assert_eq!(parsed.args(), expected.as_slice());
    }

    #[rstest]
    #[case(vec!["-a-bee"], true, vec![])]
    #[case(vec!["-a-b"], true, vec![])]
    #[case(vec!["-a-", "-x"], false, vec!["-x"])]
    #[case(vec!["-a-", "--bee", "x"], false, vec!["--bee", "x"])]
    fn consume_cluster_dash(
        #[case] tokens: Vec<&str>,
        #[case] expected_bee: bool,
        #[case] expected_args: Vec<&str>,
    ) {
        // Setup
        let mut registry = FlagRegistry::default();
        registry
            .register(Flag::new(["-a"]).action(Action::StoreTrue))
            .unwrap();
        registry
            .register(Flag::new(["--bee"]).action(Action::StoreTrue))
            .unwrap();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(tokens.as_slice()));

        // Verify
        assert!(parsed.values().get_flag("a"));
        assert_eq!(parsed.values().get_flag("bee"), expected_bee);
        assert_eq!(parsed.args(), expected_args.as_slice());
    }

    #[test]
    fn consume_not_interspersed() {
        // Setup
        let registry = registry();
        let parser = Parser::new(&registry, false);

        // Execute
        let parsed = complete(parser.consume(&["-a", "pos1", "--bee", "pos2"]));

        // Verify
        assert!(parsed.values().get_flag("all"));
        assert!(!parsed.values().is_set("bee"));
        assert_eq!(parsed.args(), &["pos1", "--bee", "pos2"]);
    }

    #[rstest]
    #[case(vec!["-h"], Step::PrintHelp)]
    #[case(vec!["-ah", "--unknown"], Step::PrintHelp)]
    #[case(vec!["--vers", "-h"], Step::PrintVersion)]
    fn consume_terminal(#[case] tokens: Vec<&str>, #[case] expected: Step) {
        // Setup
        let registry = registry();
        let parser = Parser::new(&registry, true);

        // Execute
        let step = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(step, expected);
    }

    #[rstest]
    #[case(vec!["-x"], ParseError::UnknownOption("-x".to_string()))]
    #[case(vec!["-ax"], ParseError::UnknownOption("-x".to_string()))]
    #[case(vec!["-a-b"], ParseError::MissingArgument("--b".to_string()))]
    #[case(vec!["-a-x"], ParseError::UnknownOption("--x".to_string()))]
    #[case(vec!["--xyz"], ParseError::UnknownOption("--xyz".to_string()))]
    #[case(vec!["-b"], ParseError::MissingArgument("-b".to_string()))]
    #[case(vec!["--bee"], ParseError::MissingArgument("--bee".to_string()))]
    #[case(vec!["--be="], ParseError::MissingArgument("--be".to_string()))]
    #[case(vec!["--bee", ""], ParseError::MissingArgument("--bee".to_string()))]
    #[case(vec!["-n", "abc"], ParseError::InvalidValue {
        option: "-n".to_string(),
        kind: "integer".to_string(),
        value: "abc".to_string(),
    })]
    #[case(vec!["--num=1.5"], ParseError::InvalidValue {
        option: "--num".to_string(),
        kind: "integer".to_string(),
        value: "1.5".to_string(),
    })]
    fn consume_error(#[case] tokens: Vec<&str>, #[case] expected: ParseError) {
        // Setup
        let registry = registry();
        let parser = Parser::new(&registry, true);

        // Execute
        let error = parser.consume(tokens.as_slice()).unwrap_err();

        // Verify
        assert_eq!(error, expected);
    }

    #[test]
    fn consume_ambiguous() {
        // Setup
        let mut registry = FlagRegistry::default();
        registry.register(Flag::new(["--foobar"])).unwrap();
        registry.register(Flag::new(["--foobaz"])).unwrap();
        let parser = Parser::new(&registry, true);

        // Execute
        let error = parser.consume(&["--foob=x"]).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "ambiguous option: --foob (--foobar, --foobaz?)"
        );
    }

    #[test]
    fn consume_exact_beats_prefix() {
        // Setup
        let mut registry = FlagRegistry::default();
        registry.register(Flag::new(["--foo"])).unwrap();
        registry.register(Flag::new(["--foobar"])).unwrap();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(&["--foo=1"]));

        // Verify
        assert_eq!(parsed.values().get("foo"), Some("1"));
        assert!(!parsed.values().is_set("foobar"));
    }

    #[test]
    fn consume_choice() {
        // Setup
        let mut registry = FlagRegistry::default();
        registry
            .register(Flag::new(["-m", "--mode"]).choices(["a", "b"]))
            .unwrap();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(&["-mb"]));
        let error = parser.consume(&["--mode", "c"]).unwrap_err();

        // Verify
        assert_eq!(parsed.values().get("mode"), Some("b"));
        assert_eq!(
            error.to_string(),
            "option --mode: invalid choice: 'c' (choose from 'a', 'b')"
        );
        assert_matches!(error, ParseError::InvalidChoice { choices, .. } => {
            assert_eq!(choices, vec!["a", "b"]);
        });
    }

    #[test]
    fn consume_defaults() {
        // Setup
        let mut registry = FlagRegistry::default();
        registry
            .register(Flag::new(["-o", "--output"]).default("out.txt"))
            .unwrap();
        registry
            .register(Flag::new(["--level"]).default("1"))
            .unwrap();
        registry
            .register(Flag::new(["--empty"]).default(""))
            .unwrap();
        registry
            .attach(FlagGroup::new("Extra").add(Flag::new(["--extra"]).default("e")))
            .unwrap();
        registry.set_default("level", "5");
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(&["-o", "given"]));

        // Verify
        let values = parsed.values();
        assert_eq!(values.get("output"), Some("given"));
        assert!(values.is_set_by_user("output"));
        assert_eq!(values.get("level"), Some("5"));
        assert!(!values.is_set_by_user("level"));
        assert_eq!(values.get("extra"), Some("e"));
        assert!(!values.is_set("empty"));
    }

    #[test]
    fn consume_fresh_each_time() {
        // Setup
        let registry = registry();
        let parser = Parser::new(&registry, true);

        // Execute
        let first = complete(parser.consume(&["-vv", "x"]));
        let second = complete(parser.consume(&["-v"]));

        // Verify
        assert_eq!(first.values().get("verbose"), Some("2"));
        assert_eq!(second.values().get("verbose"), Some("1"));
        assert!(second.args().is_empty());
    }

    #[rstest]
    #[case(vec!["-l"], Some("3"), vec!["-l", "3"])]
    #[case(vec!["--level"], Some("3"), vec!["--level", "3"])]
    #[case(vec!["-l", "7"], Some("7"), vec!["-l", "7"])]
    #[case(vec!["--level=7"], Some("7"), vec!["--level", "7"])]
    fn consume_optional_value(
        #[case] tokens: Vec<&str>,
        #[case] expected: Option<&str>,
        #[case] expected_parsed: Vec<&str>,
    ) {
        // Setup
        let mut registry = FlagRegistry::default();
        registry
            .register(
                Flag::new(["-l", "--level"])
                    .value_type(ValueType::Int)
                    .default("3")
                    .optional_value(),
            )
            .unwrap();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(tokens.as_slice()));

        // Verify
        assert_eq!(parsed.values().get("level"), expected);
        assert!(parsed.values().is_set_by_user("level"));
        assert_eq!(parsed.parsed(), expected_parsed.as_slice());
    }

    #[rstest]
    #[case(Action::StoreConst, Some("k"), vec![])]
    #[case(Action::AppendConst, Some("k"), vec!["k", "k"])]
    #[case(Action::StoreFalse, Some("0"), vec![])]
    fn consume_constant(
        #[case] action: Action,
        #[case] expected: Option<&str>,
        #[case] expected_all: Vec<&str>,
    ) {
        // Setup
        let mut registry = FlagRegistry::default();
        registry
            .register(Flag::new(["-k"]).action(action).constant("k"))
            .unwrap();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(&["-kk"]));

        // Verify
        assert_eq!(parsed.values().get("k"), expected);
        assert_eq!(parsed.values().all("k"), expected_all.as_slice());
    }

    #[test]
    fn consume_callback() {
        // Setup
        let seen = RefCell::new(Vec::default());
        let mut registry = FlagRegistry::default();
        registry
            .register(
                Flag::new(["-s", "--scale"])
                    .value_type(ValueType::Float)
                    .callback(|flag, option, value, registry, values| {
                        seen.borrow_mut().push(format!("{option}={value}"));
                        assert!(registry.resolve_short('s').is_ok());
                        values.set(flag.destination(), format!("{value}!"));
                    }),
            )
            .unwrap();
        let parser = Parser::new(&registry, true);

        // Execute
        let parsed = complete(parser.consume(&["-s", "2.5", "--sc=1"]));
        let error = parser.consume(&["--scale", "big"]).unwrap_err();

        // Verify
        assert_eq!(parsed.values().get("scale"), Some("1!"));
        assert!(!parsed.values().is_set_by_user("scale"));
        assert_eq!(*seen.borrow(), vec!["-s=2.5", "--sc=1"]);
        assert_eq!(
            error.to_string(),
            "option --scale: invalid floating-point value: 'big'"
        );
    }

    #[rstest]
    #[case("1", Some((1.0, 0.0)))]
    #[case("-2.5", Some((-2.5, 0.0)))]
    #[case("3j", Some((0.0, 3.0)))]
    #[case("-j", Some((0.0, -1.0)))]
    #[case("1+2j", Some((1.0, 2.0)))]
    #[case("1-2J", Some((1.0, -2.0)))]
    #[case("1e-3+1e2j", Some((0.001, 100.0)))]
    #[case("(1,2)", Some((1.0, 2.0)))]
    #[case("(4)", Some((4.0, 0.0)))]
    #[case("", None)]
    #[case("abc", None)]
    #[case("1+2", None)]
    #[case("(1,2", None)]
    fn complex(#[case] value: &str, #[case] expected: Option<(f64, f64)>) {
        assert_eq!(parse_complex(value), expected);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::UnknownOption("-x".to_string()).to_string(),
            "no such option: -x"
        );
        assert_eq!(
            ParseError::MissingArgument("--name".to_string()).to_string(),
            "--name option requires an argument"
        );
        assert_eq!(
            ParseError::InvalidValue {
                option: "-c".to_string(),
                kind: "complex".to_string(),
                value: "1+".to_string(),
            }
            .to_string(),
            "option -c: invalid complex value: '1+'"
        );
    }
}
