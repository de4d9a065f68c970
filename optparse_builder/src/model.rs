use std::str::FromStr;

use crate::parser::ConfigError;

/// The effect a flag triggers when it is matched.
///
/// Inspired by optparse: <https://docs.python.org/3/library/optparse.html#standard-option-actions>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Store the value.
    Store,
    /// Store the flag's constant.
    StoreConst,
    /// Store `"1"`.
    StoreTrue,
    /// Store `"0"`.
    StoreFalse,
    /// Store the value and append it to the destination's list.
    Append,
    /// Store the flag's constant and append it to the destination's list.
    AppendConst,
    /// Increment the destination's integer value.
    Count,
    /// Render the help message and exit.
    ShowHelp,
    /// Render the version message and exit.
    ShowVersion,
    /// Invoke the flag's callback.
    Callback,
}

impl Action {
    /// The number of values this action consumes, given the flag's value type.
    pub fn arity(&self, value_type: ValueType) -> u8 {
        match self {
            Action::Store | Action::Append => 1,
            Action::Callback => match value_type {
                ValueType::None => 0,
                _ => 1,
            },
            Action::StoreConst
            | Action::StoreTrue
            | Action::StoreFalse
            | Action::AppendConst
            | Action::Count
            | Action::ShowHelp
            | Action::ShowVersion => 0,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Action::Store => "store",
            Action::StoreConst => "store_const",
            Action::StoreTrue => "store_true",
            Action::StoreFalse => "store_false",
            Action::Append => "append",
            Action::AppendConst => "append_const",
            Action::Count => "count",
            Action::ShowHelp => "help",
            Action::ShowVersion => "version",
            Action::Callback => "callback",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Action {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "store" => Ok(Action::Store),
            "store_const" => Ok(Action::StoreConst),
            "store_true" => Ok(Action::StoreTrue),
            "store_false" => Ok(Action::StoreFalse),
            "append" => Ok(Action::Append),
            "append_const" => Ok(Action::AppendConst),
            "count" => Ok(Action::Count),
            "help" | "show_help" => Ok(Action::ShowHelp),
            "version" | "show_version" => Ok(Action::ShowVersion),
            "callback" => Ok(Action::Callback),
            _ => Err(ConfigError(format!("Unknown action '{value}'."))),
        }
    }
}

/// The type a flag's value is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// No value (only meaningful for callbacks).
    None,
    /// Any string.
    String,
    /// A base-10 integer (`int` or `long`).
    Int,
    /// A floating point literal (`float` or `double`).
    Float,
    /// A complex literal, such as `1.5`, `2j`, `1+2j` or `(1,2)`.
    Complex,
    /// One of the flag's declared choices.
    Choice,
}

impl ValueType {
    /// The noun used when a value fails validation.
    pub(crate) fn description(&self) -> &'static str {
        match self {
            ValueType::None => "none",
            ValueType::String => "string",
            ValueType::Int => "integer",
            ValueType::Float => "floating-point",
            ValueType::Complex => "complex",
            ValueType::Choice => "choice",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::None => "none",
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Complex => "complex",
            ValueType::Choice => "choice",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ValueType {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "none" => Ok(ValueType::None),
            "string" => Ok(ValueType::String),
            "int" | "long" => Ok(ValueType::Int),
            "float" | "double" => Ok(ValueType::Float),
            "complex" => Ok(ValueType::Complex),
            "choice" => Ok(ValueType::Choice),
            _ => Err(ConfigError(format!("Unknown value type '{value}'."))),
        }
    }
}
