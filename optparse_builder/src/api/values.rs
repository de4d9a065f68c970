use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// The result bag of one parse: every value is stored as a string, keyed by destination.
///
/// Values come either from the user (marked [`ValueStore::is_set_by_user`]) or from a declared default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueStore {
    values: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
    user_set: HashSet<String>,
}

impl ValueStore {
    /// The latest value of `destination`.
    pub fn get(&self, destination: &str) -> Option<&str> {
        self.values.get(destination).map(String::as_str)
    }

    /// Every value appended to `destination`, in order of appearance.
    pub fn all(&self, destination: &str) -> &[String] {
        self.lists
            .get(destination)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `destination` holds a value (from the user or a default).
    pub fn is_set(&self, destination: &str) -> bool {
        self.values.contains_key(destination)
    }

    /// Whether `destination` was explicitly supplied in the input.
    pub fn is_set_by_user(&self, destination: &str) -> bool {
        self.user_set.contains(destination)
    }

    /// Decode the latest value of `destination` into `T`.
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::ValueStore;
    ///
    /// let mut values = ValueStore::default();
    /// values.set("size", "12");
    ///
    /// assert_eq!(values.get_as::<u32>("size"), Some(Ok(12)));
    /// assert_eq!(values.get_as::<u32>("missing"), None);
    /// assert!(values.get_as::<bool>("size").unwrap().is_err());
    /// ```
    pub fn get_as<T: FromStr>(&self, destination: &str) -> Option<Result<T, T::Err>> {
        self.get(destination).map(T::from_str)
    }

    /// Interpret the latest value of `destination` as a switch: `"1"` (as stored by `StoreTrue`) or `"true"` is on.
    /// Anything else, including no value, is off.
    pub fn get_flag(&self, destination: &str) -> bool {
        matches!(self.get(destination), Some("1") | Some("true"))
    }

    /// Set the latest value of `destination`.
    pub fn set(&mut self, destination: impl Into<String>, value: impl Into<String>) {
        self.values.insert(destination.into(), value.into());
    }

    /// Append a value to the list of `destination`.
    pub fn append(&mut self, destination: impl Into<String>, value: impl Into<String>) {
        self.lists
            .entry(destination.into())
            .or_default()
            .push(value.into());
    }

    /// Mark (or unmark) `destination` as explicitly supplied.
    pub fn set_by_user(&mut self, destination: impl Into<String>, yes: bool) {
        let destination = destination.into();

        if yes {
            self.user_set.insert(destination);
        } else {
            self.user_set.remove(&destination);
        }
    }

    /// Increment the integer value of `destination`.
    /// An absent or non-integer value counts as `0`.
    pub(crate) fn increment(&mut self, destination: &str) {
        let previous = self
            .get(destination)
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or(0);
        self.set(destination, (previous + 1).to_string());
    }
}

/// The product of a complete parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub(crate) values: ValueStore,
    pub(crate) args: Vec<String>,
    pub(crate) parsed: Vec<String>,
}

impl ParsedArgs {
    /// The values, keyed by destination.
    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    /// The positional arguments, in their original order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The flags and the values they consumed, as they were parsed.
    pub fn parsed(&self) -> &[String] {
        &self.parsed
    }

    /// Take the values and positional arguments.
    pub fn into_parts(self) -> (ValueStore, Vec<String>) {
        (self.values, self.args)
    }
}
