use crate::{Argument, Error, Subcommand};

/// A single flag found in the input, resolved against its declaration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'p> {
    argument: &'p Argument,
    value: Option<String>,
}

impl<'p> Match<'p> {
    pub const fn argument(&self) -> &'p Argument {
        self.argument
    }

    pub fn name(&self) -> &'p str {
        self.argument.name()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// The result returned by the parser
///
/// Matches are kept in the order they appeared in the input. A flag given more
/// than once shows up once per occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseResult<'p> {
    subcommand: Option<&'p Subcommand>,
    matches: Vec<Match<'p>>,
}

impl<'p> ParseResult<'p> {
    pub(crate) fn select(&mut self, subcommand: &'p Subcommand) {
        self.subcommand = Some(subcommand);
    }

    pub(crate) fn push(&mut self, argument: &'p Argument, value: Option<&str>) {
        self.matches.push(Match {
            argument,
            value: value.map(ToString::to_string),
        })
    }

    pub const fn subcommand(&self) -> Option<&'p Subcommand> {
        self.subcommand
    }

    pub fn subcommand_name(&self) -> Option<&'p str> {
        self.subcommand.map(Subcommand::name)
    }

    pub fn matches(&self) -> &[Match<'p>] {
        &self.matches
    }

    /// The first match for `name`
    pub fn get(&self, name: &str) -> Option<&Match<'p>> {
        self.matches.iter().find(|m| m.name() == name)
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn occurrences(&self, name: &str) -> usize {
        self.matches.iter().filter(|m| m.name() == name).count()
    }

    /// The value of the last occurrence of `name`
    pub fn value(&self, name: &str) -> Option<&str> {
        self.matches
            .iter()
            .rev()
            .filter(|m| m.name() == name)
            .find_map(Match::value)
    }

    /// Every value given for `name`, in input order
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.matches
            .iter()
            .filter(move |m| m.name() == name)
            .filter_map(Match::value)
    }

    /// Parses the value of `name` with [`FromStr`](std::str::FromStr)
    ///
    /// Returns `Ok(None)` if the flag was not given.
    pub fn value_of<T>(&self, name: &str) -> Result<Option<T>, Error>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let value = match self.value(name) {
            Some(value) => value,
            None => return Ok(None),
        };

        value
            .parse()
            .map(Some)
            .map_err(|err: T::Err| Error::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
                reason: err.to_string(),
            })
    }
}
