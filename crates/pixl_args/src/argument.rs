use crate::{Error, FLAG_PREFIX};

/// A declared flag, of the form `-name [value]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argument {
    name: Box<str>,
    description: Box<str>,
    takes_value: bool,
    required: bool,
}

impl Argument {
    pub fn new(name: &str, description: &str, takes_value: bool, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            takes_value,
            required,
        }
    }

    /// A flag that is given on its own, like `-f`
    pub fn flag(name: &str, description: &str) -> Self {
        Self::new(name, description, false, false)
    }

    /// A flag that must be followed by a value, like `-o out.png`
    pub fn value(name: &str, description: &str) -> Self {
        Self::new(name, description, true, false)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The name without the leading `-`
    pub fn name(&self) -> &str {
        &*self.name
    }

    pub fn description(&self) -> &str {
        &*self.description
    }

    pub const fn takes_value(&self) -> bool {
        self.takes_value
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }
}

// the scanner strips exactly one prefix, so `--foo` could never be matched
pub(crate) fn validate_name(name: &str) -> Result<(), Error> {
    if name.is_empty() || name.starts_with(FLAG_PREFIX) || name.chars().any(char::is_whitespace)
    {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

pub(crate) fn find<'a>(args: &'a [Argument], name: &str) -> Option<&'a Argument> {
    args.iter().find(|arg| arg.name() == name)
}

pub(crate) fn register(args: &mut Vec<Argument>, arg: Argument) -> Result<(), Error> {
    validate_name(arg.name())?;
    if find(args, arg.name()).is_some() {
        return Err(Error::DuplicateArgument(arg.name().to_string()));
    }
    args.push(arg);
    Ok(())
}
