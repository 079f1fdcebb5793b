use crate::{argument, Argument, Error};

/// A subcommand must directly follow the program name.
///
/// For example `git log` or `git commit`, where `log` and `commit` each have
/// their own set of arguments. Once a subcommand is selected only its arguments
/// are recognized.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subcommand {
    name: Box<str>,
    description: Box<str>,
    args: Vec<Argument>,
}

impl Subcommand {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args: Vec::new(),
        }
    }

    pub fn add_argument(&mut self, arg: Argument) -> Result<(), Error> {
        argument::register(&mut self.args, arg)
    }

    pub fn with_argument(mut self, arg: Argument) -> Result<Self, Error> {
        self.add_argument(arg)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &*self.name
    }

    pub fn description(&self) -> &str {
        &*self.description
    }

    /// The arguments of this subcommand, in registration order
    pub fn arguments(&self) -> &[Argument] {
        &self.args
    }

    pub fn find_argument(&self, name: &str) -> Option<&Argument> {
        argument::find(&self.args, name)
    }
}
