/// The category of an [`Error`], without any of its data
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoArguments,
    MalformedToken,
    UnknownArgument,
    ArgumentExpectsValue,
    ArgumentUnexpectedValue,
    MissingRequiredArgument,
    DuplicateArgument,
    DuplicateSubcommand,
    InvalidName,
    InvalidValue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    NoArguments,
    MalformedToken(String),
    UnknownArgument(String),
    ArgumentExpectsValue(String),
    ArgumentUnexpectedValue(String),
    MissingRequiredArgument(String),
    DuplicateArgument(String),
    DuplicateSubcommand(String),
    InvalidName(String),
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoArguments => ErrorKind::NoArguments,
            Self::MalformedToken(..) => ErrorKind::MalformedToken,
            Self::UnknownArgument(..) => ErrorKind::UnknownArgument,
            Self::ArgumentExpectsValue(..) => ErrorKind::ArgumentExpectsValue,
            Self::ArgumentUnexpectedValue(..) => ErrorKind::ArgumentUnexpectedValue,
            Self::MissingRequiredArgument(..) => ErrorKind::MissingRequiredArgument,
            Self::DuplicateArgument(..) => ErrorKind::DuplicateArgument,
            Self::DuplicateSubcommand(..) => ErrorKind::DuplicateSubcommand,
            Self::InvalidName(..) => ErrorKind::InvalidName,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
        }
    }

    /// The flag or subcommand name this error is about, if there is one
    ///
    /// For `MalformedToken` this is the offending token.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::NoArguments => None,
            Self::MalformedToken(name)
            | Self::UnknownArgument(name)
            | Self::ArgumentExpectsValue(name)
            | Self::ArgumentUnexpectedValue(name)
            | Self::MissingRequiredArgument(name)
            | Self::DuplicateArgument(name)
            | Self::DuplicateSubcommand(name)
            | Self::InvalidName(name)
            | Self::InvalidValue { name, .. } => Some(name),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoArguments => f.write_str("no arguments were provided"),
            Self::MalformedToken(token) => write!(f, "malformed token: '{}'", token),
            Self::UnknownArgument(name) => write!(f, "unknown argument: {}", name),
            Self::ArgumentExpectsValue(name) => write!(f, "argument {} must have a value", name),
            Self::ArgumentUnexpectedValue(name) => {
                write!(f, "argument {} cannot have a value", name)
            }
            Self::MissingRequiredArgument(name) => {
                write!(f, "missing required argument: {}", name)
            }
            Self::DuplicateArgument(name) => write!(f, "duplicate argument found: {}", name),
            Self::DuplicateSubcommand(name) => write!(f, "duplicate subcommand found: {}", name),
            Self::InvalidName(name) => write!(f, "invalid name: '{}'", name),
            Self::InvalidValue {
                name,
                value,
                reason,
            } => write!(f, "invalid value '{}' for {}: {}", value, name, reason),
        }
    }
}

impl std::error::Error for Error {}
