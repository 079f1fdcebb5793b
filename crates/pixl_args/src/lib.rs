//! A small command line parser for flat (`prog -f -o out`) and
//! subcommand-style (`prog sub -x 1`) invocations.
//!
//! Flags have the form `-name [value]`. A token following a flag is taken as
//! its value unless it starts with `-` itself, so values can't begin with `-`.

/// The character every flag starts with
pub const FLAG_PREFIX: char = '-';

mod argument;
pub use argument::Argument;

mod subcommand;
pub use subcommand::Subcommand;

mod result;
pub use result::{Match, ParseResult};

mod parser;
pub use parser::{parse, Parser};

mod error;
pub use error::{Error, ErrorKind};
