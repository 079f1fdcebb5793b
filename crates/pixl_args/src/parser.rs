use crate::{argument, Argument, Error, ParseResult, Subcommand, FLAG_PREFIX};

/// A command line parser.
///
/// Register the top-level arguments and subcommands first, then call
/// [`Parser::parse`] with the tokens following the program name.
#[derive(Default, Clone, Debug)]
pub struct Parser {
    args: Vec<Argument>,
    subcommands: Vec<Subcommand>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_argument(&mut self, arg: Argument) -> Result<(), Error> {
        argument::register(&mut self.args, arg)
    }

    pub fn add_subcommand(&mut self, subcommand: Subcommand) -> Result<(), Error> {
        argument::validate_name(subcommand.name())?;
        if self.find_subcommand(subcommand.name()).is_some() {
            return Err(Error::DuplicateSubcommand(subcommand.name().to_string()));
        }
        self.subcommands.push(subcommand);
        Ok(())
    }

    pub fn with_argument(mut self, arg: Argument) -> Result<Self, Error> {
        self.add_argument(arg)?;
        Ok(self)
    }

    pub fn with_subcommand(mut self, subcommand: Subcommand) -> Result<Self, Error> {
        self.add_subcommand(subcommand)?;
        Ok(self)
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.args
    }

    pub fn subcommands(&self) -> &[Subcommand] {
        &self.subcommands
    }

    pub fn find_argument(&self, name: &str) -> Option<&Argument> {
        argument::find(&self.args, name)
    }

    pub fn find_subcommand(&self, name: &str) -> Option<&Subcommand> {
        find_subcommand(&self.subcommands, name)
    }

    /// Parses the tokens following the program name
    pub fn parse<I>(&self, tokens: I) -> Result<ParseResult<'_>, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        parse(&self.args, &self.subcommands, tokens)
    }

    /// Like [`Parser::parse`], but the first token is the program name and is skipped
    pub fn parse_argv<I>(&self, argv: I) -> Result<ParseResult<'_>, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.parse(argv.into_iter().skip(1))
    }

    /// Parses the arguments of the current process
    ///
    /// Arguments that aren't valid UTF-8 are converted lossily.
    pub fn parse_env(&self) -> Result<ParseResult<'_>, Error> {
        self.parse_argv(std::env::args_os().map(|s| s.to_string_lossy().into_owned()))
    }
}

/// Parses `tokens` against the given top-level `arguments` and `subcommands`
///
/// If the first token names a subcommand, only that subcommand's arguments are
/// recognized for the rest of the input.
pub fn parse<'p, I>(
    arguments: &'p [Argument],
    subcommands: &'p [Subcommand],
    tokens: I,
) -> Result<ParseResult<'p>, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let tokens = tokens.into_iter().collect::<Vec<_>>();
    let tokens = tokens.iter().map(|s| s.as_ref()).collect::<Vec<&str>>();

    let (head, tail) = tokens.split_first().ok_or(Error::NoArguments)?;

    let mut result = ParseResult::default();

    // check whether it's a subcommand-style command or not
    if let Some(subcommand) = find_subcommand(subcommands, head) {
        log::debug!("processing subcommand: {}", subcommand.name());
        result.select(subcommand);
        scan(subcommand.arguments(), tail, &mut result)?;
        return Ok(result);
    }

    scan(arguments, &tokens, &mut result)?;
    Ok(result)
}

fn find_subcommand<'p>(subcommands: &'p [Subcommand], name: &str) -> Option<&'p Subcommand> {
    subcommands.iter().find(|sub| sub.name() == name)
}

fn scan<'p>(
    scope: &'p [Argument],
    tokens: &[&str],
    result: &mut ParseResult<'p>,
) -> Result<(), Error> {
    let mut pos = 0;
    while pos < tokens.len() {
        let token = tokens[pos];
        let name = match token.strip_prefix(FLAG_PREFIX) {
            Some(name) => name,
            None => return Err(Error::MalformedToken(token.to_string())),
        };

        // a following token is a value unless it is a flag itself
        match tokens
            .get(pos + 1)
            .copied()
            .filter(|next| !next.starts_with(FLAG_PREFIX))
        {
            Some(value) => {
                log::debug!("flag with value: {}: {}", name, value);
                resolve(scope, name, Some(value), result)?;
                pos += 2;
            }
            None => {
                log::debug!("bare flag: {}", token);
                resolve(scope, name, None, result)?;
                pos += 1;
            }
        }
    }

    let missing = scope
        .iter()
        .filter(|arg| arg.is_required())
        .find(|arg| !result.is_present(arg.name()));

    match missing {
        Some(arg) => Err(Error::MissingRequiredArgument(arg.name().to_string())),
        None => Ok(()),
    }
}

fn resolve<'p>(
    scope: &'p [Argument],
    name: &str,
    value: Option<&str>,
    result: &mut ParseResult<'p>,
) -> Result<(), Error> {
    let arg = argument::find(scope, name)
        .ok_or_else(|| Error::UnknownArgument(name.to_string()))?;

    match (arg.takes_value(), value) {
        (true, None) => Err(Error::ArgumentExpectsValue(name.to_string())),
        (false, Some(..)) => Err(Error::ArgumentUnexpectedValue(name.to_string())),
        _ => {
            result.push(arg, value);
            Ok(())
        }
    }
}
