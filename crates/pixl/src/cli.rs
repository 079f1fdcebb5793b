use crate::Config;
use pixl_args::{Argument, ParseResult, Parser, Subcommand};
use std::path::PathBuf;

/// Builds the grammar of `pixl`
///
/// ```text
/// pixl convert -i <input> -o <output> [-q <quality>] [-y]
/// pixl info -i <input>
/// pixl flip -i <input> -o <output> [-v] [-y]
/// pixl -version
/// ```
pub fn parser() -> Result<Parser, pixl_args::Error> {
    let convert = Subcommand::new("convert", "converts an image to another format")
        .with_argument(Argument::value("i", "the input image").required())?
        .with_argument(Argument::value("o", "the output image").required())?
        .with_argument(Argument::value("q", "jpeg quality, from 1 to 100"))?
        .with_argument(Argument::flag("y", "overwrite the output if it exists"))?;

    let info = Subcommand::new("info", "prints the format and size of an image")
        .with_argument(Argument::value("i", "the input image").required())?;

    let flip = Subcommand::new("flip", "mirrors an image horizontally")
        .with_argument(Argument::value("i", "the input image").required())?
        .with_argument(Argument::value("o", "the output image").required())?
        .with_argument(Argument::flag("v", "flip vertically instead"))?
        .with_argument(Argument::flag("y", "overwrite the output if it exists"))?;

    Parser::new()
        .with_argument(Argument::flag("version", "prints the version"))?
        .with_subcommand(convert)?
        .with_subcommand(info)?
        .with_subcommand(flip)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Convert {
        input: PathBuf,
        output: PathBuf,
        quality: Option<u8>,
        overwrite: bool,
    },
    Info {
        input: PathBuf,
    },
    Flip {
        input: PathBuf,
        output: PathBuf,
        vertical: bool,
        overwrite: bool,
    },
    Version,
}

impl Command {
    pub fn from_result(result: &ParseResult<'_>, config: &Config) -> anyhow::Result<Self> {
        // required arguments are enforced by the parser
        let path = |name| result.value(name).map(PathBuf::from).unwrap_or_default();
        let overwrite = result.is_present("y") || config.output.overwrite;

        let command = match result.subcommand_name() {
            Some("convert") => {
                let quality = result.value_of::<u8>("q")?;
                if let Some(quality) = quality {
                    anyhow::ensure!(
                        (1..=100).contains(&quality),
                        "quality must be between 1 and 100, got {}",
                        quality
                    );
                }
                Self::Convert {
                    input: path("i"),
                    output: path("o"),
                    quality,
                    overwrite,
                }
            }
            Some("info") => Self::Info { input: path("i") },
            Some("flip") => Self::Flip {
                input: path("i"),
                output: path("o"),
                vertical: result.is_present("v"),
                overwrite,
            },
            Some(name) => anyhow::bail!("unhandled subcommand: {}", name),
            None if result.is_present("version") => Self::Version,
            None => anyhow::bail!("nothing to do"),
        };

        Ok(command)
    }

    /// The jpeg quality to encode with, if this command picked one
    pub fn jpeg_quality(&self, default: u8) -> u8 {
        match self {
            Self::Convert {
                quality: Some(quality),
                ..
            } => *quality,
            _ => default,
        }
    }
}
