use crate::{codec, Codecs, Command, Format, Image};
use std::path::Path;

pub fn run(command: &Command, codecs: &Codecs) -> anyhow::Result<()> {
    match command {
        Command::Convert {
            input,
            output,
            overwrite,
            ..
        } => convert(codecs, input, output, *overwrite),
        Command::Info { input } => {
            let image = codec::read(codecs, input)?;
            println!("{}", describe(input, &image));
            Ok(())
        }
        Command::Flip {
            input,
            output,
            vertical,
            overwrite,
        } => flip(codecs, input, output, *vertical, *overwrite),
        Command::Version => {
            println!("pixl {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn convert(codecs: &Codecs, input: &Path, output: &Path, overwrite: bool) -> anyhow::Result<()> {
    check_output(output, overwrite)?;
    let image = codec::read(codecs, input)?;
    codec::write(codecs, output, &image)?;
    log::info!("converted '{}' to '{}'", input.display(), output.display());
    Ok(())
}

fn flip(
    codecs: &Codecs,
    input: &Path,
    output: &Path,
    vertical: bool,
    overwrite: bool,
) -> anyhow::Result<()> {
    check_output(output, overwrite)?;
    let image = codec::read(codecs, input)?;
    let image = if vertical { image.flipv() } else { image.fliph() };
    codec::write(codecs, output, &image)?;
    log::info!("flipped '{}' into '{}'", input.display(), output.display());
    Ok(())
}

fn check_output(output: &Path, overwrite: bool) -> anyhow::Result<()> {
    if output.exists() && !overwrite {
        anyhow::bail!(
            "'{}' already exists. use -y to overwrite it",
            output.display()
        )
    }
    Ok(())
}

fn describe(path: &Path, image: &Image) -> String {
    let format = Format::from_path(path)
        .map(Format::name)
        .unwrap_or("unknown");

    format!(
        "{}: {} {}x{} {:?}",
        path.display(),
        format,
        image.width(),
        image.height(),
        image.color()
    )
}
