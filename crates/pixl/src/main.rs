use pixl::{Codecs, Command, Config};

fn init_logger() -> anyhow::Result<()> {
    alto_logger::init_term_logger()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from(&[".env", ".env.dev"]);
    init_logger()?;

    let parser = pixl::parser()?;
    let result = parser.parse_env().map_err(|err| {
        log::error!("{}", err);
        err
    })?;

    let config = Config::load()?;
    let command = Command::from_result(&result, &config)?;
    log::debug!("running {:?}", command);

    let codecs = Codecs::new(command.jpeg_quality(config.output.jpeg_quality));
    pixl::commands::run(&command, &codecs)
}
