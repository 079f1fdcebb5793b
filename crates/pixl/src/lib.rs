mod cli;
pub use cli::{parser, Command};

mod config;
pub use config::{Config, Output};

pub mod codec;
pub use codec::{Codecs, Format, Image, ImageReader, ImageWriter};

pub mod commands;
