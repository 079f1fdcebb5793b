use anyhow::Context as _;
use std::path::Path;

#[derive(Default, Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: Output,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Output {
    pub jpeg_quality: u8,
    pub overwrite: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            jpeg_quality: 90,
            overwrite: false,
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "pixl.toml";

    /// Loads the file named by `PIXL_CONFIG`, or `pixl.toml`
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("PIXL_CONFIG").unwrap_or_else(|_| Self::DEFAULT_PATH.into());
        Self::load_from(path)
    }

    /// A missing file gives the defaults
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at '{}', using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("cannot read '{}'", path.display()))
            }
        };

        let config: Self =
            toml::from_str(&data).with_context(|| format!("cannot parse '{}'", path.display()))?;

        anyhow::ensure!(
            (1..=100).contains(&config.output.jpeg_quality),
            "jpeg_quality must be between 1 and 100, got {}",
            config.output.jpeg_quality
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("pixl.toml")).unwrap();
        assert_eq!(config.output.jpeg_quality, 90);
        assert!(!config.output.overwrite);
    }

    #[test]
    fn partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixl.toml");

        std::fs::write(&path, "[output]\noverwrite = true\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.jpeg_quality, 90);
        assert!(config.output.overwrite);

        std::fs::write(&path, "").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.jpeg_quality, 90);
    }

    #[test]
    fn full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixl.toml");
        std::fs::write(&path, "[output]\njpeg_quality = 75\noverwrite = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.jpeg_quality, 75);
        assert!(!config.output.overwrite);
    }

    #[test]
    fn invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixl.toml");

        std::fs::write(&path, "[output\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        std::fs::write(&path, "[output]\njpeg_quality = 0\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
