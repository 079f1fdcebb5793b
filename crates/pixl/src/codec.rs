use anyhow::Context as _;
use std::{
    collections::HashMap,
    io::{BufWriter, Write as _},
    path::Path,
};

pub type Image = image::DynamicImage;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Png,
    Jpeg,
    Bmp,
    Tga,
}

impl Format {
    pub const ALL: [Self; 4] = [Self::Png, Self::Jpeg, Self::Bmp, Self::Tga];

    pub fn from_extension(ext: &str) -> Option<Self> {
        let format = match &*ext.to_ascii_lowercase() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "bmp" => Self::Bmp,
            "tga" => Self::Tga,
            _ => return None,
        };
        Some(format)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Bmp => "bmp",
            Self::Tga => "tga",
        }
    }

    const fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Tga => image::ImageFormat::Tga,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub trait ImageReader {
    fn read(&self, path: &Path) -> anyhow::Result<Image>;
}

pub trait ImageWriter {
    fn write(&self, path: &Path, image: &Image) -> anyhow::Result<()>;
}

struct Decoder(Format);

impl ImageReader for Decoder {
    fn read(&self, path: &Path) -> anyhow::Result<Image> {
        let mut reader = image::ImageReader::open(path)
            .with_context(|| format!("cannot open '{}'", path.display()))?;
        reader.set_format(self.0.image_format());
        reader
            .decode()
            .with_context(|| format!("cannot decode '{}' as {}", path.display(), self.0))
    }
}

// used when the extension doesn't name a known format
struct Sniffer;

impl ImageReader for Sniffer {
    fn read(&self, path: &Path) -> anyhow::Result<Image> {
        image::ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .with_context(|| format!("cannot open '{}'", path.display()))?
            .decode()
            .with_context(|| format!("cannot decode '{}'", path.display()))
    }
}

struct Encoder {
    format: Format,
    jpeg_quality: u8,
}

impl ImageWriter for Encoder {
    fn write(&self, path: &Path, image: &Image) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("cannot create '{}'", path.display()))?;
        let mut out = BufWriter::new(file);

        let encoded = match self.format {
            Format::Jpeg => {
                // jpeg has no alpha channel
                let rgb = Image::ImageRgb8(image.to_rgb8());
                let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                    &mut out,
                    self.jpeg_quality,
                );
                rgb.write_with_encoder(encoder)
            }
            format => image.write_to(&mut out, format.image_format()),
        };
        encoded
            .with_context(|| format!("cannot encode '{}' as {}", path.display(), self.format))?;

        out.flush()
            .with_context(|| format!("cannot write '{}'", path.display()))
    }
}

/// Readers and writers for every supported [`Format`]
pub struct Codecs {
    readers: HashMap<Format, Box<dyn ImageReader>>,
    writers: HashMap<Format, Box<dyn ImageWriter>>,
    fallback: Box<dyn ImageReader>,
}

impl Default for Codecs {
    fn default() -> Self {
        Self::new(90)
    }
}

impl Codecs {
    pub fn new(jpeg_quality: u8) -> Self {
        let mut readers: HashMap<_, Box<dyn ImageReader>> = HashMap::new();
        let mut writers: HashMap<_, Box<dyn ImageWriter>> = HashMap::new();

        for &format in &Format::ALL {
            readers.insert(format, Box::new(Decoder(format)));
            writers.insert(
                format,
                Box::new(Encoder {
                    format,
                    jpeg_quality,
                }),
            );
        }

        Self {
            readers,
            writers,
            fallback: Box::new(Sniffer),
        }
    }

    pub fn reader(&self, format: Option<Format>) -> &dyn ImageReader {
        match format.and_then(|format| self.readers.get(&format)) {
            Some(reader) => &**reader,
            None => &*self.fallback,
        }
    }

    pub fn writer(&self, format: Format) -> Option<&dyn ImageWriter> {
        self.writers.get(&format).map(|writer| &**writer)
    }
}

/// Decodes the image at `path`, picking the reader by its extension
pub fn read(codecs: &Codecs, path: impl AsRef<Path>) -> anyhow::Result<Image> {
    let path = path.as_ref();
    let format = Format::from_path(path);
    log::debug!("reading '{}' ({:?})", path.display(), format);
    codecs.reader(format).read(path)
}

/// Encodes `image` to `path`, picking the writer by its extension
pub fn write(codecs: &Codecs, path: impl AsRef<Path>, image: &Image) -> anyhow::Result<()> {
    let path = path.as_ref();
    let writer = Format::from_path(path)
        .and_then(|format| codecs.writer(format))
        .with_context(|| format!("unsupported output format: '{}'", path.display()))?;
    log::debug!("writing '{}'", path.display());
    writer.write(path, image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Image {
        let img = image::RgbImage::from_fn(4, 3, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgb([255, 255, 255])
            } else {
                image::Rgb([0, 0, 0])
            }
        });
        Image::ImageRgb8(img)
    }

    #[test]
    fn format_from_path() {
        let tests = vec![
            ("a.png", Some(Format::Png)),
            ("a.PNG", Some(Format::Png)),
            ("dir/a.jpg", Some(Format::Jpeg)),
            ("a.JpEg", Some(Format::Jpeg)),
            ("a.bmp", Some(Format::Bmp)),
            ("a.tga", Some(Format::Tga)),
            ("a.tar.png", Some(Format::Png)),
            ("a.gif", None),
            ("png", None),
            ("a.", None),
            ("", None),
        ];

        for (path, expected) in tests {
            assert_eq!(Format::from_path(path), expected, "{}", path);
        }
    }

    #[test]
    fn every_format_is_registered() {
        let codecs = Codecs::default();
        for &format in &Format::ALL {
            assert!(codecs.writer(format).is_some(), "{}", format);
        }
    }

    #[test]
    fn write_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let codecs = Codecs::default();
        let image = checkerboard();

        for &format in &Format::ALL {
            let path = dir.path().join(format!("board.{}", format.name()));
            write(&codecs, &path, &image).unwrap();

            let back = read(&codecs, &path).unwrap();
            assert_eq!((back.width(), back.height()), (4, 3), "{}", format);
        }

        let path = dir.path().join("board.png");
        let back = read(&codecs, &path).unwrap();
        assert_eq!(back.to_rgb8(), image.to_rgb8());
    }

    #[test]
    fn read_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let codecs = Codecs::default();

        let path = dir.path().join("board.png");
        write(&codecs, &path, &checkerboard()).unwrap();

        let renamed = dir.path().join("board.data");
        std::fs::rename(&path, &renamed).unwrap();

        let back = read(&codecs, &renamed).unwrap();
        assert_eq!((back.width(), back.height()), (4, 3));
    }

    #[test]
    fn write_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.gif");
        let err = write(&Codecs::default(), &path, &checkerboard()).unwrap_err();
        assert!(err.to_string().starts_with("unsupported output format"));
        assert!(!path.exists());
    }

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read(&Codecs::default(), dir.path().join("nope.png")).is_err());
    }
}
