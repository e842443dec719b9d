use eyre::{ensure, Result, WrapErr};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub enum DecompressedStream {
    PlainText(File),
    Gzip(MultiGzDecoder<File>),
}

impl DecompressedStream {
    pub fn box_read(self) -> Box<dyn Read + Send + Sync + 'static> {
        match self {
            DecompressedStream::PlainText(file) => Box::new(file),
            DecompressedStream::Gzip(decoder) => Box::new(decoder),
        }
    }

    pub fn box_bufread(self) -> Box<dyn BufRead + Send + Sync + 'static> {
        match self {
            DecompressedStream::PlainText(file) => Box::new(BufReader::new(file)),
            DecompressedStream::Gzip(decoder) => Box::new(BufReader::new(decoder)),
        }
    }
}

/// Open a file for reading, transparently decoding gzip (and BGZF) content.
/// The compression is detected from the file signature, not from the extension.
pub fn read_file(path: impl AsRef<Path>) -> Result<DecompressedStream> {
    let path = path.as_ref();
    ensure!(path.exists(), "File {} does not exist", path.display());

    let open = || File::open(path).wrap_err_with(|| format!("Cannot open {}", path.display()));
    let kind = infer::get_from_path(path)
        .wrap_err_with(|| format!("Cannot read {}", path.display()))?;

    let stream = match kind.map(|x| (x.extension(), x.mime_type())) {
        Some(("gz", "application/gzip")) => DecompressedStream::Gzip(MultiGzDecoder::new(open()?)),
        // Always assume plain text if there is no clear match
        _ => DecompressedStream::PlainText(open()?),
    };
    Ok(stream)
}

pub enum CompressedStream {
    PlainText(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl CompressedStream {
    pub fn box_write(self) -> Box<dyn Write + Send + Sync + 'static> {
        match self {
            CompressedStream::PlainText(file) => Box::new(file),
            CompressedStream::Gzip(encoder) => Box::new(encoder),
        }
    }
}

/// Check if the path asks for gzip output (`.gz` or `.gzip` extension).
pub fn is_gzip_path(path: impl AsRef<Path>) -> bool {
    matches!(
        path.as_ref().extension().and_then(|x| x.to_str()),
        Some("gz") | Some("gzip")
    )
}

/// Create (or truncate) a file for writing. Paths ending in `.gz`/`.gzip` are gzip-encoded.
pub fn create_file(path: impl AsRef<Path>) -> Result<CompressedStream> {
    let path = path.as_ref();
    let file = File::create(path).wrap_err_with(|| format!("Cannot create {}", path.display()))?;
    let file = BufWriter::new(file);

    let stream = if is_gzip_path(path) {
        CompressedStream::Gzip(GzEncoder::new(file, flate2::Compression::default()))
    } else {
        CompressedStream::PlainText(file)
    };
    Ok(stream)
}
