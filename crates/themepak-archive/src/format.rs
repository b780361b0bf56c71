use std::io::{self, BufReader, Read, Seek};

use crate::error::{Error, Result};

/// Compression codec wrapped around the tar stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
    Zstd,
}

impl Compression {
    /// Create a decoder for this codec.
    pub fn decoder<R: Read>(self, reader: R) -> Result<Decoder<R>> {
        match self {
            Self::None => Ok(Decoder::Passthrough(reader)),
            Self::Gzip => Ok(Decoder::Gzip(Box::new(flate2::read::GzDecoder::new(
                reader,
            )))),
            Self::Bzip2 => Ok(Decoder::Bzip2(Box::new(bzip2::read::BzDecoder::new(
                reader,
            )))),
            Self::Xz => Ok(Decoder::Xz(Box::new(xz2::read::XzDecoder::new(reader)))),
            Self::Zstd => {
                let decoder =
                    Box::new(zstd::stream::Decoder::new(reader).map_err(|_| Error::Corrupted)?);
                Ok(Decoder::Zstd(decoder))
            }
        }
    }
}

/// Decoder wrapper for tar decompression.
pub enum Decoder<R: Read> {
    Passthrough(R),
    Gzip(Box<flate2::read::GzDecoder<R>>),
    Bzip2(Box<bzip2::read::BzDecoder<R>>),
    Xz(Box<xz2::read::XzDecoder<R>>),
    Zstd(Box<zstd::stream::Decoder<'static, BufReader<R>>>),
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Passthrough(r) => r.read(buf),
            Self::Gzip(d) => d.read(buf),
            Self::Bzip2(d) => d.read(buf),
            Self::Xz(d) => d.read(buf),
            Self::Zstd(d) => d.read(buf),
        }
    }
}

/// Detect the compression codec from the stream's leading bytes.
///
/// Detection is content-only; the file name is never consulted. An
/// uncompressed stream is recognized by the `ustar` magic of its first
/// tar header.
pub fn detect_compression(data: &[u8]) -> Option<Compression> {
    match data {
        [0x1F, 0x8B, ..] => Some(Compression::Gzip),
        [0x42, 0x5A, 0x68, ..] => Some(Compression::Bzip2),
        [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00, ..] => Some(Compression::Xz),
        [0x28, 0xB5, 0x2F, 0xFD, ..] => Some(Compression::Zstd),
        _ => {
            if is_tar_header(data) {
                Some(Compression::None)
            } else {
                None
            }
        }
    }
}

// POSIX writes "ustar\0", old GNU tar "ustar ", both at offset 257.
fn is_tar_header(data: &[u8]) -> bool {
    data.len() >= 512 && (data[257..263] == *b"ustar\0" || data[257..263] == *b"ustar ")
}

/// Probe a seekable stream, then rewind it. The probe spans a full tar
/// header block so plain `ustar` archives are recognized too.
pub fn detect_from_reader<R: Read + Seek>(reader: &mut R) -> io::Result<Option<Compression>> {
    let mut probe = [0u8; 512];
    let mut filled = 0;
    while filled < probe.len() {
        let n = reader.read(&mut probe[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    reader.rewind()?;
    Ok(detect_compression(&probe[..filled]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn detect_gzip() {
        let header = [0x1F, 0x8B, 0x08, 0x00];
        assert_eq!(detect_compression(&header), Some(Compression::Gzip));
    }

    #[test]
    fn detect_bzip2() {
        let header = *b"BZh91AY&SY";
        assert_eq!(detect_compression(&header), Some(Compression::Bzip2));
    }

    #[test]
    fn detect_xz() {
        let header = [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00, 0x00, 0x00];
        assert_eq!(detect_compression(&header), Some(Compression::Xz));
    }

    #[test]
    fn detect_zstd() {
        let header = [0x28, 0xB5, 0x2F, 0xFD, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(detect_compression(&header), Some(Compression::Zstd));
    }

    #[test]
    fn detect_plain_tar() {
        let mut header = [0u8; 512];
        header[257..263].copy_from_slice(b"ustar\0");
        assert_eq!(detect_compression(&header), Some(Compression::None));
    }

    #[test]
    fn detect_gnu_tar() {
        let mut header = [0u8; 512];
        header[257..263].copy_from_slice(b"ustar ");
        assert_eq!(detect_compression(&header), Some(Compression::None));
    }

    #[test]
    fn detect_unknown() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(detect_compression(&data), None);
    }

    #[test]
    fn detect_truncated_tar_header() {
        let short = [0u8; 256];
        assert_eq!(detect_compression(&short), None);
    }

    #[test]
    fn detect_from_short_stream() {
        let mut cursor = Cursor::new(vec![0x1F, 0x8B, 0x08]);
        let detected = detect_from_reader(&mut cursor).unwrap();
        assert_eq!(detected, Some(Compression::Gzip));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn detect_from_reader_rewinds() {
        let mut data = vec![0u8; 1024];
        data[257..263].copy_from_slice(b"ustar\0");
        let mut cursor = Cursor::new(data);
        let detected = detect_from_reader(&mut cursor).unwrap();
        assert_eq!(detected, Some(Compression::None));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn gzip_decoder_roundtrip() {
        use std::io::Write;
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(b"hello").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut decoder = Compression::Gzip.decoder(Cursor::new(compressed)).unwrap();
        let mut out = String::new();
        decoder.read_to_string(&mut out).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn passthrough_decoder() {
        let mut decoder = Compression::None.decoder(Cursor::new(b"raw".to_vec())).unwrap();
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"raw");
    }
}
