use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Prefix written before LZ4 model payloads so a plain JSON file is never
/// mistaken for a compressed one.
const COMPRESSED_MAGIC: &[u8; 4] = b"FMZ1";

/// On-disk encoding of a persisted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Codec {
    /// Compact JSON compressed with LZ4 (size-prepended block).
    #[default]
    Compressed,
    /// Pretty-printed JSON.
    Uncompressed,
}

impl Codec {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Codec::Compressed => "compressed",
            Codec::Uncompressed => "uncompressed",
        }
    }

    /// Serializes `value` to `path`, replacing any existing file.
    pub fn write<T: Serialize>(self, path: &Path, value: &T) -> io::Result<()> {
        match self {
            Codec::Uncompressed => {
                let file = File::create(path)?;
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, value).map_err(invalid_data)?;
                writer.flush()
            }
            Codec::Compressed => {
                let json = serde_json::to_vec(value).map_err(invalid_data)?;
                let mut bytes = COMPRESSED_MAGIC.to_vec();
                bytes.extend_from_slice(&lz4_flex::compress_prepend_size(&json));
                std::fs::write(path, bytes)
            }
        }
    }

    /// Deserializes a value previously written with the same codec.
    pub fn read<T: DeserializeOwned>(self, path: &Path) -> io::Result<T> {
        match self {
            Codec::Uncompressed => {
                let file = File::open(path)?;
                let reader = BufReader::new(file);
                serde_json::from_reader(reader).map_err(invalid_data)
            }
            Codec::Compressed => {
                let bytes = std::fs::read(path)?;
                let payload = bytes.strip_prefix(COMPRESSED_MAGIC.as_slice()).ok_or_else(|| {
                    io::Error::new(ErrorKind::InvalidData, "missing compressed model header")
                })?;
                let json = lz4_flex::decompress_size_prepended(payload).map_err(invalid_data)?;
                serde_json::from_slice(&json).map_err(invalid_data)
            }
        }
    }
}

fn invalid_data<E>(e: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(ErrorKind::InvalidData, e)
}
