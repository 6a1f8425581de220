//! Reading and writing `level.dat` files.
//!
//! A level file is a small header followed by the body of a compound:
//!
//! ```txt
//! [u32 LE: 0x0000000A][u32 LE: body length N][N bytes: body]
//! ```
//!
//! The body is the compound's payload, its entries followed by an End tag. The
//! root compound's tag byte and its (always empty) name are not written.
//!
//! ```
//! use bednbt::{compound, level};
//!
//! # fn main() -> bednbt::error::Result<()> {
//! let data = compound! { "GameType": 1 }?;
//! let bytes = level::write_level_file(&data)?;
//! assert_eq!(&bytes[..8], &[10, 0, 0, 0, 16, 0, 0, 0]);
//! assert_eq!(level::read_level_file(&bytes)?, data);
//! # Ok(())
//! # }
//! ```
//!
//! Files are only written once the full buffer has been built, so a failed
//! encode never leaves a truncated file behind. Nothing guards against two
//! writers on the same path; that is up to the caller.
mod builder;

use std::path::Path;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use log::debug;

use crate::de::Decoder;
use crate::error::{Error, Result};
use crate::{ser, Compound, Value};

pub use builder::{build_level_compound, Experiments, GameSettings};

/// First four bytes of every level file. It is the Compound tag id widened to
/// a u32.
pub const LEVEL_FILE_MARKER: u32 = 0x0000_000A;

const HEADER_LEN: usize = 8;

/// Encode a compound as a complete level file.
pub fn write_level_file(level: &Compound) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    ser::write_compound(&mut body, level)?;

    let body_len: u32 = body
        .len()
        .try_into()
        .map_err(|_| Error::range(format!("level body of {} bytes is too large", body.len())))?;

    let mut out = Vec::with_capacity(HEADER_LEN + body.len());
    out.write_u32::<LittleEndian>(LEVEL_FILE_MARKER)?;
    out.write_u32::<LittleEndian>(body_len)?;
    out.extend_from_slice(&body);

    Ok(out)
}

/// Decode a complete level file. The header must declare exactly the number
/// of bytes that follow it, and the body must be exactly one compound.
pub fn read_level_file(data: &[u8]) -> Result<Compound> {
    if data.len() < HEADER_LEN {
        return Err(Error::truncated(data.len(), HEADER_LEN - data.len())
            .context("level file header"));
    }

    let marker = LittleEndian::read_u32(&data[0..4]);
    if marker != LEVEL_FILE_MARKER {
        return Err(Error::type_mismatch(format!(
            "level file marker is {:#010x}, expected {:#010x}",
            marker, LEVEL_FILE_MARKER
        )));
    }

    let declared = LittleEndian::read_u32(&data[4..8]) as usize;
    let actual = data.len() - HEADER_LEN;
    if declared != actual {
        return Err(Error::length_mismatch(declared, actual));
    }

    let mut de = Decoder::with_range(data, HEADER_LEN, data.len())?;
    let level = de.decode_compound()?;

    if de.remaining() != 0 {
        return Err(Error::length_mismatch(declared, de.position() - HEADER_LEN)
            .context("trailing bytes after level compound"));
    }

    Ok(level)
}

/// Write a level file to `path`, creating or truncating it.
pub fn save_level_file(path: impl AsRef<Path>, level: &Compound) -> Result<()> {
    let path = path.as_ref();
    let bytes = write_level_file(level)?;
    std::fs::write(path, &bytes)?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

pub fn load_level_file(path: impl AsRef<Path>) -> Result<Compound> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    debug!("read {} bytes from {}", data.len(), path.display());
    read_level_file(&data)
}

/// Rebuild a level compound with `LastPlayed` set to `time` (unix seconds).
/// The entry is appended if it was missing.
pub fn set_last_played(level: &Compound, time: i64) -> Result<Compound> {
    let mut found = false;
    let entries = level.iter().map(|(key, value)| {
        if key == "LastPlayed" {
            found = true;
            (key.to_owned(), Value::Long(time))
        } else {
            (key.to_owned(), value.clone())
        }
    });

    let mut updated = Compound::from_entries(entries)?;
    if !found {
        updated.insert("LastPlayed", Value::Long(time))?;
    }

    Ok(updated)
}

/// Set the last played time of the level file at `path`, so the game lists the
/// world as the most recently played.
pub fn update_last_played(path: impl AsRef<Path>, time: i64) -> Result<()> {
    let path = path.as_ref();
    let level = load_level_file(path)?;
    save_level_file(path, &set_last_played(&level, time)?)
}
