use std::io::{Read, Result as IOResult};

use crate::lump::Lump;
use crate::{FormatError, LoadOptions, LumpType, PrimitiveRead, VersionPolicy};

pub const LUMP_COUNT: usize = 19;
pub const BSP_MAGIC: [u8; 4] = *b"IBSP";
pub const BSP_VERSION: i32 = 38;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MapHeader {
  pub identifier: [u8; 4],
  pub version: i32,
  pub lumps: [Lump; LUMP_COUNT],
}

impl MapHeader {
  pub const SIZE: usize = 4 + 4 + LUMP_COUNT * Lump::SIZE;

  pub fn read(reader: &mut dyn Read) -> IOResult<MapHeader> {
    let mut identifier = [0u8; 4];
    reader.read_exact(&mut identifier)?;
    let version = reader.read_i32()?;
    let mut lumps = [Lump::default(); LUMP_COUNT];
    for lump in &mut lumps {
      *lump = Lump::read(reader)?;
    }
    Ok(MapHeader {
      identifier,
      version,
      lumps,
    })
  }

  /// Reads and checks the header at the start of `data`.
  pub fn parse(data: &[u8], options: &LoadOptions) -> Result<MapHeader, FormatError> {
    if data.len() < Self::SIZE {
      return Err(FormatError::TruncatedHeader {
        length: data.len(),
        required: Self::SIZE,
      });
    }

    let mut reader = &data[..Self::SIZE];
    let header = Self::read(&mut reader).map_err(|_| FormatError::TruncatedHeader {
      length: data.len(),
      required: Self::SIZE,
    })?;

    if header.identifier != BSP_MAGIC {
      return Err(FormatError::BadMagic {
        found: header.identifier,
        expected: BSP_MAGIC,
      });
    }

    if header.version != BSP_VERSION {
      match options.version_policy {
        VersionPolicy::Reject => {
          return Err(FormatError::BadVersion {
            found: header.version,
            expected: BSP_VERSION,
          });
        }
        VersionPolicy::Warn => {
          log::warn!("BSP version {} does not match expected version {}, continuing", header.version, BSP_VERSION);
        }
      }
    }

    Ok(header)
  }

  pub fn lump(&self, lump_type: LumpType) -> Lump {
    self.lumps[lump_type as usize]
  }
}
