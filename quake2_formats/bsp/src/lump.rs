use std::io::{Read, Result as IOResult};
use std::ops::Range;

use crate::{FormatError, LumpType, PrimitiveRead};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Lump {
  pub file_offset: i32,
  pub file_length: i32,
}

impl Lump {
  pub const SIZE: usize = 8;

  pub fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let file_offset = reader.read_i32()?;
    let file_length = reader.read_i32()?;

    Ok(Self {
      file_offset,
      file_length,
    })
  }

  pub fn is_empty(&self) -> bool {
    self.file_length == 0
  }

  /// Byte range of the lump inside a buffer of `buffer_length` bytes.
  /// Negative fields and ranges past the end of the buffer are rejected.
  pub fn byte_range(&self, lump_type: LumpType, buffer_length: usize) -> Result<Range<usize>, FormatError> {
    let out_of_bounds = || FormatError::OutOfBounds {
      lump: lump_type,
      offset: self.file_offset as i64,
      length: self.file_length as i64,
      buffer_length,
    };

    if self.file_offset < 0 || self.file_length < 0 {
      return Err(out_of_bounds());
    }
    let start = self.file_offset as usize;
    let end = start
      .checked_add(self.file_length as usize)
      .ok_or_else(out_of_bounds)?;
    if end > buffer_length {
      return Err(out_of_bounds());
    }
    Ok(start..end)
  }
}
