use std::io::{Read, Result as IOResult};
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BrushSide {
  /// Facing out of the leaf.
  pub plane_number: u16,
  pub texture_info: i16,
}

impl LumpData for BrushSide {
  fn lump_type() -> LumpType {
    LumpType::BrushSides
  }

  fn element_size() -> usize {
    4
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let plane_number = reader.read_u16()?;
    let texture_info = reader.read_i16()?;
    Ok(Self {
      plane_number,
      texture_info,
    })
  }
}
