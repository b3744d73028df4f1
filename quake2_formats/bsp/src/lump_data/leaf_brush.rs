use std::io::{Read, Result as IOResult};
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LeafBrush {
  pub index: u16
}

impl LumpData for LeafBrush {
  fn lump_type() -> LumpType {
    LumpType::LeafBrushes
  }

  fn element_size() -> usize {
    2
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let brush = reader.read_u16()?;
    Ok(Self {
      index: brush
    })
  }
}
