use std::io::{Read, Result as IOResult};
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Edge {
  pub vertex_index: [u16; 2]
}

impl LumpData for Edge {
  fn lump_type() -> LumpType {
    LumpType::Edges
  }

  fn element_size() -> usize {
    4
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let vertex_index = [
      reader.read_u16()?,
      reader.read_u16()?
    ];
    Ok(Self {
      vertex_index
    })
  }
}
