use std::io::{Read, Result as IOResult};
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

/// Index into the edge lump. Negative indices walk the edge backwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SurfaceEdge {
  pub index: i32
}

impl SurfaceEdge {
  pub fn edge_index(&self) -> usize {
    self.index.unsigned_abs() as usize
  }

  pub fn is_reversed(&self) -> bool {
    self.index < 0
  }
}

impl LumpData for SurfaceEdge {
  fn lump_type() -> LumpType {
    LumpType::SurfaceEdges
  }

  fn element_size() -> usize {
    4
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let edge = reader.read_i32()?;
    Ok(Self {
      index: edge
    })
  }
}
