use std::io::{Read, Result as IOResult};
use crate::lump_data::{LumpData, LumpType, brush::Contents};
use crate::PrimitiveRead;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaf {
  pub contents: Contents,
  /// -1 for leafs outside of the visibility data.
  pub cluster: i16,
  pub area: i16,
  pub mins: [i16; 3],
  pub maxs: [i16; 3],
  pub first_leaf_face: u16,
  pub leaf_faces_count: u16,
  pub first_leaf_brush: u16,
  pub leaf_brushes_count: u16,
}

impl Leaf {
  pub fn leaf_faces(&self) -> std::ops::Range<usize> {
    let first = self.first_leaf_face as usize;
    first..first + self.leaf_faces_count as usize
  }

  pub fn leaf_brushes(&self) -> std::ops::Range<usize> {
    let first = self.first_leaf_brush as usize;
    first..first + self.leaf_brushes_count as usize
  }
}

impl LumpData for Leaf {
  fn lump_type() -> LumpType {
    LumpType::Leafs
  }

  fn element_size() -> usize {
    28
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let contents = Contents::read(reader)?;
    let cluster = reader.read_i16()?;
    let area = reader.read_i16()?;
    let mins = reader.read_i16_array::<3>()?;
    let maxs = reader.read_i16_array::<3>()?;
    let first_leaf_face = reader.read_u16()?;
    let leaf_faces_count = reader.read_u16()?;
    let first_leaf_brush = reader.read_u16()?;
    let leaf_brushes_count = reader.read_u16()?;

    Ok(Self {
      contents,
      cluster,
      area,
      mins,
      maxs,
      first_leaf_face,
      leaf_faces_count,
      first_leaf_brush,
      leaf_brushes_count,
    })
  }
}
