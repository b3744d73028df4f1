use std::io::{Read, Result as IOResult};
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
  pub plane_number: i32,
  /// Negative children are leafs: `-(leaf + 1)`.
  pub children: [i32; 2],
  pub mins: [i16; 3],
  pub maxs: [i16; 3],
  pub first_face: u16,
  pub faces_count: u16,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeChild {
  Node(usize),
  Leaf(usize),
}

impl Node {
  pub fn child(&self, side: usize) -> NodeChild {
    let index = self.children[side];
    if index < 0 {
      NodeChild::Leaf((-1 - index) as usize)
    } else {
      NodeChild::Node(index as usize)
    }
  }
}

impl LumpData for Node {
  fn lump_type() -> LumpType {
    LumpType::Nodes
  }

  fn element_size() -> usize {
    28
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let plane_number = reader.read_i32()?;
    let children = reader.read_i32_array::<2>()?;
    let mins = reader.read_i16_array::<3>()?;
    let maxs = reader.read_i16_array::<3>()?;
    let first_face = reader.read_u16()?;
    let faces_count = reader.read_u16()?;

    Ok(Self {
      plane_number,
      children,
      mins,
      maxs,
      first_face,
      faces_count,
    })
  }
}
