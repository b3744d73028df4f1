use std::io::{Read, Result as IOResult};
use bevy_math::Vec3;
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vertex {
  pub position: Vec3,
}

impl LumpData for Vertex {
  fn lump_type() -> LumpType {
    LumpType::Vertices
  }

  fn element_size() -> usize {
    12
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let position = Vec3::from_array(reader.read_f32_array::<3>()?);
    Ok(Self {
      position
    })
  }
}
