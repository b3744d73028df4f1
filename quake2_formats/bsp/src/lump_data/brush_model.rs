use std::io::{Read, Result as IOResult};
use bevy_math::Vec3;
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

/// Model 0 is the world, the others are inline brush models referenced by entities as `*n`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BrushModel {
  pub mins: Vec3,
  pub maxs: Vec3,
  /// For sounds or lights.
  pub origin: Vec3,
  pub head_node: i32,
  pub first_face: i32,
  pub faces_count: i32,
}

impl LumpData for BrushModel {
  fn lump_type() -> LumpType {
    LumpType::Models
  }

  fn element_size() -> usize {
    48
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let mins = Vec3::from_array(reader.read_f32_array::<3>()?);
    let maxs = Vec3::from_array(reader.read_f32_array::<3>()?);
    let origin = Vec3::from_array(reader.read_f32_array::<3>()?);
    let head_node = reader.read_i32()?;
    let first_face = reader.read_i32()?;
    let faces_count = reader.read_i32()?;
    Ok(Self {
      mins,
      maxs,
      origin,
      head_node,
      first_face,
      faces_count,
    })
  }
}
