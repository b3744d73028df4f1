use std::io::{Read, Result as IOResult};
use bevy_math::Vec3;
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
  pub normal: Vec3,
  pub dist: f32,
  pub plane_type: i32,
}

impl Plane {
  /// Axial planes use 0-2 for X, Y and Z. 3-5 mark planes that are mostly along that axis.
  pub fn is_axial(&self) -> bool {
    (0..3).contains(&self.plane_type)
  }
}

impl LumpData for Plane {
  fn lump_type() -> LumpType {
    LumpType::Planes
  }

  fn element_size() -> usize {
    20
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let normal = Vec3::from_array(reader.read_f32_array::<3>()?);
    let dist = reader.read_f32()?;
    let plane_type = reader.read_i32()?;
    Ok(Self {
      normal,
      dist,
      plane_type,
    })
  }
}
