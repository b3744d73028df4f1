use std::io::{Read, Result as IOResult};
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Area {
  pub area_portals_count: i32,
  pub first_area_portal: i32,
}

impl LumpData for Area {
  fn lump_type() -> LumpType {
    LumpType::Areas
  }

  fn element_size() -> usize {
    8
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let area_portals_count = reader.read_i32()?;
    let first_area_portal = reader.read_i32()?;
    Ok(Self {
      area_portals_count,
      first_area_portal,
    })
  }
}
