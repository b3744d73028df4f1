use std::io::{Read, Result as IOResult};
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AreaPortal {
  pub portal_number: i32,
  pub other_area: i32,
}

impl LumpData for AreaPortal {
  fn lump_type() -> LumpType {
    LumpType::AreaPortals
  }

  fn element_size() -> usize {
    8
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let portal_number = reader.read_i32()?;
    let other_area = reader.read_i32()?;
    Ok(Self {
      portal_number,
      other_area,
    })
  }
}
