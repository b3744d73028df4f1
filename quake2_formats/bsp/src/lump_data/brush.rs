use std::io::{Read, Result as IOResult};
use bitflags::bitflags;
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Brush {
  pub first_side: i32,
  pub sides_count: i32,
  pub contents: Contents
}

bitflags! {
  #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
  pub struct Contents: u32 {
    const SOLID = 0x1;
    const WINDOW = 0x2;
    const AUX = 0x4;
    const LAVA = 0x8;
    const SLIME = 0x10;
    const WATER = 0x20;
    const MIST = 0x40;
    const AREA_PORTAL = 0x8000;
    const PLAYER_CLIP = 0x10000;
    const MONSTER_CLIP = 0x20000;
    const CURRENT_0 = 0x40000;
    const CURRENT_90 = 0x80000;
    const CURRENT_180 = 0x100000;
    const CURRENT_270 = 0x200000;
    const CURRENT_UP = 0x400000;
    const CURRENT_DOWN = 0x800000;
    const ORIGIN = 0x1000000;
    const MONSTER = 0x2000000;
    const DEAD_MONSTER = 0x4000000;
    const DETAIL = 0x8000000;
    const TRANSLUCENT = 0x10000000;
    const LADDER = 0x20000000;

    const MASK_WATER = Self::WATER.bits() | Self::LAVA.bits() | Self::SLIME.bits();
    const MASK_OPAQUE = Self::SOLID.bits() | Self::SLIME.bits() | Self::LAVA.bits();
  }
}

impl Contents {
  pub(crate) fn read(reader: &mut dyn Read) -> IOResult<Self> {
    Ok(Contents::from_bits_retain(reader.read_i32()? as u32))
  }
}

impl LumpData for Brush {
  fn lump_type() -> LumpType {
    LumpType::Brushes
  }

  fn element_size() -> usize {
    12
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let first_side = reader.read_i32()?;
    let sides_count = reader.read_i32()?;
    let contents = Contents::read(reader)?;
    Ok(Self {
      first_side,
      sides_count,
      contents
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_content_bits_are_kept() {
    let mut data: &[u8] = &0x4000_0021u32.to_le_bytes();
    let contents = Contents::read(&mut data).unwrap();
    assert!(contents.contains(Contents::SOLID | Contents::WATER));
    assert!(contents.intersects(Contents::MASK_WATER));
    assert_eq!(contents.bits(), 0x4000_0021);
  }
}
