use bevy_math::Vec4;
use bitflags::bitflags;
use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;
use std::io::{Read, Result as IOResult};

pub const TEXTURE_NAME_LENGTH: usize = 32;

bitflags! {
  #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
  pub struct SurfaceFlags: u32 {
    /// Value will hold the light strength.
    const LIGHT = 0x1;
    const SLICK = 0x2;
    const SKY = 0x4;
    const WARP = 0x8;
    const TRANS33 = 0x10;
    const TRANS66 = 0x20;
    const FLOWING = 0x40;
    const NODRAW = 0x80;
  }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextureInfo {
  /// `[s, t]`, each `xyz` plus offset.
  pub texture_vecs: [Vec4; 2],
  pub flags: SurfaceFlags,
  /// Light emission etc.
  pub value: i32,
  /// Path of the texture relative to `textures/` without the `.wal` extension.
  pub texture: [u8; TEXTURE_NAME_LENGTH],
  /// For animations, -1 ends the chain.
  pub next_texture_info: i32,
}

impl TextureInfo {
  pub fn texture_name(&self) -> Option<&str> {
    let end = self.texture.iter().position(|c| *c == 0).unwrap_or(TEXTURE_NAME_LENGTH);
    std::str::from_utf8(&self.texture[..end]).ok()
  }

  pub fn next(&self) -> Option<usize> {
    if self.next_texture_info < 0 {
      None
    } else {
      Some(self.next_texture_info as usize)
    }
  }

  /// Texture coordinates of a point on the surface.
  pub fn texture_coordinates(&self, position: bevy_math::Vec3) -> [f32; 2] {
    let position = position.extend(1.0f32);
    [
      self.texture_vecs[0].dot(position),
      self.texture_vecs[1].dot(position),
    ]
  }
}

impl LumpData for TextureInfo {
  fn lump_type() -> LumpType {
    LumpType::TextureInfo
  }

  fn element_size() -> usize {
    76
  }

  fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let texture_vecs = [
      Vec4::from_array(reader.read_f32_array::<4>()?),
      Vec4::from_array(reader.read_f32_array::<4>()?),
    ];
    let flags = SurfaceFlags::from_bits_retain(reader.read_i32()? as u32);
    let value = reader.read_i32()?;
    let mut texture = [0u8; TEXTURE_NAME_LENGTH];
    reader.read_exact(&mut texture)?;
    let next_texture_info = reader.read_i32()?;

    Ok(Self {
      texture_vecs,
      flags,
      value,
      texture,
      next_texture_info,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bevy_math::Vec3;

  fn texture_info(name: &[u8]) -> TextureInfo {
    let mut texture = [0u8; TEXTURE_NAME_LENGTH];
    texture[..name.len()].copy_from_slice(name);
    TextureInfo {
      texture_vecs: [Vec4::new(1.0, 0.0, 0.0, 8.0), Vec4::new(0.0, 0.0, -1.0, 0.0)],
      flags: SurfaceFlags::empty(),
      value: 0,
      texture,
      next_texture_info: -1,
    }
  }

  #[test]
  fn texture_name_is_trimmed_at_nul() {
    assert_eq!(texture_info(b"e1u1/floor1_3").texture_name(), Some("e1u1/floor1_3"));
    assert_eq!(texture_info(&[b'a'; TEXTURE_NAME_LENGTH]).texture_name().map(str::len), Some(32));
    assert_eq!(texture_info(&[0xff, 0xfe]).texture_name(), None);
  }

  #[test]
  fn projects_points_with_offset() {
    let info = texture_info(b"sky");
    assert_eq!(info.texture_coordinates(Vec3::new(2.0, 5.0, 3.0)), [10.0, -3.0]);
    assert_eq!(info.next(), None);
  }
}
