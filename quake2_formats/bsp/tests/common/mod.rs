#![allow(dead_code)]

use quake2_bsp::{LumpType, BSP_MAGIC, BSP_VERSION, LUMP_COUNT, MapHeader};

/// Writes synthetic maps: the header followed by the lump contents.
pub struct MapBuilder {
  magic: [u8; 4],
  version: i32,
  lumps: Vec<Vec<u8>>,
  order: Vec<LumpType>,
  directory_overrides: Vec<(LumpType, i32, i32)>,
}

impl MapBuilder {
  pub fn new() -> Self {
    Self {
      magic: BSP_MAGIC,
      version: BSP_VERSION,
      lumps: vec![Vec::new(); LUMP_COUNT],
      order: LumpType::ALL.to_vec(),
      directory_overrides: Vec::new(),
    }
  }

  pub fn magic(mut self, magic: [u8; 4]) -> Self {
    self.magic = magic;
    self
  }

  pub fn version(mut self, version: i32) -> Self {
    self.version = version;
    self
  }

  pub fn lump(mut self, lump_type: LumpType, data: Vec<u8>) -> Self {
    self.lumps[lump_type as usize] = data;
    self
  }

  /// Order in which lump contents are laid out after the header.
  pub fn order(mut self, order: Vec<LumpType>) -> Self {
    self.order = order;
    self
  }

  /// Replaces the directory entry written for `lump_type`.
  pub fn directory_entry(mut self, lump_type: LumpType, offset: i32, length: i32) -> Self {
    self.directory_overrides.push((lump_type, offset, length));
    self
  }

  pub fn build(&self) -> Vec<u8> {
    let mut directory = [(0i32, 0i32); LUMP_COUNT];
    let mut body = Vec::new();
    for lump_type in &self.order {
      let data = &self.lumps[*lump_type as usize];
      directory[*lump_type as usize] = ((MapHeader::SIZE + body.len()) as i32, data.len() as i32);
      body.extend_from_slice(data);
    }
    for (lump_type, offset, length) in &self.directory_overrides {
      directory[*lump_type as usize] = (*offset, *length);
    }

    let mut data = Vec::with_capacity(MapHeader::SIZE + body.len());
    data.extend_from_slice(&self.magic);
    data.extend_from_slice(&self.version.to_le_bytes());
    for (offset, length) in directory {
      data.extend_from_slice(&offset.to_le_bytes());
      data.extend_from_slice(&length.to_le_bytes());
    }
    data.extend_from_slice(&body);
    data
  }
}

/// Little endian record writer.
#[derive(Default)]
pub struct Record(pub Vec<u8>);

impl Record {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn u8(mut self, value: u8) -> Self {
    self.0.push(value);
    self
  }

  pub fn u16(mut self, value: u16) -> Self {
    self.0.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn i16(mut self, value: i16) -> Self {
    self.0.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn i32(mut self, value: i32) -> Self {
    self.0.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn f32(mut self, value: f32) -> Self {
    self.0.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn bytes(mut self, value: &[u8]) -> Self {
    self.0.extend_from_slice(value);
    self
  }

  pub fn finish(self) -> Vec<u8> {
    self.0
  }
}

pub fn records(records: impl IntoIterator<Item = Record>) -> Vec<u8> {
  records.into_iter().flat_map(Record::finish).collect()
}

pub fn plane(normal: [f32; 3], dist: f32, plane_type: i32) -> Record {
  Record::new().f32(normal[0]).f32(normal[1]).f32(normal[2]).f32(dist).i32(plane_type)
}

/// Record size of every lump with fixed size elements.
pub const ELEMENT_SIZES: [(LumpType, usize); 15] = [
  (LumpType::Planes, 20),
  (LumpType::Vertices, 12),
  (LumpType::Nodes, 28),
  (LumpType::TextureInfo, 76),
  (LumpType::Faces, 20),
  (LumpType::Leafs, 28),
  (LumpType::LeafFaces, 2),
  (LumpType::LeafBrushes, 2),
  (LumpType::Edges, 4),
  (LumpType::SurfaceEdges, 4),
  (LumpType::Models, 48),
  (LumpType::Brushes, 12),
  (LumpType::BrushSides, 4),
  (LumpType::Areas, 8),
  (LumpType::AreaPortals, 8),
];

/// A small map with data in every lump.
pub fn full_map() -> MapBuilder {
  let mut texture = [0u8; 32];
  texture[..11].copy_from_slice(b"e1u1/metal2");

  let visibility = {
    let mut data = Record::new().i32(2).i32(20).i32(21).i32(21).i32(20).finish();
    data.extend_from_slice(&[0b11, 0b01]);
    data
  };

  MapBuilder::new()
    .lump(LumpType::Entities, b"{\n\"classname\" \"worldspawn\"\n}\n\0".to_vec())
    .lump(
      LumpType::Planes,
      records([plane([1.0, 0.0, 0.0], 64.0, 0), plane([0.0, 0.0, 1.0], -16.0, 2)]),
    )
    .lump(
      LumpType::Vertices,
      records([
        Record::new().f32(0.0).f32(0.0).f32(0.0),
        Record::new().f32(64.0).f32(0.0).f32(0.0),
        Record::new().f32(64.0).f32(64.0).f32(0.0),
      ]),
    )
    .lump(LumpType::Visibility, visibility)
    .lump(
      LumpType::Nodes,
      Record::new()
        .i32(0).i32(-1).i32(-2)
        .i16(-64).i16(-64).i16(-64).i16(64).i16(64).i16(64)
        .u16(0).u16(1)
        .finish(),
    )
    .lump(
      LumpType::TextureInfo,
      Record::new()
        .f32(1.0).f32(0.0).f32(0.0).f32(0.0)
        .f32(0.0).f32(-1.0).f32(0.0).f32(0.0)
        .i32(0x1).i32(300)
        .bytes(&texture)
        .i32(-1)
        .finish(),
    )
    .lump(
      LumpType::Faces,
      Record::new()
        .u16(1).i16(0).i32(0).i16(3).i16(0)
        .u8(0).u8(255).u8(255).u8(255)
        .i32(0)
        .finish(),
    )
    .lump(LumpType::Lighting, vec![10, 20, 30, 40, 50, 60])
    .lump(
      LumpType::Leafs,
      records([
        Record::new().i32(0x1).i16(-1).i16(0)
          .i16(0).i16(0).i16(0).i16(0).i16(0).i16(0)
          .u16(0).u16(0).u16(0).u16(1),
        Record::new().i32(0).i16(1).i16(1)
          .i16(-64).i16(-64).i16(-64).i16(64).i16(64).i16(64)
          .u16(0).u16(1).u16(0).u16(0),
      ]),
    )
    .lump(LumpType::LeafFaces, Record::new().u16(0).finish())
    .lump(LumpType::LeafBrushes, Record::new().u16(0).finish())
    .lump(
      LumpType::Edges,
      records([
        Record::new().u16(0).u16(0),
        Record::new().u16(0).u16(1),
        Record::new().u16(1).u16(2),
        Record::new().u16(2).u16(0),
      ]),
    )
    .lump(LumpType::SurfaceEdges, Record::new().i32(1).i32(2).i32(-3).finish())
    .lump(
      LumpType::Models,
      Record::new()
        .f32(-64.0).f32(-64.0).f32(-64.0)
        .f32(64.0).f32(64.0).f32(64.0)
        .f32(0.0).f32(0.0).f32(0.0)
        .i32(0).i32(0).i32(1)
        .finish(),
    )
    .lump(LumpType::Brushes, Record::new().i32(0).i32(1).i32(0x1).finish())
    .lump(LumpType::BrushSides, Record::new().u16(0).i16(0).finish())
    .lump(LumpType::PotentiallyVisibleSet, vec![0; 16])
    .lump(LumpType::Areas, records([Record::new().i32(0).i32(0), Record::new().i32(1).i32(1)]))
    .lump(LumpType::AreaPortals, records([Record::new().i32(0).i32(0), Record::new().i32(1).i32(1)]))
}
