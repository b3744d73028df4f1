pub use self::area::Area;
pub use self::area_portal::AreaPortal;
pub use self::brush::{Brush, Contents};
pub use self::brush_model::BrushModel;
pub use self::brush_side::BrushSide;
pub use self::edge::Edge;
pub use self::entity::{Entities, Entity};
pub use self::face::{Face, MAX_LIGHTMAP_STYLES};
pub use self::leaf::Leaf;
pub use self::leaf_brush::LeafBrush;
pub use self::leaf_face::LeafFace;
pub use self::node::{Node, NodeChild};
pub use self::plane::Plane;
pub use self::surface_edge::SurfaceEdge;
pub use self::texture_info::{SurfaceFlags, TextureInfo, TEXTURE_NAME_LENGTH};
pub use self::vertex::Vertex;
pub use self::visibility::{Visibility, VisibilitySet};

use std::io::{Read, Result as IOResult};

mod area;
mod area_portal;
mod brush;
mod brush_model;
mod brush_side;
mod edge;
mod entity;
mod face;
mod leaf;
mod leaf_brush;
mod leaf_face;
mod node;
mod plane;
mod surface_edge;
mod texture_info;
mod vertex;
mod visibility;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LumpType {
  Entities = 0,
  Planes = 1,
  Vertices = 2,
  Visibility = 3,
  Nodes = 4,
  TextureInfo = 5,
  Faces = 6,
  Lighting = 7,
  Leafs = 8,
  LeafFaces = 9,
  LeafBrushes = 10,
  Edges = 11,
  SurfaceEdges = 12,
  Models = 13,
  Brushes = 14,
  BrushSides = 15,
  PotentiallyVisibleSet = 16,
  Areas = 17,
  AreaPortals = 18,
}

impl LumpType {
  pub const ALL: [LumpType; 19] = [
    LumpType::Entities,
    LumpType::Planes,
    LumpType::Vertices,
    LumpType::Visibility,
    LumpType::Nodes,
    LumpType::TextureInfo,
    LumpType::Faces,
    LumpType::Lighting,
    LumpType::Leafs,
    LumpType::LeafFaces,
    LumpType::LeafBrushes,
    LumpType::Edges,
    LumpType::SurfaceEdges,
    LumpType::Models,
    LumpType::Brushes,
    LumpType::BrushSides,
    LumpType::PotentiallyVisibleSet,
    LumpType::Areas,
    LumpType::AreaPortals,
  ];

  /// Maximum element count accepted for blob lumps. Record lumps have no limit.
  pub fn capacity(self) -> Option<usize> {
    match self {
      LumpType::Entities => Some(0x40000),
      LumpType::Lighting => Some(0x200000),
      LumpType::LeafFaces => Some(65536),
      LumpType::LeafBrushes => Some(65536),
      LumpType::SurfaceEdges => Some(256000),
      LumpType::PotentiallyVisibleSet => Some(256),
      _ => None,
    }
  }
}

/// A fixed size element stored back to back in one lump.
pub(crate) trait LumpData: Sized {
  fn lump_type() -> LumpType;
  fn element_size() -> usize;
  fn read(read: &mut dyn Read) -> IOResult<Self>;
}
