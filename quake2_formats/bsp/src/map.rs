use std::path::Path;

use crate::file_buffer::read_file;
use crate::lump_data::{
  Area, AreaPortal, Brush, BrushModel, BrushSide, Edge, Entities, Face, Leaf, LeafBrush, LeafFace, LumpData, LumpType,
  Node, Plane, SurfaceEdge, TextureInfo, Vertex, Visibility,
};
use crate::{BspError, BspResult, FormatError, LoadOptions, Lump, MapHeader};

/// Everything needed to decode the lumps of one buffer. Each read slices the
/// buffer at its own lump, so reads can happen in any order.
pub(crate) struct MapReader<'a> {
  data: &'a [u8],
  header: MapHeader,
}

impl<'a> MapReader<'a> {
  pub(crate) fn new(data: &'a [u8], options: &LoadOptions) -> Result<Self, FormatError> {
    let header = MapHeader::parse(data, options)?;
    Ok(Self { data, header })
  }

  pub(crate) fn header(&self) -> &MapHeader {
    &self.header
  }

  fn lump_bytes(&self, lump_type: LumpType) -> Result<&'a [u8], FormatError> {
    let range = self.header.lump(lump_type).byte_range(lump_type, self.data.len())?;
    Ok(&self.data[range])
  }

  pub(crate) fn read_lump_data<T: LumpData>(&self) -> BspResult<Box<[T]>> {
    let lump_type = T::lump_type();
    let mut reader = self.lump_bytes(lump_type)?;
    let element_count = element_count(lump_type, reader.len(), T::element_size())?;

    let mut elements = Vec::<T>::new();
    elements
      .try_reserve_exact(element_count)
      .map_err(|source| BspError::ResourceExhausted {
        lump: Some(lump_type),
        source,
      })?;
    for _ in 0..element_count {
      elements.push(T::read(&mut reader)?);
    }

    log::debug!("{:?} count={}", lump_type, element_count);
    Ok(elements.into_boxed_slice())
  }

  pub(crate) fn read_raw_lump(&self, lump_type: LumpType) -> BspResult<Box<[u8]>> {
    let bytes = self.lump_bytes(lump_type)?;
    let length = element_count(lump_type, bytes.len(), 1)?;

    let mut data = Vec::<u8>::new();
    data
      .try_reserve_exact(length)
      .map_err(|source| BspError::ResourceExhausted {
        lump: Some(lump_type),
        source,
      })?;
    data.extend_from_slice(bytes);

    log::debug!("{:?} count={}", lump_type, length);
    Ok(data.into_boxed_slice())
  }

  pub(crate) fn read_visibility(&self) -> BspResult<Option<Visibility>> {
    let data = self.read_raw_lump(LumpType::Visibility)?;
    if data.is_empty() {
      return Ok(None);
    }
    let visibility = Visibility::parse(data)?;
    log::debug!("{:?} clusters={}", LumpType::Visibility, visibility.clusters_count());
    Ok(Some(visibility))
  }
}

/// Element count of a lump holding `length` bytes of `element_size` byte elements.
fn element_count(lump_type: LumpType, length: usize, element_size: usize) -> Result<usize, FormatError> {
  if length % element_size != 0 {
    return Err(FormatError::Misaligned {
      lump: lump_type,
      length,
      element_size,
    });
  }

  let count = length / element_size;
  if let Some(capacity) = lump_type.capacity() {
    if count > capacity {
      return Err(FormatError::CapacityExceeded {
        lump: lump_type,
        count,
        capacity,
      });
    }
  }
  Ok(count)
}

/// A fully decoded map. Either every lump decoded or loading failed, there is
/// no partially loaded state.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
  header: MapHeader,
  entities: Entities,
  planes: Box<[Plane]>,
  vertices: Box<[Vertex]>,
  visibility: Option<Visibility>,
  nodes: Box<[Node]>,
  texture_infos: Box<[TextureInfo]>,
  faces: Box<[Face]>,
  lighting: Box<[u8]>,
  leafs: Box<[Leaf]>,
  leaf_faces: Box<[LeafFace]>,
  leaf_brushes: Box<[LeafBrush]>,
  edges: Box<[Edge]>,
  surface_edges: Box<[SurfaceEdge]>,
  models: Box<[BrushModel]>,
  brushes: Box<[Brush]>,
  brush_sides: Box<[BrushSide]>,
  potentially_visible_set: Box<[u8]>,
  areas: Box<[Area]>,
  area_portals: Box<[AreaPortal]>,
}

impl Map {
  pub fn load<P: AsRef<Path>>(path: P) -> BspResult<Map> {
    Self::load_with_options(path, &LoadOptions::default())
  }

  pub fn load_with_options<P: AsRef<Path>>(path: P, options: &LoadOptions) -> BspResult<Map> {
    let path = path.as_ref();
    let data = read_file(path)?;
    log::info!("Loading map {} ({} bytes)", path.display(), data.len());
    Self::from_bytes(&data, options)
  }

  pub fn from_bytes(data: &[u8], options: &LoadOptions) -> BspResult<Map> {
    let reader = MapReader::new(data, options)?;

    Ok(Map {
      header: *reader.header(),
      entities: Entities::new(reader.read_raw_lump(LumpType::Entities)?),
      planes: reader.read_lump_data()?,
      vertices: reader.read_lump_data()?,
      visibility: reader.read_visibility()?,
      nodes: reader.read_lump_data()?,
      texture_infos: reader.read_lump_data()?,
      faces: reader.read_lump_data()?,
      lighting: reader.read_raw_lump(LumpType::Lighting)?,
      leafs: reader.read_lump_data()?,
      leaf_faces: reader.read_lump_data()?,
      leaf_brushes: reader.read_lump_data()?,
      edges: reader.read_lump_data()?,
      surface_edges: reader.read_lump_data()?,
      models: reader.read_lump_data()?,
      brushes: reader.read_lump_data()?,
      brush_sides: reader.read_lump_data()?,
      potentially_visible_set: reader.read_raw_lump(LumpType::PotentiallyVisibleSet)?,
      areas: reader.read_lump_data()?,
      area_portals: reader.read_lump_data()?,
    })
  }

  pub fn header(&self) -> &MapHeader {
    &self.header
  }

  pub fn version(&self) -> i32 {
    self.header.version
  }

  pub fn lump(&self, lump_type: LumpType) -> Lump {
    self.header.lump(lump_type)
  }

  /// Element count of any lump. The visibility lump counts as one table.
  pub fn count(&self, lump_type: LumpType) -> usize {
    match lump_type {
      LumpType::Entities => self.num_entities(),
      LumpType::Planes => self.num_planes(),
      LumpType::Vertices => self.num_vertices(),
      LumpType::Visibility => self.num_visibility(),
      LumpType::Nodes => self.num_nodes(),
      LumpType::TextureInfo => self.num_texture_infos(),
      LumpType::Faces => self.num_faces(),
      LumpType::Lighting => self.num_lighting(),
      LumpType::Leafs => self.num_leafs(),
      LumpType::LeafFaces => self.num_leaf_faces(),
      LumpType::LeafBrushes => self.num_leaf_brushes(),
      LumpType::Edges => self.num_edges(),
      LumpType::SurfaceEdges => self.num_surface_edges(),
      LumpType::Models => self.num_models(),
      LumpType::Brushes => self.num_brushes(),
      LumpType::BrushSides => self.num_brush_sides(),
      LumpType::PotentiallyVisibleSet => self.num_potentially_visible_set(),
      LumpType::Areas => self.num_areas(),
      LumpType::AreaPortals => self.num_area_portals(),
    }
  }

  pub fn entities(&self) -> &Entities {
    &self.entities
  }

  pub fn num_entities(&self) -> usize {
    self.entities.len()
  }

  pub fn planes(&self) -> &[Plane] {
    &self.planes
  }

  pub fn num_planes(&self) -> usize {
    self.planes.len()
  }

  pub fn vertices(&self) -> &[Vertex] {
    &self.vertices
  }

  pub fn num_vertices(&self) -> usize {
    self.vertices.len()
  }

  pub fn visibility(&self) -> Option<&Visibility> {
    self.visibility.as_ref()
  }

  pub fn num_visibility(&self) -> usize {
    self.visibility.is_some() as usize
  }

  pub fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  pub fn num_nodes(&self) -> usize {
    self.nodes.len()
  }

  pub fn texture_infos(&self) -> &[TextureInfo] {
    &self.texture_infos
  }

  pub fn num_texture_infos(&self) -> usize {
    self.texture_infos.len()
  }

  pub fn faces(&self) -> &[Face] {
    &self.faces
  }

  pub fn num_faces(&self) -> usize {
    self.faces.len()
  }

  pub fn lighting(&self) -> &[u8] {
    &self.lighting
  }

  pub fn num_lighting(&self) -> usize {
    self.lighting.len()
  }

  pub fn leafs(&self) -> &[Leaf] {
    &self.leafs
  }

  pub fn num_leafs(&self) -> usize {
    self.leafs.len()
  }

  pub fn leaf_faces(&self) -> &[LeafFace] {
    &self.leaf_faces
  }

  pub fn num_leaf_faces(&self) -> usize {
    self.leaf_faces.len()
  }

  pub fn leaf_brushes(&self) -> &[LeafBrush] {
    &self.leaf_brushes
  }

  pub fn num_leaf_brushes(&self) -> usize {
    self.leaf_brushes.len()
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn num_edges(&self) -> usize {
    self.edges.len()
  }

  pub fn surface_edges(&self) -> &[SurfaceEdge] {
    &self.surface_edges
  }

  pub fn num_surface_edges(&self) -> usize {
    self.surface_edges.len()
  }

  pub fn models(&self) -> &[BrushModel] {
    &self.models
  }

  pub fn num_models(&self) -> usize {
    self.models.len()
  }

  pub fn brushes(&self) -> &[Brush] {
    &self.brushes
  }

  pub fn num_brushes(&self) -> usize {
    self.brushes.len()
  }

  pub fn brush_sides(&self) -> &[BrushSide] {
    &self.brush_sides
  }

  pub fn num_brush_sides(&self) -> usize {
    self.brush_sides.len()
  }

  pub fn potentially_visible_set(&self) -> &[u8] {
    &self.potentially_visible_set
  }

  pub fn num_potentially_visible_set(&self) -> usize {
    self.potentially_visible_set.len()
  }

  pub fn areas(&self) -> &[Area] {
    &self.areas
  }

  pub fn num_areas(&self) -> usize {
    self.areas.len()
  }

  pub fn area_portals(&self) -> &[AreaPortal] {
    &self.area_portals
  }

  pub fn num_area_portals(&self) -> usize {
    self.area_portals.len()
  }
}
