use crate::lump_data::{LumpData, LumpType};
use crate::PrimitiveRead;
use std::io::{Read, Result as IOResult};

pub const MAX_LIGHTMAP_STYLES: usize = 4;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Face {
    pub plane_index: u16,
    /// Non-zero when the face points away from its plane.
    pub side: i16,
    pub first_edge: i32,
    pub edges_count: i16,
    pub texture_info: i16,
    pub styles: [u8; MAX_LIGHTMAP_STYLES],
    /// Start of `styles * surface size` samples in the lighting lump, -1 for none.
    pub light_offset: i32,
}

impl Face {
    pub fn surface_edges(&self) -> std::ops::Range<usize> {
        let first = self.first_edge.max(0) as usize;
        first..first + self.edges_count.max(0) as usize
    }

    /// Light styles in use. A style of 255 terminates the list.
    pub fn light_styles(&self) -> impl Iterator<Item = u8> + '_ {
        self.styles.iter().copied().take_while(|style| *style != 255)
    }
}

impl LumpData for Face {
    fn lump_type() -> LumpType {
        LumpType::Faces
    }

    fn element_size() -> usize {
        20
    }

    fn read(reader: &mut dyn Read) -> IOResult<Self> {
        let plane_index = reader.read_u16()?;
        let side = reader.read_i16()?;
        let first_edge = reader.read_i32()?;
        let edges_count = reader.read_i16()?;
        let texture_info = reader.read_i16()?;
        let styles = [
            reader.read_u8()?,
            reader.read_u8()?,
            reader.read_u8()?,
            reader.read_u8()?,
        ];
        let light_offset = reader.read_i32()?;
        Ok(Self {
            plane_index,
            side,
            first_edge,
            edges_count,
            texture_info,
            styles,
            light_offset,
        })
    }
}
