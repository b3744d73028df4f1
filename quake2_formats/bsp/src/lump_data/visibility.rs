use crate::lump_data::LumpType;
use crate::{FormatError, PrimitiveRead};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum VisibilitySet {
    Potentially = 0,
    Hearable = 1,
}

/// The cluster table at the start of the visibility lump together with the
/// run-length compressed bit rows it points into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visibility {
    clusters_count: usize,
    byte_offsets: Box<[[i32; 2]]>,
    data: Box<[u8]>,
}

impl Visibility {
    /// `data` is the whole lump. Offsets in the table are relative to its start.
    pub(crate) fn parse(data: Box<[u8]>) -> Result<Self, FormatError> {
        let mut reader = &data[..];
        let clusters = reader.read_i32().map_err(|_| FormatError::Misaligned {
            lump: LumpType::Visibility,
            length: data.len(),
            element_size: 4,
        })?;
        if clusters < 0 {
            return Err(FormatError::InvalidClusterCount { clusters });
        }

        let clusters_count = clusters as usize;
        let table_length = clusters_count * 8;
        if table_length > reader.len() {
            return Err(FormatError::OutOfBounds {
                lump: LumpType::Visibility,
                offset: 4,
                length: table_length as i64,
                buffer_length: data.len(),
            });
        }

        let mut byte_offsets = Vec::with_capacity(clusters_count);
        for _ in 0..clusters_count {
            let pvs = reader.read_i32().map_err(|_| FormatError::InvalidClusterCount { clusters })?;
            let phs = reader.read_i32().map_err(|_| FormatError::InvalidClusterCount { clusters })?;
            byte_offsets.push([pvs, phs]);
        }

        Ok(Self {
            clusters_count,
            byte_offsets: byte_offsets.into_boxed_slice(),
            data,
        })
    }

    pub fn clusters_count(&self) -> usize {
        self.clusters_count
    }

    pub fn byte_offsets(&self) -> &[[i32; 2]] {
        &self.byte_offsets
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes in one decompressed row, one bit per cluster.
    pub fn row_size(&self) -> usize {
        (self.clusters_count + 7) >> 3
    }

    /// Decompresses the row of `cluster`. Cluster -1 sees nothing, clusters
    /// without data see everything.
    pub fn decompress(&self, cluster: i32, set: VisibilitySet) -> Box<[u8]> {
        let row_size = self.row_size();
        if cluster < 0 {
            return vec![0u8; row_size].into_boxed_slice();
        }

        let offset = self
            .byte_offsets
            .get(cluster as usize)
            .map(|offsets| offsets[set as usize])
            .unwrap_or(0);
        if offset <= 0 || offset as usize >= self.data.len() {
            return vec![0xffu8; row_size].into_boxed_slice();
        }

        let mut row = Vec::with_capacity(row_size);
        let mut compressed = self.data[offset as usize..].iter().copied();
        while row.len() < row_size {
            let Some(byte) = compressed.next() else {
                break;
            };
            if byte != 0 {
                row.push(byte);
                continue;
            }

            let Some(mut run) = compressed.next().map(|count| count as usize) else {
                break;
            };
            if row.len() + run > row_size {
                log::warn!("Visibility decompression overrun in cluster {}", cluster);
                run = row_size - row.len();
            }
            row.resize(row.len() + run, 0u8);
        }
        row.resize(row_size, 0u8);
        row.into_boxed_slice()
    }

    pub fn is_visible(&self, from_cluster: i32, to_cluster: i32) -> bool {
        if to_cluster < 0 {
            return false;
        }
        let row = self.decompress(from_cluster, VisibilitySet::Potentially);
        let to_cluster = to_cluster as usize;
        row.get(to_cluster >> 3)
            .map(|byte| byte & (1 << (to_cluster & 7)) != 0)
            .unwrap_or(false)
    }
}
