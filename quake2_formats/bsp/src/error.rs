//! Errors returned while loading a map.

use std::collections::TryReserveError;

use crate::LumpType;

/// Structural problems with the map data itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
  #[error("bad magic {found:?}, expected {expected:?}")]
  BadMagic { found: [u8; 4], expected: [u8; 4] },

  #[error("unsupported BSP version {found}, expected {expected}")]
  BadVersion { found: i32, expected: i32 },

  #[error("file is {length} bytes, too short for the {required} byte header")]
  TruncatedHeader { length: usize, required: usize },

  #[error("{lump:?} lump range {offset}+{length} exceeds the {buffer_length} byte buffer")]
  OutOfBounds {
    lump: LumpType,
    offset: i64,
    length: i64,
    buffer_length: usize,
  },

  #[error("{lump:?} lump length {length} is not a multiple of the {element_size} byte element size")]
  Misaligned {
    lump: LumpType,
    length: usize,
    element_size: usize,
  },

  #[error("{lump:?} lump holds {count} elements, more than the maximum of {capacity}")]
  CapacityExceeded {
    lump: LumpType,
    count: usize,
    capacity: usize,
  },

  #[error("visibility lump declares {clusters} clusters")]
  InvalidClusterCount { clusters: i32 },

  #[error("malformed entity text at byte {position}: {reason}")]
  InvalidEntities { position: usize, reason: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum BspError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Format(#[from] FormatError),

  #[error("failed to allocate storage for the {}: {source}", allocation_target(.lump))]
  ResourceExhausted {
    lump: Option<LumpType>,
    #[source]
    source: TryReserveError,
  },
}

fn allocation_target(lump: &Option<LumpType>) -> String {
  match lump {
    Some(lump) => format!("{:?} lump", lump),
    None => "file buffer".to_string(),
  }
}

impl BspError {
  pub fn format_error(&self) -> Option<&FormatError> {
    match self {
      BspError::Format(error) => Some(error),
      _ => None,
    }
  }
}

pub type BspResult<T> = Result<T, BspError>;
