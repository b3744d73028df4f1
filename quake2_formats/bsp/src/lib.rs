//! Loader for Quake II `IBSP` version 38 maps.
//!
//! The whole file is read into memory and every lump is decoded into its own
//! typed sequence:
//!
//! ```no_run
//! use quake2_bsp::{LoadOptions, Map, VersionPolicy};
//!
//! let map = Map::load("maps/base1.bsp")?;
//! println!("{} planes, {} faces", map.num_planes(), map.num_faces());
//!
//! let strict = LoadOptions::default().with_version_policy(VersionPolicy::Reject);
//! let map = Map::load_with_options("maps/base1.bsp", &strict)?;
//! # Ok::<(), quake2_bsp::BspError>(())
//! ```

pub use self::error::{BspError, BspResult, FormatError};
pub use self::file_buffer::read_file;
pub use self::lump::Lump;
pub use self::lump_data::*;
pub use self::map::Map;
pub use self::map_header::{MapHeader, BSP_MAGIC, BSP_VERSION, LUMP_COUNT};
pub use self::options::{LoadOptions, VersionPolicy};

pub(crate) use self::read_util::PrimitiveRead;

mod error;
mod file_buffer;
mod lump;
mod lump_data;
mod map;
mod map_header;
mod options;
mod read_util;
