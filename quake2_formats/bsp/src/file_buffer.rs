use std::fs::File;
use std::io::{Error as IOError, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use crate::{BspError, BspResult};

pub(crate) trait ReadEntireSeekableFile {
  fn read_seekable_to_end(&mut self) -> BspResult<Box<[u8]>>;
}

// Sizes the buffer once from the stream length instead of growing it like read_to_end.
impl<T: Read + Seek + ?Sized> ReadEntireSeekableFile for T {
  fn read_seekable_to_end(&mut self) -> BspResult<Box<[u8]>> {
    let len = self.seek(SeekFrom::End(0))?;
    let _ = self.seek(SeekFrom::Start(0))?;
    let len = usize::try_from(len)
      .map_err(|_| IOError::new(ErrorKind::OutOfMemory, "file does not fit into memory"))?;

    let mut buffer = Vec::<u8>::new();
    buffer
      .try_reserve_exact(len)
      .map_err(|source| BspError::ResourceExhausted { lump: None, source })?;
    buffer.resize(len, 0u8);
    self.read_exact(&mut buffer)?;
    Ok(buffer.into_boxed_slice())
  }
}

/// Reads the whole file into one buffer.
pub fn read_file<P: AsRef<Path>>(path: P) -> BspResult<Box<[u8]>> {
  let mut file = File::open(path)?;
  file.read_seekable_to_end()
}
