use std::io::{Read, Result as IOResult};

pub(crate) trait PrimitiveRead {
  fn read_u8(&mut self) -> IOResult<u8>;
  fn read_u16(&mut self) -> IOResult<u16>;
  fn read_i16(&mut self) -> IOResult<i16>;
  fn read_i32(&mut self) -> IOResult<i32>;
  fn read_f32(&mut self) -> IOResult<f32>;

  fn read_i16_array<const N: usize>(&mut self) -> IOResult<[i16; N]> {
    let mut values = [0i16; N];
    for value in &mut values {
      *value = self.read_i16()?;
    }
    Ok(values)
  }

  fn read_i32_array<const N: usize>(&mut self) -> IOResult<[i32; N]> {
    let mut values = [0i32; N];
    for value in &mut values {
      *value = self.read_i32()?;
    }
    Ok(values)
  }

  fn read_f32_array<const N: usize>(&mut self) -> IOResult<[f32; N]> {
    let mut values = [0f32; N];
    for value in &mut values {
      *value = self.read_f32()?;
    }
    Ok(values)
  }
}

impl<T: Read + ?Sized> PrimitiveRead for T {
  fn read_u8(&mut self) -> IOResult<u8> {
    let mut buffer = [0u8; 1];
    self.read_exact(&mut buffer)?;
    Ok(buffer[0])
  }

  fn read_u16(&mut self) -> IOResult<u16> {
    let mut buffer = [0u8; 2];
    self.read_exact(&mut buffer)?;
    Ok(u16::from_le_bytes(buffer))
  }

  fn read_i16(&mut self) -> IOResult<i16> {
    let mut buffer = [0u8; 2];
    self.read_exact(&mut buffer)?;
    Ok(i16::from_le_bytes(buffer))
  }

  fn read_i32(&mut self) -> IOResult<i32> {
    let mut buffer = [0u8; 4];
    self.read_exact(&mut buffer)?;
    Ok(i32::from_le_bytes(buffer))
  }

  fn read_f32(&mut self) -> IOResult<f32> {
    let mut buffer = [0u8; 4];
    self.read_exact(&mut buffer)?;
    Ok(f32::from_le_bytes(buffer))
  }
}
