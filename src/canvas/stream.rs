//! Binary stream encoding for canvas geometry
//!
//! Scalars are written as big-endian `f64`, vectors as three scalars in
//! x, y, z order. Strings carry a big-endian `u32` byte length.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use glam::Vec3;
use std::io::{Read, Write};

/// Errors while reading or writing canvas streams
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Stream IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid canvas type id: {0}")]
    InvalidTypeId(#[from] std::string::FromUtf8Error),
    #[error("Unknown canvas type: {0}")]
    UnknownCanvas(String),
}

pub fn write_scalar(w: &mut dyn Write, value: f32) -> Result<(), StreamError> {
    w.write_f64::<BigEndian>(f64::from(value))?;
    Ok(())
}

pub fn read_scalar(r: &mut dyn Read) -> Result<f32, StreamError> {
    Ok(r.read_f64::<BigEndian>()? as f32)
}

pub fn write_vec3(w: &mut dyn Write, v: Vec3) -> Result<(), StreamError> {
    write_scalar(w, v.x)?;
    write_scalar(w, v.y)?;
    write_scalar(w, v.z)
}

pub fn read_vec3(r: &mut dyn Read) -> Result<Vec3, StreamError> {
    let x = read_scalar(r)?;
    let y = read_scalar(r)?;
    let z = read_scalar(r)?;
    Ok(Vec3::new(x, y, z))
}

pub fn write_string(w: &mut dyn Write, s: &str) -> Result<(), StreamError> {
    w.write_u32::<BigEndian>(s.len() as u32)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

pub fn read_string(r: &mut dyn Read) -> Result<String, StreamError> {
    let len = u64::from(r.read_u32::<BigEndian>()?);
    let mut bytes = Vec::new();
    r.take(len).read_to_end(&mut bytes)?;
    if bytes.len() as u64 != len {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }
    Ok(String::from_utf8(bytes)?)
}
