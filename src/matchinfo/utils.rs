//! Low-level byte reading utilities

use byteorder::{ByteOrder, LittleEndian};
use super::types::error::{MatchInfoError, Result};

/// Width of every integer in a matchinfo blob.
pub const U32_WIDTH: usize = 4;

/// Read a little-endian `u32` at `offset`.
///
/// The bounds check happens before the read, so a short buffer yields
/// `Truncated` instead of a panic. Its `expected` is the end offset of the
/// read, the smallest length that would have satisfied it.
pub fn read_u32_at(data: &[u8], offset: usize) -> Result<u32> {
    let end = offset.checked_add(U32_WIDTH).filter(|&end| end <= data.len());
    match end {
        Some(end) => Ok(LittleEndian::read_u32(&data[offset..end])),
        None => Err(MatchInfoError::Truncated {
            expected: (offset as u64).saturating_add(U32_WIDTH as u64),
            found: data.len(),
        }),
    }
}

/// Read `N` consecutive little-endian `u32` values starting at `offset`.
pub fn read_u32s_at<const N: usize>(data: &[u8], offset: usize) -> Result<[u32; N]> {
    let mut values = [0u32; N];
    for (i, value) in values.iter_mut().enumerate() {
        *value = read_u32_at(data, offset + i * U32_WIDTH)?;
    }
    Ok(values)
}
