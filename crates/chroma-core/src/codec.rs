//! Fixed-width binary codec for byte colors.
//!
//! Appends and reads 1/3/4-byte colors against a plain byte buffer.
//! Component order on the wire is exactly the in-memory order; pairing
//! the bytes with a [`PixelFormat`](crate::PixelFormat) is the caller's
//! concern, as everywhere else.
//!
//! Round-trip fidelity holds for every byte color: reading back what was
//! appended yields the identical value.
//!
//! ```
//! use chroma_core::{codec, Color3};
//!
//! let mut buf = Vec::new();
//! codec::put_color3(&mut buf, Color3::new(255, 0, 170));
//! assert_eq!(codec::get_color3(&buf, 0).unwrap(), Color3::new(255, 0, 170));
//! ```

use crate::color::{Color1, Color3, Color4};
use crate::error::{Error, Result};

/// Appends a 1-byte color to the buffer.
#[inline]
pub fn put_color1(buf: &mut Vec<u8>, color: Color1<u8>) {
    buf.extend_from_slice(&color.0);
}

/// Appends a 3-byte color to the buffer.
#[inline]
pub fn put_color3(buf: &mut Vec<u8>, color: Color3<u8>) {
    buf.extend_from_slice(&color.0);
}

/// Appends a 4-byte color to the buffer.
#[inline]
pub fn put_color4(buf: &mut Vec<u8>, color: Color4<u8>) {
    buf.extend_from_slice(&color.0);
}

/// Reads a 1-byte color at `offset`.
#[inline]
pub fn get_color1(buf: &[u8], offset: usize) -> Result<Color1<u8>> {
    take::<1>(buf, offset).map(Color1)
}

/// Reads a 3-byte color at `offset`.
#[inline]
pub fn get_color3(buf: &[u8], offset: usize) -> Result<Color3<u8>> {
    take::<3>(buf, offset).map(Color3)
}

/// Reads a 4-byte color at `offset`.
#[inline]
pub fn get_color4(buf: &[u8], offset: usize) -> Result<Color4<u8>> {
    take::<4>(buf, offset).map(Color4)
}

/// Copies `N` bytes at `offset`, failing on a short buffer.
fn take<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    let available = buf.len().saturating_sub(offset);
    if available < N {
        return Err(Error::TruncatedBuffer {
            needed: N,
            available,
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[offset..offset + N]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_arities() {
        let mut buf = Vec::new();
        put_color1(&mut buf, Color1::new(7));
        put_color3(&mut buf, Color3::new(255, 0, 170));
        put_color4(&mut buf, Color4::new(1, 2, 3, 4));

        assert_eq!(buf.len(), 8);
        assert_eq!(get_color1(&buf, 0).unwrap(), Color1::new(7));
        assert_eq!(get_color3(&buf, 1).unwrap(), Color3::new(255, 0, 170));
        assert_eq!(get_color4(&buf, 4).unwrap(), Color4::new(1, 2, 3, 4));
    }

    #[test]
    fn test_truncated_read() {
        let buf = vec![1u8, 2];
        let err = get_color3(&buf, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedBuffer {
                needed: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn test_offset_past_end() {
        let buf = vec![1u8, 2, 3];
        let err = get_color1(&buf, 10).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedBuffer {
                needed: 1,
                available: 0
            }
        ));
    }
}
