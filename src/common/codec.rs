// Generic little-endian integer codecs shared by all characteristic payloads.
// Everything here is pure and total: over-wide values are masked down to the
// wire field width instead of rejected.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Keeps the low `width` bits of `value`, discarding the rest.
///
/// Wire fields are narrower than the native integers the calendar hands out.
/// A value wider than its field is truncated to fit, not rejected; callers
/// are trusted to supply in-range calendar fields.
pub const fn truncate(value: u32, width: u32) -> u32 {
    value & (u32::MAX >> (32 - width))
}

/// Low 8 bits of `value`.
pub const fn from_u8(value: u32) -> u8 {
    truncate(value, 8) as u8
}

/// The low 16 bits of `value` as 2 little-endian bytes.
pub const fn from_u16(value: u32) -> [u8; 2] {
    (truncate(value, 16) as u16).to_le_bytes()
}

/// The low 24 bits of `value` as 3 little-endian bytes.
pub const fn from_u24(value: u32) -> [u8; 3] {
    let bytes = truncate(value, 24).to_le_bytes();
    [bytes[0], bytes[1], bytes[2]]
}

/// `value` as 4 little-endian bytes.
pub const fn from_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Decodes the first two bytes of `bytes` as a little-endian u16.
///
/// Fewer than two bytes is a bug in the caller and panics rather than
/// returning a partial value.
pub fn to_u16(bytes: &[u8]) -> u16 {
    assert!(bytes.len() >= 2, "to_u16 needs at least two bytes");
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Concatenates two payload fragments into a newly allocated buffer,
/// `start` first. Neither input is mutated; an empty operand yields a copy
/// of the other.
#[cfg(feature = "alloc")]
pub fn join(start: &[u8], end: &[u8]) -> Vec<u8> {
    if start.is_empty() {
        return end.to_vec();
    }
    if end.is_empty() {
        return start.to_vec();
    }

    let mut result = Vec::with_capacity(start.len() + end.len());
    result.extend_from_slice(start);
    result.extend_from_slice(end);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_round_trip() {
        for year in [0u32, 1, 255, 256, 2023, 0xFFFF] {
            assert_eq!(to_u16(&from_u16(year)), year as u16);
        }
    }

    #[test]
    fn little_endian_layout() {
        assert_eq!(from_u16(0x07E7), [0xE7, 0x07]);
        assert_eq!(from_u24(0x123456), [0x56, 0x34, 0x12]);
        assert_eq!(from_u32(0xDEADBEEF), [0xEF, 0xBE, 0xAD, 0xDE]);
    }

    #[test]
    fn u32_round_trip() {
        let value = 0x0403_0201;
        let bytes = from_u32(value);
        let decoded = u32::from_le_bytes(bytes);
        assert_eq!(decoded, value);
    }

    #[test]
    fn over_wide_values_are_masked() {
        assert_eq!(from_u8(0x1FF), 0xFF);
        assert_eq!(from_u16(0x12_FFFF), [0xFF, 0xFF]);
        assert_eq!(from_u24(0xFF_00_00_01), [0x01, 0x00, 0x00]);
        assert_eq!(truncate(0xFFFF_FFFF, 8), 0xFF);
    }

    #[test]
    #[should_panic]
    fn to_u16_rejects_short_input() {
        to_u16(&[0x01]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn join_preserves_order_and_length() {
        let a = [1u8, 2, 3];
        let b = [4u8, 5];
        let joined = join(&a, &b);
        assert_eq!(joined.len(), a.len() + b.len());
        assert_eq!(&joined[..a.len()], &a);
        assert_eq!(&joined[a.len()..], &b);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn join_with_empty_operands() {
        let a = [1u8, 2, 3];
        assert_eq!(join(&[], &a), &a);
        assert_eq!(join(&a, &[]), &a);
        assert_eq!(join(&[], &[]), Vec::<u8>::new());
    }
}
