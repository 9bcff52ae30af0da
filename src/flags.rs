//! Version and variant bit stamping shared by all generators

use crate::Version;

/// Writes the version nibble and the RFC 4122 variant bits into a 16-byte UUID buffer.
///
/// The high nibble of byte 6 is replaced with `version` and the two most significant bits of byte
/// 8 are set to `10`. All other bits are left as they were.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{stamp, Uuid, Version};
///
/// let mut bytes = [0xffu8; 16];
/// stamp(&mut bytes, Version::RANDOM);
/// assert_eq!(Uuid::from(bytes).to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
/// ```
pub fn stamp(bytes: &mut [u8; 16], version: Version) {
    bytes[6] = (version.get() << 4) | (bytes[6] & 0x0f);
    bytes[8] = 0x80 | (bytes[8] & 0x3f);
}

#[cfg(test)]
mod tests {
    use super::stamp;
    use crate::{Uuid, Variant, Version};

    /// Sets version nibble for every byte value
    #[test]
    fn sets_version_nibble_for_every_byte_value() {
        for version in 1..=5u8 {
            for b in 0..=u8::MAX {
                let mut bytes = [0u8; 16];
                bytes[6] = b;
                stamp(&mut bytes, Version::from(version));
                assert_eq!(bytes[6] >> 4, version);
                assert_eq!(bytes[6] & 0x0f, b & 0x0f, "low nibble must survive");
                assert_eq!(Uuid::from(bytes).version(), Version::from(version));
            }
        }
    }

    /// Sets variant bits for every byte value
    #[test]
    fn sets_variant_bits_for_every_byte_value() {
        for b in 0..=u8::MAX {
            let mut bytes = [0u8; 16];
            bytes[8] = b;
            stamp(&mut bytes, Version::RANDOM);
            assert_eq!(bytes[8] & 0xc0, 0x80);
            assert_eq!(bytes[8] & 0x3f, b & 0x3f, "low six bits must survive");
            assert_eq!(Uuid::from(bytes).variant(), Variant::Var10);
        }
    }

    /// Leaves other bytes untouched
    #[test]
    fn leaves_other_bytes_untouched() {
        let source: [u8; 16] = core::array::from_fn(|i| i as u8 * 17);
        let mut bytes = source;
        stamp(&mut bytes, Version::TIME_BASED);
        for i in (0..16).filter(|&i| i != 6 && i != 8) {
            assert_eq!(bytes[i], source[i], "byte {i}");
        }
    }

    /// Stamps zero and max buffers
    #[test]
    fn stamps_zero_and_max_buffers() {
        let mut bytes = [0u8; 16];
        stamp(&mut bytes, Version::NAME_BASED_SHA1);
        assert_eq!(
            Uuid::from(bytes).to_string(),
            "00000000-0000-5000-8000-000000000000"
        );

        let mut bytes = [0xffu8; 16];
        stamp(&mut bytes, Version::TIME_BASED);
        assert_eq!(
            Uuid::from(bytes).to_string(),
            "ffffffff-ffff-1fff-bfff-ffffffffffff"
        );
    }
}
