use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Reports the version number of the UUID, i.e. the high nibble of the seventh byte.
    ///
    /// The nibble is read as is, so this works on parsed values as well as on generated ones,
    /// and returns meaningless numbers for UUIDs of other variants than [`Variant::Var10`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Uuid, Version};
    ///
    /// let x = "f81d4fae-7dec-11d0-a765-00a0c91e6bf6".parse::<Uuid>()?;
    /// assert_eq!(x.version(), Version::TIME_BASED);
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub const fn version(&self) -> Version {
        Version(self.0[6] >> 4)
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Var0,
            0b100..=0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the 60-bit timestamp (100-nanosecond intervals since 1582-10-15 00:00:00 UTC)
    /// embedded in a version 1 UUID, or `None` if the UUID is not of version 1.
    pub const fn timestamp_v1(&self) -> Option<u64> {
        if self.0[6] >> 4 != 1 {
            return None;
        }

        let b = &self.0;
        Some(
            ((b[6] & 0x0f) as u64) << 56
                | (b[7] as u64) << 48
                | (b[4] as u64) << 40
                | (b[5] as u64) << 32
                | (b[0] as u64) << 24
                | (b[1] as u64) << 16
                | (b[2] as u64) << 8
                | b[3] as u64,
        )
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "f81d4fae-7dec-11d0-a765-00a0c91e6bf6".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "f81d4fae-7dec-11d0-a765-00a0c91e6bf6");
    /// assert_eq!(format!("{}", y), "f81d4fae-7dec-11d0-a765-00a0c91e6bf6");
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut i = 0;
        for (j, e) in self.0.iter().enumerate() {
            buffer[i] = DIGITS[(e >> 4) as usize];
            buffer[i + 1] = DIGITS[(e & 15) as usize];
            i += 2;
            if j == 3 || j == 5 || j == 7 || j == 9 {
                buffer[i] = b'-';
                i += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = ParseError;

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| ParseError {})
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// The version number that identifies the algorithm a UUID is generated by.
///
/// Any `u8` converts into a `Version`, so that callers can request unsupported numbers and get
/// [`Error::UnknownVersion`](crate::Error::UnknownVersion) back from generator constructors.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Version(u8);

impl Version {
    /// Version 1: Gregorian time-based UUID with node ID.
    pub const TIME_BASED: Self = Self(1);

    /// Version 2: DCE Security UUID, which this crate recognizes but does not generate.
    pub const DCE_SECURITY: Self = Self(2);

    /// Version 3: name-based UUID hashed with MD5.
    pub const NAME_BASED_MD5: Self = Self(3);

    /// Version 4: randomly generated UUID.
    pub const RANDOM: Self = Self(4);

    /// Version 5: name-based UUID hashed with SHA-1.
    pub const NAME_BASED_SHA1: Self = Self(5);

    /// Returns the raw version number.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Version {
    fn from(src: u8) -> Self {
        Self(src)
    }
}

impl From<Version> for u8 {
    fn from(src: Version) -> Self {
        src.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The reserved variants of UUIDs, as encoded in the most significant bits of the ninth byte.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Var0,

    /// `10x`: the variant specified by RFC 4122.
    Var10,

    /// `110`: reserved for Microsoft backward compatibility.
    Var110,

    /// `111`: reserved for future definition.
    VarReserved,
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation")]
pub struct ParseError {}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

}
