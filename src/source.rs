//! Byte sources that produce the raw 16 bytes of a UUID before version and variant stamping.

use crate::RandError;

pub mod random;
pub mod time_based;

/// A trait that defines a producer of the 16 raw bytes a [`Generator`](crate::Generator) stamps
/// into a UUID.
pub trait ByteSource {
    /// Fills `dest` and returns the number of bytes written, which is always 16 on success.
    fn read(&mut self, dest: &mut [u8; 16]) -> Result<usize, RandError>;
}
