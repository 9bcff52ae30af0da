//! Randomness providers consumed by the generators.

use std::num::NonZeroU32;

pub mod with_rand08;

/// A trait that defines the randomness provider interface the generators draw bytes from.
///
/// Any closure of type `FnMut(&mut [u8]) -> Result<usize, RandError>` implements this trait, and
/// [`with_rand08::Adapter`] wraps random number generators of the `rand` (v0.8) crate.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{RandError, RandSource};
///
/// let mut zeros = |dest: &mut [u8]| -> Result<usize, RandError> {
///     dest.fill(0);
///     Ok(dest.len())
/// };
///
/// let mut buffer = [0xffu8; 4];
/// zeros.fill_exact(&mut buffer)?;
/// assert_eq!(buffer, [0; 4]);
/// # Ok::<(), RandError>(())
/// ```
pub trait RandSource {
    /// Fills `dest` with random bytes, returning the number of bytes written.
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, RandError>;

    /// Fills the whole of `dest` with random bytes, treating a short read as a failure.
    fn fill_exact(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        let written = self.read(dest)?;
        if written < dest.len() {
            return Err(RandError::ShortRead {
                expected: dest.len(),
                written,
            });
        }
        Ok(())
    }
}

impl<F> RandSource for F
where
    F: FnMut(&mut [u8]) -> Result<usize, RandError>,
{
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, RandError> {
        self(dest)
    }
}

/// Error reported by a randomness provider.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RandError {
    /// The provider failed without further detail.
    #[error("randomness provider failed")]
    Unavailable,

    /// The provider failed with an OS or custom error code.
    #[error("randomness provider failed with code {0}")]
    Code(NonZeroU32),

    /// The provider wrote fewer bytes than requested.
    #[error("randomness provider wrote {written} of {expected} bytes")]
    ShortRead {
        /// Number of bytes requested.
        expected: usize,

        /// Number of bytes the provider reported.
        written: usize,
    },
}

impl From<rand::Error> for RandError {
    fn from(src: rand::Error) -> Self {
        src.code().map_or(Self::Unavailable, Self::Code)
    }
}

#[cfg(test)]
mod tests {
    use super::{RandError, RandSource};
    use std::num::NonZeroU32;

    /// Accepts full reads
    #[test]
    fn accepts_full_reads() {
        let mut source = |dest: &mut [u8]| -> Result<usize, RandError> {
            dest.fill(7);
            Ok(dest.len())
        };
        let mut buffer = [0u8; 6];
        assert_eq!(source.fill_exact(&mut buffer), Ok(()));
        assert_eq!(buffer, [7; 6]);
    }

    /// Rejects short reads
    #[test]
    fn rejects_short_reads() {
        let mut source = |dest: &mut [u8]| -> Result<usize, RandError> {
            dest[0] = 1;
            Ok(1)
        };
        let mut buffer = [0u8; 2];
        assert_eq!(
            source.fill_exact(&mut buffer),
            Err(RandError::ShortRead {
                expected: 2,
                written: 1
            })
        );
    }

    /// Passes provider failures through
    #[test]
    fn passes_provider_failures_through() {
        let mut source = |_: &mut [u8]| -> Result<usize, RandError> { Err(RandError::Unavailable) };
        assert_eq!(
            source.fill_exact(&mut [0u8; 16]),
            Err(RandError::Unavailable)
        );
    }

    /// Keeps error codes of rand errors
    #[test]
    fn keeps_error_codes_of_rand_errors() {
        let code = NonZeroU32::new(rand::Error::CUSTOM_START + 3).unwrap();
        assert_eq!(RandError::from(rand::Error::from(code)), RandError::Code(code));
        assert_eq!(
            RandError::from(rand::Error::new("custom failure")),
            RandError::Unavailable
        );
    }
}
