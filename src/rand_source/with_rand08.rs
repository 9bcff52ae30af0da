//! Integration with `rand` (v0.8) crate.

use super::{RandError, RandSource};
use crate::{Configuration, Version};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, RandError> {
        self.0.try_fill_bytes(dest)?;
        Ok(dest.len())
    }
}

impl<T: RngCore> Configuration<Adapter<T>> {
    /// Creates a configuration with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Configuration, Generator, Version};
    ///
    /// let config = Configuration::with_rand08(Version::RANDOM, rand::rngs::OsRng);
    /// let mut g = Generator::new(config)?;
    /// println!("{}", g.generate()?);
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn with_rand08(version: Version, rng: T) -> Self {
        Self::new(version, Adapter(rng))
    }
}
