//! Version 4 byte source

use super::ByteSource;
use crate::{RandError, RandSource};

/// A byte source that delegates every read to a randomness provider.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RandomSource<R> {
    rng: R,
}

impl<R: RandSource> RandomSource<R> {
    /// Creates a byte source that draws from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandSource> ByteSource for RandomSource<R> {
    fn read(&mut self, dest: &mut [u8; 16]) -> Result<usize, RandError> {
        self.rng.fill_exact(dest)?;
        Ok(dest.len())
    }
}
