//! Thread-safe wrapper around [`Generator`]

use std::sync;

use crate::source::time_based::{StdSystemTime, TimeSource};
use crate::{Error, Generator, RandSource, Uuid};

/// A [`Generator`] behind a mutex, so that several threads can generate UUIDs through a shared
/// reference while the clock state of a version 1 generator stays consistent.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{Configuration, Generator, SharedGenerator, Version};
/// use std::{sync, thread};
///
/// let config = Configuration::with_rand08(Version::TIME_BASED, rand::rngs::OsRng);
/// let g = sync::Arc::new(SharedGenerator::new(Generator::new(config)?));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Debug)]
pub struct SharedGenerator<R, T = StdSystemTime>(sync::Mutex<Generator<R, T>>);

impl<R: RandSource, T: TimeSource> SharedGenerator<R, T> {
    /// Wraps a generator.
    pub const fn new(generator: Generator<R, T>) -> Self {
        Self(sync::Mutex::new(generator))
    }

    /// Generates a new UUID while holding the lock.
    ///
    /// A lock poisoned by a panicking thread is recovered, as the generator state is updated
    /// before any value is handed out.
    pub fn generate(&self) -> Result<Uuid, Error> {
        self.0
            .lock()
            .unwrap_or_else(sync::PoisonError::into_inner)
            .generate()
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> Generator<R, T> {
        self.0
            .into_inner()
            .unwrap_or_else(sync::PoisonError::into_inner)
    }
}

impl<R: RandSource, T: TimeSource> From<Generator<R, T>> for SharedGenerator<R, T> {
    fn from(src: Generator<R, T>) -> Self {
        Self::new(src)
    }
}
