//! Generator of time-based (version 1) and random (version 4) UUIDs.

use crate::source::random::RandomSource;
use crate::source::time_based::{Interface, StdSystemTime, TimeBasedSource, TimeSource};
use crate::source::ByteSource;
use crate::{stamp, Error, RandError, RandSource, Uuid, Version};


/// Inputs to [`Generator`] construction.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Configuration<R> {
    /// The version of UUIDs to generate.
    pub version: Version,

    /// Candidate interfaces to take the version 1 node ID from, in order of preference.
    pub interfaces: Vec<Interface>,

    /// The randomness provider.
    pub rng: R,
}

impl<R> Configuration<R> {
    /// Creates a configuration with no interfaces.
    pub const fn new(version: Version, rng: R) -> Self {
        Self {
            version,
            interfaces: Vec::new(),
            rng,
        }
    }

    /// Appends candidate interfaces.
    pub fn with_interfaces(mut self, interfaces: impl IntoIterator<Item = Interface>) -> Self {
        self.interfaces.extend(interfaces);
        self
    }
}

/// The byte source selected once at construction.
#[derive(Clone, Eq, PartialEq, Debug)]
enum Source<R, T> {
    TimeBased(TimeBasedSource<T>),
    Random(RandomSource<R>),
}

impl<R: RandSource, T: TimeSource> ByteSource for Source<R, T> {
    fn read(&mut self, dest: &mut [u8; 16]) -> Result<usize, RandError> {
        match self {
            Self::TimeBased(inner) => inner.read(dest),
            Self::Random(inner) => inner.read(dest),
        }
    }
}

/// Represents a generator of version 1 or version 4 UUIDs, depending on its configuration.
///
/// A version 1 generator owns mutable clock state and is not synchronized. Wrap it in a
/// [`SharedGenerator`](crate::SharedGenerator) to generate from several threads while keeping the
/// process-wide uniqueness of timestamps.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{Configuration, Generator, Interface, Version};
///
/// let config = Configuration::with_rand08(Version::TIME_BASED, rand::thread_rng())
///     .with_interfaces([Interface::new("eth0", Some(vec![0, 0x16, 0x3e, 1, 2, 3]))]);
/// let mut g = Generator::new(config)?;
///
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), Version::TIME_BASED);
/// assert!(uuid.to_string().ends_with("-00163e010203"));
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Generator<R, T = StdSystemTime> {
    version: Version,
    source: Source<R, T>,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator that reads the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] unless the configured version is 1 or 4. For version 1,
    /// also returns [`Error::NodeResolution`] or [`Error::ClockSequence`] if the randomness
    /// provider fails.
    pub fn new(config: Configuration<R>) -> Result<Self, Error> {
        Self::with_time_source(config, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator with a custom clock.
    ///
    /// See [`Generator::new`] for the errors returned.
    pub fn with_time_source(config: Configuration<R>, clock: T) -> Result<Self, Error> {
        let Configuration {
            version,
            interfaces,
            mut rng,
        } = config;

        let source = match version {
            Version::TIME_BASED => {
                Source::TimeBased(TimeBasedSource::new(&interfaces, &mut rng, clock)?)
            }
            Version::RANDOM => Source::Random(RandomSource::new(rng)),
            _ => return Err(Error::UnknownVersion(version)),
        };

        log::debug!("created version {} generator", version);
        Ok(Self { version, source })
    }

    /// Generates a new UUID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] if the byte source fails; no partially filled UUID is ever
    /// returned.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; 16];
        self.source.read(&mut bytes).map_err(|err| {
            log::warn!("version {} generation failed: {}", self.version, err);
            Error::Generation(err)
        })?;

        stamp(&mut bytes, self.version);
        Ok(Uuid::from(bytes))
    }

    /// Returns the version of the UUIDs generated.
    pub const fn version(&self) -> Version {
        self.version
    }
}

/// Supports operations as an infinite iterator that produces a new UUID for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{Configuration, Generator, Version};
///
/// Generator::new(Configuration::with_rand08(Version::RANDOM, rand::thread_rng()))?
///     .take(4)
///     .for_each(|e| println!("{}", e.unwrap()));
/// # Ok::<(), rfc4122::Error>(())
/// ```
impl<R: RandSource, T: TimeSource> Iterator for Generator<R, T> {
    type Item = Result<Uuid, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> std::iter::FusedIterator for Generator<R, T> {}
