//! Process-wide default generator.
//!
//! The default generator produces version 4 UUIDs from a cryptographically secure random number
//! generator. It is built by [`init`] or, failing that, by the first call to [`uuid4`], and
//! dropped by [`shutdown`].

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

static GLOBAL_GEN: sync::Mutex<Option<GlobalGenInner>> = sync::Mutex::new(None);

/// Returns the lock handle of process-wide global generator slot.
fn lock_global_gen() -> sync::MutexGuard<'static, Option<GlobalGenInner>> {
    GLOBAL_GEN
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Builds the default generator unless one exists already.
///
/// # Panics
///
/// Panics if the operating system fails to seed the random number generator.
pub fn init() {
    lock_global_gen().get_or_insert_with(GlobalGenInner::new);
}

/// Drops the default generator, if any. A later call to [`uuid4`] builds a fresh one.
pub fn shutdown() {
    if lock_global_gen().take().is_some() {
        log::debug!("default generator shut down");
    }
}

/// Generates a UUIDv4 object with the default generator.
///
/// On Unix, this function rebuilds the generator when the process ID changes (i.e., upon process
/// forks) so that the random number generator state is never shared across processes.
///
/// # Panics
///
/// Panics if the default generator cannot be built or fails to draw random bytes; the
/// operating system random number generator is assumed always available.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
///
/// let uuid_string: String = rfc4122::uuid4().to_string();
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen()
        .get_or_insert_with(GlobalGenInner::new)
        .get_mut()
        .generate()
        .expect("rfc4122: default generator failed")
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::rand_source::with_rand08::Adapter;
    use crate::{Configuration, Generator, Version};

    /// The type alias for the random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    type GlobalGenRng = Adapter<ReseedingRng<ChaCha12Core, OsRng>>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Generator<GlobalGenRng>,
    }

    impl GlobalGenInner {
        pub fn new() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("rfc4122: could not seed default generator");
            let rng = ReseedingRng::new(core, 1024 * 64, OsRng);
            let generator = Generator::new(Configuration::with_rand08(Version::RANDOM, rng))
                .expect("rfc4122: could not initialize default generator");
            log::debug!("default generator initialized");

            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator,
            }
        }

        /// Returns a mutable reference to the inner [`Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Self::new();
            }
            &mut self.generator
        }
    }
}
