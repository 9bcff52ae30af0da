use crate::{RandError, Version};

/// Error constructing a generator or generating a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested version is not supported by the generator type.
    #[error("unknown version: {0}")]
    UnknownVersion(Version),

    /// No interface carried a hardware address and the random fallback node ID could not be
    /// drawn.
    #[error("could not resolve node id: {0}")]
    NodeResolution(#[source] RandError),

    /// The clock sequence could not be drawn from the randomness provider.
    #[error("could not initialize clock sequence: {0}")]
    ClockSequence(#[source] RandError),

    /// The byte source failed while generating a UUID.
    #[error("could not generate uuid: {0}")]
    Generation(#[source] RandError),
}
