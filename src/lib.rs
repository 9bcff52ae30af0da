//! An implementation of RFC 4122 UUID versions 1, 3, 4, and 5
//!
//! ```rust
//! use rfc4122::{Configuration, Generator, NamespaceGenerator, Uuid, Version};
//!
//! // version 4 from the process-wide default generator
//! let uuid = rfc4122::uuid4();
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! // version 1 from a generator owned by the caller
//! let mut g = Generator::new(Configuration::with_rand08(
//!     Version::TIME_BASED,
//!     rand::rngs::OsRng,
//! ))?;
//! println!("{}", g.generate()?); // e.g., "5e8a7c2e-6a3c-11ef-9a4f-13b5c6d7e8f9"
//!
//! // version 5 from a name in a namespace
//! let g = NamespaceGenerator::new(Uuid::NAMESPACE_DNS, Version::NAME_BASED_SHA1)?;
//! assert_eq!(
//!     g.generate("python.org").to_string(),
//!     "886313e1-3b8a-5372-9b90-0c9aee199e5d"
//! );
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Generation
//!
//! Every generator fills 16 bytes from a byte source and then stamps the version number into the
//! high nibble of byte 6 and the `10` variant bits into the top of byte 8 (see [`stamp()`]):
//!
//! - Version 1 lays out a 60-bit count of 100-nanosecond intervals since 1582-10-15, a clock
//!   sequence drawn once per generator, and a node ID taken from the first configured
//!   [`Interface`] with a hardware address (or drawn at random). Readings that repeat the
//!   previous clock value are disambiguated by a counter added to the timestamp.
//! - Version 3 and version 5 hash the namespace UUID followed by the name with MD5 or SHA-1 and
//!   keep the first 16 bytes of the digest.
//! - Version 4 takes all 16 bytes from the randomness provider.
//!
//! Randomness comes from a caller-supplied [`RandSource`]; any `rand` (v0.8) random number
//! generator can be plugged in through [`Configuration::with_rand08`].
//!
//! # Concurrency
//!
//! [`Generator`] is not synchronized. Its version 1 clock state must not be shared across
//! threads without mutual exclusion; [`SharedGenerator`] provides one.
//!
//! # Crate features
//!
//! - `global_gen` (default): enables the process-wide default generator behind [`uuid4`].
//! - `serde`: implements `Serialize` and `Deserialize` for [`Uuid`].
//! - `uuid`: enables conversions from and to `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant, Version};

mod flags;
pub use flags::stamp;

mod error;
pub use error::Error;

pub mod rand_source;
pub use rand_source::{RandError, RandSource};

pub mod source;
pub use source::time_based::{Interface, StdSystemTime, TimeSource};

mod generator;
pub use generator::{Configuration, Generator};

mod name_based;
pub use name_based::{HashAlgorithm, NamespaceGenerator};

mod sync;
pub use sync::SharedGenerator;

pub mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid4;
