//! Name-based UUID generation (versions 3 and 5)

use crate::{stamp, Error, Uuid, Version};
use md5::Md5;
use sha1::{Digest, Sha1};

/// The hash algorithms available for name-based UUIDs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashAlgorithm {
    /// MD5, used by version 3.
    Md5,

    /// SHA-1, used by version 5.
    Sha1,
}

impl HashAlgorithm {
    /// Returns the algorithm assigned to a version, or `None` if the version is not name-based.
    pub const fn for_version(version: Version) -> Option<Self> {
        match version.get() {
            3 => Some(Self::Md5),
            5 => Some(Self::Sha1),
            _ => None,
        }
    }

    /// Returns the version number that identifies the algorithm.
    pub const fn version(self) -> Version {
        match self {
            Self::Md5 => Version::NAME_BASED_MD5,
            Self::Sha1 => Version::NAME_BASED_SHA1,
        }
    }

    /// Hashes the namespace bytes followed by the name bytes and returns the first 16 bytes of
    /// the digest.
    fn digest(self, namespace: &Uuid, name: &[u8]) -> [u8; 16] {
        fn truncated<D: Digest>(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
            let digest = D::new()
                .chain_update(namespace.as_bytes())
                .chain_update(name)
                .finalize();
            let mut bytes = [0u8; 16];
            bytes.copy_from_slice(&digest[..16]);
            bytes
        }

        match self {
            Self::Md5 => truncated::<Md5>(namespace, name),
            Self::Sha1 => truncated::<Sha1>(namespace, name),
        }
    }
}

/// Represents a generator of name-based UUIDs within a fixed namespace.
///
/// The generator holds no state besides its namespace and algorithm, so the same name always maps
/// to the same UUID.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{NamespaceGenerator, Uuid, Version};
///
/// let g = NamespaceGenerator::new(Uuid::NAMESPACE_DNS, Version::NAME_BASED_SHA1)?;
/// assert_eq!(
///     g.generate("python.org").to_string(),
///     "886313e1-3b8a-5372-9b90-0c9aee199e5d"
/// );
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NamespaceGenerator {
    namespace: Uuid,
    algorithm: HashAlgorithm,
}

impl NamespaceGenerator {
    /// Creates a generator for `namespace` that uses MD5 for version 3 or SHA-1 for version 5.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] for any other version.
    pub fn new(namespace: Uuid, version: Version) -> Result<Self, Error> {
        let algorithm =
            HashAlgorithm::for_version(version).ok_or(Error::UnknownVersion(version))?;
        log::debug!("creating version {} generator for namespace {}", version, namespace);
        Ok(Self {
            namespace,
            algorithm,
        })
    }

    /// Generates the UUID for `name` within the namespace.
    pub fn generate(&self, name: impl AsRef<[u8]>) -> Uuid {
        let mut bytes = self.algorithm.digest(&self.namespace, name.as_ref());
        stamp(&mut bytes, self.algorithm.version());
        Uuid::from(bytes)
    }

    /// Returns the namespace UUID.
    pub const fn namespace(&self) -> Uuid {
        self.namespace
    }

    /// Returns the version of the UUIDs generated.
    pub const fn version(&self) -> Version {
        self.algorithm.version()
    }

    /// Returns the hash algorithm in use.
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

#[cfg(test)]
mod tests {
    use super::{HashAlgorithm, NamespaceGenerator};
    use crate::{Error, Uuid, Variant, Version};

    fn a_namespace() -> Uuid {
        Uuid::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16])
    }

    fn b_namespace() -> Uuid {
        Uuid::from([16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1])
    }

    /// Rejects non-namespaced versions
    #[test]
    fn rejects_non_namespaced_versions() {
        for version in [0u8, 1, 2, 4, 6, 15, 255] {
            let version = Version::from(version);
            assert_eq!(
                NamespaceGenerator::new(a_namespace(), version),
                Err(Error::UnknownVersion(version))
            );
        }
    }

    /// Selects hash algorithm by version
    #[test]
    fn selects_hash_algorithm_by_version() {
        let cases = [
            (Version::NAME_BASED_MD5, HashAlgorithm::Md5),
            (Version::NAME_BASED_SHA1, HashAlgorithm::Sha1),
        ];

        for (version, algorithm) in cases {
            let g = NamespaceGenerator::new(a_namespace(), version).unwrap();
            assert_eq!(g.algorithm(), algorithm);
            assert_eq!(g.version(), version);
            assert_eq!(g.namespace(), a_namespace());
        }
    }

    /// Generates same UUID for same name
    #[test]
    fn generates_same_uuid_for_same_name() {
        for version in [Version::NAME_BASED_MD5, Version::NAME_BASED_SHA1] {
            let g = NamespaceGenerator::new(a_namespace(), version).unwrap();
            let first = g.generate("I love UUIDs");
            let second = g.generate(b"I love UUIDs");
            assert_eq!(first, second);

            let h = NamespaceGenerator::new(a_namespace(), version).unwrap();
            assert_eq!(first, h.generate(String::from("I love UUIDs")));
        }
    }

    /// Generates different UUIDs for different names or namespaces
    #[test]
    fn generates_different_uuids_for_different_names_or_namespaces() {
        for version in [Version::NAME_BASED_MD5, Version::NAME_BASED_SHA1] {
            let a = NamespaceGenerator::new(a_namespace(), version).unwrap();
            let b = NamespaceGenerator::new(b_namespace(), version).unwrap();

            let first = a.generate("I love UUIDs");
            assert_ne!(first, a.generate("I hate UUIDs"));
            assert_ne!(first, b.generate("I love UUIDs"));
        }

        let md5 = NamespaceGenerator::new(Uuid::NIL, Version::NAME_BASED_MD5).unwrap();
        let sha1 = NamespaceGenerator::new(Uuid::NIL, Version::NAME_BASED_SHA1).unwrap();
        assert_ne!(md5.generate("I love UUIDs"), sha1.generate("I love UUIDs"));
    }

    /// Reproduces known name-based UUIDs
    #[test]
    fn reproduces_known_name_based_uuids() {
        let cases = [
            (
                Uuid::NAMESPACE_DNS,
                Version::NAME_BASED_MD5,
                "python.org",
                "6fa459ea-ee8a-3ca4-894e-db77e160355e",
            ),
            (
                Uuid::NAMESPACE_DNS,
                Version::NAME_BASED_SHA1,
                "python.org",
                "886313e1-3b8a-5372-9b90-0c9aee199e5d",
            ),
            (
                Uuid::NAMESPACE_URL,
                Version::NAME_BASED_MD5,
                "https://www.rust-lang.org/",
                "5763d680-bcad-3290-a508-b50b699d56bd",
            ),
            (
                Uuid::NAMESPACE_URL,
                Version::NAME_BASED_SHA1,
                "https://www.rust-lang.org/",
                "6bb70201-305f-585c-97a4-816d5df638c6",
            ),
            (
                a_namespace(),
                Version::NAME_BASED_MD5,
                "I love UUIDs",
                "c79d51e4-082d-3d67-9fe0-3d4001fb4717",
            ),
            (
                a_namespace(),
                Version::NAME_BASED_SHA1,
                "I love UUIDs",
                "1ab2092e-e1d3-5512-8ee6-3c5a78cb3276",
            ),
        ];

        for (namespace, version, name, text) in cases {
            let g = NamespaceGenerator::new(namespace, version).unwrap();
            let e = g.generate(name);
            assert_eq!(e.to_string(), text);
            assert_eq!(e.version(), version);
            assert_eq!(e.variant(), Variant::Var10);
        }
    }
}
