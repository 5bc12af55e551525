//! Object identifiers for pbxproj documents

use std::fmt;

use md5::{Digest, Md5};

/// A pbxproj object identifier.
///
/// Xcode writes 24 uppercase hex digits. Existing documents may carry
/// anything word-shaped, so ids are stored as opaque strings and only
/// freshly generated ones follow the 24-digit convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a fresh id from the seed material, probing until it does not
/// collide with `taken`. Deterministic for a given document state.
pub(crate) fn generate(seed: &str, taken: impl Fn(&ObjectId) -> bool) -> ObjectId {
    let mut probe = 0u64;
    loop {
        let digest = Md5::digest(format!("{seed}#{probe}").as_bytes());
        let id = ObjectId(digest.iter().take(12).map(|byte| format!("{byte:02X}")).collect());
        if !taken(&id) {
            return id;
        }
        probe += 1;
    }
}
