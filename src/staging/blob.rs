use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

/// An in-memory file: name, content type and bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
    name: String,
    content_type: String,
    data: Arc<[u8]>,
}

impl Blob {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: Arc::from(data),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Matches the `image/*` accept filter.
    pub fn is_image(&self) -> bool {
        self.content_type
            .split('/')
            .next()
            .is_some_and(|top| top.eq_ignore_ascii_case("image"))
    }

    /// Hex SHA-256 of the contents.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.data.as_ref()))
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}
