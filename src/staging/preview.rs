use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use super::Blob;

const SCHEME: &str = "blob:waypoint/";

/// Revocable handle to a blob held in a [`PreviewRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PreviewRef(String);

impl PreviewRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Table of live preview handles, shared by clones.
#[derive(Clone, Debug, Default)]
pub struct PreviewRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    entries: HashMap<PreviewRef, Blob>,
    next_seq: u64,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Mint a new handle for `blob`. Handles are never reused, even for
    /// identical content.
    pub fn create(&self, blob: &Blob) -> PreviewRef {
        let mut inner = self.lock();
        inner.next_seq += 1;
        let digest = blob.digest();
        let handle = PreviewRef(format!("{}{}-{}", SCHEME, inner.next_seq, &digest[..8]));
        inner.entries.insert(handle.clone(), blob.clone());
        handle
    }

    pub fn resolve(&self, handle: &PreviewRef) -> Option<Blob> {
        self.lock().entries.get(handle).cloned()
    }

    /// Release a handle. Returns `false` if it was already revoked.
    pub fn revoke(&self, handle: &PreviewRef) -> bool {
        self.lock().entries.remove(handle).is_some()
    }

    pub fn contains(&self, handle: &PreviewRef) -> bool {
        self.lock().entries.contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
