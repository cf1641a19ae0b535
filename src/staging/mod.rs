//! Single-file staging area with a live preview handle
//!
//! Holds at most one pending file. Accepting a file revokes the previous
//! preview handle, mints a new one and reports the file to the uploader.
//! Dropping the staging area revokes its live handle.

mod blob;
pub mod picker;
pub mod preview;

pub use blob::Blob;
pub use preview::{PreviewRef, PreviewRegistry};

/// Receives each accepted file; responsible for actually submitting it.
pub trait Uploader: Send + Sync {
    fn on_file_uploaded(&self, file: &Blob);
}

impl<F> Uploader for F
where
    F: Fn(&Blob) + Send + Sync,
{
    fn on_file_uploaded(&self, file: &Blob) {
        self(file)
    }
}

/// The staged file and the handle its preview is rendered from.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub file: Blob,
    pub preview: PreviewRef,
}

pub struct FileStagingArea {
    registry: PreviewRegistry,
    uploader: Box<dyn Uploader>,
    pending: Option<PendingUpload>,
}

impl FileStagingArea {
    pub fn new(uploader: impl Uploader + 'static) -> Self {
        Self::with_registry(PreviewRegistry::new(), uploader)
    }

    /// Stage into a caller-owned registry, so the presentation layer can
    /// resolve handles.
    pub fn with_registry(registry: PreviewRegistry, uploader: impl Uploader + 'static) -> Self {
        Self {
            registry,
            uploader: Box::new(uploader),
            pending: None,
        }
    }

    /// Accept the first candidate. An empty drop changes nothing and
    /// does not call the uploader.
    pub fn accept_drop(&mut self, candidates: impl IntoIterator<Item = Blob>) {
        match candidates.into_iter().next() {
            Some(file) => self.on_accept(file),
            None => tracing::debug!("empty drop ignored"),
        }
    }

    fn on_accept(&mut self, file: Blob) {
        if let Some(previous) = self.pending.take() {
            self.registry.revoke(&previous.preview);
        }
        let preview = self.registry.create(&file);
        tracing::info!(name = %file.name(), size = file.len(), preview = %preview, "file staged");
        self.uploader.on_file_uploaded(&file);
        self.pending = Some(PendingUpload { file, preview });
    }

    /// `None` until the first file is accepted, then the latest handle.
    pub fn current_preview(&self) -> Option<PreviewRef> {
        self.pending.as_ref().map(|p| p.preview.clone())
    }

    pub fn pending(&self) -> Option<&Blob> {
        self.pending.as_ref().map(|p| &p.file)
    }

    pub fn registry(&self) -> &PreviewRegistry {
        &self.registry
    }
}

impl Drop for FileStagingArea {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.registry.revoke(&pending.preview);
        }
    }
}
