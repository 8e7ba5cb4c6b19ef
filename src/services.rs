//! Collaborator service traits.
//!
//! The pipeline never touches storage, pixels, or the host's post graph
//! itself — it delegates to these four seams, all synchronous
//! request/response. Production implementations live in the host
//! integration layer; the rest of the crate is collaborator-agnostic, which
//! is also what makes the stage fallbacks testable with the recorded-op
//! mocks at the bottom of this module.

use crate::config::Quality;
use crate::types::{AttachmentMeta, ListContext};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Resize failed: {0}")]
    Failed(String),
}

/// The host's attachment/media subsystem, read-only.
pub trait AssetStore {
    /// Metadata for an attachment, or `None` when the store has no record.
    fn attachment_meta(&self, attach_id: u64) -> Option<AttachmentMeta>;

    /// Public URL of the original (unresized) asset.
    fn attachment_url(&self, attach_id: u64) -> String;
}

/// The host's image resizing service.
pub trait ResizeService {
    /// Produce a rendition of `file_path` at `target_width`, returning the
    /// resized file's path/name. Failure is expected and non-fatal: the
    /// image stage degrades to the original asset URL.
    fn resize(
        &self,
        file_path: &str,
        target_width: u32,
        quality: Quality,
    ) -> Result<String, ResizeError>;
}

/// Resolves inline entry-word links in article text.
pub trait TextLinker {
    fn link_entry_words(&self, text: &str, url: &str) -> String;
}

/// How related-posts markup should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedDisplay {
    Inline,
    Widget,
}

/// The host's related-posts lookup.
pub trait RelatedPosts {
    fn related_html(
        &self,
        mode: RelatedDisplay,
        list: Option<&ListContext>,
        preview: bool,
    ) -> String;
}
