//! Shared data model for list rendering.
//!
//! These types cross the boundary between the host platform and the
//! pipeline: lists and articles are owned and constructed by the host's
//! content repository, serialized as JSON, and read read-only by the
//! rendering core. The one sanctioned mutation point is the
//! `article_begin` stage, which hands back a rewritten [`Article`] value
//! instead of mutating shared state in place.

use serde::{Deserialize, Serialize};

/// Parent sentinel meaning "top-level" when it appears as a concrete value.
///
/// Hosts historically send either an absent parent or `-1` for articles
/// that sit at the top of the list. [`Article::is_top_level`] is the single
/// place that interprets this.
pub const TOP_LEVEL_PARENT: i64 = -1;

/// Named fraction of the basis width applied to an article image.
///
/// `Full` is the default: the image spans the whole basis width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    #[default]
    Full,
    Half,
    Third,
    Quarter,
}

impl SizeClass {
    /// CSS class name, also the value the host stores on the article.
    pub fn name(self) -> &'static str {
        match self {
            SizeClass::Full => "full",
            SizeClass::Half => "half",
            SizeClass::Third => "third",
            SizeClass::Quarter => "quarter",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Image settings attached to an article by the list editor.
///
/// `attach_id` may be absent even when the struct is present — the editor
/// saves alignment/size before an image is picked. That state means "no
/// image requested", not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    #[serde(default)]
    pub attach_id: Option<u64>,
    #[serde(default)]
    pub size: SizeClass,
    #[serde(default)]
    pub alignment: String,
}

/// Per-article options set in the list editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleOptions {
    /// Template override. The `"giant"` template renders its own full-bleed
    /// image, so the image stage skips articles carrying it.
    #[serde(default)]
    pub template: Option<String>,
    /// File-include widget reference, populated by the admin UI. Carried
    /// for round-tripping; the core never interprets it.
    #[serde(default)]
    pub file_include: Option<String>,
}

/// One entry in a rendered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<ImageOptions>,
    #[serde(default)]
    pub options: ArticleOptions,
    /// Parent article id, absent or [`TOP_LEVEL_PARENT`] for top-level.
    #[serde(default)]
    pub parent: Option<i64>,
}

impl Article {
    /// Whether this article sits at the top level of the list.
    ///
    /// Nested articles get half the configured rendering width; the halving
    /// happens exactly once regardless of nesting depth, so this predicate
    /// is all the sizing code ever asks.
    pub fn is_top_level(&self) -> bool {
        matches!(self.parent, None | Some(TOP_LEVEL_PARENT))
    }
}

/// Publish state of the underlying post, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Published,
    /// Scheduled for future publication.
    Future,
    Draft,
}

impl PublishStatus {
    pub fn is_published(self) -> bool {
        matches!(self, PublishStatus::Published)
    }
}

/// Opaque reference to the content item behind an article.
///
/// Supplied by the host's content repository; read-only to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub status: PublishStatus,
}

/// An ordered list of articles plus list-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListContext {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// True when the list is being previewed rather than published.
    #[serde(default)]
    pub preview: bool,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl ListContext {
    /// Parse a list from the host's JSON interchange format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Source asset metadata, keyed by attachment id in the host's asset store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentMeta {
    pub width: u32,
    pub height: u32,
    /// Path of the original file inside the asset store, handed to the
    /// resize service verbatim.
    pub file_path: String,
}
