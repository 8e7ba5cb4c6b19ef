//! Hook points for overriding stage output.
//!
//! Every article passes through the six [`Stage`]s in a fixed order. Plugin
//! code registers handlers against a stage; when a stage runs, its handlers
//! fire in priority order and may fill in [`HookData::content`] to fully
//! replace the stage's built-in fallback, or rewrite the article (honored
//! only by `article_begin`).
//!
//! The registry holds nothing but the handler chains. It never inspects
//! `content` — deciding what a non-empty result means is the pipeline's
//! job. Populate the registry during initialization, before rendering
//! begins; registering handlers while a pass is in flight is out of
//! contract.

use crate::types::{Article, ListContext, Post, SizeClass};

/// The six per-article rendering stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    FuturePost,
    ArticleBegin,
    ArticleImage,
    ArticleContent,
    RelatedPosts,
    ArticleEnd,
}

impl Stage {
    /// Execution order for one article. This array is the single source of
    /// truth for stage ordering.
    pub const ALL: [Stage; 6] = [
        Stage::FuturePost,
        Stage::ArticleBegin,
        Stage::ArticleImage,
        Stage::ArticleContent,
        Stage::RelatedPosts,
        Stage::ArticleEnd,
    ];

    /// The hook-point name plugin authors register against.
    pub fn name(self) -> &'static str {
        match self {
            Stage::FuturePost => "future_post",
            Stage::ArticleBegin => "article_begin",
            Stage::ArticleImage => "article_image",
            Stage::ArticleContent => "article_content",
            Stage::RelatedPosts => "related_posts",
            Stage::ArticleEnd => "article_end",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Size information passed to `article_image` handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHint {
    pub size: SizeClass,
    /// The pass-wide configured width (before nesting/size-class scaling).
    pub width: u32,
}

/// Transient value object threaded through a stage's handler chain.
///
/// Created fresh per (article, stage) invocation and discarded after the
/// stage returns. `content` starts empty and accumulates handler output;
/// `size_hint` is present only for the image stage.
#[derive(Debug)]
pub struct HookData<'a> {
    pub article: Article,
    /// Zero-based position of the article within the list.
    pub counter: usize,
    pub post: Option<&'a Post>,
    pub list: &'a ListContext,
    pub content: String,
    pub size_hint: Option<SizeHint>,
}

impl<'a> HookData<'a> {
    pub fn new(
        article: Article,
        counter: usize,
        post: Option<&'a Post>,
        list: &'a ListContext,
    ) -> Self {
        Self {
            article,
            counter,
            post,
            list,
            content: String::new(),
            size_hint: None,
        }
    }

    pub fn with_size_hint(mut self, size: SizeClass, width: u32) -> Self {
        self.size_hint = Some(SizeHint { size, width });
        self
    }
}

/// A registered stage handler: takes the bag, returns a possibly-modified bag.
pub type Handler = Box<dyn for<'a> Fn(HookData<'a>) -> HookData<'a>>;

struct Registered {
    priority: i32,
    handler: Handler,
}

/// Ordered handler chains, one per stage.
pub struct HookRegistry {
    chains: [Vec<Registered>; 6],
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            chains: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Insert a handler into a stage's chain.
    ///
    /// Chains run in ascending priority; handlers sharing a priority run in
    /// registration order.
    pub fn register<F>(&mut self, stage: Stage, priority: i32, handler: F)
    where
        F: for<'a> Fn(HookData<'a>) -> HookData<'a> + 'static,
    {
        let chain = &mut self.chains[stage as usize];
        chain.push(Registered {
            priority,
            handler: Box::new(handler),
        });
        // Stable sort keeps registration order within a priority
        chain.sort_by_key(|r| r.priority);
    }

    /// Run every handler for `stage` in order, folding the bag through the
    /// chain. With no handlers registered this is the identity function.
    pub fn dispatch<'a>(&self, stage: Stage, data: HookData<'a>) -> HookData<'a> {
        self.chains[stage as usize]
            .iter()
            .fold(data, |bag, registered| (registered.handler)(bag))
    }

    pub fn has_handlers(&self, stage: Stage) -> bool {
        !self.chains[stage as usize].is_empty()
    }
}
