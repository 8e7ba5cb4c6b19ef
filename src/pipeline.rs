//! The six rendering stages and their built-in fallbacks.
//!
//! Each stage follows the same shape: build a [`HookData`] bag, dispatch it
//! through the registry, and return the handlers' content if any handler
//! produced some. Only when the chain comes back empty does the stage's
//! built-in fallback run — an override is total, not additive.
//!
//! `article_begin` is the one exception to "handlers only contribute
//! content": whatever its handlers did to the bag's article is adopted,
//! whether or not they also set content. Downstream stages of the same
//! article observe the rewritten value.
//!
//! Every failure a fallback can hit (missing asset metadata, resize
//! failure, absent post) degrades to an empty or reduced fragment. Nothing
//! here aborts the remaining stages or the remaining articles.

use maud::html;

use crate::config::RenderConfig;
use crate::hooks::{HookData, HookRegistry, Stage};
use crate::services::{AssetStore, RelatedDisplay, RelatedPosts, ResizeService, TextLinker};
use crate::sizing;
use crate::types::{Article, ListContext, Post};

/// The four host services a pipeline delegates to, constructor-injected.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub assets: &'a dyn AssetStore,
    pub resizer: &'a dyn ResizeService,
    pub linker: &'a dyn TextLinker,
    pub related: &'a dyn RelatedPosts,
}

/// Runs individual stages for one article at a time.
///
/// Owned by the [`Renderer`](crate::render::Renderer); borrows the config,
/// registry, and collaborators for the duration of a rendering pass.
pub struct StagePipeline<'a> {
    config: &'a RenderConfig,
    registry: &'a HookRegistry,
    services: Collaborators<'a>,
}

impl<'a> StagePipeline<'a> {
    pub fn new(
        config: &'a RenderConfig,
        registry: &'a HookRegistry,
        services: Collaborators<'a>,
    ) -> Self {
        Self {
            config,
            registry,
            services,
        }
    }

    /// Run one stage: dispatch the hook chain, then either return the
    /// handlers' content or fall back to the built-in behavior.
    ///
    /// For `article_begin` the bag's article is written back through
    /// `article`, so later stages see handler rewrites.
    pub fn run_stage(
        &self,
        stage: Stage,
        article: &mut Article,
        counter: usize,
        post: Option<&Post>,
        list: &ListContext,
    ) -> String {
        let mut bag = HookData::new(article.clone(), counter, post, list);
        if stage == Stage::ArticleImage {
            let size = article.image.as_ref().map(|i| i.size).unwrap_or_default();
            bag = bag.with_size_hint(size, self.config.width());
        }

        let HookData {
            article: hooked,
            content,
            ..
        } = self.registry.dispatch(stage, bag);

        // article_begin always hands its article back, content or not;
        // its fallback is a no-op either way.
        if stage == Stage::ArticleBegin {
            *article = hooked;
            return content;
        }
        if !content.is_empty() {
            return content;
        }

        match stage {
            Stage::FuturePost => self.future_post_fallback(post),
            Stage::ArticleImage => self.image_fallback(article),
            Stage::ArticleContent => self.content_fallback(article),
            Stage::RelatedPosts => self.related_fallback(post),
            Stage::ArticleBegin | Stage::ArticleEnd => String::new(),
        }
    }

    /// Notice shown in place of an unpublished post's article, linking the
    /// editor to the post's edit screen. Published or absent posts produce
    /// nothing; whether the list keeps the article at all is the caller's
    /// preview policy.
    fn future_post_fallback(&self, post: Option<&Post>) -> String {
        match post {
            Some(post) if !post.status.is_published() => {
                let edit_url = format!("{}{}", self.config.edit_url_base, post.id);
                html! {
                    div class="future-post" {
                        a href=(edit_url) target="_blank" { "This post" }
                        " will not show up in the list until it is published."
                    }
                }
                .into_string()
            }
            _ => String::new(),
        }
    }

    /// The image-sizing fallback.
    ///
    /// Skips silently (empty output) when no image is requested: image
    /// options absent, no attachment picked yet, the `"giant"` template
    /// (which brings its own full-bleed image), or an attachment the asset
    /// store has no record of. A resize failure degrades to the original
    /// asset URL instead.
    ///
    /// The emitted element carries `src`, `width`, `alt`, and `class` but
    /// no `height` — displayed height is the stylesheet's business; the
    /// computed height only exists to keep renditions aspect-true.
    fn image_fallback(&self, article: &Article) -> String {
        let Some(image) = &article.image else {
            return String::new();
        };
        let Some(attach_id) = image.attach_id else {
            return String::new();
        };
        if article.options.template.as_deref() == Some("giant") {
            return String::new();
        }
        let Some(meta) = self.services.assets.attachment_meta(attach_id) else {
            return String::new();
        };

        let dims = sizing::scaled_dimensions(
            self.config.width(),
            article.is_top_level(),
            image.size,
            (meta.width, meta.height),
        );

        let original_url = self.services.assets.attachment_url(attach_id);
        let url = match self.services.resizer.resize(
            &meta.file_path,
            dims.width,
            self.config.image_quality,
        ) {
            // The rendition lands next to the original
            Ok(resized) => swap_file_name(&original_url, &resized),
            Err(_) => original_url,
        };

        let class = format!("{} {}", image.size, image.alignment);
        html! {
            img src=(url) width=(dims.width) alt=(article.title) class=(class);
        }
        .into_string()
    }

    fn content_fallback(&self, article: &Article) -> String {
        self.services
            .linker
            .link_entry_words(article.text.trim(), &article.url)
    }

    fn related_fallback(&self, post: Option<&Post>) -> String {
        if post.is_some() {
            self.services
                .related
                .related_html(RelatedDisplay::Inline, None, false)
        } else {
            String::new()
        }
    }
}

/// Replace the file name of `url` with the file name of `resized_path`.
fn swap_file_name(url: &str, resized_path: &str) -> String {
    let file_name = resized_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(resized_path);
    match url.rsplit_once('/') {
        Some((dir, _)) => format!("{dir}/{file_name}"),
        None => file_name.to_string(),
    }
}
