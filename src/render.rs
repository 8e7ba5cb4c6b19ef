//! Renderer-facing surface.
//!
//! A [`Renderer`] is built once per rendering pass from a
//! [`RenderConfig`], a populated [`HookRegistry`], and the host
//! [`Collaborators`], then driven over a list's articles strictly in list
//! order. Rendering is single-threaded and synchronous: within an article
//! the six stages run in [`Stage::ALL`] order, and no stage starts before
//! the previous one returns.
//!
//! Callers that own a template consume [`StageOutputs`] — the per-stage
//! fragments — and splice them wherever the template wants them.
//! [`RenderedArticle::html`] is the convenience concatenation in stage
//! order for callers without one.

use crate::config::RenderConfig;
use crate::hooks::{HookRegistry, Stage};
use crate::pipeline::{Collaborators, StagePipeline};
use crate::types::{Article, ListContext, Post};

/// One fragment per stage, in stage order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageOutputs {
    pub future_post: String,
    pub article_begin: String,
    pub article_image: String,
    pub article_content: String,
    pub related_posts: String,
    pub article_end: String,
}

impl StageOutputs {
    fn slot(&mut self, stage: Stage) -> &mut String {
        match stage {
            Stage::FuturePost => &mut self.future_post,
            Stage::ArticleBegin => &mut self.article_begin,
            Stage::ArticleImage => &mut self.article_image,
            Stage::ArticleContent => &mut self.article_content,
            Stage::RelatedPosts => &mut self.related_posts,
            Stage::ArticleEnd => &mut self.article_end,
        }
    }

    /// All fragments joined in stage order.
    pub fn concat(&self) -> String {
        [
            &self.future_post,
            &self.article_begin,
            &self.article_image,
            &self.article_content,
            &self.related_posts,
            &self.article_end,
        ]
        .into_iter()
        .map(String::as_str)
        .collect()
    }
}

/// Result of rendering one article.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArticle {
    /// Stage fragments concatenated in stage order.
    pub html: String,
    /// The article after `article_begin` handlers had their say.
    pub article: Article,
}

/// Drives the stage pipeline over articles.
pub struct Renderer<'a> {
    config: RenderConfig,
    registry: HookRegistry,
    services: Collaborators<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(config: RenderConfig, registry: HookRegistry, services: Collaborators<'a>) -> Self {
        Self {
            config,
            registry,
            services,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Reconfigure between passes. Do not call while a pass is in flight.
    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    /// Run all six stages for one article and collect the fragments.
    pub fn render_stages(
        &self,
        article: &Article,
        counter: usize,
        post: Option<&Post>,
        list: &ListContext,
    ) -> (StageOutputs, Article) {
        let pipeline = StagePipeline::new(&self.config, &self.registry, self.services);
        let mut article = article.clone();
        let mut outputs = StageOutputs::default();

        for stage in Stage::ALL {
            *outputs.slot(stage) = pipeline.run_stage(stage, &mut article, counter, post, list);
        }

        (outputs, article)
    }

    /// Render one article to its concatenated HTML fragment.
    pub fn render_article(
        &self,
        article: &Article,
        counter: usize,
        post: Option<&Post>,
        list: &ListContext,
    ) -> RenderedArticle {
        let (outputs, article) = self.render_stages(article, counter, post, list);
        RenderedArticle {
            html: outputs.concat(),
            article,
        }
    }

    /// Render every article of a list, in list order.
    ///
    /// `posts` pairs each article with its underlying post by index; lists
    /// may legitimately be longer (articles without a backing post render
    /// with no post).
    pub fn render_list(&self, list: &ListContext, posts: &[Option<Post>]) -> Vec<RenderedArticle> {
        list.articles
            .iter()
            .enumerate()
            .map(|(counter, article)| {
                let post = posts.get(counter).copied().flatten();
                self.render_article(article, counter, post.as_ref(), list)
            })
            .collect()
    }
}
