//! # Frontlist
//!
//! A hook-driven HTML rendering pipeline for editorial article lists.
//! Editors curate a list of articles; frontlist turns each article into an
//! HTML fragment by running it through a fixed sequence of six rendering
//! stages. Every stage can be fully overridden by externally registered
//! handlers; when no handler produces output, a deterministic built-in
//! fallback runs instead.
//!
//! # Architecture: Override-or-Fallback Pipeline
//!
//! ```text
//! Renderer → StagePipeline (per article, per stage)
//!          → HookRegistry::dispatch(stage, bag)
//!          → bag.content empty? → built-in fallback (may call sizing)
//!          → fragment returned to Renderer
//! ```
//!
//! The six stages run in fixed order for every article:
//! `future_post`, `article_begin`, `article_image`, `article_content`,
//! `related_posts`, `article_end`. An override is total — a handler that
//! fills in content replaces the fallback entirely, it does not wrap it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared data model: articles, posts, lists, asset metadata |
//! | [`config`] | [`RenderConfig`](config::RenderConfig): basis width, resize quality, edit-link base |
//! | [`hooks`] | Stage enum, hook data bag, priority-ordered handler registry |
//! | [`sizing`] | Pure image dimension math: basis width, size classes, aspect scaling |
//! | [`services`] | Collaborator traits: asset store, resize service, text linker, related posts |
//! | [`pipeline`] | The six stage fallbacks and the override-or-fallback decision |
//! | [`render`] | [`Renderer`](render::Renderer): per-article stage driver and list iteration |
//!
//! # Design Decisions
//!
//! ## Injected Configuration, No Globals
//!
//! The basis width every image computation reads is a plain value on
//! [`RenderConfig`](config::RenderConfig), built before a pass and injected
//! into the [`Renderer`](render::Renderer). There is no process-wide
//! mutable width and nothing to lock: one rendering pass at a time is the
//! contract, and the registry is populated during initialization.
//!
//! ## Collaborators Behind Traits
//!
//! The pipeline never touches storage or pixels. Asset lookup, resizing,
//! entry-word linking, and related-posts markup are synchronous
//! collaborator traits in [`services`], so the whole pipeline is testable
//! with recorded-op mocks and the host integration stays in one place.
//!
//! ## Maud Over Template Engines
//!
//! Fallback markup (the image element, the future-post notice) is built
//! with [Maud](https://maud.lambda.xyz/): compile-time checked, typed, and
//! escape-by-default — article titles go into `alt` attributes without a
//! hand-rolled escaper.
//!
//! ## Failure Degrades, Never Aborts
//!
//! A missing attachment renders no image; a failed resize falls back to the
//! original asset URL; an article with image options but no picked
//! attachment means "no image requested". No failure inside a stage stops
//! the remaining stages or the remaining articles of the list.
//!
//! # Example
//!
//! ```no_run
//! use frontlist::config::RenderConfig;
//! use frontlist::hooks::{HookRegistry, Stage};
//! use frontlist::pipeline::Collaborators;
//! use frontlist::render::Renderer;
//! # use frontlist::types::ListContext;
//! # fn collaborators() -> Collaborators<'static> { unimplemented!() }
//!
//! let mut registry = HookRegistry::new();
//! registry.register(Stage::ArticleEnd, 10, |mut bag| {
//!     bag.content = format!("<!-- no. {} -->", bag.counter);
//!     bag
//! });
//!
//! let renderer = Renderer::new(RenderConfig::default(), registry, collaborators());
//! let list = ListContext::from_json("{\"articles\": []}").unwrap();
//! let fragments = renderer.render_list(&list, &[]);
//! ```

pub mod config;
pub mod hooks;
pub mod pipeline;
pub mod render;
pub mod services;
pub mod sizing;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
