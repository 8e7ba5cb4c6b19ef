//! End-to-end list rendering through the public API.
//!
//! Stands in for the host platform: stub collaborators, a JSON list as the
//! content repository would hand it over, and a hook registry populated the
//! way a plugin would during initialization.

use frontlist::config::{Quality, RenderConfig};
use frontlist::hooks::{HookRegistry, Stage};
use frontlist::pipeline::Collaborators;
use frontlist::render::Renderer;
use frontlist::services::{
    AssetStore, RelatedDisplay, RelatedPosts, ResizeError, ResizeService, TextLinker,
};
use frontlist::types::{AttachmentMeta, ListContext, Post, PublishStatus};

struct StubAssets;

impl AssetStore for StubAssets {
    fn attachment_meta(&self, attach_id: u64) -> Option<AttachmentMeta> {
        match attach_id {
            12 => Some(AttachmentMeta {
                width: 1000,
                height: 500,
                file_path: "uploads/2026/08/lead.jpg".to_string(),
            }),
            _ => None,
        }
    }

    fn attachment_url(&self, attach_id: u64) -> String {
        format!("https://example.test/uploads/2026/08/img-{attach_id}.jpg")
    }
}

struct StubResizer;

impl ResizeService for StubResizer {
    fn resize(
        &self,
        file_path: &str,
        target_width: u32,
        _quality: Quality,
    ) -> Result<String, ResizeError> {
        let stem = file_path.trim_end_matches(".jpg");
        Ok(format!("{stem}-{target_width}.jpg"))
    }
}

struct StubLinker;

impl TextLinker for StubLinker {
    fn link_entry_words(&self, text: &str, url: &str) -> String {
        format!("<p><a href=\"{url}\">{text}</a></p>")
    }
}

struct StubRelated;

impl RelatedPosts for StubRelated {
    fn related_html(
        &self,
        _mode: RelatedDisplay,
        _list: Option<&ListContext>,
        _preview: bool,
    ) -> String {
        "<ul class=\"related\"></ul>".to_string()
    }
}

fn collaborators() -> Collaborators<'static> {
    Collaborators {
        assets: &StubAssets,
        resizer: &StubResizer,
        linker: &StubLinker,
        related: &StubRelated,
    }
}

fn front_page() -> ListContext {
    ListContext::from_json(
        r#"{
            "id": 1,
            "title": "Front page",
            "articles": [
                {
                    "title": "Lead story",
                    "text": "Big news today.",
                    "url": "/lead",
                    "image": { "attach_id": 12, "size": "half", "alignment": "alignleft" }
                },
                {
                    "title": "Nested kicker",
                    "text": "Smaller news.",
                    "url": "/kicker",
                    "parent": 0,
                    "image": { "attach_id": 12, "size": "half", "alignment": "alignright" }
                },
                {
                    "title": "Broken image",
                    "text": "Still renders.",
                    "url": "/broken",
                    "image": { "attach_id": 99, "size": "full", "alignment": "" }
                }
            ]
        }"#,
    )
    .expect("fixture list parses")
}

#[test]
fn full_list_render_with_fallbacks() {
    let renderer = Renderer::new(RenderConfig::default(), HookRegistry::new(), collaborators());
    let list = front_page();
    let posts = vec![
        Some(Post {
            id: 100,
            status: PublishStatus::Published,
        }),
        None,
        None,
    ];

    let rendered = renderer.render_list(&list, &posts);
    assert_eq!(rendered.len(), 3);

    // Lead: top-level, half of 468 → 234-wide rendition
    let lead = &rendered[0].html;
    assert!(lead.contains("src=\"https://example.test/uploads/2026/08/lead-234.jpg\""));
    assert!(lead.contains("width=\"234\""));
    assert!(lead.contains("class=\"half alignleft\""));
    assert!(lead.contains("<a href=\"/lead\">Big news today.</a>"));
    assert!(lead.contains("class=\"related\""));

    // Nested: basis halves once → 117-wide rendition
    let kicker = &rendered[1].html;
    assert!(kicker.contains("width=\"117\""));
    assert!(kicker.contains("lead-117.jpg"));

    // Unknown attachment: no image, remaining stages still rendered
    let broken = &rendered[2].html;
    assert!(!broken.contains("<img"));
    assert!(broken.contains("Still renders."));
}

#[test]
fn scheduled_post_renders_edit_notice_before_other_fragments() {
    let renderer = Renderer::new(RenderConfig::default(), HookRegistry::new(), collaborators());
    let list = front_page();
    let posts = vec![Some(Post {
        id: 555,
        status: PublishStatus::Future,
    })];

    let rendered = renderer.render_list(&list, &posts);

    let lead = &rendered[0].html;
    assert!(lead.starts_with("<div class=\"future-post\">"));
    assert!(lead.contains("post.php?action=edit&amp;post=555"));
    // The notice does not replace the rest of the article
    assert!(lead.contains("Big news today."));
}

#[test]
fn handlers_override_fallbacks_end_to_end() {
    let mut registry = HookRegistry::new();
    registry.register(Stage::ArticleImage, 10, |mut bag| {
        let hint = bag.size_hint.expect("image stage carries a size hint");
        bag.content = format!("<figure data-size=\"{}\"></figure>", hint.size);
        bag
    });
    registry.register(Stage::ArticleContent, 10, |mut bag| {
        bag.content = format!("<p>teaser: {}</p>", bag.article.title);
        bag
    });

    let renderer = Renderer::new(RenderConfig::default(), registry, collaborators());
    let list = front_page();
    let rendered = renderer.render_list(&list, &[]);

    let lead = &rendered[0].html;
    assert!(lead.contains("<figure data-size=\"half\"></figure>"));
    assert!(lead.contains("<p>teaser: Lead story</p>"));
    // Fallback markup must not appear alongside the overrides
    assert!(!lead.contains("<img"));
    assert!(!lead.contains("/lead\">Big news"));
}

#[test]
fn config_from_toml_drives_image_widths() {
    let config = RenderConfig::from_toml("article_width = 936").expect("valid config");
    let renderer = Renderer::new(config, HookRegistry::new(), collaborators());
    let list = front_page();

    let rendered = renderer.render_list(&list, &[]);
    // 936 basis, half → 468
    assert!(rendered[0].html.contains("width=\"468\""));
}
