//! Shared builders for the frontlist test suite.
//!
//! Tests assemble articles and lists inline a lot; these keep the noise
//! down and give every test the same defaults.

use crate::types::{
    Article, ImageOptions, ListContext, Post, PublishStatus, SizeClass,
};

/// A bare top-level article with only a title.
pub fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        ..Article::default()
    }
}

/// An article with body text and a URL, for content-stage tests.
pub fn article_with_text(title: &str, text: &str, url: &str) -> Article {
    Article {
        title: title.to_string(),
        text: text.to_string(),
        url: url.to_string(),
        ..Article::default()
    }
}

/// An article with a picked image, for image-stage tests.
pub fn article_with_image(
    title: &str,
    attach_id: u64,
    size: SizeClass,
    alignment: &str,
) -> Article {
    Article {
        title: title.to_string(),
        image: Some(ImageOptions {
            attach_id: Some(attach_id),
            size,
            alignment: alignment.to_string(),
        }),
        ..Article::default()
    }
}

/// A list wrapping the given articles.
pub fn list_of(articles: Vec<Article>) -> ListContext {
    ListContext {
        id: 1,
        title: "Front page".to_string(),
        preview: false,
        articles,
    }
}

pub fn published_post(id: u64) -> Post {
    Post {
        id,
        status: PublishStatus::Published,
    }
}

/// A post scheduled for future publication.
pub fn future_post(id: u64) -> Post {
    Post {
        id,
        status: PublishStatus::Future,
    }
}

pub fn draft_post(id: u64) -> Post {
    Post {
        id,
        status: PublishStatus::Draft,
    }
}
