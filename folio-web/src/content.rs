//! Site content provider
//!
//! Profile, gallery achievements and websites are compiled into the binary
//! from a JSON fixture and parsed once on first use.

use folio_common::Theme;
use folio_ui::stores::SiteState;
use folio_ui::{Achievement, Profile, ProfileLink, Website};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{error, info};

/// Embedded content fixture (compiled into the binary)
const CONTENT_JSON: &str = include_str!("../fixtures/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content fixture: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

#[derive(Debug, Deserialize)]
struct ContentFixture {
    profile: FixtureProfile,
    #[serde(default)]
    achievements: Vec<FixtureAchievement>,
    #[serde(default)]
    websites: Vec<FixtureWebsite>,
}

#[derive(Debug, Deserialize)]
struct FixtureProfile {
    brand: String,
    name: String,
    headline: String,
    #[serde(default)]
    bio: Vec<String>,
    #[serde(default)]
    links: Vec<FixtureLink>,
}

#[derive(Debug, Deserialize)]
struct FixtureLink {
    label: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct FixtureAchievement {
    id: String,
    title: String,
    description: String,
    date: String,
    category: String,
    /// Older entries carry a single cover image instead of `images`
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    video: Option<String>,
    #[serde(default)]
    images: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureWebsite {
    id: String,
    name: String,
    description: String,
    url: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    tech_stack: Vec<String>,
}

/// Parsed site content
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub achievements: Vec<Achievement>,
    pub websites: Vec<Website>,
}

impl From<FixtureAchievement> for Achievement {
    fn from(a: FixtureAchievement) -> Self {
        let images = if a.images.is_empty() {
            a.image.into_iter().collect()
        } else {
            a.images
        };

        Achievement {
            id: a.id,
            title: a.title,
            description: a.description,
            date: a.date,
            category: a.category,
            video: a.video.filter(|v| !v.is_empty()),
            images,
        }
    }
}

impl From<FixtureWebsite> for Website {
    fn from(w: FixtureWebsite) -> Self {
        Website {
            id: w.id,
            name: w.name,
            description: w.description,
            url: w.url,
            image: w.image,
            tech_stack: w.tech_stack,
        }
    }
}

impl From<FixtureProfile> for Profile {
    fn from(p: FixtureProfile) -> Self {
        Profile {
            brand: p.brand,
            name: p.name,
            headline: p.headline,
            bio: p.bio,
            links: p
                .links
                .into_iter()
                .map(|l| ProfileLink {
                    label: l.label,
                    url: l.url,
                })
                .collect(),
        }
    }
}

/// Ids key the rendered lists, so they must be unique per collection.
fn check_unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Parse a content fixture.
pub fn parse(json: &str) -> Result<SiteContent, ContentError> {
    let fixture: ContentFixture = serde_json::from_str(json)?;

    check_unique_ids(
        "achievement",
        fixture.achievements.iter().map(|a| a.id.as_str()),
    )?;
    check_unique_ids("website", fixture.websites.iter().map(|w| w.id.as_str()))?;

    Ok(SiteContent {
        profile: fixture.profile.into(),
        achievements: fixture.achievements.into_iter().map(Into::into).collect(),
        websites: fixture.websites.into_iter().map(Into::into).collect(),
    })
}

static SITE_CONTENT: OnceLock<Result<SiteContent, ContentError>> = OnceLock::new();

/// The embedded content, parsed on first call.
pub fn site_content() -> &'static Result<SiteContent, ContentError> {
    SITE_CONTENT.get_or_init(|| {
        let result = parse(CONTENT_JSON);
        match &result {
            Ok(content) => info!(
                "Loaded {} achievements and {} websites",
                content.achievements.len(),
                content.websites.len()
            ),
            Err(e) => error!("Failed to load site content: {e}"),
        }
        result
    })
}

/// Initial store value: embedded content with the given theme.
///
/// A broken fixture yields empty collections and a recorded error rather
/// than a crash.
pub fn initial_state(theme: Theme) -> SiteState {
    match site_content() {
        Ok(content) => SiteState {
            profile: content.profile.clone(),
            achievements: content.achievements.clone(),
            websites: content.websites.clone(),
            theme,
            content_error: None,
        },
        Err(e) => SiteState {
            theme,
            content_error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::MediaSource;

    const MINIMAL: &str = r#"{
        "profile": { "brand": "N.", "name": "N", "headline": "Hi" }
    }"#;

    #[test]
    fn test_embedded_fixture_parses() {
        let content = parse(CONTENT_JSON).unwrap();
        assert!(!content.profile.brand.is_empty());
        assert!(!content.achievements.is_empty());
        assert!(!content.websites.is_empty());
    }

    #[test]
    fn test_embedded_fixture_covers_media_shapes() {
        let content = parse(CONTENT_JSON).unwrap();
        let lens: Vec<(bool, usize)> = content
            .achievements
            .iter()
            .map(|a| (a.video.is_some(), a.media_list().len()))
            .collect();

        assert!(lens.iter().any(|&(video, len)| video && len > 1));
        assert!(lens.iter().any(|&(video, len)| !video && len == 1));
        assert!(lens.iter().any(|&(_, len)| len == 0));
    }

    #[test]
    fn test_minimal_fixture_defaults_to_empty() {
        let content = parse(MINIMAL).unwrap();
        assert!(content.achievements.is_empty());
        assert!(content.websites.is_empty());
        assert!(content.profile.bio.is_empty());
    }

    #[test]
    fn test_legacy_single_image() {
        let json = r#"{
            "profile": { "brand": "N.", "name": "N", "headline": "Hi" },
            "achievements": [{
                "id": "a", "title": "T", "description": "D", "date": "2023",
                "category": "C", "image": "cover.jpg"
            }]
        }"#;
        let content = parse(json).unwrap();
        assert_eq!(content.achievements[0].images, vec!["cover.jpg".to_string()]);
    }

    #[test]
    fn test_images_win_over_legacy_image() {
        let json = r#"{
            "profile": { "brand": "N.", "name": "N", "headline": "Hi" },
            "achievements": [{
                "id": "a", "title": "T", "description": "D", "date": "2023",
                "category": "C", "image": "old.jpg", "images": ["a.jpg", "b.jpg"]
            }]
        }"#;
        let content = parse(json).unwrap();
        assert_eq!(content.achievements[0].images, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_empty_video_is_ignored() {
        let json = r#"{
            "profile": { "brand": "N.", "name": "N", "headline": "Hi" },
            "achievements": [{
                "id": "a", "title": "T", "description": "D", "date": "2023",
                "category": "C", "video": ""
            }]
        }"#;
        let content = parse(json).unwrap();
        assert_eq!(content.achievements[0].video, None);
    }

    #[test]
    fn test_website_tech_stack_camel_case() {
        let json = r#"{
            "profile": { "brand": "N.", "name": "N", "headline": "Hi" },
            "websites": [{
                "id": "w", "name": "Site", "description": "D",
                "url": "https://example.com", "techStack": ["Rust", "Dioxus"]
            }]
        }"#;
        let content = parse(json).unwrap();
        assert_eq!(content.websites[0].tech_stack, vec!["Rust", "Dioxus"]);
        assert_eq!(content.websites[0].image, None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "profile": { "brand": "N.", "name": "N", "headline": "Hi" },
            "websites": [
                { "id": "w", "name": "A", "description": "D", "url": "https://a.example" },
                { "id": "w", "name": "B", "description": "D", "url": "https://b.example" }
            ]
        }"#;
        match parse(json) {
            Err(ContentError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "website");
                assert_eq!(id, "w");
            }
            other => panic!("Expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse("{"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_initial_state_uses_theme() {
        let state = initial_state(Theme::Light);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.content_error, None);
    }
}
