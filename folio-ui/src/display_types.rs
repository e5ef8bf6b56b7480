//! Display types for UI components
//!
//! Plain data the views render. folio-web builds them from the embedded
//! content fixture.

use folio_common::MediaSource;

/// A gallery entry: a project, award, or milestone
#[derive(Clone, Debug, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: String,
    pub video: Option<String>,
    pub images: Vec<String>,
}

impl MediaSource for Achievement {
    fn video(&self) -> Option<&str> {
        self.video.as_deref()
    }

    fn images(&self) -> &[String] {
        &self.images
    }
}

impl Achievement {
    /// Image shown on the gallery cover. Without one the cover shows the
    /// "No Assets Defined" placeholder, even when a video exists.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn has_media(&self) -> bool {
        self.video.is_some() || !self.images.is_empty()
    }
}

/// Hover badge on a gallery cover
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverBadge {
    /// Show the film marker (item has a video)
    pub film: bool,
    pub text: Option<String>,
}

impl CoverBadge {
    pub fn for_achievement(item: &Achievement) -> Self {
        let image_count = item.images.len();
        let text = if image_count > 1 {
            Some(format!("+{} MORE", image_count - 1))
        } else if image_count == 1 && item.video.is_none() {
            Some("VIEW FULLSCREEN".to_string())
        } else {
            None
        };

        Self {
            film: item.video.is_some(),
            text,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.film && self.text.is_none()
    }
}

/// A website in the showcase grid
#[derive(Clone, Debug, PartialEq)]
pub struct Website {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub tech_stack: Vec<String>,
}

/// Owner profile shown on the home and about pages
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    /// Short brand shown in the navbar
    pub brand: String,
    pub name: String,
    pub headline: String,
    pub bio: Vec<String>,
    pub links: Vec<ProfileLink>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

/// Top-level pages of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Gallery,
    Websites,
}

impl Page {
    /// Pages linked from the navbar, in display order
    pub const NAV: [Page; 3] = [Page::About, Page::Gallery, Page::Websites];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Gallery => "Projects",
            Page::Websites => "Websites",
        }
    }
}

/// Navigation item for the navbar
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub page: Page,
    pub label: String,
    pub is_active: bool,
}

impl NavItem {
    /// Nav items with `current` highlighted.
    pub fn for_current(current: Page) -> Vec<NavItem> {
        Page::NAV
            .iter()
            .map(|&page| NavItem {
                page,
                label: page.label().to_string(),
                is_active: page == current,
            })
            .collect()
    }
}
