//! Site-wide content and preference store

use crate::display_types::{Achievement, Profile, Website};
use dioxus::prelude::*;
use folio_common::Theme;

/// Content and preferences shared by every page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SiteState {
    pub profile: Profile,
    pub achievements: Vec<Achievement>,
    pub websites: Vec<Website>,
    pub theme: Theme,
    /// Set when the content fixture failed to load
    pub content_error: Option<String>,
}
