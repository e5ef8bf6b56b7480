//! Shared UI components

pub mod about;
pub mod app_layout;
pub mod gallery;
pub mod home;
pub mod icons;
pub mod media_lightbox;
pub mod navbar;
pub mod section_intro;
pub mod websites;

pub use about::AboutView;
pub use app_layout::AppLayoutView;
pub use gallery::GalleryView;
pub use home::HomeView;
pub use icons::{
    ChevronLeftIcon, ChevronRightIcon, ExternalLinkIcon, FilmIcon, MoonIcon, PlayFilledIcon,
    SunIcon, XIcon,
};
pub use media_lightbox::{
    handle_command, open_item, use_media_viewer, MediaLightboxView, LIGHTBOX_VIDEO_ID,
};
pub use navbar::{use_scroll_reveal, NavbarView};
pub use section_intro::SectionIntro;
pub use websites::WebsitesView;
