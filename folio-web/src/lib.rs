pub mod content;
pub mod pages;
pub mod storage;

use dioxus::prelude::*;
use folio_ui::Page;
use pages::{About, Gallery, Home, SiteLayout, Websites};

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/projects")]
    Gallery {},
    #[route("/websites")]
    Websites {},
}

impl Route {
    pub fn page(&self) -> Page {
        match self {
            Route::Home {} => Page::Home,
            Route::About {} => Page::About,
            Route::Gallery {} => Page::Gallery,
            Route::Websites {} => Page::Websites,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::About => Route::About {},
            Page::Gallery => Route::Gallery {},
            Page::Websites => Route::Websites {},
        }
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_route_round_trip() {
        for page in [Page::Home, Page::About, Page::Gallery, Page::Websites] {
            assert_eq!(Route::from(page).page(), page);
        }
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from(Page::Home).to_string(), "/");
        assert_eq!(Route::from(Page::Gallery).to_string(), "/projects");
        assert_eq!(Route::from(Page::Websites).to_string(), "/websites");
    }
}
