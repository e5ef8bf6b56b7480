//! Site layout: shared store, theme, navbar and routed outlet

use crate::content;
use crate::storage;
use crate::Route;
use dioxus::prelude::*;
use folio_ui::stores::SiteStateStoreExt;
use folio_ui::{use_scroll_reveal, AppLayoutView, NavItem, NavbarView, Page};
use tracing::debug;

#[component]
pub fn SiteLayout() -> Element {
    let site = use_store(|| content::initial_state(storage::load_theme().unwrap_or_default()));
    use_context_provider(|| site);

    let current_route = use_route::<Route>();
    let nav_visible = use_scroll_reveal();

    // Mirror the theme onto <html> and persist it
    use_effect(move || {
        let theme = *site.theme().read();
        folio_ui::wasm_utils::set_root_class("dark", theme.is_dark());
        storage::save_theme(theme);
        debug!("Theme applied: {theme}");
    });

    let brand = site.profile().read().brand.clone();
    let theme = *site.theme().read();
    let content_error = site.content_error().read().clone();

    rsx! {
        AppLayoutView {
            navbar: rsx! {
                NavbarView {
                    brand,
                    nav_items: NavItem::for_current(current_route.page()),
                    on_nav_click: move |page: Page| {
                        navigator().push(Route::from(page));
                    },
                    theme,
                    on_toggle_theme: move |_| {
                        let next = site.theme().read().toggle();
                        site.theme().set(next);
                    },
                    visible: nav_visible(),
                }
            },
            if let Some(error) = content_error {
                div { class: "fixed bottom-6 left-1/2 -translate-x-1/2 z-[150] px-4 py-2 rounded-full bg-red-500/10 text-red-500 text-[10px] font-bold tracking-widest uppercase",
                    "Content unavailable: {error}"
                }
            }
            Outlet::<Route> {}
        }
    }
}
