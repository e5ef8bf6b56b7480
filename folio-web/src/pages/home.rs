use crate::Route;
use dioxus::prelude::*;
use folio_ui::stores::{SiteState, SiteStateStoreExt};
use folio_ui::{HomeView, Page};

#[component]
pub fn Home() -> Element {
    let site: Store<SiteState> = use_context();
    let profile = site.profile().read().clone();

    rsx! {
        HomeView {
            profile,
            on_navigate: move |page: Page| {
                navigator().push(Route::from(page));
            },
        }
    }
}
