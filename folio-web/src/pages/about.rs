use dioxus::prelude::*;
use folio_ui::stores::{SiteState, SiteStateStoreExt};
use folio_ui::AboutView;

#[component]
pub fn About() -> Element {
    let site: Store<SiteState> = use_context();
    let profile = site.profile().read().clone();

    rsx! {
        AboutView { profile }
    }
}
