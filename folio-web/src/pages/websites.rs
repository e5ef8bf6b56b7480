use dioxus::prelude::*;
use folio_ui::stores::{SiteState, SiteStateStoreExt};
use folio_ui::WebsitesView;

#[component]
pub fn Websites() -> Element {
    let site: Store<SiteState> = use_context();
    let websites = site.websites().read().clone();

    rsx! {
        WebsitesView { websites }
    }
}
