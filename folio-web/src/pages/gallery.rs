use dioxus::prelude::*;
use folio_ui::stores::{SiteState, SiteStateStoreExt};
use folio_ui::GalleryView;

#[component]
pub fn Gallery() -> Element {
    let site: Store<SiteState> = use_context();
    let achievements = site.achievements().read().clone();

    rsx! {
        GalleryView { achievements }
    }
}
