//! Home view component - landing hero

use crate::components::icons::ChevronRightIcon;
use crate::display_types::{Page, Profile};
use dioxus::prelude::*;

/// Home view (pure, props-based)
#[component]
pub fn HomeView(profile: Profile, on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        section { class: "min-h-screen flex items-center px-6",
            div { class: "max-w-[800px] mx-auto w-full animate-rise-in",
                p { class: "text-[10px] font-black tracking-[0.4em] text-apple-blue uppercase mb-8",
                    "{profile.name}"
                }
                h1 { class: "text-5xl md:text-8xl font-bold tracking-tight text-black dark:text-white leading-[1.05] mb-12 text-balance",
                    "{profile.headline}"
                }
                div { class: "flex flex-wrap gap-3",
                    for page in [Page::Gallery, Page::Websites] {
                        button {
                            key: "{page:?}",
                            class: "group flex items-center gap-2 px-6 py-3 rounded-full bg-black/[0.03] dark:bg-white/[0.05] border border-black/[0.05] dark:border-white/[0.05] text-[10px] font-black uppercase tracking-widest text-black dark:text-white hover:bg-black/[0.06] dark:hover:bg-white/[0.1] transition-colors",
                            onclick: move |_| on_navigate.call(page),
                            {page.label()}
                            ChevronRightIcon { class: "w-3 h-3 transition-transform group-hover:translate-x-0.5" }
                        }
                    }
                }
            }
        }
    }
}
