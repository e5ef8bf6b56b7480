//! About view component

use crate::components::icons::ExternalLinkIcon;
use crate::components::SectionIntro;
use crate::display_types::Profile;
use dioxus::prelude::*;

/// About view (pure, props-based)
///
/// The first bio paragraph is the lead; the rest render as body text.
#[component]
pub fn AboutView(profile: Profile) -> Element {
    let mut paragraphs = profile.bio.iter();
    let lead = paragraphs.next().cloned().unwrap_or_default();
    let body: Vec<String> = paragraphs.cloned().collect();

    rsx! {
        section { class: "pt-32 pb-20 md:py-60 px-6 min-h-screen",
            div { class: "max-w-[800px] mx-auto",
                SectionIntro {
                    eyebrow: Some("About".to_string()),
                    title: profile.name.clone(),
                    text: lead,
                }

                div { class: "space-y-8 max-w-xl",
                    for (i , paragraph) in body.iter().enumerate() {
                        p {
                            key: "{i}",
                            class: "text-lg md:text-xl text-gray-500 dark:text-gray-400 font-medium leading-relaxed",
                            "{paragraph}"
                        }
                    }
                }

                if !profile.links.is_empty() {
                    div { class: "mt-20 flex flex-wrap gap-3",
                        for link in profile.links.iter() {
                            a {
                                key: "{link.url}",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "flex items-center gap-2 px-4 py-2 rounded-full bg-black/[0.03] dark:bg-white/[0.05] text-[9px] font-black uppercase tracking-widest text-gray-400 hover:text-apple-blue transition-colors",
                                "{link.label}"
                                ExternalLinkIcon { class: "w-3 h-3" }
                            }
                        }
                    }
                }
            }
        }
    }
}
