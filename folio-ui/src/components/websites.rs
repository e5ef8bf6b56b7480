//! Websites view component - showcase grid of built sites

use crate::components::SectionIntro;
use crate::display_types::Website;
use dioxus::prelude::*;

/// Websites view (pure, props-based)
#[component]
pub fn WebsitesView(websites: Vec<Website>) -> Element {
    rsx! {
        section { class: "pt-32 pb-20 md:py-60 px-6 min-h-screen",
            div { class: "max-w-[1200px] mx-auto",
                SectionIntro {
                    eyebrow: Some("Digital Estates".to_string()),
                    title: "Interfaces.".to_string(),
                    text: "A collection of layouts designed for clarity and utility. I prefer environments that require zero explanation. The internet is already crowded enough; I choose to be quiet but effective."
                        .to_string(),
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-16 md:gap-32",
                    for site in websites.iter() {
                        WebsiteCard { key: "{site.id}", site: site.clone() }
                    }
                }
            }
        }
    }
}

/// Browser-window styled card linking to the site
///
/// Shows a shimmer until the preview image fires `load`.
#[component]
fn WebsiteCard(site: Website) -> Element {
    // Nothing to wait for without a preview
    let has_preview = site.image.is_some();
    let mut is_loaded = use_signal(move || !has_preview);
    let image_class = if is_loaded() {
        "opacity-100"
    } else {
        "opacity-0"
    };

    rsx! {
        div { class: "group animate-rise-in",
            div { class: "flex flex-col h-full space-y-8 md:space-y-10",
                a {
                    href: "{site.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "relative block w-full rounded-[2.5rem] bg-apple-gray-50 dark:bg-apple-gray-500/5 border border-black/[0.08] dark:border-white/[0.08] overflow-hidden group-hover:border-apple-blue/30 transition-all duration-700 cursor-pointer shadow-sm group-hover:shadow-2xl group-hover:shadow-apple-blue/10 transform-gpu group-hover:-translate-y-2",

                    // Fake browser chrome
                    div { class: "h-8 md:h-10 bg-black/[0.03] dark:bg-white/[0.03] border-b border-black/[0.05] dark:border-white/[0.05] flex items-center px-4 md:px-6 gap-2",
                        div { class: "flex gap-1.5",
                            div { class: "w-2.5 h-2.5 rounded-full bg-[#ff5f56]" }
                            div { class: "w-2.5 h-2.5 rounded-full bg-[#ffbd2e]" }
                            div { class: "w-2.5 h-2.5 rounded-full bg-[#27c93f]" }
                        }
                        div { class: "mx-auto flex items-center gap-2 bg-white/50 dark:bg-black/50 px-4 py-1 rounded-md border border-black/[0.05] dark:border-white/[0.05] w-2/3 md:w-1/2",
                            div { class: "w-2 h-2 rounded-full border border-gray-400 opacity-30" }
                            span { class: "text-[8px] font-bold text-gray-400 truncate opacity-50 uppercase tracking-widest",
                                "{site.url}"
                            }
                        }
                    }

                    div { class: "relative aspect-[16/10] overflow-hidden",
                        if !is_loaded() {
                            div { class: "absolute inset-0 bg-gradient-to-r from-transparent via-black/5 dark:via-white/5 to-transparent animate-shimmer bg-[length:200%_100%]" }
                        }

                        if let Some(src) = &site.image {
                            img {
                                src: "{src}",
                                alt: "{site.name}",
                                loading: "lazy",
                                onload: move |_| is_loaded.set(true),
                                class: "w-full h-full object-cover object-top transition-all duration-1000 ease-out transform-gpu group-hover:scale-[1.03] group-hover:translate-y-[-5%] {image_class}",
                            }
                        }

                        div { class: "absolute inset-0 bg-gradient-to-tr from-black/20 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500" }

                        div { class: "absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-500",
                            div { class: "glass px-6 py-3 rounded-full border border-white/20 shadow-xl backdrop-blur-md scale-90 group-hover:scale-100 transition-transform duration-500",
                                span { class: "text-[10px] font-black uppercase tracking-[0.2em] text-black dark:text-white",
                                    "View Project"
                                }
                            }
                        }
                    }
                }

                div { class: "space-y-6 px-2",
                    div { class: "flex flex-col md:flex-row md:items-center justify-between gap-4",
                        h3 { class: "text-2xl md:text-4xl font-bold text-black dark:text-white tracking-tight",
                            "{site.name}"
                        }
                        div { class: "flex flex-wrap gap-2",
                            for tech in site.tech_stack.iter() {
                                span {
                                    key: "{tech}",
                                    class: "px-3 py-1 rounded-full bg-black/[0.03] dark:bg-white/[0.05] text-[9px] font-black uppercase tracking-widest text-gray-400 group-hover:text-apple-blue transition-colors",
                                    "{tech}"
                                }
                            }
                        }
                    }

                    div { class: "space-y-4",
                        div { class: "h-[1px] w-full bg-black/[0.05] dark:bg-white/[0.05]" }
                        p { class: "text-base md:text-xl text-gray-500 dark:text-gray-400 font-medium leading-relaxed max-w-xl text-balance text-left",
                            "{site.description}"
                        }
                    }
                }
            }
        }
    }
}
