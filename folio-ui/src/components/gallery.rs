//! Gallery view component - project timeline with media lightbox

use crate::components::icons::{FilmIcon, PlayFilledIcon};
use crate::components::media_lightbox::{
    handle_command, open_item, use_media_viewer, MediaLightboxView,
};
use crate::components::SectionIntro;
use crate::display_types::{Achievement, CoverBadge};
use dioxus::prelude::*;
use folio_common::{MediaSource, ViewerCommand};

/// Gallery view
///
/// Owns the lightbox state. Clicking a cover opens the lightbox at the first
/// entry (the video when there is one).
#[component]
pub fn GalleryView(achievements: Vec<Achievement>) -> Element {
    let viewer = use_media_viewer::<Achievement>();

    let lightbox = {
        let state = viewer.read();
        match (state.item(), state.position()) {
            (Some(item), Some(position)) => Some((item.clone(), item.media_list(), position)),
            _ => None,
        }
    };

    rsx! {
        section { class: "pt-32 pb-20 md:py-60 px-6 min-h-screen",
            div { class: "max-w-[800px] mx-auto",
                SectionIntro {
                    title: "Curated".to_string(),
                    title_muted: Some("Movements.".to_string()),
                    text: "A record of deliberate motion. Each entry represents a system understood, a challenge accepted, or a narrative steered."
                        .to_string(),
                }

                div { class: "space-y-40 md:space-y-96",
                    for item in achievements.iter() {
                        AchievementEntry {
                            key: "{item.id}",
                            item: item.clone(),
                            on_open: move |item: Achievement| open_item(viewer, item, 0),
                        }
                    }
                }
            }

            if let Some((item, media, position)) = lightbox {
                MediaLightboxView {
                    title: item.title.clone(),
                    category: item.category.clone(),
                    media,
                    position,
                    on_command: move |command: ViewerCommand| handle_command(viewer, command),
                }
            }
        }
    }
}

/// One gallery entry: header, clickable cover, description
#[component]
fn AchievementEntry(item: Achievement, on_open: EventHandler<Achievement>) -> Element {
    let badge = CoverBadge::for_achievement(&item);
    let has_media = item.has_media();
    let cover_cursor = if has_media {
        "cursor-zoom-in"
    } else {
        "cursor-default"
    };

    rsx! {
        div { class: "flex flex-col animate-rise-in",
            div { class: "flex flex-col md:flex-row md:items-baseline justify-between mb-10 md:mb-16 border-b border-black/[0.05] dark:border-white/[0.05] pb-10 gap-4 md:gap-6",
                div { class: "space-y-2 md:space-y-3",
                    span { class: "inline-block text-[9px] md:text-[10px] font-black tracking-[0.4em] text-apple-blue uppercase",
                        "{item.category}"
                    }
                    h3 { class: "text-2xl md:text-5xl font-bold text-black dark:text-white tracking-tight",
                        "{item.title}"
                    }
                }
                span { class: "text-[10px] md:text-[12px] font-bold tracking-[0.2em] text-gray-400 dark:text-gray-600 uppercase shrink-0",
                    "{item.date}"
                }
            }

            div { class: "space-y-12 md:space-y-20",
                div {
                    class: "relative aspect-[16/10] w-full rounded-[2rem] md:rounded-[2.5rem] bg-apple-gray-50 dark:bg-zinc-900/50 border border-black/[0.03] dark:border-white/[0.03] overflow-hidden group {cover_cursor}",
                    "data-testid": "gallery-cover",
                    onclick: {
                        let item = item.clone();
                        move |_| on_open.call(item.clone())
                    },

                    if let Some(src) = item.cover_image() {
                        img {
                            src: "{src}",
                            alt: "{item.title}",
                            class: "w-full h-full object-cover transition-transform duration-1000 ease-out group-hover:scale-105",
                        }
                    } else {
                        div { class: "absolute inset-0 flex items-center justify-center opacity-40",
                            span { class: "text-[9px] md:text-[10px] font-bold tracking-[0.3em] text-gray-300 dark:text-zinc-800 uppercase text-center px-6",
                                "No Assets Defined"
                            }
                        }
                    }

                    if item.video.is_some() {
                        div { class: "absolute inset-0 flex items-center justify-center z-10",
                            div { class: "w-16 h-16 md:w-24 md:h-24 rounded-full bg-black/20 backdrop-blur-md border border-white/20 flex items-center justify-center transition-transform group-hover:scale-110",
                                PlayFilledIcon { class: "w-6 h-6 md:w-8 md:h-8 text-white" }
                            }
                        }
                    }

                    div { class: "absolute inset-0 pointer-events-none border-[0.5px] border-black/[0.03] dark:border-white/[0.03] rounded-[2rem] md:rounded-[2.5rem]" }

                    if !badge.is_empty() {
                        div { class: "absolute bottom-6 right-6 bg-black/40 backdrop-blur-md text-white text-[9px] font-bold px-3 py-1.5 rounded-full border border-white/10 opacity-0 group-hover:opacity-100 transition-opacity flex items-center gap-2",
                            if badge.film {
                                FilmIcon { class: "w-2.5 h-2.5" }
                            }
                            if let Some(text) = &badge.text {
                                "{text}"
                            }
                        }
                    }
                }

                div { class: "max-w-xl",
                    div { class: "space-y-4 mb-6 md:mb-8",
                        div { class: "h-[1px] w-full bg-black/[0.08] dark:bg-white/[0.08]" }
                        p { class: "text-lg md:text-xl text-gray-500 dark:text-gray-400 font-medium leading-relaxed text-left",
                            "{item.description}"
                        }
                    }
                    p { class: "text-[9px] md:text-[10px] font-bold tracking-[0.4em] text-gray-400 dark:text-zinc-700 uppercase",
                        "Engineering Brief"
                    }
                }
            }
        }
    }
}
