//! Page intro block: optional pill, large heading, lead paragraph

use dioxus::prelude::*;

#[component]
pub fn SectionIntro(
    title: String,
    /// Second heading line rendered in a muted colour
    #[props(default)]
    title_muted: Option<String>,
    /// Small pill above the heading
    #[props(default)]
    eyebrow: Option<String>,
    text: String,
) -> Element {
    rsx! {
        div { class: "mb-24 md:mb-72 animate-rise-in",
            if let Some(eyebrow) = eyebrow {
                div { class: "inline-block px-4 py-1.5 rounded-full bg-apple-blue/5 border border-apple-blue/10 text-apple-blue text-[9px] font-black uppercase tracking-[0.4em] mb-8",
                    "{eyebrow}"
                }
            }
            h2 { class: "text-4xl md:text-8xl font-bold tracking-tight text-black dark:text-white mb-8 md:mb-12 leading-[1.1]",
                "{title}"
                if let Some(muted) = title_muted {
                    br {}
                    span { class: "text-gray-300 dark:text-zinc-800", "{muted}" }
                }
            }
            p { class: "text-xl md:text-3xl text-gray-400 dark:text-gray-500 max-w-2xl font-medium leading-tight text-balance text-left",
                "{text}"
            }
        }
    }
}
