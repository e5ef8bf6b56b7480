//! App layout view component
//!
//! Page shell with a floating navbar slot above the routed content.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Optional floating navbar
    #[props(default)]
    navbar: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-white dark:bg-black text-black dark:text-white transition-colors duration-500",
            if let Some(nav) = navbar {
                {nav}
            }
            main { {children} }
        }
    }
}
