//! Navbar view component
//!
//! Floating pill navbar with brand, page links and theme toggle. Slides out of
//! view while scrolling down and back in when scrolling up.

use crate::components::icons::{MoonIcon, SunIcon};
use crate::display_types::{NavItem, Page};
use crate::wasm_utils::{self, WindowEventListener};
use dioxus::prelude::*;
use folio_common::{ScrollReveal, Theme};

/// Navbar view (pure, props-based)
#[component]
pub fn NavbarView(
    brand: String,
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<Page>,
    theme: Theme,
    on_toggle_theme: EventHandler<()>,
    /// Whether the bar is slid into view
    #[props(default = true)]
    visible: bool,
) -> Element {
    let offset_class = if visible {
        "translate-y-0"
    } else {
        "-translate-y-[100px]"
    };

    rsx! {
        div { class: "fixed top-6 left-0 right-0 z-[100] px-6 pointer-events-none transition-transform duration-[400ms] ease-[cubic-bezier(0.22,1,0.36,1)] {offset_class}",
            nav { class: "max-w-[640px] mx-auto glass border border-black/[0.08] dark:border-white/[0.08] rounded-full px-2 h-14 flex items-center justify-between pointer-events-auto shadow-lg shadow-black/[0.03]",
                // Brand
                div { class: "flex-1 flex justify-start pl-4",
                    button {
                        class: "font-bold tracking-tighter text-sm hover:opacity-60 transition-opacity text-black dark:text-white",
                        onclick: move |_| on_nav_click.call(Page::Home),
                        "{brand}"
                    }
                }

                // Page links
                div { class: "flex items-center gap-1 md:gap-2 text-[10px] font-black uppercase tracking-widest",
                    for item in nav_items.iter() {
                        NavLink {
                            key: "{item.label}",
                            is_active: item.is_active,
                            on_click: {
                                let page = item.page;
                                move |_| on_nav_click.call(page)
                            },
                            "{item.label}"
                        }
                    }
                }

                div { class: "flex-1 flex justify-end pr-1",
                    ThemeToggle { theme, on_toggle: on_toggle_theme }
                }
            }
        }
    }
}

#[component]
fn NavLink(is_active: bool, on_click: EventHandler<()>, children: Element) -> Element {
    let state_class = if is_active {
        "text-apple-blue bg-black/[0.03] dark:bg-white/[0.05]"
    } else {
        "text-gray-400 hover:text-black dark:hover:text-white"
    };

    rsx! {
        button {
            class: "transition-all px-3 py-2 rounded-full {state_class}",
            onclick: move |_| on_click.call(()),
            {children}
        }
    }
}

/// Sun/moon button; the inactive icon rotates and shrinks away.
#[component]
fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    let is_dark = theme.is_dark();
    let sun_class = if is_dark {
        "rotate-90 scale-0 opacity-0"
    } else {
        "rotate-0 scale-100 opacity-100"
    };
    let moon_class = if is_dark {
        "rotate-0 scale-100 opacity-100"
    } else {
        "-rotate-90 scale-0 opacity-0"
    };

    rsx! {
        button {
            class: "w-10 h-10 flex items-center justify-center rounded-full bg-black/[0.03] dark:bg-white/[0.05] border border-black/[0.05] dark:border-white/[0.05] hover:scale-105 active:scale-95 transition-all",
            aria_label: "Toggle Theme",
            onclick: move |_| on_toggle.call(()),
            div { class: "relative w-4 h-4",
                div { class: "absolute inset-0 flex items-center justify-center transition-all duration-300 {sun_class}",
                    SunIcon { class: "w-3.5 h-3.5 text-black" }
                }
                div { class: "absolute inset-0 flex items-center justify-center transition-all duration-300 {moon_class}",
                    MoonIcon { class: "w-3.5 h-3.5 text-white" }
                }
            }
        }
    }
}

/// Navbar visibility driven by window scroll.
///
/// Holds a passive scroll listener for the lifetime of the calling component.
pub fn use_scroll_reveal() -> Signal<bool> {
    let mut visible = use_signal(|| true);
    let mut reveal = use_signal(ScrollReveal::new);
    let mut listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    // Registered after the first render so the window is available
    use_effect(move || {
        if listener.peek().is_some() {
            return;
        }

        let scroll_listener = WindowEventListener::passive("scroll", move |_| {
            let now_visible = reveal.write().on_scroll(wasm_utils::scroll_y());
            if now_visible != *visible.peek() {
                visible.set(now_visible);
            }
        });

        if scroll_listener.is_none() {
            tracing::warn!("No window available, navbar will not hide on scroll");
        }
        listener.set(scroll_listener);
    });

    use_drop(move || {
        // Release outside the teardown diff
        if let Some(scroll_listener) = listener.write().take() {
            spawn(async move {
                drop(scroll_listener);
            });
        }
    });

    visible
}
