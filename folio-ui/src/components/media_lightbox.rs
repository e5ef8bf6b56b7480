//! Media lightbox
//!
//! Full-screen viewer for an item's video and images. The navigation state
//! lives in a [`MediaViewer`] signal; [`use_media_viewer`] ties the browser
//! side effects (scroll lock, keyboard listener) to its open state, and
//! [`MediaLightboxView`] renders the active entry.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::wasm_utils::{self, ScrollLock, WindowEventListener};
use dioxus::prelude::*;
use folio_common::{MediaList, MediaSource, MediaViewer, Position, Transition, ViewerCommand};
use tracing::{debug, warn};

/// DOM id of the lightbox `<video>`; only one lightbox is open at a time.
pub const LIGHTBOX_VIDEO_ID: &str = "folio-lightbox-video";

/// Resources held while the lightbox is open. Dropping releases both.
struct LightboxSession {
    _scroll_lock: Option<ScrollLock>,
    _keydown: Option<WindowEventListener>,
}

/// Create a media viewer whose browser side effects follow its open state.
///
/// Opening acquires the scroll lock and subscribes to `keydown` on the window;
/// any exit path (close button, Escape, backdrop, unmount) releases them.
pub fn use_media_viewer<T>() -> Signal<MediaViewer<T>>
where
    T: MediaSource + 'static,
{
    let viewer = use_signal(MediaViewer::<T>::new);
    let mut session: Signal<Option<LightboxSession>> = use_signal(|| None);

    use_effect(move || {
        let is_open = viewer.read().is_open();

        if !is_open {
            // Runs after the listener callback returned, so dropping it here is safe
            if session.write().take().is_some() {
                debug!("Lightbox session released");
            }
            return;
        }

        if session.peek().is_some() {
            return;
        }

        let keydown = WindowEventListener::new("keydown", move |event| {
            let Some(key) = wasm_utils::event_string(&event, "key") else {
                return;
            };
            if let Some(command) = MediaViewer::<T>::command_for_key(&key) {
                handle_command(viewer, command);
            }
        });
        if keydown.is_none() {
            warn!("Could not subscribe to keyboard, lightbox keys disabled");
        }

        session.set(Some(LightboxSession {
            _scroll_lock: ScrollLock::acquire(),
            _keydown: keydown,
        }));
        debug!("Lightbox session started");
    });

    use_drop(move || {
        if let Some(active) = session.write().take() {
            spawn(async move {
                drop(active);
            });
        }
    });

    viewer
}

/// Open `item` at `start_index`. Items without media are refused and logged.
pub fn open_item<T>(mut viewer: Signal<MediaViewer<T>>, item: T, start_index: usize)
where
    T: MediaSource + 'static,
{
    match viewer.write().open(item, start_index) {
        Ok(position) => debug!("Lightbox opened at {position}"),
        Err(e) => debug!("Lightbox not opened: {e}"),
    }
}

/// Apply a navigation command from a control, indicator, or key.
pub fn handle_command<T>(mut viewer: Signal<MediaViewer<T>>, command: ViewerCommand)
where
    T: MediaSource + 'static,
{
    if command == ViewerCommand::Close
        && viewer
            .peek()
            .active_entry()
            .is_some_and(|entry| entry.is_video())
    {
        wasm_utils::pause_media(LIGHTBOX_VIDEO_ID);
    }

    let result = viewer.write().apply(command);
    match (command, result) {
        (ViewerCommand::JumpTo(requested), Ok(Transition::Moved { to, .. })) if requested != to => {
            warn!("Indicator {requested} out of range, clamped to {to}");
        }
        (_, Ok(Transition::Moved { from, to })) => debug!(from, to, "Lightbox moved"),
        (_, Ok(Transition::Closed)) => debug!("Lightbox closed"),
        (_, Ok(Transition::Stayed)) => {}
        (_, Err(e)) => debug!("Lightbox ignored {command:?}: {e}"),
    }
}

/// Lightbox view (pure, props-based)
///
/// Shows exactly one entry of `media`, the one at `position`. Backdrop clicks
/// close; clicks on the media area and controls do not.
#[component]
pub fn MediaLightboxView(
    title: String,
    category: String,
    media: MediaList,
    position: Position,
    on_command: EventHandler<ViewerCommand>,
) -> Element {
    let Some(entry) = media.get(position.index).cloned() else {
        return rsx! {};
    };
    let has_navigation = media.has_navigation();
    let index = position.index;
    let kind_label = position.kind.label();

    rsx! {
        div {
            class: "fixed inset-0 z-[200] flex items-center justify-center bg-white/80 dark:bg-black/90 backdrop-blur-3xl p-4 md:p-10 animate-fade-in",
            onclick: move |_| on_command.call(ViewerCommand::Close),

            // Close button
            button {
                class: "absolute top-10 right-10 z-[210] w-12 h-12 flex items-center justify-center rounded-full bg-black/5 dark:bg-white/10 hover:bg-black/10 dark:hover:bg-white/20 transition-colors",
                onclick: move |e| {
                    e.stop_propagation();
                    on_command.call(ViewerCommand::Close);
                },
                XIcon { class: "w-5 h-5 text-black dark:text-white" }
            }

            div {
                class: "relative w-full h-full flex flex-col items-center justify-center",
                onclick: move |e| e.stop_propagation(),

                // One-element keyed list so each entry mounts fresh and re-animates
                for i in std::iter::once(index) {
                    div {
                        key: "{i}",
                        class: "relative w-full h-full flex items-center justify-center animate-media-in",
                        if entry.is_video() {
                            video {
                                id: LIGHTBOX_VIDEO_ID,
                                src: "{entry.source}",
                                controls: true,
                                autoplay: true,
                                class: "max-w-full max-h-[80vh] rounded-2xl shadow-2xl bg-black",
                            }
                        } else {
                            img {
                                src: "{entry.source}",
                                alt: "{title}",
                                class: "max-w-full max-h-[85vh] object-contain rounded-2xl shadow-2xl",
                            }
                        }
                    }
                }

                if has_navigation {
                    NavButton {
                        side: "left-0 md:left-4",
                        on_click: move |_| on_command.call(ViewerCommand::Prev),
                        ChevronLeftIcon { class: "w-6 h-6" }
                    }
                    NavButton {
                        side: "right-0 md:right-4",
                        on_click: move |_| on_command.call(ViewerCommand::Next),
                        ChevronRightIcon { class: "w-6 h-6" }
                    }

                    // Indicators
                    div { class: "absolute bottom-4 flex gap-2",
                        for (i , item) in media.iter().enumerate() {
                            Indicator {
                                key: "{i}",
                                is_active: i == index,
                                is_video: item.is_video(),
                                on_click: move |_| on_command.call(ViewerCommand::JumpTo(i)),
                            }
                        }
                    }
                }

                // Caption
                div { class: "absolute bottom-12 md:bottom-20 left-1/2 -translate-x-1/2 text-center pointer-events-none",
                    p { class: "text-[10px] font-black tracking-[0.4em] text-apple-blue uppercase mb-2",
                        "{category}"
                    }
                    h4 { class: "text-lg md:text-xl font-bold text-black dark:text-white tracking-tight",
                        "{title}"
                    }
                    p { class: "text-[9px] font-bold text-gray-400 mt-2 tracking-widest",
                        "{kind_label} • {position}"
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(side: &'static str, on_click: EventHandler<()>, children: Element) -> Element {
    rsx! {
        button {
            class: "absolute {side} top-1/2 -translate-y-1/2 w-14 h-14 flex items-center justify-center rounded-full bg-black/5 dark:bg-white/5 hover:bg-black/10 dark:hover:bg-white/10 transition-all text-black dark:text-white",
            onclick: move |e| {
                e.stop_propagation();
                on_click.call(());
            },
            {children}
        }
    }
}

#[component]
fn Indicator(is_active: bool, is_video: bool, on_click: EventHandler<()>) -> Element {
    let state_class = if is_active {
        "w-6 bg-apple-blue"
    } else {
        "w-1.5 bg-gray-300 dark:bg-zinc-700"
    };

    rsx! {
        button {
            class: "h-1.5 rounded-full transition-all duration-300 flex items-center justify-center {state_class}",
            onclick: move |e| {
                e.stop_propagation();
                on_click.call(());
            },
            if is_video && !is_active {
                div { class: "w-[3px] h-[3px] rounded-full bg-white/50" }
            }
        }
    }
}
