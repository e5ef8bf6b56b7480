//! folio-common - Pure, I/O-free logic shared by the folio UI crates
//!
//! Nothing in here touches the DOM. The view layer owns the side effects
//! (scroll lock, listeners, media playback) and drives these types.

mod error;
mod media;
mod media_viewer;
mod scroll_reveal;
mod theme;

pub use error::ViewerError;
pub use media::{MediaEntry, MediaKind, MediaList, MediaSource};
pub use media_viewer::{MediaViewer, Position, Transition, ViewerCommand};
pub use scroll_reveal::ScrollReveal;
pub use theme::{Theme, UnknownTheme};
