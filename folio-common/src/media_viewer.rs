//! Lightbox navigation state machine
//!
//! The viewer is either closed or showing one entry of an item's media list.
//! It does no I/O: the view that owns it runs the side effects (scroll lock,
//! keyboard subscription, pausing video) based on the returned [`Transition`].

use std::fmt;

use crate::error::ViewerError;
use crate::media::{MediaEntry, MediaKind, MediaList, MediaSource};

/// Keys the lightbox responds to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewerKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl ViewerKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(ViewerKey::ArrowLeft),
            "ArrowRight" => Some(ViewerKey::ArrowRight),
            "Escape" => Some(ViewerKey::Escape),
            _ => None,
        }
    }
}

/// A request to change the viewer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Next,
    Prev,
    Close,
    JumpTo(usize),
}

impl From<ViewerKey> for ViewerCommand {
    fn from(key: ViewerKey) -> Self {
        match key {
            ViewerKey::ArrowRight => ViewerCommand::Next,
            ViewerKey::ArrowLeft => ViewerCommand::Prev,
            ViewerKey::Escape => ViewerCommand::Close,
        }
    }
}

/// What a successful command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Cursor changed
    Moved { from: usize, to: usize },
    /// Still open, cursor unchanged (single entry, or jump to current)
    Stayed,
    /// Viewer went from open to closed
    Closed,
}

/// Cursor position within the open item's media list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub len: usize,
    pub kind: MediaKind,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.index + 1, self.len)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ViewerState<T> {
    Closed,
    Open { item: T, cursor: usize },
}

/// Media lightbox state: closed, or open on an item with a cursor into its
/// media list.
///
/// Invariant: while open, `cursor < item.media_list().len()` and the list is
/// non-empty. Items without media are refused by [`MediaViewer::open`].
#[derive(Debug, Clone, PartialEq)]
pub struct MediaViewer<T> {
    state: ViewerState<T>,
}

impl<T> Default for MediaViewer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MediaViewer<T> {
    pub fn new() -> Self {
        Self {
            state: ViewerState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    /// The item currently shown, if open.
    pub fn item(&self) -> Option<&T> {
        match &self.state {
            ViewerState::Open { item, .. } => Some(item),
            ViewerState::Closed => None,
        }
    }

    /// Cursor into the media list, if open.
    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open { cursor, .. } => Some(cursor),
            ViewerState::Closed => None,
        }
    }

    /// Close the viewer and hand back the item that was open.
    ///
    /// Closing an already closed viewer is a no-op returning `None`.
    pub fn close(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.state, ViewerState::Closed) {
            ViewerState::Open { item, .. } => Some(item),
            ViewerState::Closed => None,
        }
    }

    /// Command bound to a DOM key name, if any.
    pub fn command_for_key(name: &str) -> Option<ViewerCommand> {
        ViewerKey::from_key_name(name).map(ViewerCommand::from)
    }
}

impl<T: MediaSource> MediaViewer<T> {
    /// Open `item` at `start_index`, replacing whatever was open.
    ///
    /// The start index is clamped into the list. Items without any media are
    /// refused and the viewer stays (or becomes) closed.
    pub fn open(&mut self, item: T, start_index: usize) -> Result<Position, ViewerError> {
        let media = item.media_list();
        if media.is_empty() {
            self.state = ViewerState::Closed;
            return Err(ViewerError::EmptyMediaList);
        }

        let cursor = start_index.min(media.len() - 1);
        let kind = media.get(cursor).map_or(MediaKind::Image, |e| e.kind);
        self.state = ViewerState::Open { item, cursor };

        Ok(Position {
            index: cursor,
            len: media.len(),
            kind,
        })
    }

    /// Media list of the open item (empty when closed).
    pub fn media(&self) -> MediaList {
        self.item().map(MediaSource::media_list).unwrap_or_default()
    }

    /// The entry under the cursor.
    pub fn active_entry(&self) -> Option<MediaEntry> {
        let cursor = self.cursor()?;
        self.media().get(cursor).cloned()
    }

    pub fn position(&self) -> Option<Position> {
        let cursor = self.cursor()?;
        let media = self.media();
        let entry = media.get(cursor)?;
        Some(Position {
            index: cursor,
            len: media.len(),
            kind: entry.kind,
        })
    }

    /// Whether prev/next controls and indicators make sense.
    pub fn has_navigation(&self) -> bool {
        self.media().has_navigation()
    }

    pub fn next(&mut self) -> Result<Transition, ViewerError> {
        self.step(|cursor, len| (cursor + 1) % len)
    }

    pub fn prev(&mut self) -> Result<Transition, ViewerError> {
        self.step(|cursor, len| (cursor + len - 1) % len)
    }

    /// Move straight to `index`, clamping past-the-end indices to the last
    /// entry.
    pub fn jump_to(&mut self, index: usize) -> Result<Transition, ViewerError> {
        self.step(|_, len| index.min(len - 1))
    }

    pub fn apply(&mut self, command: ViewerCommand) -> Result<Transition, ViewerError> {
        match command {
            ViewerCommand::Next => self.next(),
            ViewerCommand::Prev => self.prev(),
            ViewerCommand::JumpTo(index) => self.jump_to(index),
            ViewerCommand::Close => match self.close() {
                Some(_) => Ok(Transition::Closed),
                None => Err(ViewerError::Closed),
            },
        }
    }

    /// `advance` receives the current cursor and a non-zero length.
    fn step(
        &mut self,
        advance: impl FnOnce(usize, usize) -> usize,
    ) -> Result<Transition, ViewerError> {
        let ViewerState::Open { item, cursor } = &mut self.state else {
            return Err(ViewerError::Closed);
        };

        let len = item.media_list().len();
        if len == 0 {
            return Err(ViewerError::EmptyMediaList);
        }

        let from = *cursor;
        let to = advance(from, len);
        *cursor = to;

        Ok(if from == to {
            Transition::Stayed
        } else {
            Transition::Moved { from, to }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Project {
        video: Option<String>,
        images: Vec<String>,
    }

    impl MediaSource for Project {
        fn video(&self) -> Option<&str> {
            self.video.as_deref()
        }

        fn images(&self) -> &[String] {
            &self.images
        }
    }

    fn project(video: Option<&str>, images: &[&str]) -> Project {
        Project {
            video: video.map(String::from),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Project with `len` media entries (video first when `with_video`).
    fn project_of_len(len: usize, with_video: bool) -> Project {
        let image_count = if with_video { len - 1 } else { len };
        Project {
            video: with_video.then(|| "clip.mp4".to_string()),
            images: (0..image_count).map(|i| format!("{i}.jpg")).collect(),
        }
    }

    fn open_viewer(item: Project) -> MediaViewer<Project> {
        let mut viewer = MediaViewer::new();
        viewer.open(item, 0).unwrap();
        viewer
    }

    #[test]
    fn test_starts_closed() {
        let viewer: MediaViewer<Project> = MediaViewer::default();
        assert!(!viewer.is_open());
        assert_eq!(viewer.cursor(), None);
        assert_eq!(viewer.active_entry(), None);
        assert_eq!(viewer.position(), None);
        assert!(viewer.media().is_empty());
    }

    #[test]
    fn test_video_and_images_scenario() {
        let mut viewer = open_viewer(project(Some("v.mp4"), &["a.jpg", "b.jpg"]));

        assert_eq!(viewer.active_entry(), Some(MediaEntry::video("v.mp4")));
        assert_eq!(viewer.position().unwrap().to_string(), "1 / 3");
        assert_eq!(viewer.position().unwrap().kind, MediaKind::Video);

        assert_eq!(viewer.next(), Ok(Transition::Moved { from: 0, to: 1 }));
        assert_eq!(viewer.active_entry(), Some(MediaEntry::image("a.jpg")));
        assert_eq!(viewer.position().unwrap().to_string(), "2 / 3");

        viewer.next().unwrap();
        assert_eq!(viewer.next(), Ok(Transition::Moved { from: 2, to: 0 }));
        assert_eq!(viewer.active_entry(), Some(MediaEntry::video("v.mp4")));
        assert_eq!(viewer.position().unwrap().to_string(), "1 / 3");
    }

    #[test]
    fn test_single_image_scenario() {
        let mut viewer = open_viewer(project(None, &["a.jpg"]));

        assert_eq!(viewer.active_entry(), Some(MediaEntry::image("a.jpg")));
        assert_eq!(viewer.position().unwrap().to_string(), "1 / 1");
        assert!(!viewer.has_navigation());

        assert_eq!(viewer.next(), Ok(Transition::Stayed));
        assert_eq!(viewer.prev(), Ok(Transition::Stayed));
        assert_eq!(viewer.cursor(), Some(0));
    }

    #[test]
    fn test_navigation_shown_only_for_multiple_entries() {
        assert!(open_viewer(project(Some("v.mp4"), &["a.jpg"])).has_navigation());
        assert!(!open_viewer(project(Some("v.mp4"), &[])).has_navigation());
    }

    #[test]
    fn test_open_empty_item_is_refused() {
        let mut viewer = MediaViewer::new();
        assert_eq!(
            viewer.open(project(None, &[]), 0),
            Err(ViewerError::EmptyMediaList)
        );
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_open_empty_item_closes_previous_session() {
        let mut viewer = open_viewer(project(None, &["a.jpg"]));
        assert!(viewer.open(project(None, &[]), 0).is_err());
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_open_clamps_start_index() {
        let mut viewer = MediaViewer::new();
        let position = viewer.open(project(None, &["a.jpg", "b.jpg"]), 10).unwrap();
        assert_eq!(position.index, 1);
        assert_eq!(viewer.cursor(), Some(1));
    }

    #[test]
    fn test_closed_viewer_refuses_navigation() {
        let mut viewer: MediaViewer<Project> = MediaViewer::new();
        assert_eq!(viewer.next(), Err(ViewerError::Closed));
        assert_eq!(viewer.prev(), Err(ViewerError::Closed));
        assert_eq!(viewer.jump_to(0), Err(ViewerError::Closed));
        assert_eq!(viewer.apply(ViewerCommand::Close), Err(ViewerError::Closed));
    }

    #[test]
    fn test_close_returns_item_and_resets() {
        let item = project(Some("v.mp4"), &["a.jpg"]);
        let mut viewer = open_viewer(item.clone());
        viewer.next().unwrap();

        assert_eq!(viewer.close(), Some(item));
        assert!(!viewer.is_open());
        assert_eq!(viewer.item(), None);
        assert_eq!(viewer.close(), None);
    }

    #[test]
    fn test_reopen_starts_fresh_cursor() {
        let item = project(Some("v.mp4"), &["a.jpg", "b.jpg"]);
        let mut viewer = open_viewer(item.clone());
        viewer.jump_to(2).unwrap();
        viewer.close();

        viewer.open(item, 0).unwrap();
        assert_eq!(viewer.cursor(), Some(0));
    }

    #[test]
    fn test_open_while_open_replaces_item() {
        let mut viewer = open_viewer(project(None, &["a.jpg", "b.jpg", "c.jpg"]));
        viewer.jump_to(2).unwrap();

        viewer.open(project(Some("v.mp4"), &[]), 0).unwrap();
        assert_eq!(viewer.cursor(), Some(0));
        assert_eq!(viewer.active_entry(), Some(MediaEntry::video("v.mp4")));
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut viewer = open_viewer(project(Some("v.mp4"), &["a.jpg", "b.jpg"]));
        assert_eq!(viewer.prev(), Ok(Transition::Moved { from: 0, to: 2 }));
        assert_eq!(viewer.active_entry(), Some(MediaEntry::image("b.jpg")));
    }

    #[test]
    fn test_jump_to() {
        let mut viewer = open_viewer(project(Some("v.mp4"), &["a.jpg", "b.jpg"]));
        assert_eq!(viewer.jump_to(2), Ok(Transition::Moved { from: 0, to: 2 }));
        assert_eq!(viewer.jump_to(2), Ok(Transition::Stayed));
    }

    #[test]
    fn test_jump_past_end_clamps() {
        let mut viewer = open_viewer(project(None, &["a.jpg", "b.jpg"]));
        assert_eq!(viewer.jump_to(7), Ok(Transition::Moved { from: 0, to: 1 }));
        assert_eq!(viewer.cursor(), Some(1));
    }

    #[test]
    fn test_next_then_prev_round_trips() {
        for len in 1..=6 {
            for start in 0..len {
                let mut viewer = MediaViewer::new();
                viewer.open(project_of_len(len, len % 2 == 0), start).unwrap();
                viewer.next().unwrap();
                viewer.prev().unwrap();
                assert_eq!(viewer.cursor(), Some(start), "len {len} start {start}");

                viewer.prev().unwrap();
                viewer.next().unwrap();
                assert_eq!(viewer.cursor(), Some(start), "len {len} start {start}");
            }
        }
    }

    #[test]
    fn test_len_nexts_cycle() {
        for len in 1..=6 {
            for start in 0..len {
                let mut viewer = MediaViewer::new();
                viewer.open(project_of_len(len, true), start).unwrap();
                for _ in 0..len {
                    viewer.next().unwrap();
                }
                assert_eq!(viewer.cursor(), Some(start), "len {len} start {start}");
            }
        }
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        // Deterministic pseudo-random command stream
        let mut seed: u32 = 0x2545_f491;
        for len in 1..=5 {
            let mut viewer = open_viewer(project_of_len(len, len > 2));
            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                let command = match seed % 3 {
                    0 => ViewerCommand::Next,
                    1 => ViewerCommand::Prev,
                    _ => ViewerCommand::JumpTo((seed >> 8) as usize % (len + 3)),
                };
                viewer.apply(command).unwrap();
                let cursor = viewer.cursor().unwrap();
                assert!(cursor < len, "cursor {cursor} escaped len {len}");
                assert!(viewer.active_entry().is_some());
            }
        }
    }

    #[test]
    fn test_apply_close() {
        let mut viewer = open_viewer(project(None, &["a.jpg"]));
        assert_eq!(viewer.apply(ViewerCommand::Close), Ok(Transition::Closed));
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(
            MediaViewer::<Project>::command_for_key("ArrowRight"),
            Some(ViewerCommand::Next)
        );
        assert_eq!(
            MediaViewer::<Project>::command_for_key("ArrowLeft"),
            Some(ViewerCommand::Prev)
        );
        assert_eq!(
            MediaViewer::<Project>::command_for_key("Escape"),
            Some(ViewerCommand::Close)
        );
        assert_eq!(MediaViewer::<Project>::command_for_key("Enter"), None);
        assert_eq!(MediaViewer::<Project>::command_for_key("arrowright"), None);
    }
}
