//! Media list derivation
//!
//! A content item carries an optional video and an ordered list of images.
//! The viewer walks them as a single list with the video first.

/// Kind of a media entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Upper-case label used in the lightbox caption
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Video => "VIDEO",
            MediaKind::Image => "IMAGE",
        }
    }
}

/// A single displayable media entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub kind: MediaKind,
    pub source: String,
}

impl MediaEntry {
    pub fn video(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            source: source.into(),
        }
    }

    pub fn image(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            source: source.into(),
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Ordered media entries derived from a content item.
///
/// Index 0 is the video when one exists; images follow in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaList {
    entries: Vec<MediaEntry>,
}

impl MediaList {
    pub fn build(video: Option<&str>, images: &[String]) -> Self {
        let mut entries = Vec::with_capacity(images.len() + usize::from(video.is_some()));
        if let Some(src) = video {
            entries.push(MediaEntry::video(src));
        }
        entries.extend(images.iter().map(MediaEntry::image));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaEntry> {
        self.entries.iter()
    }

    /// Prev/next controls and indicators are shown only with more than one
    /// entry.
    pub fn has_navigation(&self) -> bool {
        self.entries.len() > 1
    }
}

/// Anything that can be opened in the media viewer.
pub trait MediaSource {
    fn video(&self) -> Option<&str>;

    fn images(&self) -> &[String];

    /// Recomputed on every call so it never goes stale against the item.
    fn media_list(&self) -> MediaList {
        MediaList::build(self.video(), self.images())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        video: Option<String>,
        images: Vec<String>,
    }

    impl MediaSource for Item {
        fn video(&self) -> Option<&str> {
            self.video.as_deref()
        }

        fn images(&self) -> &[String] {
            &self.images
        }
    }

    fn item(video: Option<&str>, images: &[&str]) -> Item {
        Item {
            video: video.map(String::from),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_video_goes_first() {
        let list = item(Some("v.mp4"), &["a.jpg", "b.jpg"]).media_list();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), Some(&MediaEntry::video("v.mp4")));
        let rest: Vec<&MediaEntry> = list.iter().skip(1).collect();
        assert_eq!(
            rest,
            [&MediaEntry::image("a.jpg"), &MediaEntry::image("b.jpg")]
        );
    }

    #[test]
    fn test_navigation_needs_two_entries() {
        assert!(!MediaList::default().has_navigation());
        assert!(!item(None, &["a.jpg"]).media_list().has_navigation());
        assert!(!item(Some("v.mp4"), &[]).media_list().has_navigation());
        assert!(item(Some("v.mp4"), &["a.jpg"]).media_list().has_navigation());
        assert!(item(None, &["a.jpg", "b.jpg"]).media_list().has_navigation());
    }

    #[test]
    fn test_images_only_keeps_order() {
        let images = ["c.jpg", "a.jpg", "b.jpg"];
        let list = item(None, &images).media_list();
        let sources: Vec<&str> = list.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, images);
        assert!(list.iter().all(|e| e.kind == MediaKind::Image));
    }

    #[test]
    fn test_video_only() {
        let list = item(Some("v.mp4"), &[]).media_list();
        assert_eq!(list.len(), 1);
        assert!(list.get(0).is_some_and(MediaEntry::is_video));
    }

    #[test]
    fn test_no_media_is_empty() {
        let list = item(None, &[]).media_list();
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn test_length_invariant() {
        for image_count in 0..5 {
            let images: Vec<String> = (0..image_count).map(|i| format!("{i}.jpg")).collect();
            let refs: Vec<&str> = images.iter().map(String::as_str).collect();
            assert_eq!(item(None, &refs).media_list().len(), image_count);
            assert_eq!(item(Some("v.mp4"), &refs).media_list().len(), image_count + 1);
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(MediaKind::Video.label(), "VIDEO");
        assert_eq!(MediaKind::Image.label(), "IMAGE");
    }
}
