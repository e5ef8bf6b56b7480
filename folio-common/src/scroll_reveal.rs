//! Hide-on-scroll logic for the floating navbar

/// Scroll offset (px) under which the navbar is always shown
const REVEAL_TOP_THRESHOLD: f64 = 50.0;

/// Tracks the last scroll offset and decides navbar visibility.
///
/// Scrolling up, or being near the top of the page, reveals the bar.
/// Scrolling down anywhere else hides it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    last_y: f64,
    visible: bool,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self {
            last_y: 0.0,
            visible: true,
        }
    }

    /// Feed the current scroll offset. Returns the new visibility.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        self.visible = y < self.last_y || y < REVEAL_TOP_THRESHOLD;
        self.last_y = y;
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_initially() {
        assert!(ScrollReveal::new().visible);
    }

    #[test]
    fn test_small_scroll_near_top_stays_visible() {
        let mut reveal = ScrollReveal::new();
        assert!(reveal.on_scroll(20.0));
        assert!(reveal.on_scroll(49.0));
    }

    #[test]
    fn test_scrolling_down_hides() {
        let mut reveal = ScrollReveal::new();
        reveal.on_scroll(30.0);
        assert!(!reveal.on_scroll(300.0));
        assert!(!reveal.on_scroll(600.0));
    }

    #[test]
    fn test_scrolling_up_reveals() {
        let mut reveal = ScrollReveal::new();
        assert!(!reveal.on_scroll(800.0));
        assert!(reveal.on_scroll(790.0));
        assert_eq!(reveal.last_y, 790.0);
    }

    #[test]
    fn test_same_offset_above_threshold_hides() {
        let mut reveal = ScrollReveal::new();
        reveal.on_scroll(400.0);
        assert!(!reveal.on_scroll(400.0));
    }
}
