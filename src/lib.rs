use log::debug;

/// Core timing and population constants shared with the UI layer.
pub mod defaults {
    /// Number of decorative shapes generated per field.
    pub const MAX_SHAPES: usize = 15;
    /// Duration applied to every shape while the owning section is hovered.
    pub const HOVER_DURATION_SECS: f64 = 3.0;
}

/// Cyclic index into an ordered set of slides.
///
/// Owns nothing but the index arithmetic; the rendering layer derives
/// active classes and the track offset from it on every change. An empty
/// slide set is legal and turns every operation into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// Select slide `n`, wrapping with a true modulo so negative input
    /// and arbitrary overshoot land in `[0, len)`.
    pub fn show(&mut self, n: i64) {
        if self.len == 0 {
            return;
        }
        let len = self.len as i64;
        self.current = ((n % len + len) % len) as usize;
        debug!("slide {} of {} selected", self.current, self.len);
    }

    pub fn next(&mut self) {
        self.show(self.current as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.show(self.current as i64 - 1);
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether slide `i` carries the active flag. True for exactly one
    /// index whenever the slide set is non-empty.
    #[inline]
    pub fn is_active(&self, i: usize) -> bool {
        self.len > 0 && i == self.current
    }

    /// Horizontal offset of the slide track, in percent of one slide.
    #[inline]
    pub fn track_offset_percent(&self) -> i32 {
        -(self.current as i32) * 100
    }
}

pub mod shapes;

#[cfg(test)]
mod tests {
    use super::Carousel;

    #[test]
    fn show_wraps_with_true_modulo() {
        let mut c = Carousel::new(5);
        for n in [-13i64, -5, -1, 0, 4, 5, 7, 23] {
            c.show(n);
            let expected = ((n % 5 + 5) % 5) as usize;
            assert_eq!(c.current(), expected, "show({n})");
            assert!(c.current() < 5);
        }
    }

    #[test]
    fn next_advances_and_wraps_at_end() {
        let mut c = Carousel::new(4);
        c.show(2);
        c.next();
        assert_eq!(c.current(), 3);
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.current(), 3);
        c.prev();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn exactly_one_slide_is_active() {
        let mut c = Carousel::new(6);
        c.show(-2);
        let active: Vec<usize> = (0..6).filter(|&i| c.is_active(i)).collect();
        assert_eq!(active, vec![4]);
    }

    #[test]
    fn track_offset_follows_current() {
        let mut c = Carousel::new(3);
        assert_eq!(c.track_offset_percent(), 0);
        c.next();
        assert_eq!(c.track_offset_percent(), -100);
        c.show(2);
        assert_eq!(c.track_offset_percent(), -200);
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let mut c = Carousel::new(0);
        c.show(7);
        c.next();
        c.prev();
        assert_eq!(c.current(), 0);
        assert_eq!(c.track_offset_percent(), 0);
        assert!(!c.is_active(0));
    }
}
