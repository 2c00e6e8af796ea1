// web_app/controller/lightbox.rs - Full-size viewer state
//
// The lightbox only knows how many gallery items exist and which one is
// open. It loops at both ends.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    open: Option<usize>,
}

impl Lightbox {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the image being shown, if any
    pub fn current(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opens `index`; out-of-range indices are ignored
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.open {
            self.open = Some((i + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.open {
            self.open = Some(if i == 0 { self.len - 1 } else { i - 1 });
        }
    }

    /// Adopt a new item count after the gallery changed
    pub fn refresh(&mut self, len: usize) {
        self.len = len;
        if self.open.is_some_and(|i| i >= len) {
            self.open = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightbox(len: usize) -> Lightbox {
        let mut lb = Lightbox::default();
        lb.refresh(len);
        lb
    }

    #[test]
    fn test_open_out_of_range_ignored() {
        let mut lb = lightbox(3);
        lb.open(3);
        assert!(!lb.is_open());
        lb.open(2);
        assert_eq!(lb.current(), Some(2));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut lb = lightbox(3);
        lb.open(2);
        lb.next();
        assert_eq!(lb.current(), Some(0));
        lb.prev();
        assert_eq!(lb.current(), Some(2));
    }

    #[test]
    fn test_navigation_when_closed_is_noop() {
        let mut lb = lightbox(3);
        lb.next();
        lb.prev();
        assert_eq!(lb.current(), None);
    }

    #[test]
    fn test_refresh_grows_and_keeps_open_item() {
        let mut lb = lightbox(2);
        lb.open(1);
        lb.refresh(42);
        assert_eq!(lb.len(), 42);
        assert_eq!(lb.current(), Some(1));
        lb.next();
        assert_eq!(lb.current(), Some(2));
    }

    #[test]
    fn test_refresh_to_empty_closes() {
        let mut lb = lightbox(5);
        lb.open(4);
        lb.refresh(0);
        assert!(lb.is_empty());
        assert!(!lb.is_open());
    }
}
