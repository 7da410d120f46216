// web_app/carousel.rs - Image cursor for product cards
//
// Next/previous wrap around at both ends. With zero or one image the
// cursor stays at 0 and the arrows are hidden.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Arrows only make sense with more than one image
    pub fn shows_arrows(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Image at the cursor
    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a str> {
        images.get(self.index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_single_and_empty() {
        let mut single = Carousel::new(1);
        single.next();
        assert_eq!(single.index(), 0);
        assert!(!single.shows_arrows());

        let mut empty = Carousel::new(0);
        empty.previous();
        assert_eq!(empty.current(&[]), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_current_image() {
        let images = vec!["a.png".to_string(), "b.png".to_string()];
        let mut carousel = Carousel::new(images.len());
        carousel.next();
        assert_eq!(carousel.current(&images), Some("b.png"));
    }
}
