//! Session image state: the original picture and the currently shown one.

use crate::error::EditError;
use crate::picture::Picture;

/// Holds the two buffers of an editing session.
///
/// Both slots are empty until the first load or capture. `current` is only
/// ever replaced wholesale, and `original` is never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    original: Option<Picture>,
    current: Option<Picture>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both the original and the current picture with `picture`.
    pub fn set_original(&mut self, picture: Picture) {
        self.current = Some(picture.clone());
        self.original = Some(picture);
    }

    pub fn original(&self) -> Option<&Picture> {
        self.original.as_ref()
    }

    pub fn current(&self) -> Option<&Picture> {
        self.current.as_ref()
    }

    pub fn set_current(&mut self, picture: Picture) {
        self.current = Some(picture);
    }

    /// Whether a source picture has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.original.is_some()
    }

    /// The original picture, or `NoImageLoaded`.
    pub fn require_original(&self) -> Result<&Picture, EditError> {
        self.original.as_ref().ok_or(EditError::NoImageLoaded)
    }

    /// Copy the original picture back into the current slot.
    pub fn reset(&mut self) -> Result<(), EditError> {
        let original = self.require_original()?.clone();
        self.current = Some(original);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = ImageStore::new();
        assert!(!store.is_loaded());
        assert!(store.original().is_none());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_set_original_populates_both_slots() {
        let mut store = ImageStore::new();
        let pic = Picture::filled(4, 4, [1, 2, 3]);
        store.set_original(pic.clone());

        assert_eq!(store.original(), Some(&pic));
        assert_eq!(store.current(), Some(&pic));
    }

    #[test]
    fn test_set_current_leaves_original() {
        let mut store = ImageStore::new();
        let pic = Picture::filled(4, 4, [1, 2, 3]);
        store.set_original(pic.clone());
        store.set_current(Picture::filled(2, 2, [9, 9, 9]));

        assert_eq!(store.original(), Some(&pic));
        assert_eq!(store.current().unwrap().dimensions(), (2, 2));
    }

    #[test]
    fn test_reset_restores_original() {
        let mut store = ImageStore::new();
        let pic = Picture::filled(4, 4, [1, 2, 3]);
        store.set_original(pic.clone());
        store.set_current(Picture::filled(2, 2, [9, 9, 9]));

        store.reset().unwrap();
        assert_eq!(store.current(), Some(&pic));
    }

    #[test]
    fn test_reset_without_original() {
        let mut store = ImageStore::new();
        assert!(matches!(store.reset(), Err(EditError::NoImageLoaded)));
        assert!(store.current().is_none());
    }

    #[test]
    fn test_load_replaces_previous_session() {
        let mut store = ImageStore::new();
        store.set_original(Picture::filled(4, 4, [1, 2, 3]));
        store.set_current(Picture::filled(2, 2, [9, 9, 9]));

        let next = Picture::filled(8, 8, [7, 7, 7]);
        store.set_original(next.clone());
        assert_eq!(store.original(), Some(&next));
        assert_eq!(store.current(), Some(&next));
    }
}
